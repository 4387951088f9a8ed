// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-struct `outputs_*` function emission (spec §4.3 item 4): resolve
//! every owned `Output` template plus every descendant struct's own
//! outputs into one typed outputs record.

use std::collections::HashMap;

use styx_codegen::{snake_case, GenericArg, GenericFunc, GenericStructure, LineBuffer};
use styx_ir::{Output, OutputToken, Param, ParamBody, ParamId};
use styx_provider::{LanguageProvider, Lookup};

use crate::error::CompileError;

/// Emit the outputs-record type declaration for one struct, if it (or a
/// descendant) declares any output: the `root` output-path field, any
/// extra fields the caller supplies (the root struct's stdout/stderr
/// capture buffers), one field per owned [`Output`], and one field per
/// descendant struct that itself owns outputs. Must be emitted before
/// `build_outputs_func`/`build_execute_func`/`build_wrapper_func`, all of
/// which instantiate or return this type (spec §4.3 item 4; ported from
/// `backend/generic/gen/interface.py::_compile_outputs_class`).
pub fn build_outputs_structure(
    lookup: &Lookup,
    provider: &dyn LanguageProvider,
    s: &Param,
    params_by_id: &HashMap<ParamId, &Param>,
    extra_fields: &[GenericArg],
) -> Result<GenericStructure, CompileError> {
    let ParamBody::Struct { children, .. } = &s.body else {
        unreachable!("build_outputs_structure called on a non-Struct param");
    };

    let struct_type = lookup.struct_type_of(s.base.id).to_string();
    let output_type = lookup.output_type_of(s.base.id).to_string();

    let mut fields = vec![GenericArg {
        name: "root".to_string(),
        ty: Some(provider.type_output_path()),
        default: None,
        docstring: Some("Output root folder. This is the root folder for all outputs.".to_string()),
    }];
    fields.extend(extra_fields.iter().cloned());

    for output in &s.base.outputs {
        let any_nullable_ref = output
            .ref_ids()
            .map(|id| {
                params_by_id
                    .get(&id)
                    .copied()
                    .ok_or(CompileError::UnsupportedConstruct { ref_id: id })
            })
            .collect::<Result<Vec<_>, _>>()?
            .iter()
            .any(|p| p.nullable);
        let mut ty = provider.type_output_path();
        if any_nullable_ref {
            ty = provider.type_optional(&ty);
        }
        fields.push(GenericArg {
            name: lookup.output_field_symbol_of(output.id).to_string(),
            ty: Some(ty),
            default: None,
            docstring: output.docs.description.clone(),
        });
    }

    for child in children {
        if !styx_codegen::utils::struct_has_outputs(child) {
            continue;
        }
        let child_output_type = lookup.output_type_of(child.base.id).to_string();
        let mut ty = child_output_type;
        if child.is_list() {
            ty = provider.type_list(&ty);
        }
        if child.nullable {
            ty = provider.type_optional(&ty);
        }
        let docs_append = if child.is_list() {
            " This is a list of outputs with the same length and order as the inputs."
        } else {
            ""
        };
        fields.push(GenericArg {
            name: lookup.symbol_of(child.base.id).to_string(),
            ty: Some(ty),
            default: None,
            docstring: Some(format!(
                "Outputs from `{}`.{docs_append}",
                lookup.struct_type_of(child.base.id)
            )),
        });
    }

    Ok(GenericStructure {
        name: output_type,
        docstring: Some(format!("Output object returned when calling `{struct_type}(...)`.")),
        fields,
        methods: Vec::new(),
    })
}

/// Emit the `outputs_*` function for one struct, if it (or a descendant)
/// declares any output. `extra_members` carries fields the caller wants
/// appended verbatim (the root struct's stdout/stderr capture buffers,
/// initialised empty ahead of `execution_run`).
pub fn build_outputs_func(
    lookup: &Lookup,
    provider: &dyn LanguageProvider,
    s: &Param,
    params_by_id: &HashMap<ParamId, &Param>,
    extra_members: &[(String, String)],
) -> Result<GenericFunc, CompileError> {
    let ParamBody::Struct { children, docs, .. } = &s.body else {
        unreachable!("build_outputs_func called on a non-Struct param");
    };

    let params_symbol = "params".to_string();
    let execution_symbol = provider.symbol_execution();

    let mut members: Vec<(String, String)> = extra_members.to_vec();
    for output in &s.base.outputs {
        let symbol = lookup.output_field_symbol_of(output.id).to_string();
        let expr = resolve_output(provider, &params_symbol, &execution_symbol, output, params_by_id)?;
        members.push((symbol, expr));
    }
    for child in children {
        if !styx_codegen::utils::struct_has_outputs(child) {
            continue;
        }
        let child_symbol = lookup.symbol_of(child.base.id).to_string();
        let value_expr = if child.nullable {
            provider.param_dict_get_or_null(&params_symbol, child)
        } else {
            provider.param_dict_get(&params_symbol, child)
        };
        let collect = provider.struct_collect_outputs(child, &value_expr);
        members.push((child_symbol, collect));
    }

    let mut body = LineBuffer::new();
    let output_type = lookup.output_type_of(s.base.id).to_string();
    provider.generate_ret_object_creation(&mut body, &execution_symbol, &output_type, &members);
    body.push(provider.return_statement("ret"));

    Ok(GenericFunc {
        name: format!("outputs_{}", snake_case(lookup.struct_type_of(s.base.id))),
        args: vec![
            GenericArg {
                name: params_symbol,
                ty: Some(lookup.struct_type_of(s.base.id).to_string()),
                default: None,
                docstring: Some("Parameter dictionary.".to_string()),
            },
            GenericArg {
                name: execution_symbol,
                ty: Some(provider.type_execution()),
                default: None,
                docstring: Some("The execution object.".to_string()),
            },
        ],
        docstring_body: docs.description.clone().or_else(|| docs.title.clone()),
        body,
        return_descr: Some("Outputs record.".to_string()),
        return_type: Some(output_type),
    })
}

fn resolve_output(
    provider: &dyn LanguageProvider,
    params_symbol: &str,
    execution_symbol: &str,
    output: &Output,
    params_by_id: &HashMap<ParamId, &Param>,
) -> Result<String, CompileError> {
    let mut pieces = Vec::new();
    let mut nullable_refs = Vec::new();
    for token in &output.tokens {
        match token {
            OutputToken::Literal(s) => pieces.push(provider.expr_str(s)),
            OutputToken::Ref(r) => {
                let referenced = *params_by_id
                    .get(&r.ref_id)
                    .ok_or(CompileError::UnsupportedConstruct { ref_id: r.ref_id })?;
                let value_expr = if referenced.nullable {
                    provider.param_dict_get_or_null(params_symbol, referenced)
                } else {
                    provider.param_dict_get(params_symbol, referenced)
                };
                let substituted = match &referenced.body {
                    ParamBody::String => provider.expr_remove_suffixes(&value_expr, &r.file_remove_suffixes),
                    ParamBody::File { .. } => {
                        let basename = provider.expr_path_get_filename(&value_expr);
                        provider.expr_remove_suffixes(&basename, &r.file_remove_suffixes)
                    }
                    ParamBody::Int { .. } | ParamBody::Float { .. } => provider.expr_numeric_to_str(&value_expr),
                    _ => return Err(CompileError::UnsupportedConstruct { ref_id: r.ref_id }),
                };
                if referenced.nullable {
                    nullable_refs.push((referenced, value_expr));
                }
                pieces.push(substituted);
            }
        }
    }
    let path_expr = provider.expr_concat_strs(&pieces, "");
    let resolved = provider.resolve_output_file(execution_symbol, &path_expr);

    if nullable_refs.is_empty() {
        return Ok(resolved);
    }
    let is_set_exprs: Vec<String> = nullable_refs
        .iter()
        .map(|(p, value_expr)| {
            provider
                .param_is_set_by_user(p, value_expr)
                .expect("nullable ref always has an is-set predicate")
        })
        .collect();
    let guard = provider.expr_conditions_join_and(&is_set_exprs);
    Ok(provider.expr_ternary(&guard, &resolved, &provider.expr_null()))
}
