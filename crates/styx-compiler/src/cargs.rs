// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-struct `cargs_*` function emission (spec §4.3 item 3): walk each
//! `ConditionalGroup`, compute the direct or defensive token expressions,
//! and extend the cargs accumulator.

use styx_codegen::{snake_case, GenericArg, GenericFunc, LineBuffer};
use styx_ir::{Carg, CargToken, ConditionalGroup, Param, ParamBody};
use styx_provider::{LanguageProvider, Lookup, MStr};

/// Emit the `cargs_*` function for one struct.
pub fn build_cargs_func(lookup: &Lookup, provider: &dyn LanguageProvider, s: &Param) -> GenericFunc {
    let ParamBody::Struct { groups, docs, .. } = &s.body else {
        unreachable!("build_cargs_func called on a non-Struct param");
    };

    let params_symbol = "params".to_string();
    let execution_symbol = provider.symbol_execution();
    let cargs_symbol = provider.cargs_symbol();

    let mut body = provider.cargs_declare(&cargs_symbol);
    for group in groups {
        body.extend(emit_group(provider, &params_symbol, &cargs_symbol, group));
    }
    body.push(provider.return_statement(&cargs_symbol));

    GenericFunc {
        name: format!("cargs_{}", snake_case(lookup.struct_type_of(s.base.id))),
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
        return_descr: Some("Command-line arguments.".to_string()),
        return_type: Some(provider.type_string_list()),
    }
}

fn param_value_expr(provider: &dyn LanguageProvider, params_symbol: &str, param: &Param) -> String {
    if param.nullable {
        provider.param_dict_get_or_null(params_symbol, param)
    } else {
        provider.param_dict_get(params_symbol, param)
    }
}

fn token_mstr(provider: &dyn LanguageProvider, params_symbol: &str, token: &CargToken, defensive: bool) -> MStr {
    match token {
        CargToken::Literal(s) => MStr::scalar(provider.expr_str(s)),
        CargToken::Param(p) => {
            let value_expr = param_value_expr(provider, params_symbol, p);
            let mstr = provider.param_var_to_mstr(p, &value_expr);
            let mstr = match p.list.as_ref().and_then(|l| l.separator.as_deref()) {
                Some(separator) => provider.mstr_collapse(&mstr, separator),
                None => mstr,
            };
            if defensive && p.nullable {
                let is_set = provider
                    .param_is_set_by_user(p, &value_expr)
                    .expect("nullable param always has an is-set predicate");
                let empty = provider.mstr_empty_literal_like(&mstr);
                MStr {
                    expr: provider.expr_ternary(&is_set, &mstr.expr, &empty),
                    is_list: mstr.is_list,
                }
            } else {
                mstr
            }
        }
    }
}

fn carg_mstr(provider: &dyn LanguageProvider, params_symbol: &str, carg: &Carg, defensive: bool) -> MStr {
    let tokens: Vec<MStr> = carg
        .tokens
        .iter()
        .map(|t| token_mstr(provider, params_symbol, t, defensive))
        .collect();
    match tokens.as_slice() {
        [single] => single.clone(),
        _ => provider.mstr_concat(&tokens, "", ""),
    }
}

fn emit_group(
    provider: &dyn LanguageProvider,
    params_symbol: &str,
    cargs_symbol: &str,
    group: &ConditionalGroup,
) -> LineBuffer {
    let defensive = group.needs_defensive_form();
    let carg_exprs: Vec<MStr> = group
        .cargs
        .iter()
        .map(|c| carg_mstr(provider, params_symbol, c, defensive))
        .collect();
    let push_lines = provider.mstr_cargs_add(cargs_symbol, &carg_exprs);

    if group.is_unconditional() {
        return push_lines;
    }
    let guard_exprs: Vec<String> = group
        .nullable_guards()
        .map(|p| {
            let value_expr = param_value_expr(provider, params_symbol, p);
            provider
                .param_is_set_by_user(p, &value_expr)
                .expect("nullable guard param always has an is-set predicate")
        })
        .collect();
    let condition = provider.expr_conditions_join_or(&guard_exprs);
    provider.if_else_block(&condition, &push_lines, None)
}
