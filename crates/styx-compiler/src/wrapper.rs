// SPDX-License-Identifier: MIT OR Apache-2.0

//! Root-only wrapper function emission (spec §4.3 item 6): the public,
//! user-facing entry point — one named argument per top-level parameter
//! plus an optional runner override, delegating to `build_params` then
//! `execute_*`.

use styx_codegen::{GenericArg, GenericFunc, LineBuffer};
use styx_ir::{Interface, Param, ParamBody};
use styx_provider::{LanguageProvider, Lookup};

/// Emit the public wrapper function for the interface's root struct.
pub fn build_wrapper_func(lookup: &Lookup, provider: &dyn LanguageProvider, root: &Param, interface: &Interface) -> GenericFunc {
    let ParamBody::Struct { children, docs, .. } = &root.body else {
        unreachable!("build_wrapper_func called on a non-Struct root");
    };

    let mut args: Vec<GenericArg> = children
        .iter()
        .map(|c| GenericArg {
            name: lookup.symbol_of(c.base.id).to_string(),
            ty: Some(lookup.param_type_of(c.base.id).to_string()),
            default: provider.param_default_value(c),
            docstring: c.base.docs.description.clone().or_else(|| c.base.docs.title.clone()),
        })
        .collect();

    let runner_symbol = provider.runner_symbol();
    args.push(GenericArg {
        name: runner_symbol.clone(),
        ty: Some(provider.type_optional(&provider.type_runner())),
        default: Some(provider.expr_null()),
        docstring: Some("Command runner.".to_string()),
    });

    let metadata_symbol = provider.metadata_symbol(&interface.package.name);
    let execution_symbol = provider.symbol_execution();
    let params_symbol = "params".to_string();
    let return_symbol = "ret".to_string();

    let mut body = LineBuffer::new();
    body.extend(provider.runner_declare(&runner_symbol));
    body.extend(provider.execution_declare(&execution_symbol, &metadata_symbol));
    let arg_exprs: Vec<(String, String)> = children
        .iter()
        .map(|c| {
            let symbol = lookup.symbol_of(c.base.id).to_string();
            (symbol.clone(), symbol)
        })
        .collect();
    body.extend(provider.call_build_params(lookup, root, &arg_exprs, &params_symbol));
    body.extend(provider.call_build_execute(lookup, root, &params_symbol, &execution_symbol, &return_symbol));
    body.push(provider.return_statement(&return_symbol));

    GenericFunc {
        name: provider.symbol_var_case_from(&interface.package.name),
        args,
        docstring_body: docs.description.clone().or_else(|| docs.title.clone()),
        body,
        return_descr: Some("Outputs record.".to_string()),
        return_type: Some(lookup.output_type_of(root.base.id).to_string()),
    }
}
