// SPDX-License-Identifier: MIT OR Apache-2.0

//! Root-only `execute_*` function emission (spec §4.3 item 5): process the
//! parameter dictionary's paths, build cargs, pre-build the outputs record
//! (with empty stdout/stderr capture buffers already in place), run the
//! command, then return the populated record.

use styx_codegen::{snake_case, GenericArg, GenericFunc, LineBuffer};
use styx_ir::{Interface, Param};
use styx_provider::{LanguageProvider, Lookup, MStr};

/// Emit the `execute_*` function for the interface's root struct.
///
/// Step order (spec §4.3 item 5): process params, build cargs, build the
/// outputs record, run the command, return the record. The outputs record
/// is built *before* the command runs so its stdout/stderr fields (already
/// empty lists, see [`crate::root_capture_members`]) exist for
/// `execution_run`'s callbacks to append into.
pub fn build_execute_func(lookup: &Lookup, provider: &dyn LanguageProvider, root: &Param, interface: &Interface) -> GenericFunc {
    let params_symbol = "params".to_string();
    let execution_symbol = provider.symbol_execution();
    let cargs_symbol = provider.cargs_symbol();
    let return_symbol = "ret".to_string();

    let mut body = LineBuffer::new();
    body.extend(provider.execution_process_params(&execution_symbol, &params_symbol));
    body.extend(provider.call_build_cargs(lookup, root, &params_symbol, &execution_symbol, &cargs_symbol));
    body.extend(provider.call_build_outputs(lookup, root, &params_symbol, &execution_symbol, &return_symbol));

    let stdout_field = interface.stdout.as_ref().map(|c| provider.symbol_var_case_from(&c.name));
    let stderr_field = interface.stderr.as_ref().map(|c| provider.symbol_var_case_from(&c.name));
    body.extend(provider.execution_run(&execution_symbol, &cargs_symbol, stdout_field.as_deref(), stderr_field.as_deref()));
    body.push(provider.return_statement(&return_symbol));

    let struct_type = lookup.struct_type_of(root.base.id).to_string();
    GenericFunc {
        name: format!("execute_{}", snake_case(&struct_type)),
        args: vec![
            GenericArg {
                name: params_symbol,
                ty: Some(struct_type),
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
        docstring_body: Some("Execute the command, then return the parsed outputs.".to_string()),
        body,
        return_descr: Some("Outputs record.".to_string()),
        return_type: Some(lookup.output_type_of(root.base.id).to_string()),
    }
}

/// The root struct's extra `outputs_*` members for its stdout/stderr
/// capture buffers, initialised to an empty list each (spec §4.1
/// `StreamCapture`), in declaration order (stdout, then stderr).
#[must_use]
pub fn root_capture_members(provider: &dyn LanguageProvider, interface: &Interface) -> Vec<(String, String)> {
    let empty_list = provider.mstr_empty_literal_like(&MStr::list(String::new()));
    let mut members = Vec::new();
    if let Some(capture) = &interface.stdout {
        members.push((provider.symbol_var_case_from(&capture.name), empty_list.clone()));
    }
    if let Some(capture) = &interface.stderr {
        members.push((provider.symbol_var_case_from(&capture.name), empty_list));
    }
    members
}

/// Field declarations for [`root_capture_members`]'s stdout/stderr entries,
/// for the outputs-record type declaration (`build_outputs_structure`).
#[must_use]
pub fn root_capture_member_fields(provider: &dyn LanguageProvider, interface: &Interface) -> Vec<GenericArg> {
    let mut fields = Vec::new();
    if let Some(capture) = &interface.stdout {
        fields.push(GenericArg {
            name: provider.symbol_var_case_from(&capture.name),
            ty: Some(provider.type_string_list()),
            default: None,
            docstring: Some("Captured standard output.".to_string()),
        });
    }
    if let Some(capture) = &interface.stderr {
        fields.push(GenericArg {
            name: provider.symbol_var_case_from(&capture.name),
            ty: Some(provider.type_string_list()),
            default: None,
            docstring: Some("Captured standard error.".to_string()),
        });
    }
    fields
}
