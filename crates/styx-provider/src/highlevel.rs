// SPDX-License-Identifier: MIT OR Apache-2.0

//! High-level source emission (ported from `LanguageHighLevelProvider`):
//! turning [`GenericFunc`]/[`GenericStructure`]/[`GenericModule`] models and
//! the handful of compiler-driver building blocks (cargs assembly, runner
//! and execution glue, parameter dictionaries, dynamic dispatch) into
//! [`LineBuffer`] source text.

use styx_codegen::{GenericArg, GenericFunc, GenericModule, GenericStructure, LineBuffer};
use styx_ir::Param;

use crate::lookup::Lookup;
use crate::mstr::MStr;

/// High-level structural emission and the compiler-driver glue points every
/// target language must supply.
pub trait LanguageHighLevelProvider {
    /// Emit an `if`/`else` block.
    fn if_else_block(&self, condition: &str, truthy: &LineBuffer, falsy: Option<&LineBuffer>) -> LineBuffer;
    /// Render one function argument's declaration (name, type, default).
    fn generate_arg_declaration(&self, arg: &GenericArg) -> String;
    /// Emit a complete function definition.
    fn generate_func(&self, func: &GenericFunc) -> LineBuffer;
    /// Emit a complete struct/dataclass/interface definition.
    fn generate_structure(&self, structure: &GenericStructure) -> LineBuffer;
    /// Emit a complete module (imports, header, items, footer, exports).
    fn generate_module(&self, module: &GenericModule) -> LineBuffer;
    /// A (possibly early) return statement.
    fn return_statement(&self, value: &str) -> String;
    /// Imports every emitted wrapper module needs regardless of interface.
    fn wrapper_module_imports(&self) -> LineBuffer;
    /// The package entry module's full text: re-exports of every interface
    /// module's public symbols (spec §6, "the package's entry module, whose
    /// text consists of re-export statements").
    fn generate_reexport_module(&self, interface_module_names: &[String]) -> LineBuffer;

    /// The symbol the per-interface metadata constant should get.
    fn metadata_symbol(&self, interface_base_name: &str) -> String;
    /// Emit the metadata constant's definition from its entries.
    fn generate_metadata(&self, metadata_symbol: &str, entries: &[(String, String)]) -> LineBuffer;

    /// The symbol the assembled command-line-args vector should get.
    fn cargs_symbol(&self) -> String;
    /// Declare (initialize empty) the cargs vector.
    fn cargs_declare(&self, cargs_symbol: &str) -> LineBuffer;
    /// Extend the cargs vector by one or more [`MStr`] expressions.
    fn mstr_cargs_add(&self, cargs_symbol: &str, values: &[MStr]) -> LineBuffer;
    /// Collapse a list-valued [`MStr`] into a scalar by joining with `join`.
    fn mstr_collapse(&self, mstr: &MStr, join: &str) -> MStr;
    /// Concatenate several [`MStr`]s down to one scalar [`MStr`].
    fn mstr_concat(&self, mstrs: &[MStr], inner_join: &str, outer_join: &str) -> MStr;
    /// The empty literal (`""` or `[]`) matching `mstr`'s list-ness.
    fn mstr_empty_literal_like(&self, mstr: &MStr) -> String;

    /// The symbol the runner collaborator should get.
    fn runner_symbol(&self) -> String;
    /// Declare (resolve) the runner collaborator.
    fn runner_declare(&self, runner_symbol: &str) -> LineBuffer;
    /// The symbol a started execution handle should get.
    fn symbol_execution(&self) -> String;
    /// Declare (start) an execution handle from the runner and metadata.
    fn execution_declare(&self, execution_symbol: &str, metadata_symbol: &str) -> LineBuffer;
    /// Let the execution resolve/process the params dictionary's paths.
    fn execution_process_params(&self, execution_symbol: &str, params_symbol: &str) -> LineBuffer;
    /// Start the external process with the assembled cargs.
    fn execution_run(
        &self,
        execution_symbol: &str,
        cargs_symbol: &str,
        stdout_output_symbol: Option<&str>,
        stderr_output_symbol: Option<&str>,
    ) -> LineBuffer;
    /// Emit construction of the returned outputs record.
    fn generate_ret_object_creation(
        &self,
        buf: &mut LineBuffer,
        execution_symbol: &str,
        output_type: &str,
        members: &[(String, String)],
    );
    /// Resolve an output-file expression against the execution's output
    /// directory.
    fn resolve_output_file(&self, execution_symbol: &str, file_expr: &str) -> String;
    /// Emit the expression collecting a sub-struct's nested outputs.
    fn struct_collect_outputs(&self, struct_param: &Param, struct_symbol: &str) -> String;

    /// Declare the dynamic-dispatch functions (`dyn_cargs`/`dyn_outputs`)
    /// needed to build cargs/outputs for any `StructUnion` alternative by
    /// its `__STYXTYPE__` tag.
    fn dyn_declare(&self, lookup: &Lookup, root_struct: &Param) -> Vec<GenericFunc>;

    /// Declare the type backing a sub-command's parameter dictionary.
    fn param_dict_type_declare(&self, lookup: &Lookup, struct_param: &Param) -> LineBuffer;
    /// Construct a parameter-dictionary literal/record.
    fn param_dict_create(&self, name: &str, struct_param: &Param, items: &[(String, String)]) -> LineBuffer;
    /// Set one field of a parameter dictionary/record.
    fn param_dict_set(&self, dict_symbol: &str, param: &Param, value_expr: &str) -> LineBuffer;
    /// Read one field of a parameter dictionary/record.
    fn param_dict_get(&self, name: &str, param: &Param) -> String;
    /// Read one field of a parameter dictionary/record, or the language's
    /// null expression if the field is absent.
    fn param_dict_get_or_null(&self, name: &str, param: &Param) -> String;

    /// Signal a user-facing validation failure with `message_expr` using
    /// this language's native "fails with a descriptive message" mechanism
    /// (spec §7: raise/throw/stop, never a silent return).
    fn raise_value_error(&self, message_expr: &str) -> LineBuffer;
}
