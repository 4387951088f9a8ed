// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-param IR-to-language glue (ported from `LanguageIrProvider`): how a
//! param's runtime value becomes a command-line expression, and the
//! three high-level steps (`build_params`, `build_cargs`, `build_outputs`)
//! the compiler driver delegates per struct.

use styx_codegen::LineBuffer;
use styx_ir::{DefaultValue, Param};

use crate::expr::LanguageExprProvider;
use crate::lookup::Lookup;
use crate::mstr::MStr;

/// Per-param IR semantics: default values, user-set predicates, and MStr
/// conversion, plus the three struct-level emission entry points the
/// compiler driver calls once per struct in the tree.
pub trait LanguageIrProvider: LanguageExprProvider {
    /// `param`'s default-value expression, if it has one (an explicit
    /// literal or an explicit-none marker); `None` if no default was
    /// declared at all.
    fn param_default_value(&self, param: &Param) -> Option<String> {
        match &param.default_value {
            DefaultValue::Unset => None,
            DefaultValue::ExplicitNone => Some(self.expr_null()),
            DefaultValue::Literal(lit) => Some(self.expr_literal(lit)),
        }
    }

    /// Render `symbol` (a variable holding `param`'s runtime value) as an
    /// [`MStr`].
    fn param_var_to_mstr(&self, param: &Param, symbol: &str) -> MStr;

    /// An expression testing whether `symbol` was supplied by the caller,
    /// or `None` if `param` must always be specified (non-nullable,
    /// non-`Bool`).
    fn param_var_is_set_by_user(&self, param: &Param, symbol: &str) -> Option<String>;
    /// As [`Self::param_var_is_set_by_user`], but usable directly inside a
    /// larger boolean expression (parenthesised if the language needs it).
    fn param_is_set_by_user(&self, param: &Param, symbol: &str) -> Option<String> {
        self.param_var_is_set_by_user(param, symbol)
    }

    /// Emit the body that builds and validates `struct_param`'s parameter
    /// dictionary and, for the root struct, starts execution.
    fn build_params_and_execute(
        &self,
        lookup: &Lookup,
        struct_param: &Param,
        execution_symbol: &str,
    ) -> LineBuffer;

    /// Emit the call that builds `struct_param`'s parameter dictionary from
    /// `arg_exprs` (one `(name, value_expr)` pair per child parameter, in
    /// declaration order) into `return_symbol`. `params_*`'s signature
    /// reorders its arguments (required before defaulted), so a positional
    /// call built in declaration order would misassign arguments whenever
    /// an optional child precedes a required one — implementations must
    /// either pass by keyword or reorder to match.
    fn call_build_params(
        &self,
        lookup: &Lookup,
        struct_param: &Param,
        arg_exprs: &[(String, String)],
        return_symbol: &str,
    ) -> LineBuffer;

    /// Emit the call that builds `struct_param`'s cargs into
    /// `return_symbol`.
    fn call_build_cargs(
        &self,
        lookup: &Lookup,
        struct_param: &Param,
        params_symbol: &str,
        execution_symbol: &str,
        return_symbol: &str,
    ) -> LineBuffer;

    /// Emit the call that builds `struct_param`'s outputs record into
    /// `return_symbol`.
    fn call_build_outputs(
        &self,
        lookup: &Lookup,
        struct_param: &Param,
        params_symbol: &str,
        execution_symbol: &str,
        return_symbol: &str,
    ) -> LineBuffer;

    /// Emit the call that runs `struct_param`'s `execute_*` function
    /// (root struct only — the fourth driver-delegated step, spec §4.3
    /// item 5) into `return_symbol`.
    fn call_build_execute(
        &self,
        lookup: &Lookup,
        struct_param: &Param,
        params_symbol: &str,
        execution_symbol: &str,
        return_symbol: &str,
    ) -> LineBuffer;
}
