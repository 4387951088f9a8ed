// SPDX-License-Identifier: MIT OR Apache-2.0
#![deny(unsafe_code)]
#![warn(missing_docs)]

//! # styx-provider-python
//!
//! The Python target: generates `styxdefs`-compatible Python wrapper
//! modules. Ported from `backend/python/languageprovider.py`'s
//! `PythonLanguageProvider`.

mod expr;
mod highlevel;
mod ir_glue;
mod symbols;
mod types;

/// The Python `LanguageProvider` implementation.
///
/// Stateless: every method is a pure function of its arguments, so one
/// instance is shared across an entire compile run.
#[derive(Debug, Clone, Copy, Default)]
pub struct PythonLanguageProvider;

impl styx_provider::LanguageProvider for PythonLanguageProvider {
    fn file_extension(&self) -> &'static str {
        "py"
    }

    fn line_comment_marker(&self) -> &'static str {
        "#"
    }
}

#[cfg(test)]
mod tests {
    use styx_provider::{LanguageExprProvider, LanguageSymbolProvider, LanguageTypeProvider};

    use super::PythonLanguageProvider;

    #[test]
    fn basic_types_match_python_builtins() {
        let p = PythonLanguageProvider;
        assert_eq!(p.type_str(), "str");
        assert_eq!(p.type_bool(), "bool");
        assert_eq!(p.type_optional(&p.type_int()), "int | None");
    }

    #[test]
    fn booleans_render_as_python_literals() {
        let p = PythonLanguageProvider;
        assert_eq!(p.expr_bool(true), "True");
        assert_eq!(p.expr_bool(false), "False");
    }

    #[test]
    fn illegal_symbols_get_rewritten() {
        let p = PythonLanguageProvider;
        assert_eq!(p.symbol_var_case_from("2nd-pass"), "v_2nd_pass");
        assert!(!p.symbol_legal("class"));
        assert!(p.symbol_legal("my_var"));
    }
}
