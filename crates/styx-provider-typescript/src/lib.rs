// SPDX-License-Identifier: MIT OR Apache-2.0
#![deny(unsafe_code)]
#![warn(missing_docs)]

//! # styx-provider-typescript
//!
//! The TypeScript target: generates `styxdefs`-compatible TypeScript
//! wrapper modules. Ported from `backend/typescript/languageprovider.py`'s
//! `TypeScriptLanguageProvider`.

mod expr;
mod highlevel;
mod ir_glue;
mod symbols;
mod types;

/// The TypeScript `LanguageProvider` implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptLanguageProvider;

impl styx_provider::LanguageProvider for TypeScriptLanguageProvider {
    fn file_extension(&self) -> &'static str {
        "ts"
    }

    fn line_comment_marker(&self) -> &'static str {
        "//"
    }
}

#[cfg(test)]
mod tests {
    use styx_provider::{LanguageExprProvider, LanguageTypeProvider};

    use super::TypeScriptLanguageProvider;

    #[test]
    fn types_match_typescript_primitives() {
        let p = TypeScriptLanguageProvider;
        assert_eq!(p.type_int(), "number");
        assert_eq!(p.type_list(&p.type_str()), "Array<string>");
        assert_eq!(p.type_optional(&p.type_str()), "string | null");
    }

    #[test]
    fn booleans_render_as_typescript_literals() {
        let p = TypeScriptLanguageProvider;
        assert_eq!(p.expr_bool(true), "true");
        assert_eq!(p.expr_null(), "null");
    }
}
