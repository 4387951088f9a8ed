// SPDX-License-Identifier: MIT OR Apache-2.0
#![deny(unsafe_code)]
#![warn(missing_docs)]

//! # styx-provider-r
//!
//! The R target: generates `styxdefs`-compatible R wrapper modules. Ported
//! from `backend/r/languageprovider.py`'s `RLanguageProvider`.

mod expr;
mod highlevel;
mod ir_glue;
mod symbols;
mod types;

/// The R `LanguageProvider` implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct RLanguageProvider;

impl styx_provider::LanguageProvider for RLanguageProvider {
    fn file_extension(&self) -> &'static str {
        "R"
    }

    fn line_comment_marker(&self) -> &'static str {
        "#"
    }
}

#[cfg(test)]
mod tests {
    use styx_provider::{LanguageExprProvider, LanguageTypeProvider};

    use super::RLanguageProvider;

    #[test]
    fn types_match_r_primitives() {
        let p = RLanguageProvider;
        assert_eq!(p.type_int(), "integer");
        assert_eq!(p.type_bool(), "logical");
        assert_eq!(p.type_list(&p.type_str()), "vector[character]");
    }

    #[test]
    fn booleans_render_as_r_literals() {
        let p = RLanguageProvider;
        assert_eq!(p.expr_bool(true), "TRUE");
        assert_eq!(p.expr_null(), "NULL");
    }
}
