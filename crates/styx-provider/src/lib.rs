// SPDX-License-Identifier: MIT OR Apache-2.0
#![deny(unsafe_code)]
#![warn(missing_docs)]

//! # styx-provider
//!
//! The `LanguageProvider` capability surface: everything a target-language
//! backend (`styx-provider-python`, `styx-provider-typescript`,
//! `styx-provider-r`) must implement for `styx-compiler`'s driver to emit
//! that language's wrapper source. Ported from
//! `backend/generic/languageprovider.py`'s `Protocol` hierarchy, split
//! across the same five capability groups: types, symbols, expressions,
//! high-level emission, and IR glue.

/// Expression and literal construction.
pub mod expr;
/// High-level structural emission and compiler-driver glue points.
pub mod highlevel;
/// Per-param IR-to-language glue.
pub mod ir_glue;
/// Pre-computed per-param symbol/type lookup tables.
pub mod lookup;
/// The scalar-or-list tagged expression type used throughout cargs assembly.
pub mod mstr;
/// Symbol legality and case-conversion.
pub mod symbols;
/// Type-expression construction.
pub mod types;

pub use expr::{CompareOp, LanguageExprProvider};
pub use highlevel::LanguageHighLevelProvider;
pub use ir_glue::LanguageIrProvider;
pub use lookup::Lookup;
pub use mstr::MStr;
pub use symbols::LanguageSymbolProvider;
pub use types::LanguageTypeProvider;

/// The full capability surface a target-language backend implements.
///
/// Combines the five capability traits plus the single
/// `styxdefs_compat` declaration (the semver range of the runtime support
/// library generated wrappers are compiled against).
pub trait LanguageProvider:
    LanguageTypeProvider
    + LanguageSymbolProvider
    + LanguageExprProvider
    + LanguageHighLevelProvider
    + LanguageIrProvider
{
    /// The semver compatibility range of the runtime support library
    /// (`styxdefs`-equivalent) generated wrappers require.
    fn styxdefs_compat(&self) -> &'static str {
        "^0.5.0"
    }

    /// The file extension (without leading dot) this language's emitted
    /// modules use, e.g. `"py"`.
    fn file_extension(&self) -> &'static str;

    /// This language's line-comment marker, e.g. `"#"` or `"//"`.
    fn line_comment_marker(&self) -> &'static str;
}
