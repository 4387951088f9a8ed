// SPDX-License-Identifier: MIT OR Apache-2.0

//! Symbol legality and case-conversion capability surface (ported from
//! `LanguageSymbolProvider`).

use styx_codegen::Scope;

/// Legal-identifier checks and name-casing conventions for one target
/// language.
pub trait LanguageSymbolProvider {
    /// `true` if `name` is a legal identifier in this language.
    fn symbol_legal(&self, name: &str) -> bool;

    /// A fresh root [`Scope`] seeded with this language's reserved words
    /// and anything else a generated symbol must never shadow.
    fn language_scope(&self) -> Scope;

    /// Rewrite an arbitrary descriptor-supplied name into a similar-looking
    /// legal symbol, in no particular case convention.
    fn symbol_from(&self, name: &str) -> String;
    /// As [`Self::symbol_from`], in this language's constant-name case.
    fn symbol_constant_case_from(&self, name: &str) -> String;
    /// As [`Self::symbol_from`], in this language's class-name case.
    fn symbol_class_case_from(&self, name: &str) -> String;
    /// As [`Self::symbol_from`], in this language's variable-name case.
    fn symbol_var_case_from(&self, name: &str) -> String;
}
