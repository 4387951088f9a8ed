// SPDX-License-Identifier: MIT OR Apache-2.0
#![deny(unsafe_code)]
#![warn(missing_docs)]

//! # styx
//!
//! The package-level facade (spec §6 "External interfaces"): lowers one
//! Boutiques descriptor into IR, validates and normalizes it, then compiles
//! it for each requested target language, producing the ordered stream of
//! `(module_text, module_path)` pairs described in spec §6 — one module
//! per target language, with that language's package entry module
//! appended last.

use styx_ir::{Documentation, IrError};
use thiserror::Error;

pub use styx_compiler::Module;
pub use styx_ir::Interface;

/// A target language this facade can compile to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// Python, via [`styx_provider_python::PythonLanguageProvider`].
    Python,
    /// TypeScript, via [`styx_provider_typescript::TypeScriptLanguageProvider`].
    TypeScript,
    /// R, via [`styx_provider_r::RLanguageProvider`].
    R,
}

impl Language {
    fn provider(self) -> Box<dyn styx_provider::LanguageProvider> {
        match self {
            Language::Python => Box::new(styx_provider_python::PythonLanguageProvider),
            Language::TypeScript => Box::new(styx_provider_typescript::TypeScriptLanguageProvider),
            Language::R => Box::new(styx_provider_r::RLanguageProvider),
        }
    }

    /// The CLI-facing spelling of this language (`python`, `typescript`, `r`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::TypeScript => "typescript",
            Language::R => "r",
        }
    }
}

impl std::str::FromStr for Language {
    type Err = StyxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "python" | "py" => Ok(Language::Python),
            "typescript" | "ts" => Ok(Language::TypeScript),
            "r" => Ok(Language::R),
            other => Err(StyxError::UnknownLanguage {
                name: other.to_string(),
            }),
        }
    }
}

/// Everything that can go wrong turning a descriptor into emitted modules,
/// across the frontend, IR validation, and compiler stages.
#[derive(Debug, Error)]
pub enum StyxError {
    /// The descriptor could not be lowered into IR.
    #[error(transparent)]
    Frontend(#[from] styx_frontend::FrontendError),
    /// The lowered IR violated a structural invariant.
    #[error(transparent)]
    Ir(#[from] IrError),
    /// The IR could not be compiled for the requested language.
    #[error(transparent)]
    Compile(#[from] styx_compiler::CompileError),
    /// `--lang` (or [`Language::from_str`]) named a language this facade
    /// does not implement.
    #[error("unknown target language `{name}`")]
    UnknownLanguage {
        /// The unrecognised language spelling.
        name: String,
    },
}

/// Compile one descriptor for `languages`, overriding its package name and
/// (if supplied) its documentation, and returning every emitted module in
/// order: each language's interface module immediately followed by its
/// package entry module (spec §6 "the last element per package is the
/// package's entry module").
///
/// Runs the full pipeline per language: frontend lowering happens once,
/// [`styx_ir::invariant::validate`] and [`styx_normalize::normalize`] run
/// once against the shared IR, then [`styx_compiler::compile_interface`]
/// runs once per requested language.
pub fn compile(
    descriptor: &serde_json::Value,
    package_name: &str,
    package_doc: Option<Documentation>,
    languages: &[Language],
) -> Result<Vec<Module>, StyxError> {
    let mut interface = styx_frontend::compile(descriptor)?;
    interface.package.name = package_name.to_string();
    if let Some(doc) = package_doc {
        interface.package.docs = doc;
    }

    styx_ir::invariant::validate(&interface)?;
    styx_normalize::normalize(&mut interface);
    styx_ir::invariant::validate_normalized_names(&interface)?;

    let mut modules = Vec::with_capacity(languages.len() * 2);
    for &lang in languages {
        let provider = lang.provider();
        let module = styx_compiler::compile_interface(&interface, provider.as_ref())?;
        let module_name = module.path[0]
            .rsplit_once('.')
            .map_or(module.path[0].as_str(), |(stem, _)| stem)
            .to_string();
        modules.push(module);
        modules.push(styx_compiler::compile_package_entry(&[module_name], provider.as_ref()));
    }
    Ok(modules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn trivial_descriptor() -> serde_json::Value {
        json!({
            "name": "dummy",
            "command-line": "dummy [X]",
            "inputs": [
                {"id": "x", "name": "X", "type": "String", "value-key": "[X]"}
            ]
        })
    }

    #[test]
    fn compiles_one_language_to_interface_plus_entry_module() {
        let modules = compile(&trivial_descriptor(), "dummy", None, &[Language::Python]).unwrap();
        assert_eq!(modules.len(), 2);
        assert_eq!(modules[0].path, vec!["dummy.py".to_string()]);
        assert_eq!(modules[1].path, vec!["__init__.py".to_string()]);
    }

    #[test]
    fn compiles_every_requested_language() {
        let modules = compile(
            &trivial_descriptor(),
            "dummy",
            None,
            &[Language::Python, Language::TypeScript, Language::R],
        )
        .unwrap();
        assert_eq!(modules.len(), 6);
    }

    #[test]
    fn unknown_language_string_is_rejected() {
        let err = "fortran".parse::<Language>().unwrap_err();
        assert!(matches!(err, StyxError::UnknownLanguage { .. }));
    }

    #[test]
    fn package_name_override_is_reflected_in_module_path() {
        let modules = compile(&trivial_descriptor(), "renamed_tool", None, &[Language::Python]).unwrap();
        assert_eq!(modules[0].path, vec!["renamed_tool.py".to_string()]);
    }
}
