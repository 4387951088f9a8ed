// SPDX-License-Identifier: MIT OR Apache-2.0
#![deny(unsafe_code)]
#![warn(missing_docs)]

//! # styx-codegen
//!
//! Language-neutral scaffolding shared by every target-language provider:
//! a `LineBuffer` string-assembly convention, generic function/struct/
//! module models, a parent-chain [`Scope`] symbol allocator, and small text
//! utilities. This crate emits no source text of its own — it is the
//! vocabulary `styx-provider` and the per-language provider crates build
//! on.

/// Identifier case conversion (`snake_case`, `PascalCase`, …).
pub mod case;
/// `LineBuffer`: an ordered list of source lines, and the helpers that
/// compose them.
pub mod linebuffer;
/// Generic argument/function/structure/module models.
pub mod model;
/// Parent-chain symbol-scope allocation.
pub mod scope;
/// Small text-shaping helpers (quoting, line-wrapping, suffix checks).
pub mod utils;

pub use case::{camel_case, pascal_case, screaming_snake_case, snake_case, split_words};
pub use linebuffer::LineBuffer;
pub use model::{GenericArg, GenericFunc, GenericModule, GenericModuleItem, GenericStructure};
pub use scope::{Scope, ScopeError};
