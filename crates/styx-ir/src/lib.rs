// SPDX-License-Identifier: MIT OR Apache-2.0
#![deny(unsafe_code)]
#![warn(missing_docs)]

//! # styx-ir
//!
//! The typed, language-neutral Intermediate Representation the rest of the
//! compiler operates on. A [`Frontend`](https://docs.rs/styx-frontend) lowers
//! a descriptor into an [`Interface`]; normalization passes rewrite it in
//! place (renaming only, never re-parenting); a backend then borrows it for
//! a single read-only traversal and discards it once emission completes.
//!
//! Every [`Param::base`] id is unique within one [`Interface`], assigned by
//! the monotonically increasing [`IdGen`] scoped to that interface. Nothing
//! in this crate performs I/O; it is pure data plus a handful of structural
//! invariant checks used by tests and by the normalizer.

/// Stable per-interface parameter ids and the counter that allocates them.
pub mod ids;
/// Documentation attached to packages, interfaces, params and outputs.
pub mod doc;
/// The `Package` node: name, version, container tag, documentation.
pub mod package;
/// `Param` and its body variants, modifiers, and default-value handling.
pub mod param;
/// `Output` and the token sequence that builds an output path expression.
pub mod output;
/// `Carg` / `ConditionalGroup`: the command-line assembly template.
pub mod carg;
/// `Interface`: the root node bundling a package, root struct, and metadata.
pub mod interface;
/// Read-only recursive visitors over structs and params.
pub mod visit;
/// Structural invariant checks (see spec §8, invariants 1-4).
pub mod invariant;
/// A diagnostic (non-codegen) pretty-printer for IR trees.
pub mod pretty;

pub use carg::{Carg, CargToken, ConditionalGroup};
pub use doc::Documentation;
pub use ids::{IdGen, ParamId};
pub use interface::{Interface, MutexGroup};
pub use invariant::IrError;
pub use output::{Output, OutputParamReference, OutputToken};
pub use package::Package;
pub use param::{
    Choices, DefaultValue, ListModifier, NumberBound, Param, ParamBase, ParamBody,
};
