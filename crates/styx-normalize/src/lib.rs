// SPDX-License-Identifier: MIT OR Apache-2.0
#![deny(unsafe_code)]
#![warn(missing_docs)]

//! # styx-normalize
//!
//! The normalization pass run on a freshly-lowered [`styx_ir::Interface`]
//! before it reaches a backend: renames struct and param names so they are
//! unique within their scope, never re-parenting or deleting anything.
//! Ported from `ir/normalize.py`. Also carries the optional, non-mutating
//! complexity-stats visitor ported from `ir/stats.py`.

mod complexity;
mod rename;

pub use complexity::{complexity, ComplexityStats};
pub use rename::normalize;
