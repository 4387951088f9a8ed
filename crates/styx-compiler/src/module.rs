// SPDX-License-Identifier: MIT OR Apache-2.0

//! The driver's unit of output: one emitted source module (spec §6,
//! "an ordered stream of `(module_text, module_path)` pairs").

/// One emitted module: its full rendered source text and the path
/// segments it should be written under, relative to the package's output
/// directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    /// The module's complete, ready-to-write source text.
    pub text: String,
    /// Path segments, e.g. `["dummy", "dummy.py"]`; the caller joins these
    /// with its own directory separator rather than this crate assuming one.
    pub path: Vec<String>,
}
