// SPDX-License-Identifier: MIT OR Apache-2.0

//! Compiler-driver failure modes (spec §7).

use styx_ir::ParamId;
use thiserror::Error;

/// Everything that can go wrong turning a normalized [`styx_ir::Interface`]
/// into emitted module text for one target language.
///
/// Every variant carries the smallest identifying context available at the
/// point of failure, matching the policy `styx-frontend::FrontendError`
/// already follows.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// The interface's root body was not a `Struct` — nothing downstream
    /// of the frontend can construct this, so this only fires against a
    /// hand-built or deserialized `Interface`.
    #[error("interface root `{name}` is not a struct")]
    InvalidDescriptor {
        /// The offending root's declared name.
        name: String,
    },
    /// Two params ended up with the same allocated symbol within one
    /// function scope, after normalization already ran.
    #[error("duplicate symbol `{symbol}` while emitting struct `{struct_name}`")]
    DuplicateSymbol {
        /// The repeated symbol.
        symbol: String,
        /// The struct being emitted when the collision was found.
        struct_name: String,
    },
    /// A descriptor-supplied name could not be turned into any legal
    /// symbol in the target language (every disambiguation attempt was
    /// still illegal).
    #[error("no legal symbol could be derived from `{name}` for param {id}")]
    IllegalSymbol {
        /// The offending source name.
        name: String,
        /// The param that needed a symbol.
        id: ParamId,
    },
    /// An `Output` token referenced a param id this interface does not
    /// contain (should already be caught by `styx_ir::invariant::validate`,
    /// re-checked here since the driver indexes params independently).
    #[error("output template references unknown param id {ref_id}")]
    UnsupportedConstruct {
        /// The unresolved id.
        ref_id: ParamId,
    },
}
