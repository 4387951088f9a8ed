// SPDX-License-Identifier: MIT OR Apache-2.0

//! `Output`: a named output-path template built from literal and
//! param-derived tokens.

use serde::{Deserialize, Serialize};

use crate::doc::Documentation;
use crate::ids::ParamId;

/// A by-id pointer from an [`Output`] token back to the [`crate::Param`]
/// whose runtime value contributes to the path. Resolved via the owning
/// interface's id table; never a direct reference, so the IR stays
/// acyclic and cheaply cloneable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputParamReference {
    /// The referenced param's id.
    pub ref_id: ParamId,
    /// File extensions to strip from the referenced value's basename
    /// before substitution (`path-template-stripped-extensions`).
    #[serde(default)]
    pub file_remove_suffixes: Vec<String>,
}

/// One token of an [`Output`]'s path template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputToken {
    /// A literal string segment.
    Literal(String),
    /// A reference whose value is substituted in at emission time.
    Ref(OutputParamReference),
}

/// A single named output file/path, expressed as a sequence of tokens
/// against an enclosing struct's params.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Output {
    /// Stable id (distinct id-space from [`crate::ParamId`] in the
    /// original source; reusing `ParamId` here is intentional since both
    /// are allocated from the same per-interface [`crate::IdGen`]).
    pub id: crate::ids::ParamId,
    /// Output name, exposed as a field on the generated outputs record.
    pub name: String,
    /// Documentation for this output field.
    #[serde(default)]
    pub docs: Documentation,
    /// Ordered path-template tokens.
    pub tokens: Vec<OutputToken>,
}

impl Output {
    /// `true` if any token references a nullable param, making this
    /// output's field null whenever that param is unset at runtime. The
    /// codegen backend resolves nullability by looking up each
    /// [`OutputParamReference::ref_id`] in the owning interface; this
    /// helper only inspects the token shape.
    #[must_use]
    pub fn ref_ids(&self) -> impl Iterator<Item = crate::ids::ParamId> + '_ {
        self.tokens.iter().filter_map(|t| match t {
            OutputToken::Ref(r) => Some(r.ref_id),
            OutputToken::Literal(_) => None,
        })
    }
}
