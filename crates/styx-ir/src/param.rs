// SPDX-License-Identifier: MIT OR Apache-2.0

//! `Param`: the IR's unit of typed input, and its body variants.

use serde::{Deserialize, Serialize};

use crate::carg::ConditionalGroup;
use crate::doc::Documentation;
use crate::ids::ParamId;
use crate::interface::MutexGroup;
use crate::output::Output;

/// The shared header every [`Param`] carries regardless of its body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamBase {
    /// Stable id, unique within the owning interface.
    pub id: ParamId,
    /// Human / generated-code name. Renamed (never re-parented) by
    /// normalization to stay unique within its owning struct.
    pub name: String,
    /// Attached documentation.
    #[serde(default)]
    pub docs: Documentation,
    /// Output templates anchored on this param's enclosing struct that
    /// reference it; populated on the struct-owning param, not on every
    /// leaf (see [`crate::Output`]).
    #[serde(default)]
    pub outputs: Vec<Output>,
}

impl ParamBase {
    /// Construct a bare header with no documentation or outputs.
    #[must_use]
    pub fn new(id: ParamId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            docs: Documentation::empty(),
            outputs: Vec::new(),
        }
    }
}

/// One side of a bound: inclusive, or exclusive-but-preserved (floats only;
/// spec §9 Open Question (i) — integer exclusivity is folded to inclusive
/// at frontend lowering time and never reaches this type).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumberBound<T> {
    /// The bound value.
    pub value: T,
    /// `true` if the bound excludes `value` itself.
    pub exclusive: bool,
}

impl<T> NumberBound<T> {
    /// An inclusive bound at `value`.
    pub fn inclusive(value: T) -> Self {
        Self {
            value,
            exclusive: false,
        }
    }

    /// An exclusive bound at `value`.
    pub fn exclusive(value: T) -> Self {
        Self {
            value,
            exclusive: true,
        }
    }
}

/// A closed enumeration of legal literal values for a scalar body.
/// Always a (non-strict) subset of the body's domain (spec §3 invariant).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Choices {
    /// String choices.
    Strings(Vec<String>),
    /// Integer choices.
    Ints(Vec<i64>),
}

/// Whether and how a default value is attached to a nullable-capable param.
///
/// Three-way distinction per spec §3: "absent" (no default was declared),
/// an explicit "set to nothing" marker (Boutiques `default-value: null` on
/// a nullable field), or a concrete literal of the body's domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DefaultValue<T> {
    /// No default declared.
    Unset,
    /// Explicitly defaulted to "no value" (only legal when `nullable`).
    ExplicitNone,
    /// A concrete literal default.
    Literal(T),
}

impl<T> DefaultValue<T> {
    /// `true` for the [`DefaultValue::ExplicitNone`] variant.
    #[must_use]
    pub fn is_explicit_none(&self) -> bool {
        matches!(self, Self::ExplicitNone)
    }
}

/// Count bound on a repeated ([`ListModifier`]) parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ListModifier {
    /// Minimum number of entries, if constrained (`min-list-entries`).
    pub min_entries: Option<u32>,
    /// Maximum number of entries, if constrained (`max-list-entries`).
    pub max_entries: Option<u32>,
    /// Joiner string (`list-separator`). When present, the cargs backend
    /// collapses this param's list value into a single scalar token by
    /// joining with it, instead of extending the cargs vector by one token
    /// per element.
    #[serde(default)]
    pub separator: Option<String>,
}

/// A literal scalar value, used for defaults and choices of any body type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    /// String literal.
    Str(String),
    /// Integer literal.
    Int(i64),
    /// Float literal.
    Float(f64),
    /// Boolean literal.
    Bool(bool),
}

/// The tagged body of a [`Param`]: what kind of value this parameter holds
/// and the constraints specific to that kind. See spec §3 "Param body
/// variants".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ParamBody {
    /// Free-form string.
    String,
    /// Bounded integer. Exclusive bounds are folded to inclusive (±1) by
    /// the frontend, so both bounds here are always inclusive.
    Int {
        /// Inclusive lower bound, if any.
        min: Option<i64>,
        /// Inclusive upper bound, if any.
        max: Option<i64>,
    },
    /// Bounded float. Exclusivity is preserved (spec §9 Open Question (i)).
    Float {
        /// Lower bound, if any.
        min: Option<NumberBound<f64>>,
        /// Upper bound, if any.
        max: Option<NumberBound<f64>>,
    },
    /// A path to a file the tool reads and/or writes.
    File {
        /// Runner should resolve (create/mount) the parent directory.
        resolve_parent: bool,
        /// The tool may mutate this file in place.
        mutable: bool,
    },
    /// A boolean that emits literal tokens when true and/or false. A plain
    /// flag is the degenerate case `value_true = [flag], value_false = []`.
    /// Per spec §9 Open Question (ii), `Bool` is always non-nullable with
    /// a `false` default — the frontend never produces an optional `Bool`.
    Bool {
        /// Tokens emitted when the value is `true`.
        value_true: Vec<String>,
        /// Tokens emitted when the value is `false`.
        value_false: Vec<String>,
    },
    /// A sub-command: a nested parameter scope with its own command-line
    /// assembly template.
    Struct {
        /// Struct (sub-command) name, unique within the interface after
        /// normalization.
        name: String,
        /// Ordered, possibly-conditional command-line template.
        groups: Vec<ConditionalGroup>,
        /// Direct child parameters, in declaration order.
        children: Vec<Param>,
        /// Mutually-exclusive / one-required groupings over `children`
        /// (Boutiques descriptor `groups`), consulted by `build_params`
        /// validation only.
        #[serde(default)]
        mutex_groups: Vec<MutexGroup>,
        /// Struct-level documentation.
        #[serde(default)]
        docs: Documentation,
    },
    /// A tagged choice between structs (Boutiques nested `type` given as a
    /// list of objects).
    StructUnion {
        /// The alternative structs. Each element's body is always
        /// [`ParamBody::Struct`].
        alts: Vec<Param>,
    },
}

impl ParamBody {
    /// `true` for [`ParamBody::Struct`] or [`ParamBody::StructUnion`].
    #[must_use]
    pub fn is_compound(&self) -> bool {
        matches!(self, ParamBody::Struct { .. } | ParamBody::StructUnion { .. })
    }

    /// The struct's declared name, if this body is a `Struct`.
    #[must_use]
    pub fn struct_name(&self) -> Option<&str> {
        match self {
            ParamBody::Struct { name, .. } => Some(name),
            _ => None,
        }
    }
}

/// A single IR parameter: header + tagged body + cross-cutting modifiers.
///
/// Modifiers (`list_`, `nullable`, `default_value`, `choices`) are kept
/// alongside `body` rather than folded into each variant, matching spec §3
/// ("Param. Product of three parts").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Param {
    /// Stable header (id, name, docs, outputs).
    pub base: ParamBase,
    /// The tagged body.
    pub body: ParamBody,
    /// `Some` if this parameter is repeated (Boutiques `list: true`).
    pub list: Option<ListModifier>,
    /// `true` if the parameter may be entirely omitted by the caller.
    pub nullable: bool,
    /// The default value, if any (only meaningful for scalar bodies; a
    /// `Struct`/`StructUnion` with a default is not expressible in
    /// Boutiques and the frontend never produces one).
    pub default_value: DefaultValue<Literal>,
    /// Closed value enumeration, if the descriptor declared `value-choices`.
    pub choices: Option<Choices>,
}

impl Param {
    /// Construct a minimal, non-nullable, non-listed param with no default
    /// or choices.
    #[must_use]
    pub fn new(base: ParamBase, body: ParamBody) -> Self {
        Self {
            base,
            body,
            list: None,
            nullable: false,
            default_value: DefaultValue::Unset,
            choices: None,
        }
    }

    /// `true` if this param is a list (`list_` modifier present).
    #[must_use]
    pub fn is_list(&self) -> bool {
        self.list.is_some()
    }

    /// Direct child params, for `Struct` bodies; empty for everything else
    /// including `StructUnion` (whose children are its `alts`, reached via
    /// [`crate::visit`]).
    #[must_use]
    pub fn struct_children(&self) -> &[Param] {
        match &self.body {
            ParamBody::Struct { children, .. } => children,
            _ => &[],
        }
    }
}
