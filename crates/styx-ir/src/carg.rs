// SPDX-License-Identifier: MIT OR Apache-2.0

//! `Carg` / `ConditionalGroup`: the command-line assembly template.

use serde::{Deserialize, Serialize};

use crate::param::Param;

/// One token inside a [`Carg`]: either fixed text or an embedded parameter
/// whose runtime value is substituted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CargToken {
    /// A literal string token, e.g. a command-line flag.
    Literal(String),
    /// An embedded parameter (by value, not by id — cargs are built during
    /// frontend lowering before normalization, and are walked by the
    /// backend alongside the rest of the tree).
    Param(Box<Param>),
}

/// A non-empty ordered sequence of tokens forming one command-line
/// argument (or, when tokens concatenate a flag with its value, one
/// argument built from several pieces).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Carg {
    /// Ordered tokens. Never empty.
    pub tokens: Vec<CargToken>,
}

impl Carg {
    /// Construct a `Carg` from a non-empty token list.
    ///
    /// # Panics
    /// Panics if `tokens` is empty — a `Carg` with no tokens is not a
    /// representable IR shape (spec §3: "non-empty sequence of tokens").
    #[must_use]
    pub fn new(tokens: Vec<CargToken>) -> Self {
        assert!(!tokens.is_empty(), "Carg must have at least one token");
        Self { tokens }
    }

    /// `true` if this carg is the two-token `[constant, non-constant]`
    /// shape recognised as "a flag attached to a parameter" and collapsed
    /// at code-generation time (spec §3).
    #[must_use]
    pub fn is_flag_attached_pattern(&self) -> bool {
        matches!(
            self.tokens.as_slice(),
            [CargToken::Literal(_), CargToken::Param(_)]
        )
    }

    /// Every [`Param`] embedded in this carg, in token order.
    pub fn params(&self) -> impl Iterator<Item = &Param> {
        self.tokens.iter().filter_map(|t| match t {
            CargToken::Param(p) => Some(p.as_ref()),
            CargToken::Literal(_) => None,
        })
    }
}

/// An ordered list of [`Carg`]s emitted together, only when at least one of
/// the referenced nullable params is user-set (spec §3, §4.3).
///
/// An empty-condition group (no nullable params referenced by any of its
/// cargs) is unconditional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionalGroup {
    /// The cargs emitted together under one condition.
    pub cargs: Vec<Carg>,
}

impl ConditionalGroup {
    /// Construct a group from its cargs.
    #[must_use]
    pub fn new(cargs: Vec<Carg>) -> Self {
        Self { cargs }
    }

    /// Every nullable [`Param`] referenced anywhere in this group's cargs,
    /// in encounter order — the disjunction of "is set by user" predicates
    /// that gates emission (spec §4.3 step 3).
    pub fn nullable_guards(&self) -> impl Iterator<Item = &Param> {
        self.cargs
            .iter()
            .flat_map(|c| c.params())
            .filter(|p| p.nullable)
    }

    /// `true` if this group is unconditional (no nullable guard params).
    #[must_use]
    pub fn is_unconditional(&self) -> bool {
        self.nullable_guards().next().is_none()
    }

    /// `true` if this group's condition has more than one clause — the
    /// threshold spec §4.3 uses to choose the defensive (empty-substituted)
    /// token expression over the direct one.
    #[must_use]
    pub fn needs_defensive_form(&self) -> bool {
        self.nullable_guards().count() > 1
    }
}
