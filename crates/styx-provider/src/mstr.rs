// SPDX-License-Identifier: MIT OR Apache-2.0

//! `MStr`: an expression tagged with whether it refers to a scalar string or
//! a list of strings, so codegen can treat "one carg token" and "N carg
//! tokens from a list param" uniformly (ported from
//! `backend/generic/languageprovider.py`'s `MStr` NamedTuple).

/// A language expression that yields either a single string or a list of
/// strings, distinguished by `is_list`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MStr {
    /// The rendered expression text.
    pub expr: String,
    /// `true` if `expr` evaluates to a list of strings rather than one.
    pub is_list: bool,
}

impl MStr {
    /// A scalar (non-list) expression.
    #[must_use]
    pub fn scalar(expr: impl Into<String>) -> Self {
        Self {
            expr: expr.into(),
            is_list: false,
        }
    }

    /// A list-valued expression.
    #[must_use]
    pub fn list(expr: impl Into<String>) -> Self {
        Self {
            expr: expr.into(),
            is_list: true,
        }
    }
}
