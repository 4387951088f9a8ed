// SPDX-License-Identifier: MIT OR Apache-2.0

//! Stable integer ids for [`crate::Param`] nodes, scoped to one interface.

use serde::{Deserialize, Serialize};

/// A stable integer identifier for a [`crate::Param`], unique within the
/// [`crate::Interface`] that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ParamId(pub u32);

impl ParamId {
    /// The raw integer value.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ParamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonically increasing allocator for [`ParamId`]s, scoped to a single
/// [`crate::Interface`] under construction by the frontend.
///
/// Mirrors `itertools.count()` in `styx/ir/core.py`: ids are handed out in
/// allocation order and never reused, even if the frontend later discards a
/// partially-built node.
#[derive(Debug, Default, Clone)]
pub struct IdGen {
    next: u32,
}

impl IdGen {
    /// Create a fresh allocator starting at zero.
    #[must_use]
    pub fn new() -> Self {
        Self { next: 0 }
    }

    /// Allocate the next id.
    pub fn next(&mut self) -> ParamId {
        let id = ParamId(self.next);
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_monotonic_and_unique() {
        let mut gen = IdGen::new();
        let a = gen.next();
        let b = gen.next();
        let c = gen.next();
        assert_eq!([a.0, b.0, c.0], [0, 1, 2]);
    }
}
