// SPDX-License-Identifier: MIT OR Apache-2.0

//! Optional human-facing documentation carried on IR nodes.

use serde::{Deserialize, Serialize};

/// Documentation attached to a [`crate::Package`], [`crate::Interface`],
/// [`crate::Param`], or [`crate::Output`]. Every field is optional or an
/// ordered list that may be empty — Boutiques descriptors routinely omit
/// all of these.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Documentation {
    /// Short human title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Longer free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ordered author names.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<String>,
    /// Ordered literature references (free-text citations).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub literature: Vec<String>,
    /// Ordered URLs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub urls: Vec<String>,
}

impl Documentation {
    /// An empty documentation record (all fields absent/empty).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// `true` if every field is absent or empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.authors.is_empty()
            && self.literature.is_empty()
            && self.urls.is_empty()
    }
}
