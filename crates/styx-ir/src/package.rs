// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `Package` node: a tool's identity, independent of any one interface.

use serde::{Deserialize, Serialize};

use crate::doc::Documentation;

/// A package groups one or more [`crate::Interface`]s under a shared human
/// name, optional version, and optional container image tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    /// Human name, e.g. `"fsl_bet"`.
    pub name: String,
    /// Optional semantic or freeform version string (`tool-version`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Optional container image reference (`container-image.image`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_image: Option<String>,
    /// Package-level documentation.
    #[serde(default)]
    pub docs: Documentation,
}

impl Package {
    /// Construct a package with only a name; every other field defaulted.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
            container_image: None,
            docs: Documentation::empty(),
        }
    }
}
