// SPDX-License-Identifier: MIT OR Apache-2.0

//! `Interface`: the root IR node for one compiled tool.

use serde::{Deserialize, Serialize};

use crate::ids::ParamId;
use crate::package::Package;
use crate::param::Param;

/// A Boutiques descriptor `groups` entry, lowered into a constraint over a
/// struct's direct children: mutually-exclusive membership and/or
/// "one of these is required". Consulted only by `build_params` validation
/// codegen (spec §4.1 supplement); it never influences `build_cargs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutexGroup {
    /// Group name, for diagnostic messages.
    pub name: String,
    /// The member params, by id, within the owning struct.
    pub members: Vec<ParamId>,
    /// At most one member may be set.
    pub mutually_exclusive: bool,
    /// At least one member must be set.
    pub one_is_required: bool,
}

/// Where stdout/stderr should be captured from, if the descriptor requests
/// it (Boutiques `stdout-output`/`stderr-output`, carried through as an
/// [`crate::OutputParamReference`]-free literal path template for the two
/// fixed streams).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamCapture {
    /// Output field name exposed on the outputs record.
    pub name: String,
}

/// The root IR node: one compiled tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interface {
    /// Stable hex digest of the canonicalised source descriptor, suffixed
    /// with `.boutiques` (spec §4.1 step 1).
    pub uid: String,
    /// The owning package.
    pub package: Package,
    /// Root parameter; its body is always [`crate::ParamBody::Struct`].
    pub root: Param,
    /// Optional stdout capture spec.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stdout: Option<StreamCapture>,
    /// Optional stderr capture spec.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stderr: Option<StreamCapture>,
}

impl Interface {
    /// The root struct's declared name.
    ///
    /// # Panics
    /// Panics if `root.body` is not a `Struct` — an invariant upheld by
    /// every path that constructs an `Interface` in this crate and its
    /// frontend.
    #[must_use]
    pub fn root_name(&self) -> &str {
        self.root
            .body
            .struct_name()
            .expect("Interface.root must be a Struct")
    }
}
