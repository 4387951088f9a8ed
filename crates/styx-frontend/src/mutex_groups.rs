// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lowering of Boutiques `groups` entries into [`styx_ir::MutexGroup`]
//! (spec §4.1 supplement, grounded on
//! `original_source/src/styx/frontend/schema/properties/groups.py`).

use std::collections::HashMap;

use serde_json::Value;
use styx_ir::{MutexGroup, ParamId};

use crate::descriptor::{array, bool_flag, require_str, string_array};
use crate::error::FrontendError;

/// Lower every entry of `scope["groups"]` into a [`MutexGroup`], resolving
/// each member id through `id_lookup` (input id -> [`ParamId`], *not* the
/// value-key lookup used for command-line assembly).
pub fn lower_mutex_groups(
    scope: &Value,
    id_lookup: &HashMap<String, ParamId>,
) -> Result<Vec<MutexGroup>, FrontendError> {
    let mut out = Vec::new();
    for group in array(scope, "groups") {
        let name = require_str(group, "id", Some("groups"))?.to_string();
        let member_ids = string_array(group, "members");
        let mut members = Vec::with_capacity(member_ids.len());
        for member in &member_ids {
            let id = id_lookup
                .get(member)
                .copied()
                .ok_or_else(|| FrontendError::UnknownGroupMember {
                    group: name.clone(),
                    member: member.clone(),
                })?;
            members.push(id);
        }
        out.push(MutexGroup {
            name,
            members,
            mutually_exclusive: bool_flag(group, "mutually-exclusive"),
            one_is_required: bool_flag(group, "one-is-required"),
        });
    }
    Ok(out)
}
