// SPDX-License-Identifier: MIT OR Apache-2.0

//! Structural invariant checks over a fully-built [`crate::Interface`].
//!
//! These correspond to spec §8 invariants 1-4 and are used by the
//! frontend's own self-check, by `styx-normalize`'s idempotence test, and
//! directly by consumers that deserialize an `Interface` from an untrusted
//! source (e.g. a cached IR snapshot) and want to re-validate it.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::ids::ParamId;
use crate::interface::Interface;
use crate::param::ParamBody;
use crate::visit::{iter_params_recursively, iter_structs_recursively};

/// A violated IR invariant.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IrError {
    /// Two params share the same [`ParamId`] within one interface.
    #[error("duplicate param id {id} (first seen as `{first_name}`, again as `{second_name}`)")]
    DuplicateParamId {
        /// The repeated id.
        id: ParamId,
        /// Name of the first param seen with this id.
        first_name: String,
        /// Name of the second param seen with this id.
        second_name: String,
    },
    /// An [`crate::OutputParamReference::ref_id`] does not resolve to any
    /// param reachable from the interface's root struct.
    #[error("output reference to unknown param id {ref_id}")]
    DanglingOutputReference {
        /// The unresolved id.
        ref_id: ParamId,
    },
    /// Two structs share the same name after normalization should have
    /// made them unique.
    #[error("duplicate struct name `{name}`")]
    DuplicateStructName {
        /// The repeated name.
        name: String,
    },
    /// Two sibling params share the same name within one struct after
    /// normalization should have made them unique.
    #[error("duplicate param name `{name}` within struct `{struct_name}`")]
    DuplicateParamName {
        /// The struct the duplicate was found in.
        struct_name: String,
        /// The repeated name.
        name: String,
    },
    /// A non-nullable param carries an [`DefaultValue::ExplicitNone`]
    /// default, which is only legal when `nullable` is `true`.
    #[error("non-nullable param `{name}` has an explicit-none default")]
    NonNullableExplicitNone {
        /// The offending param's name.
        name: String,
    },
    /// A `Bool` body carries a `list` modifier, which spec §3 forbids
    /// ("`Bool` bodies never carry `list_`").
    #[error("bool param `{name}` has a list modifier")]
    BoolWithList {
        /// The offending param's name.
        name: String,
    },
}

/// Run every structural invariant check against `interface`, returning the
/// first violation found, or `Ok(())` if none.
pub fn validate(interface: &Interface) -> Result<(), IrError> {
    check_unique_param_ids(interface)?;
    check_output_references_resolve(interface)?;
    check_bool_has_no_list(interface)?;
    check_nullable_defaults(interface)?;
    Ok(())
}

/// Invariants 2 (post-normalization uniqueness) are checked separately
/// since they only hold *after* `styx-normalize` has run; a freshly
/// lowered, not-yet-normalized interface may legitimately violate them.
pub fn validate_normalized_names(interface: &Interface) -> Result<(), IrError> {
    let mut struct_names = HashSet::new();
    for s in iter_structs_recursively(&interface.root, true) {
        let name = s.body.struct_name().unwrap().to_string();
        if !struct_names.insert(name.clone()) {
            return Err(IrError::DuplicateStructName { name });
        }
        let mut param_names = HashSet::new();
        for child in s.struct_children() {
            if !param_names.insert(child.base.name.clone()) {
                return Err(IrError::DuplicateParamName {
                    struct_name: name.clone(),
                    name: child.base.name.clone(),
                });
            }
        }
    }
    Ok(())
}

fn check_unique_param_ids(interface: &Interface) -> Result<(), IrError> {
    let mut seen: HashMap<ParamId, String> = HashMap::new();
    for p in iter_params_recursively(&interface.root, true) {
        if let Some(first_name) = seen.get(&p.base.id) {
            return Err(IrError::DuplicateParamId {
                id: p.base.id,
                first_name: first_name.clone(),
                second_name: p.base.name.clone(),
            });
        }
        seen.insert(p.base.id, p.base.name.clone());
    }
    Ok(())
}

fn check_output_references_resolve(interface: &Interface) -> Result<(), IrError> {
    let known: HashSet<ParamId> = iter_params_recursively(&interface.root, true)
        .iter()
        .map(|p| p.base.id)
        .collect();
    for p in iter_params_recursively(&interface.root, true) {
        for out in &p.base.outputs {
            for ref_id in out.ref_ids() {
                if !known.contains(&ref_id) {
                    return Err(IrError::DanglingOutputReference { ref_id });
                }
            }
        }
    }
    Ok(())
}

fn check_bool_has_no_list(interface: &Interface) -> Result<(), IrError> {
    for p in iter_params_recursively(&interface.root, true) {
        if matches!(p.body, ParamBody::Bool { .. }) && p.list.is_some() {
            return Err(IrError::BoolWithList {
                name: p.base.name.clone(),
            });
        }
    }
    Ok(())
}

fn check_nullable_defaults(interface: &Interface) -> Result<(), IrError> {
    for p in iter_params_recursively(&interface.root, true) {
        if !p.nullable && p.default_value.is_explicit_none() {
            return Err(IrError::NonNullableExplicitNone {
                name: p.base.name.clone(),
            });
        }
    }
    Ok(())
}
