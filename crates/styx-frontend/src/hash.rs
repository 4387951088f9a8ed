// SPDX-License-Identifier: MIT OR Apache-2.0

//! Stable interface uid: a hex digest of the canonicalised descriptor.

use std::collections::BTreeMap;

use serde_json::Value;
use sha2::{Digest, Sha256};

/// Recursively re-sort every JSON object's keys so that two descriptors
/// that differ only in key order hash identically (spec §4.1 step 1:
/// "canonicalised (sorted-key) descriptor").
fn canonicalize(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let sorted: BTreeMap<String, Value> = map
                .iter()
                .map(|(k, v)| (k.clone(), canonicalize(v)))
                .collect();
            serde_json::to_value(sorted).expect("BTreeMap<String, Value> always serializes")
        }
        Value::Array(items) => Value::Array(items.iter().map(canonicalize).collect()),
        other => other.clone(),
    }
}

/// Compute the interface uid: a hex-encoded SHA-256 digest of the
/// canonicalised descriptor, suffixed with `.boutiques`.
///
/// The original Python implementation uses SHA-1; this port uses SHA-256
/// in line with the rest of this workspace's hashing (see DESIGN.md) since
/// the uid is an opaque cache key, not a security boundary.
#[must_use]
pub fn interface_uid(descriptor: &Value) -> String {
    let canonical = canonicalize(descriptor);
    let bytes = serde_json::to_vec(&canonical).expect("canonicalized descriptor always serializes");
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    format!("{}.boutiques", hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn key_order_does_not_affect_uid() {
        let a = json!({"name": "dummy", "command-line": "dummy"});
        let b = json!({"command-line": "dummy", "name": "dummy"});
        assert_eq!(interface_uid(&a), interface_uid(&b));
    }

    #[test]
    fn uid_has_boutiques_suffix() {
        let d = json!({"name": "dummy"});
        assert!(interface_uid(&d).ends_with(".boutiques"));
    }

    #[test]
    fn different_descriptors_hash_differently() {
        let a = json!({"name": "dummy"});
        let b = json!({"name": "other"});
        assert_ne!(interface_uid(&a), interface_uid(&b));
    }
}
