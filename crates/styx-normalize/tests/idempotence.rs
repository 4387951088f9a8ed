// SPDX-License-Identifier: MIT OR Apache-2.0

use proptest::prelude::*;
use styx_ir::invariant::validate_normalized_names;
use styx_ir::{Documentation, IdGen, Interface, Package, Param, ParamBase, ParamBody};

/// Builds a struct whose direct children are `count` leaf params sharing
/// `name_pool.len()` distinct names, cycled round-robin so collisions are
/// common and deterministic from the seed alone.
fn build_interface(name_pool: &[&str], counts: &[usize]) -> Interface {
    let mut ids = IdGen::new();
    let children: Vec<Param> = counts
        .iter()
        .map(|&n| Param::new(ParamBase::new(ids.next(), name_pool[n % name_pool.len()]), ParamBody::String))
        .collect();
    let root = Param::new(
        ParamBase::new(ids.next(), name_pool[0]),
        ParamBody::Struct {
            name: name_pool[0].to_string(),
            groups: vec![],
            children,
            mutex_groups: vec![],
            docs: Documentation::empty(),
        },
    );
    Interface {
        uid: "prop.boutiques".to_string(),
        package: Package::new("prop"),
        root,
        stdout: None,
        stderr: None,
    }
}

proptest! {
    #[test]
    fn normalize_is_idempotent(counts in proptest::collection::vec(0usize..4, 0..12)) {
        let pool = ["a", "b", "c", "d"];
        let mut iface = build_interface(&pool, &counts);
        styx_normalize::normalize(&mut iface);
        let once = iface.clone();
        styx_normalize::normalize(&mut iface);
        prop_assert_eq!(once, iface);
    }

    #[test]
    fn normalize_leaves_no_duplicate_names(counts in proptest::collection::vec(0usize..4, 0..12)) {
        let pool = ["a", "b", "c", "d"];
        let mut iface = build_interface(&pool, &counts);
        styx_normalize::normalize(&mut iface);
        prop_assert!(validate_normalized_names(&iface).is_ok());
    }
}
