// SPDX-License-Identifier: MIT OR Apache-2.0

//! Struct/param renaming pass. Ported from `ir/normalize.py`: walks every
//! `Struct` reachable from the interface root and bumps any name collision
//! by appending (or incrementing) a `_N` suffix, first for struct names
//! across the whole interface, then for param names within each struct.
//!
//! Deliberate deviation: the original skips the root struct itself
//! (`iter_structs_recursively(False)`), relying on the caller never having
//! handed it a root whose own name collides with a descendant's. This port
//! processes the root too, since [`styx_ir::invariant::validate_normalized_names`]
//! checks uniqueness over *every* struct including the root, and a
//! normalizer that can leave that check failing is not doing its job.

use std::collections::HashSet;

use styx_ir::{Interface, Param, ParamBody};

/// Rename structs and params in place so that every struct name is unique
/// within the interface and every param name is unique within its owning
/// struct. Never reorders or re-parents anything; only `base.name` and
/// `Struct::name` fields are rewritten.
pub fn normalize(interface: &mut Interface) {
    let mut struct_names: HashSet<String> = HashSet::new();
    normalize_struct(&mut interface.root, &mut struct_names);
}

fn normalize_struct(param: &mut Param, struct_names: &mut HashSet<String>) {
    match &mut param.body {
        ParamBody::Struct { name, children, .. } => {
            dedupe_name(name, struct_names);

            let mut param_names: HashSet<String> = HashSet::new();
            for child in children.iter_mut() {
                dedupe_name(&mut child.base.name, &mut param_names);
            }
            for child in children.iter_mut() {
                normalize_struct(child, struct_names);
            }
        }
        ParamBody::StructUnion { alts } => {
            for alt in alts.iter_mut() {
                normalize_struct(alt, struct_names);
            }
        }
        _ => {}
    }
}

fn dedupe_name(name: &mut String, seen: &mut HashSet<String>) {
    while seen.contains(name.as_str()) {
        *name = bump_suffix(name);
    }
    seen.insert(name.clone());
}

/// `foo` -> `foo_1`, `foo_1` -> `foo_2`. Mirrors the original's
/// `rsplit("_", 1)` + `isdigit()` check: a non-numeric suffix (or no `_`
/// at all) just gets `_1` appended rather than misread as a counter.
fn bump_suffix(name: &str) -> String {
    if let Some((prefix, suffix)) = name.rsplit_once('_') {
        if let Ok(n) = suffix.parse::<u64>() {
            return format!("{prefix}_{}", n + 1);
        }
    }
    format!("{name}_1")
}

#[cfg(test)]
mod tests {
    use styx_ir::invariant::validate_normalized_names;
    use styx_ir::{Documentation, IdGen, Interface, Package, Param, ParamBase, ParamBody};

    use super::*;

    fn leaf(ids: &mut IdGen, name: &str) -> Param {
        Param::new(ParamBase::new(ids.next(), name), ParamBody::String)
    }

    fn struct_param(ids: &mut IdGen, name: &str, children: Vec<Param>) -> Param {
        Param::new(
            ParamBase::new(ids.next(), name),
            ParamBody::Struct {
                name: name.to_string(),
                groups: vec![],
                children,
                mutex_groups: vec![],
                docs: Documentation::empty(),
            },
        )
    }

    fn wrap(root: Param) -> Interface {
        Interface {
            uid: "test".to_string(),
            package: Package::new("test"),
            root,
            stdout: None,
            stderr: None,
        }
    }

    #[test]
    fn dedupes_sibling_param_names() {
        let mut ids = IdGen::new();
        let root = struct_param(
            &mut ids,
            "root",
            vec![leaf(&mut ids, "x"), leaf(&mut ids, "x"), leaf(&mut ids, "x")],
        );
        let mut interface = wrap(root);
        normalize(&mut interface);
        let names: Vec<&str> = interface.root.struct_children().iter().map(|p| p.base.name.as_str()).collect();
        assert_eq!(names, vec!["x", "x_1", "x_2"]);
    }

    #[test]
    fn dedupes_nested_struct_names_against_root() {
        let mut ids = IdGen::new();
        let inner = struct_param(&mut ids, "root", vec![leaf(&mut ids, "y")]);
        let root = struct_param(&mut ids, "root", vec![inner]);
        let mut interface = wrap(root);
        normalize(&mut interface);
        assert_eq!(interface.root.body.struct_name(), Some("root"));
        let nested_name = interface.root.struct_children()[0].body.struct_name();
        assert_eq!(nested_name, Some("root_1"));
    }

    #[test]
    fn satisfies_the_post_normalization_invariant_check() {
        let mut ids = IdGen::new();
        let alt_a = struct_param(&mut ids, "opt", vec![leaf(&mut ids, "a")]);
        let alt_b = struct_param(&mut ids, "opt", vec![leaf(&mut ids, "a")]);
        let union = Param::new(ParamBase::new(ids.next(), "choice"), ParamBody::StructUnion { alts: vec![alt_a, alt_b] });
        let root = struct_param(&mut ids, "root", vec![union, leaf(&mut ids, "root")]);
        let mut interface = wrap(root);
        normalize(&mut interface);
        assert!(validate_normalized_names(&interface).is_ok());
    }

    #[test]
    fn is_idempotent() {
        let mut ids = IdGen::new();
        let root = struct_param(&mut ids, "root", vec![leaf(&mut ids, "x"), leaf(&mut ids, "x")]);
        let mut interface = wrap(root);
        normalize(&mut interface);
        let once = interface.clone();
        normalize(&mut interface);
        assert_eq!(once, interface);
    }
}
