// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read-only complexity statistics over an [`Interface`]. Ported from
//! `ir/stats.py`: expression count, parameter count, and a McCabe-style
//! product-of-sums score over nested structs and struct-unions. Purely
//! informational — nothing in codegen consults these numbers, and
//! computing them never mutates the interface.

use styx_ir::{Interface, Param, ParamBody};

/// Complexity figures for one interface's root struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexityStats {
    /// The interface's root struct name.
    pub name: String,
    /// Total count of `Param` nodes reachable from the root, counting each
    /// `Struct`/`StructUnion` itself plus its descendants.
    pub num_expressions: u64,
    /// Total count of leaf (non-compound) params reachable from the root.
    pub num_params: u64,
    /// McCabe-style cyclomatic complexity: each nullable param or listed
    /// compound param doubles its subtree's contribution; a `StructUnion`
    /// sums its alternatives; a `Struct` sums its children's complexity
    /// folded by `sum - len + 1` (one path through the struct, plus one
    /// extra path per optional/repeated child).
    pub mccabe: u64,
}

/// Compute [`ComplexityStats`] for `interface`.
#[must_use]
pub fn complexity(interface: &Interface) -> ComplexityStats {
    ComplexityStats {
        name: interface.root_name().to_string(),
        num_expressions: count_expressions(&interface.root),
        num_params: count_params(&interface.root),
        mccabe: mccabe(&interface.root),
    }
}

fn count_expressions(param: &Param) -> u64 {
    match &param.body {
        ParamBody::Struct { children, .. } => 1 + children.iter().map(count_expressions).sum::<u64>(),
        ParamBody::StructUnion { alts } => 1 + alts.iter().map(count_expressions).sum::<u64>(),
        _ => 1,
    }
}

fn count_params(param: &Param) -> u64 {
    match &param.body {
        ParamBody::Struct { children, .. } => children.iter().map(count_params).sum(),
        ParamBody::StructUnion { alts } => alts.iter().map(count_params).sum(),
        _ => 1,
    }
}

fn mccabe(param: &Param) -> u64 {
    let is_compound = param.body.is_compound();
    let complexity = if param.nullable || (is_compound && param.is_list()) { 2 } else { 1 };

    match &param.body {
        ParamBody::Struct { children, .. } => {
            if children.is_empty() {
                return complexity;
            }
            let sum: u64 = children.iter().map(mccabe).sum();
            complexity * (sum - children.len() as u64 + 1)
        }
        ParamBody::StructUnion { alts } => complexity * alts.iter().map(mccabe).sum::<u64>(),
        _ => complexity,
    }
}

#[cfg(test)]
mod tests {
    use styx_ir::{Documentation, IdGen, Interface, Package, Param, ParamBase, ParamBody};

    use super::*;

    fn leaf(ids: &mut IdGen, name: &str) -> Param {
        Param::new(ParamBase::new(ids.next(), name), ParamBody::String)
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
    fn flat_struct_counts_params_and_expressions() {
        let mut ids = IdGen::new();
        let root = Param::new(
            ParamBase::new(ids.next(), "root"),
            ParamBody::Struct {
                name: "root".to_string(),
                groups: vec![],
                children: vec![leaf(&mut ids, "a"), leaf(&mut ids, "b")],
                mutex_groups: vec![],
                docs: Documentation::empty(),
            },
        );
        let interface = wrap(root);
        let stats = complexity(&interface);
        assert_eq!(stats.num_params, 2);
        assert_eq!(stats.num_expressions, 3);
        assert_eq!(stats.mccabe, 1);
    }

    #[test]
    fn nullable_child_doubles_mccabe_contribution() {
        let mut ids = IdGen::new();
        let mut nullable_leaf = leaf(&mut ids, "a");
        nullable_leaf.nullable = true;
        let root = Param::new(
            ParamBase::new(ids.next(), "root"),
            ParamBody::Struct {
                name: "root".to_string(),
                groups: vec![],
                children: vec![nullable_leaf, leaf(&mut ids, "b")],
                mutex_groups: vec![],
                docs: Documentation::empty(),
            },
        );
        let interface = wrap(root);
        assert_eq!(complexity(&interface).mccabe, 2);
    }

    #[test]
    fn struct_union_sums_alternatives() {
        let mut ids = IdGen::new();
        let alt_a = Param::new(
            ParamBase::new(ids.next(), "a"),
            ParamBody::Struct {
                name: "a".to_string(),
                groups: vec![],
                children: vec![leaf(&mut ids, "x")],
                mutex_groups: vec![],
                docs: Documentation::empty(),
            },
        );
        let alt_b = Param::new(
            ParamBase::new(ids.next(), "b"),
            ParamBody::Struct {
                name: "b".to_string(),
                groups: vec![],
                children: vec![leaf(&mut ids, "y")],
                mutex_groups: vec![],
                docs: Documentation::empty(),
            },
        );
        let union = Param::new(ParamBase::new(ids.next(), "choice"), ParamBody::StructUnion { alts: vec![alt_a, alt_b] });
        let root = Param::new(
            ParamBase::new(ids.next(), "root"),
            ParamBody::Struct {
                name: "root".to_string(),
                groups: vec![],
                children: vec![union],
                mutex_groups: vec![],
                docs: Documentation::empty(),
            },
        );
        let interface = wrap(root);
        let stats = complexity(&interface);
        assert_eq!(stats.num_params, 2);
        assert_eq!(stats.mccabe, 2);
    }
}
