// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read-only recursive visitors over structs and params.
//!
//! Ports `Expression.iter_params()` / `iter_structs_recursively()` from
//! `styx/ir/core.py`'s usage in `normalize.py` and `stats.py`. The driver
//! (spec §9 "Recursion into struct unions") must recurse into every
//! alternative of every `StructUnion`; these helpers centralise that so
//! normalization, stats, and codegen never re-derive it independently.

use crate::param::{Param, ParamBody};

/// Iterate the direct child params of `param`'s body: a `Struct`'s
/// `children`, or a `StructUnion`'s `alts` (themselves `Struct`-bodied
/// params). Empty for scalar bodies.
pub fn iter_direct_children(param: &Param) -> Box<dyn Iterator<Item = &Param> + '_> {
    match &param.body {
        ParamBody::Struct { children, .. } => Box::new(children.iter()),
        ParamBody::StructUnion { alts } => Box::new(alts.iter()),
        _ => Box::new(std::iter::empty()),
    }
}

/// Recursively iterate every `Struct`-bodied param reachable from `root`,
/// depth-first, pre-order. If `include_self` is `false` and `root` is
/// itself a `Struct`, `root` is excluded but its descendants are still
/// visited (mirrors `iter_structs_recursively(False)` in `normalize.py`,
/// which is used to skip re-processing the struct the caller already
/// holds a mutable borrow of).
pub fn iter_structs_recursively(root: &Param, include_self: bool) -> Vec<&Param> {
    let mut out = Vec::new();
    fn walk<'a>(p: &'a Param, include: bool, out: &mut Vec<&'a Param>) {
        if include && matches!(p.body, ParamBody::Struct { .. }) {
            out.push(p);
        }
        match &p.body {
            ParamBody::Struct { children, .. } => {
                for c in children {
                    walk(c, true, out);
                }
            }
            ParamBody::StructUnion { alts } => {
                for a in alts {
                    walk(a, true, out);
                }
            }
            _ => {}
        }
    }
    walk(root, include_self, &mut out);
    out
}

/// Recursively iterate every param reachable from `root`, depth-first,
/// pre-order, including compound (`Struct`/`StructUnion`) nodes themselves.
pub fn iter_params_recursively(root: &Param, include_self: bool) -> Vec<&Param> {
    let mut out = Vec::new();
    fn walk<'a>(p: &'a Param, include: bool, out: &mut Vec<&'a Param>) {
        if include {
            out.push(p);
        }
        match &p.body {
            ParamBody::Struct { children, .. } => {
                for c in children {
                    walk(c, true, out);
                }
            }
            ParamBody::StructUnion { alts } => {
                for a in alts {
                    walk(a, true, out);
                }
            }
            _ => {}
        }
    }
    walk(root, include_self, &mut out);
    out
}

/// Direct child params of a `Struct` body, in declaration order (not
/// recursive). Empty for any other body, including `StructUnion`.
#[must_use]
pub fn direct_params(param: &Param) -> &[Param] {
    param.struct_children()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doc::Documentation;
    use crate::ids::{IdGen, ParamId};
    use crate::param::{Param, ParamBase, ParamBody};

    fn leaf(id: ParamId, name: &str) -> Param {
        Param::new(ParamBase::new(id, name), ParamBody::String)
    }

    #[test]
    fn recurses_into_nested_structs_and_unions() {
        let mut ids = IdGen::new();
        let inner = Param::new(
            ParamBase::new(ids.next(), "inner"),
            ParamBody::Struct {
                name: "inner".into(),
                groups: vec![],
                children: vec![leaf(ids.next(), "x")],
                mutex_groups: vec![],
                docs: Documentation::empty(),
            },
        );
        let alt_a = Param::new(
            ParamBase::new(ids.next(), "alt_a"),
            ParamBody::Struct {
                name: "alt_a".into(),
                groups: vec![],
                children: vec![leaf(ids.next(), "y")],
                mutex_groups: vec![],
                docs: Documentation::empty(),
            },
        );
        let union = Param::new(
            ParamBase::new(ids.next(), "choice"),
            ParamBody::StructUnion { alts: vec![alt_a] },
        );
        let root = Param::new(
            ParamBase::new(ids.next(), "root"),
            ParamBody::Struct {
                name: "root".into(),
                groups: vec![],
                children: vec![inner, union],
                mutex_groups: vec![],
                docs: Documentation::empty(),
            },
        );

        let structs = iter_structs_recursively(&root, true);
        let names: Vec<&str> = structs
            .iter()
            .map(|p| p.body.struct_name().unwrap())
            .collect();
        assert_eq!(names, vec!["root", "inner", "alt_a"]);

        let structs_excl = iter_structs_recursively(&root, false);
        assert_eq!(structs_excl.len(), 2);
    }
}
