// SPDX-License-Identifier: MIT OR Apache-2.0

//! A diagnostic (non-codegen) indented pretty-printer for IR trees.
//!
//! Ported from `styx/ir/pretty_print.py`'s dataclass-walking printer, used
//! here for debugging and for readable test failure output -- never by a
//! [`styx-provider`](https://docs.rs/styx-provider) implementation.

use crate::carg::{Carg, CargToken, ConditionalGroup};
use crate::interface::Interface;
use crate::param::{Param, ParamBody};

/// Render `interface`'s root struct as an indented tree of struct and
/// param names, for use in test assertions and debug logging.
#[must_use]
pub fn render_tree(interface: &Interface) -> String {
    let mut out = String::new();
    render_param(&interface.root, 0, &mut out);
    out
}

fn render_param(param: &Param, depth: usize, out: &mut String) {
    let pad = "  ".repeat(depth);
    match &param.body {
        ParamBody::Struct {
            name,
            children,
            groups,
            ..
        } => {
            out.push_str(&format!(
                "{pad}Struct {name} (param `{}`, {} groups)\n",
                param.base.name,
                groups.len()
            ));
            for c in children {
                render_param(c, depth + 1, out);
            }
        }
        ParamBody::StructUnion { alts } => {
            out.push_str(&format!("{pad}StructUnion `{}`\n", param.base.name));
            for a in alts {
                render_param(a, depth + 1, out);
            }
        }
        other => {
            out.push_str(&format!(
                "{pad}{} `{}` {}\n",
                body_kind(other),
                param.base.name,
                if param.nullable { "(nullable)" } else { "" }
            ));
        }
    }
}

fn body_kind(body: &ParamBody) -> &'static str {
    match body {
        ParamBody::String => "String",
        ParamBody::Int { .. } => "Int",
        ParamBody::Float { .. } => "Float",
        ParamBody::File { .. } => "File",
        ParamBody::Bool { .. } => "Bool",
        ParamBody::Struct { .. } => "Struct",
        ParamBody::StructUnion { .. } => "StructUnion",
    }
}

/// Render a single [`ConditionalGroup`] as a flat token string, used by
/// tests to assert carg assembly shape (e.g. scenario S1/S2 in spec §8)
/// without depending on any particular backend's emitted syntax.
#[must_use]
pub fn render_group_tokens(group: &ConditionalGroup) -> Vec<String> {
    group.cargs.iter().flat_map(render_carg_tokens).collect()
}

fn render_carg_tokens(carg: &Carg) -> Vec<String> {
    carg.tokens
        .iter()
        .map(|t| match t {
            CargToken::Literal(s) => s.clone(),
            CargToken::Param(p) => format!("${}", p.base.name),
        })
        .collect()
}
