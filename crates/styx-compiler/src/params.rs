// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-struct `params_*` function emission (spec §4.3 item 2): one named
//! argument per child parameter, presence-condition validation, and a
//! populated parameter dictionary.

use styx_codegen::{snake_case, GenericArg, GenericFunc, LineBuffer};
use styx_ir::{MutexGroup, Param, ParamBody};
use styx_provider::{CompareOp, LanguageProvider, Lookup};

/// Emit the `params_*` function for one struct.
pub fn build_params_func(lookup: &Lookup, provider: &dyn LanguageProvider, s: &Param) -> GenericFunc {
    let ParamBody::Struct { children, mutex_groups, docs, .. } = &s.body else {
        unreachable!("build_params_func called on a non-Struct param");
    };

    let args: Vec<GenericArg> = children
        .iter()
        .map(|c| GenericArg {
            name: lookup.symbol_of(c.base.id).to_string(),
            ty: Some(lookup.param_type_of(c.base.id).to_string()),
            default: provider.param_default_value(c),
            docstring: c.base.docs.description.clone().or_else(|| c.base.docs.title.clone()),
        })
        .collect();

    let mut body = LineBuffer::new();
    for group in mutex_groups {
        body.extend(mutex_group_checks(lookup, provider, children, group));
    }
    for child in children {
        body.extend(range_check(lookup, provider, child));
    }
    body.extend(provider.build_params_and_execute(lookup, s, &provider.symbol_execution()));
    body.push(provider.return_statement("params"));

    GenericFunc {
        name: format!("params_{}", snake_case(lookup.struct_type_of(s.base.id))),
        args,
        docstring_body: docs.description.clone().or_else(|| docs.title.clone()),
        body,
        return_descr: Some("Parameter dictionary.".to_string()),
        return_type: Some(lookup.struct_type_of(s.base.id).to_string()),
    }
}

/// `param` is always considered "set" if it is neither nullable nor a
/// bare/defaultable flag (`param_var_is_set_by_user` returns `None`) —
/// it is a required argument, so it always counts toward a mutex group.
fn is_set_expr(provider: &dyn LanguageProvider, param: &Param, symbol: &str) -> String {
    provider
        .param_is_set_by_user(param, symbol)
        .unwrap_or_else(|| provider.expr_bool(true))
}

fn mutex_group_checks(
    lookup: &Lookup,
    provider: &dyn LanguageProvider,
    children: &[Param],
    group: &MutexGroup,
) -> LineBuffer {
    let members: Vec<&Param> = group
        .members
        .iter()
        .filter_map(|id| children.iter().find(|c| c.base.id == *id))
        .collect();
    let names: Vec<&str> = members.iter().map(|c| c.base.name.as_str()).collect();
    let conditions: Vec<String> = members
        .iter()
        .map(|c| is_set_expr(provider, c, lookup.symbol_of(c.base.id)))
        .collect();
    let count_expr = provider.expr_count_true(&conditions);

    let mut buf = LineBuffer::new();
    if group.mutually_exclusive {
        let cond = provider.expr_compare(&count_expr, CompareOp::Gt, &provider.expr_int(1));
        let message = provider.expr_str(&format!("at most one of {} may be set", names.join(", ")));
        buf.extend(provider.if_else_block(&cond, &provider.raise_value_error(&message), None));
    }
    if group.one_is_required {
        let cond = provider.expr_compare(&count_expr, CompareOp::Lt, &provider.expr_int(1));
        let message = provider.expr_str(&format!("one of {} is required", names.join(", ")));
        buf.extend(provider.if_else_block(&cond, &provider.raise_value_error(&message), None));
    }
    buf
}

/// Range-validation guard for a scalar `Int`/`Float` param against its
/// declared bounds (spec §8 scenario S3). List-valued bounds are out of
/// scope here: the provider surface has no generic per-element loop
/// primitive, so an `Int`/`Float` list's `minimum`/`maximum` constraints
/// are accepted by the frontend but never checked at the wrapper boundary.
fn range_check(lookup: &Lookup, provider: &dyn LanguageProvider, param: &Param) -> LineBuffer {
    if param.is_list() {
        return LineBuffer::new();
    }
    let symbol = lookup.symbol_of(param.base.id);
    let violation = match &param.body {
        ParamBody::Int { min, max } => {
            let mut clauses = Vec::new();
            if let Some(min) = min {
                clauses.push(provider.expr_compare(symbol, CompareOp::Lt, &provider.expr_int(*min)));
            }
            if let Some(max) = max {
                clauses.push(provider.expr_compare(symbol, CompareOp::Gt, &provider.expr_int(*max)));
            }
            clauses
        }
        ParamBody::Float { min, max } => {
            let mut clauses = Vec::new();
            if let Some(bound) = min {
                let op = if bound.exclusive { CompareOp::Le } else { CompareOp::Lt };
                clauses.push(provider.expr_compare(symbol, op, &provider.expr_float(bound.value)));
            }
            if let Some(bound) = max {
                let op = if bound.exclusive { CompareOp::Ge } else { CompareOp::Gt };
                clauses.push(provider.expr_compare(symbol, op, &provider.expr_float(bound.value)));
            }
            clauses
        }
        _ => Vec::new(),
    };
    if violation.is_empty() {
        return LineBuffer::new();
    }
    let mut condition = provider.expr_conditions_join_or(&violation);
    if param.nullable {
        let is_set = is_set_expr(provider, param, symbol);
        condition = provider.expr_conditions_join_and(&[is_set, condition]);
    }
    let message = provider.expr_str(&format!("{} is out of range", param.base.name));
    provider.if_else_block(&condition, &provider.raise_value_error(&message), None)
}
