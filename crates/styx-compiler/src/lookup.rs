// SPDX-License-Identifier: MIT OR Apache-2.0

//! Builds a [`Lookup`] table once per [`Interface`] (spec §4.3 "Scope
//! management"): a package-level [`Scope`] allocates struct and
//! outputs-record type names, then one ephemeral child scope per struct
//! allocates that struct's parameter and output-field symbols.

use std::collections::HashMap;

use styx_codegen::Scope;
use styx_ir::visit::{iter_params_recursively, iter_structs_recursively};
use styx_ir::{Interface, Param, ParamId};
use styx_provider::{LanguageProvider, LanguageSymbolProvider, Lookup};

/// Build the interface-wide [`Lookup`] table: struct/outputs-record type
/// names from a shared package scope, then per-struct child-param and
/// output-field symbols from ephemeral scopes cloned off it, then every
/// param's full type expression.
///
/// `add_or_dodge` never fails, so this cannot — symbol legality is only
/// ever a reason to fail `add_or_die`, which this pass does not use.
#[must_use]
pub fn build_lookup(interface: &Interface, provider: &dyn LanguageProvider) -> Lookup {
    let mut lookup = Lookup::default();
    let mut package_scope = provider.language_scope();
    let structs = iter_structs_recursively(&interface.root, true);

    // Pass 1: struct and outputs-record type names, package-scoped so they
    // never collide with each other across the whole interface. The root
    // struct always gets an outputs-record type (its `execute` always
    // returns one, if only the implicit root output directory), regardless
    // of whether `struct_has_outputs` holds for it.
    for (i, s) in structs.iter().enumerate() {
        let name = s.body.struct_name().unwrap_or_default();
        let struct_type =
            package_scope.add_or_dodge(&provider.symbol_class_case_from(name), |n| provider.symbol_legal(n));
        lookup.struct_type.insert(s.base.id, struct_type);

        let is_root = i == 0;
        if is_root || styx_codegen::utils::struct_has_outputs(s) {
            let outputs_type = package_scope.add_or_dodge(
                &provider.symbol_class_case_from(&format!("{name}_outputs")),
                |n| provider.symbol_legal(n),
            );
            lookup.output_type.insert(s.base.id, outputs_type);
        }
    }

    // Pass 2: per-struct parameter and output-field symbols, each in its
    // own child scope so sibling structs may reuse the same spellings.
    for s in &structs {
        let mut child_scope = Scope::child(package_scope.clone());
        for child in s.struct_children() {
            let symbol = child_scope
                .add_or_dodge(&provider.symbol_var_case_from(&child.base.name), |n| provider.symbol_legal(n));
            lookup.symbol.insert(child.base.id, symbol);
        }
        for output in &s.base.outputs {
            let symbol = child_scope
                .add_or_dodge(&provider.symbol_var_case_from(&output.name), |n| provider.symbol_legal(n));
            lookup.output_field_symbol.insert(output.id, symbol);
        }
    }

    // Pass 3: every param's full type expression, now that every struct
    // type name above is known.
    for p in iter_params_recursively(&interface.root, true) {
        let ty = provider.type_param(p, &lookup.struct_type);
        lookup.param_type.insert(p.base.id, ty);
    }

    lookup
}

/// Index every param reachable from `interface`'s root by id, for
/// resolving [`styx_ir::OutputParamReference::ref_id`] back to its
/// [`Param`].
#[must_use]
pub fn index_params(interface: &Interface) -> HashMap<ParamId, &Param> {
    iter_params_recursively(&interface.root, true)
        .into_iter()
        .map(|p| (p.base.id, p))
        .collect()
}
