// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pre-computed per-param symbols, type names and class names, threaded
//! through emission so individual codegen steps never have to invent a
//! name twice (ported from `backend/generic/gen/lookup.py`'s `LookupParam`).

use std::collections::HashMap;

use styx_ir::ParamId;

/// Lookup tables built once per [`styx_ir::Interface`] (by the compiler
/// driver, not this crate) and threaded by reference through every
/// `LanguageProvider` call that needs a stable name for a param it did not
/// itself allocate a symbol for.
#[derive(Debug, Clone, Default)]
pub struct Lookup {
    /// Function-local variable symbol, by param id.
    pub symbol: HashMap<ParamId, String>,
    /// Declared struct/class type name, by the id of the `Struct`- or
    /// `StructUnion`-alt-bodied param it backs.
    pub struct_type: HashMap<ParamId, String>,
    /// Full (possibly `Optional`/list-wrapped) type expression, by param id.
    pub param_type: HashMap<ParamId, String>,
    /// Outputs-record class name, by the id of the `Struct`-bodied param it
    /// collects outputs for.
    pub output_type: HashMap<ParamId, String>,
    /// Output field symbol on its owning outputs record, by output id.
    pub output_field_symbol: HashMap<ParamId, String>,
}

impl Lookup {
    /// A param's function-local symbol.
    ///
    /// # Panics
    /// Panics if `id` was never registered — every param reachable from an
    /// interface's root is registered before emission begins.
    #[must_use]
    pub fn symbol_of(&self, id: ParamId) -> &str {
        self.symbol
            .get(&id)
            .unwrap_or_else(|| panic!("no symbol registered for {id}"))
    }

    /// A struct param's declared type name.
    ///
    /// # Panics
    /// Panics if `id` was never registered.
    #[must_use]
    pub fn struct_type_of(&self, id: ParamId) -> &str {
        self.struct_type
            .get(&id)
            .unwrap_or_else(|| panic!("no struct type registered for {id}"))
    }

    /// A param's full type expression.
    ///
    /// # Panics
    /// Panics if `id` was never registered.
    #[must_use]
    pub fn param_type_of(&self, id: ParamId) -> &str {
        self.param_type
            .get(&id)
            .unwrap_or_else(|| panic!("no type registered for {id}"))
    }

    /// A struct param's outputs-record class name.
    ///
    /// # Panics
    /// Panics if `id` was never registered.
    #[must_use]
    pub fn output_type_of(&self, id: ParamId) -> &str {
        self.output_type
            .get(&id)
            .unwrap_or_else(|| panic!("no output type registered for {id}"))
    }

    /// An output's field symbol on its owning outputs record.
    ///
    /// # Panics
    /// Panics if `id` was never registered.
    #[must_use]
    pub fn output_field_symbol_of(&self, id: ParamId) -> &str {
        self.output_field_symbol
            .get(&id)
            .unwrap_or_else(|| panic!("no output field symbol registered for {id}"))
    }
}
