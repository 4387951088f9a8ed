// SPDX-License-Identifier: MIT OR Apache-2.0

//! Type-expression capability surface (ported from
//! `LanguageTypeProvider` in `backend/generic/languageprovider.py`).

use std::collections::HashMap;

use styx_ir::{Choices, Param, ParamBody, ParamId};

/// Language type-expression construction, plus the default `type_param`
/// translation shared by every target.
pub trait LanguageTypeProvider {
    /// The language's string type.
    fn type_str(&self) -> String;
    /// The language's integer type.
    fn type_int(&self) -> String;
    /// The language's float type.
    fn type_float(&self) -> String;
    /// The language's boolean type.
    fn type_bool(&self) -> String;
    /// The type used for an input file/path parameter.
    fn type_input_path(&self) -> String;
    /// The type used for a resolved output path.
    fn type_output_path(&self) -> String;
    /// The type of the runner collaborator.
    fn type_runner(&self) -> String;
    /// The type of a running execution handle.
    fn type_execution(&self) -> String;
    /// A type restricted to the given closed set of literal choices.
    fn type_literal_union(&self, choices: &Choices) -> String;
    /// `type_element`, wrapped as a list/array/vector type.
    fn type_list(&self, type_element: &str) -> String;
    /// `type_element`, wrapped as an optional/nullable type.
    fn type_optional(&self, type_element: &str) -> String;
    /// A union of the given type expressions.
    fn type_union(&self, type_elements: &[String]) -> String;

    /// The full type expression for `param`, honoring its `list`/`nullable`
    /// modifiers and consulting `lookup_struct_type` for compound bodies.
    fn type_param(&self, param: &Param, lookup_struct_type: &HashMap<ParamId, String>) -> String {
        let base = match &param.body {
            ParamBody::String => match &param.choices {
                Some(choices) => self.type_literal_union(choices),
                None => self.type_str(),
            },
            ParamBody::Int { .. } => match &param.choices {
                Some(choices) => self.type_literal_union(choices),
                None => self.type_int(),
            },
            ParamBody::Float { .. } => self.type_float(),
            ParamBody::File { .. } => self.type_input_path(),
            ParamBody::Bool { .. } => self.type_bool(),
            ParamBody::Struct { .. } => lookup_struct_type
                .get(&param.base.id)
                .cloned()
                .unwrap_or_else(|| panic!("no struct type registered for {}", param.base.id)),
            ParamBody::StructUnion { alts } => {
                let elements: Vec<String> = alts
                    .iter()
                    .map(|a| {
                        lookup_struct_type.get(&a.base.id).cloned().unwrap_or_else(|| {
                            panic!("no struct type registered for {}", a.base.id)
                        })
                    })
                    .collect();
                self.type_union(&elements)
            }
        };
        let with_list = if param.is_list() {
            self.type_list(&base)
        } else {
            base
        };
        if param.nullable {
            self.type_optional(&with_list)
        } else {
            with_list
        }
    }

    /// The type of a list of strings, e.g. for an assembled cargs vector.
    fn type_string_list(&self) -> String {
        self.type_list(&self.type_str())
    }
}
