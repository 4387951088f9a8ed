// SPDX-License-Identifier: MIT OR Apache-2.0

//! Boutiques `type` → IR body primitive classification (spec §4.1 step 5).

use serde_json::Value;

use crate::descriptor::bool_flag;
use crate::error::FrontendError;

/// Which `ParamBody` shape an input's declared `type` maps to, before its
/// list/optional/choices modifiers are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    /// `type: "String"`.
    String,
    /// `type: "Number"`, `integer: true`.
    Integer,
    /// `type: "Number"`, `integer` absent or `false`.
    Float,
    /// `type: "File"`.
    File,
    /// `type: "Flag"`.
    Flag,
    /// `type` is a nested object (a sub-command).
    SubCommand,
    /// `type` is a list of nested objects (a tagged choice of sub-commands).
    SubCommandUnion,
}

/// Classify `input`'s declared `type`.
pub fn classify(input: &Value, id: &str) -> Result<Primitive, FrontendError> {
    let ty = input
        .get("type")
        .ok_or_else(|| FrontendError::MissingField {
            field: "type".to_string(),
            context: Some(id.to_string()),
        })?;

    if ty.is_object() {
        return Ok(Primitive::SubCommand);
    }
    if ty.is_array() {
        return Ok(Primitive::SubCommandUnion);
    }
    let name = ty.as_str().ok_or_else(|| FrontendError::UnknownType {
        id: id.to_string(),
        type_name: ty.to_string(),
    })?;
    match name {
        "String" => Ok(Primitive::String),
        "File" => Ok(Primitive::File),
        "Flag" => Ok(Primitive::Flag),
        "Number" if bool_flag(input, "integer") => Ok(Primitive::Integer),
        "Number" => Ok(Primitive::Float),
        other => Err(FrontendError::UnknownType {
            id: id.to_string(),
            type_name: other.to_string(),
        }),
    }
}
