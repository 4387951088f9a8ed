// SPDX-License-Identifier: MIT OR Apache-2.0

//! Small accessors over a raw descriptor `serde_json::Value`, since the
//! frontend intentionally does not deserialize into a strongly-typed
//! Boutiques schema (that validation is a separate collaborator's
//! responsibility — spec §1 "Non-goals").

use serde_json::Value;

use crate::error::FrontendError;

/// Borrow `obj[field]` as a string, or fail with [`FrontendError::MissingField`].
pub fn require_str<'a>(
    obj: &'a Value,
    field: &str,
    context: Option<&str>,
) -> Result<&'a str, FrontendError> {
    obj.get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| FrontendError::MissingField {
            field: field.to_string(),
            context: context.map(str::to_string),
        })
}

/// Borrow `obj[field]` as a string if present, `None` if absent or null.
#[must_use]
pub fn opt_str<'a>(obj: &'a Value, field: &str) -> Option<&'a str> {
    obj.get(field).and_then(Value::as_str)
}

/// `obj[field]` as a bool, defaulting to `false` if absent.
#[must_use]
pub fn bool_flag(obj: &Value, field: &str) -> bool {
    obj.get(field).and_then(Value::as_bool).unwrap_or(false)
}

/// `obj[field]` as an `i64`, if present and numeric.
#[must_use]
pub fn opt_i64(obj: &Value, field: &str) -> Option<i64> {
    obj.get(field).and_then(Value::as_i64)
}

/// `obj[field]` as an `f64`, if present and numeric.
#[must_use]
pub fn opt_f64(obj: &Value, field: &str) -> Option<f64> {
    obj.get(field).and_then(Value::as_f64)
}

/// `obj[field]` as a u32 count, if present.
#[must_use]
pub fn opt_u32(obj: &Value, field: &str) -> Option<u32> {
    obj.get(field).and_then(Value::as_u64).map(|v| v as u32)
}

/// `obj[field]` as an array of objects, or an empty slice if absent.
#[must_use]
pub fn array<'a>(obj: &'a Value, field: &str) -> &'a [Value] {
    obj.get(field)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// `obj[field]` as an array of strings, or an empty vec if absent.
#[must_use]
pub fn string_array(obj: &Value, field: &str) -> Vec<String> {
    obj.get(field)
        .and_then(Value::as_array)
        .map(|arr| {
            arr.iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
