// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lowering of a single raw Boutiques input element into a [`Param`]
//! (spec §4.1 step 5).

use serde_json::Value;
use styx_ir::{
    Choices, DefaultValue, Documentation, IdGen, ListModifier, Literal, Param, ParamBase,
    ParamBody,
};

use crate::constraints::{float_bounds, int_bounds, list_bounds};
use crate::descriptor::{bool_flag, opt_str, require_str};
use crate::error::FrontendError;
use crate::lower_struct::lower_struct_param;
use crate::primitive::{classify, Primitive};

/// A fully lowered input: its [`Param`] plus the command-line assembly
/// metadata (`command-line-flag`/`-separator`) that only `build_cargs`
/// emission needs, not the IR's [`Param`] type itself.
#[derive(Debug, Clone)]
pub struct LoweredInput {
    /// The lowered parameter.
    pub param: Param,
    /// `command-line-flag`, if declared (irrelevant for `Bool` bodies,
    /// whose flag is already baked into `value_true`).
    pub flag: Option<String>,
    /// `command-line-flag-separator`, if declared.
    pub flag_separator: Option<String>,
}

/// Lower one raw input element (a Boutiques `inputs[]` entry) into a
/// [`LoweredInput`].
pub fn lower_input(raw: &Value, ids: &mut IdGen) -> Result<LoweredInput, FrontendError> {
    let id = require_str(raw, "id", None)?.to_string();
    let docs = Documentation {
        title: opt_str(raw, "name").map(str::to_string),
        description: opt_str(raw, "description").map(str::to_string),
        ..Documentation::empty()
    };
    let base = ParamBase {
        id: ids.next(),
        name: id.clone(),
        docs,
        outputs: Vec::new(),
    };

    let flag = opt_str(raw, "command-line-flag").map(str::to_string);
    let flag_separator = opt_str(raw, "command-line-flag-separator").map(str::to_string);

    let is_list = bool_flag(raw, "list");
    let is_optional = bool_flag(raw, "optional");
    let primitive = classify(raw, &id)?;

    let list = is_list.then(|| {
        let b = list_bounds(raw);
        ListModifier {
            min_entries: b.min_entries,
            max_entries: b.max_entries,
            separator: opt_str(raw, "list-separator").map(str::to_string),
        }
    });

    let param = match primitive {
        Primitive::String => {
            let choices = string_choices(raw, &id)?;
            Param {
                base,
                body: ParamBody::String,
                list,
                nullable: is_optional,
                default_value: string_default(raw, is_optional),
                choices,
            }
        }
        Primitive::Integer => {
            let (min, max) = int_bounds(raw);
            let choices = int_choices(raw, &id)?;
            Param {
                base,
                body: ParamBody::Int { min, max },
                list,
                nullable: is_optional,
                default_value: int_default(raw, is_optional),
                choices,
            }
        }
        Primitive::Float => {
            let (min, max) = float_bounds(raw);
            Param {
                base,
                body: ParamBody::Float { min, max },
                list,
                nullable: is_optional,
                default_value: float_default(raw, is_optional),
                choices: None,
            }
        }
        Primitive::File => Param {
            base,
            body: ParamBody::File {
                resolve_parent: bool_flag(raw, "resolve-parent"),
                mutable: bool_flag(raw, "mutable"),
            },
            list,
            nullable: is_optional,
            default_value: if is_optional {
                DefaultValue::ExplicitNone
            } else {
                DefaultValue::Unset
            },
            choices: None,
        },
        Primitive::Flag => {
            let flag_text = flag.clone().ok_or_else(|| FrontendError::FlagWithoutCommandLineFlag {
                id: id.clone(),
            })?;
            let default_true = raw
                .get("default-value")
                .and_then(Value::as_bool)
                .unwrap_or(false);
            Param {
                base,
                body: ParamBody::Bool {
                    value_true: vec![flag_text],
                    value_false: vec![],
                },
                list: None,
                nullable: false,
                default_value: DefaultValue::Literal(Literal::Bool(default_true)),
                choices: None,
            }
        }
        Primitive::SubCommand => {
            let sub = raw.get("type").expect("classify() guarantees type is an object");
            let (struct_base, struct_body) =
                lower_struct_param(&id, sub, Some(raw), ids)?;
            Param {
                base: ParamBase {
                    outputs: struct_base.outputs,
                    ..base
                },
                body: struct_body,
                list,
                nullable: is_optional,
                default_value: if is_optional {
                    DefaultValue::ExplicitNone
                } else {
                    DefaultValue::Unset
                },
                choices: None,
            }
        }
        Primitive::SubCommandUnion => {
            let alts_raw = raw
                .get("type")
                .and_then(Value::as_array)
                .expect("classify() guarantees type is an array");
            let mut alts = Vec::with_capacity(alts_raw.len());
            let mut combined_outputs = Vec::new();
            for alt_raw in alts_raw {
                let alt_id = require_str(alt_raw, "id", Some(&id))?.to_string();
                let (alt_base, alt_body) = lower_struct_param(&alt_id, alt_raw, None, ids)?;
                combined_outputs.extend(alt_base.outputs.iter().cloned());
                alts.push(Param::new(alt_base, alt_body));
            }
            Param {
                base: ParamBase {
                    outputs: combined_outputs,
                    ..base
                },
                body: ParamBody::StructUnion { alts },
                list,
                nullable: is_optional,
                default_value: if is_optional {
                    DefaultValue::ExplicitNone
                } else {
                    DefaultValue::Unset
                },
                choices: None,
            }
        }
    };

    Ok(LoweredInput {
        param,
        flag,
        flag_separator,
    })
}

fn string_default(raw: &Value, is_optional: bool) -> DefaultValue<Literal> {
    match raw.get("default-value").and_then(Value::as_str) {
        Some(v) => DefaultValue::Literal(Literal::Str(v.to_string())),
        None if is_optional => DefaultValue::ExplicitNone,
        None => DefaultValue::Unset,
    }
}

fn int_default(raw: &Value, is_optional: bool) -> DefaultValue<Literal> {
    match raw.get("default-value").and_then(Value::as_i64) {
        Some(v) => DefaultValue::Literal(Literal::Int(v)),
        None if is_optional => DefaultValue::ExplicitNone,
        None => DefaultValue::Unset,
    }
}

fn float_default(raw: &Value, is_optional: bool) -> DefaultValue<Literal> {
    match raw.get("default-value").and_then(Value::as_f64) {
        Some(v) => DefaultValue::Literal(Literal::Float(v)),
        None if is_optional => DefaultValue::ExplicitNone,
        None => DefaultValue::Unset,
    }
}

fn string_choices(raw: &Value, id: &str) -> Result<Option<Choices>, FrontendError> {
    match raw.get("value-choices").and_then(Value::as_array) {
        None => Ok(None),
        Some(arr) => {
            let mut out = Vec::with_capacity(arr.len());
            for v in arr {
                let s = v
                    .as_str()
                    .ok_or_else(|| FrontendError::ChoicesTypeMismatch { id: id.to_string() })?;
                out.push(s.to_string());
            }
            Ok(Some(Choices::Strings(out)))
        }
    }
}

fn int_choices(raw: &Value, id: &str) -> Result<Option<Choices>, FrontendError> {
    match raw.get("value-choices").and_then(Value::as_array) {
        None => Ok(None),
        Some(arr) => {
            let mut out = Vec::with_capacity(arr.len());
            for v in arr {
                let i = v
                    .as_i64()
                    .ok_or_else(|| FrontendError::ChoicesTypeMismatch { id: id.to_string() })?;
                out.push(i);
            }
            Ok(Some(Choices::Ints(out)))
        }
    }
}
