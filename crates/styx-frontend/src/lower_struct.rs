// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lowering of one struct scope (the root descriptor, a `SubCommand`'s
//! nested object, or one `SubCommandUnion` alternative) into a
//! [`ParamBase`]/[`ParamBody::Struct`] pair (spec §4.1 steps 2-6).
//!
//! A struct scope owns its own `command-line` template, `inputs`,
//! `output-files` and `groups` — each nested scope is lowered independently,
//! with its own [`IdGen`]-scoped id space but no visibility into an
//! enclosing scope's value-keys (Boutiques descriptors never reference a
//! parent's inputs from a nested command-line template).
//!
//! Command-line assembly deliberately simplifies the original's single
//! monolithic accumulator into one [`ConditionalGroup`] per destructured
//! template word (two, when a `command-line-flag` with no separator
//! requires a standalone preceding carg) so that each group's
//! `nullable_guards` precisely gates only the tokens that depend on it,
//! never the whole command line.

use std::collections::HashMap;

use serde_json::Value;
use styx_ir::{
    Carg, CargToken, ConditionalGroup, Documentation, IdGen, ParamBase, ParamBody, ParamId,
};

use crate::descriptor::{array, opt_str, require_str};
use crate::destructure::{destructure, Token};
use crate::error::FrontendError;
use crate::lower_input::{lower_input, LoweredInput};
use crate::lower_output::lower_outputs;
use crate::mutex_groups::lower_mutex_groups;
use crate::shell::split_command_line;

/// Lower one struct scope into a `(ParamBase, ParamBody::Struct)` pair.
///
/// `name` is the struct's own name: the outer input's id for a
/// `SubCommand`, the alternative's own id for a `SubCommandUnion` member, or
/// the package name for the descriptor root. `docs_source`, when given, is
/// the *outer input* element to read `name`/`description` from instead of
/// `scope` itself (a `SubCommand`'s human-facing docs live on the wrapping
/// input, not on its nested `type` object).
pub fn lower_struct_param(
    name: &str,
    scope: &Value,
    docs_source: Option<&Value>,
    ids: &mut IdGen,
) -> Result<(ParamBase, ParamBody), FrontendError> {
    let mut value_key_lookup: HashMap<String, ParamId> = HashMap::new();
    let mut id_lookup: HashMap<String, ParamId> = HashMap::new();
    let mut lowered_by_id: HashMap<ParamId, LoweredInput> = HashMap::new();
    let mut children = Vec::new();

    for raw_input in array(scope, "inputs") {
        let lowered = lower_input(raw_input, ids)?;
        let input_id = require_str(raw_input, "id", Some(name))?.to_string();
        let value_key = opt_str(raw_input, "value-key")
            .map(str::to_string)
            .unwrap_or_else(|| format!("[{}]", input_id.to_uppercase()));

        let param_id = lowered.param.base.id;
        value_key_lookup.insert(value_key, param_id);
        id_lookup.insert(input_id, param_id);
        lowered_by_id.insert(param_id, lowered.clone());
        children.push(lowered.param);
    }

    let groups = build_groups(scope, name, &value_key_lookup, &lowered_by_id)?;
    let mutex_groups = lower_mutex_groups(scope, &id_lookup)?;
    let outputs = lower_outputs(scope, &value_key_lookup, ids)?;

    let docs_from = docs_source.unwrap_or(scope);
    let docs = Documentation {
        title: opt_str(docs_from, "name").map(str::to_string),
        description: opt_str(docs_from, "description").map(str::to_string),
        ..Documentation::empty()
    };

    let base = ParamBase {
        id: ids.next(),
        name: name.to_string(),
        docs: Documentation::empty(),
        outputs,
    };
    let body = ParamBody::Struct {
        name: name.to_string(),
        groups,
        children,
        mutex_groups,
        docs,
    };
    Ok((base, body))
}

/// Destructure `scope["command-line"]` into [`ConditionalGroup`]s, one per
/// template word (two when a standalone `command-line-flag` precedes it).
fn build_groups(
    scope: &Value,
    name: &str,
    value_key_lookup: &HashMap<String, ParamId>,
    lowered_by_id: &HashMap<ParamId, LoweredInput>,
) -> Result<Vec<ConditionalGroup>, FrontendError> {
    let template = match scope.get("command-line") {
        None => {
            return Err(FrontendError::MissingField {
                field: "command-line".to_string(),
                context: Some(name.to_string()),
            })
        }
        Some(Value::Null) => return Err(FrontendError::NullCommandLine),
        Some(Value::String(s)) => s.as_str(),
        Some(_) => return Err(FrontendError::NullCommandLine),
    };

    let words = split_command_line(template)?;
    let mut groups = Vec::with_capacity(words.len());

    for word in &words {
        let tokens = destructure(word, value_key_lookup);
        let mut carg_tokens = Vec::new();
        let mut standalone_flag: Option<Carg> = None;

        for token in tokens {
            match token {
                Token::Literal(s) => carg_tokens.push(CargToken::Literal(s)),
                Token::Value(param_id) => {
                    let lowered = lowered_by_id
                        .get(&param_id)
                        .expect("value_key_lookup and lowered_by_id share every input id");
                    push_param_token(lowered, &mut carg_tokens, &mut standalone_flag);
                }
            }
        }

        if carg_tokens.is_empty() {
            continue;
        }
        let value_carg = Carg::new(carg_tokens);
        match standalone_flag {
            Some(flag_carg) => groups.push(ConditionalGroup::new(vec![flag_carg, value_carg])),
            None => groups.push(ConditionalGroup::new(vec![value_carg])),
        }
    }

    Ok(groups)
}

/// Apply one input's `command-line-flag`/`-separator` rules at the point it
/// is substituted into a template word, then push its `Param` token.
///
/// `Bool` bodies skip flag logic entirely — their flag text is already
/// baked into `value_true`/`value_false`. A declared separator concatenates
/// `flag` directly onto this word's own carg, immediately before the value.
/// A flag with no separator cannot share an argv word with its value, so it
/// becomes a standalone carg the caller prepends as its own group member.
fn push_param_token(
    lowered: &LoweredInput,
    carg_tokens: &mut Vec<CargToken>,
    standalone_flag: &mut Option<Carg>,
) {
    let is_bool = matches!(lowered.param.body, ParamBody::Bool { .. });
    if !is_bool {
        match (&lowered.flag, &lowered.flag_separator) {
            (Some(flag), Some(sep)) => {
                carg_tokens.push(CargToken::Literal(format!("{flag}{sep}")));
            }
            (Some(flag), None) => {
                *standalone_flag = Some(Carg::new(vec![CargToken::Literal(flag.clone())]));
            }
            (None, _) => {}
        }
    }
    carg_tokens.push(CargToken::Param(Box::new(lowered.param.clone())));
}
