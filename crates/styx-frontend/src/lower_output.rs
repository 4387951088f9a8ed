// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lowering of Boutiques `output-files` entries (spec §4.1 step 6).

use std::collections::HashMap;

use serde_json::Value;
use styx_ir::{Documentation, IdGen, Output, OutputParamReference, OutputToken, ParamId};

use crate::descriptor::{array, opt_str, require_str, string_array};
use crate::destructure::{destructure, Token};
use crate::error::FrontendError;

/// Lower every entry of `scope["output-files"]` into an [`Output`],
/// destructuring each `path-template` against `value_key_lookup` the same
/// way the command-line template is destructured (spec §4.1 step 6 reuses
/// step 3's algorithm).
pub fn lower_outputs(
    scope: &Value,
    value_key_lookup: &HashMap<String, ParamId>,
    ids: &mut IdGen,
) -> Result<Vec<Output>, FrontendError> {
    let mut out = Vec::new();
    for bt_output in array(scope, "output-files") {
        let name = require_str(bt_output, "id", Some("output-files"))?.to_string();
        let path_template = require_str(bt_output, "path-template", Some(&name))?;
        let strip_suffixes = string_array(bt_output, "path-template-stripped-extensions");

        let tokens = destructure(path_template, value_key_lookup)
            .into_iter()
            .map(|t| match t {
                Token::Literal(s) => OutputToken::Literal(s),
                Token::Value(ref_id) => OutputToken::Ref(OutputParamReference {
                    ref_id,
                    file_remove_suffixes: strip_suffixes.clone(),
                }),
            })
            .collect();

        out.push(Output {
            id: ids.next(),
            name,
            docs: Documentation {
                title: opt_str(bt_output, "name").map(str::to_string),
                description: opt_str(bt_output, "description").map(str::to_string),
                ..Documentation::empty()
            },
            tokens,
        });
    }
    Ok(out)
}
