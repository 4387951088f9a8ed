// SPDX-License-Identifier: MIT OR Apache-2.0
#![deny(unsafe_code)]
#![warn(missing_docs)]

//! # styx-frontend
//!
//! Lowers a Boutiques 0.5 tool descriptor (a raw [`serde_json::Value`]) into
//! a [`styx_ir::Interface`] (spec §4.1). This crate intentionally does not
//! validate against the Boutiques JSON Schema itself — callers that need
//! schema validation run it before handing the descriptor to [`compile`].

/// Numeric and list-length constraint collection.
pub mod constraints;
/// Raw-`Value` field accessors shared by every lowering step.
pub mod descriptor;
/// Template-string destructuring against a value-key lookup table.
pub mod destructure;
/// Frontend failure modes.
pub mod error;
/// Stable interface uid computation.
pub mod hash;
/// Per-input lowering into a [`styx_ir::Param`].
pub mod lower_input;
/// Output-file template lowering.
pub mod lower_output;
/// Struct-scope lowering (root descriptor, sub-commands, union alternatives).
pub mod lower_struct;
/// Boutiques `groups` lowering into [`styx_ir::MutexGroup`].
pub mod mutex_groups;
/// Boutiques `type` → IR body primitive classification.
pub mod primitive;
/// POSIX-ish shell word splitting for `command-line` templates.
pub mod shell;

use serde_json::Value;
use styx_ir::{Documentation, IdGen, Interface, Package, StreamCapture};

pub use error::FrontendError;

use crate::descriptor::{opt_str, require_str};
use crate::lower_struct::lower_struct_param;

/// Lower a raw Boutiques descriptor into an [`Interface`] (spec §4.1,
/// steps 1-7).
///
/// The descriptor's own top level is treated as the root struct scope: its
/// `command-line`, `inputs`, `output-files` and `groups` lower exactly as
/// any nested sub-command's would, and its `name` becomes both the
/// [`Package`] name and the root [`styx_ir::ParamBody::Struct`] name.
pub fn compile(descriptor: &Value) -> Result<Interface, FrontendError> {
    let name = require_str(descriptor, "name", None)?.to_string();
    let uid = hash::interface_uid(descriptor);

    let package = Package {
        name: name.clone(),
        version: opt_str(descriptor, "tool-version").map(str::to_string),
        container_image: container_image(descriptor),
        docs: Documentation {
            title: opt_str(descriptor, "name").map(str::to_string),
            description: opt_str(descriptor, "description").map(str::to_string),
            authors: opt_str(descriptor, "author")
                .map(|a| vec![a.to_string()])
                .unwrap_or_default(),
            literature: crate::descriptor::string_array(descriptor, "literature"),
            urls: opt_str(descriptor, "url")
                .map(|u| vec![u.to_string()])
                .unwrap_or_default(),
        },
    };

    let mut ids = IdGen::new();
    let (base, body) = lower_struct_param(&name, descriptor, None, &mut ids)?;
    let root = styx_ir::Param::new(base, body);

    let stdout = opt_str(descriptor, "stdout-output").map(|n| StreamCapture {
        name: n.to_string(),
    });
    let stderr = opt_str(descriptor, "stderr-output").map(|n| StreamCapture {
        name: n.to_string(),
    });

    Ok(Interface {
        uid,
        package,
        root,
        stdout,
        stderr,
    })
}

/// Extract `container-image.image`, if the descriptor declares a container.
fn container_image(descriptor: &Value) -> Option<String> {
    descriptor
        .get("container-image")
        .and_then(Value::as_object)
        .and_then(|c| c.get("image"))
        .and_then(Value::as_str)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal_descriptor() -> Value {
        json!({
            "name": "dummy",
            "tool-version": "1.0.0",
            "command-line": "dummy [X] [FLAG]",
            "inputs": [
                {
                    "id": "x",
                    "name": "X value",
                    "type": "String",
                    "value-key": "[X]",
                    "optional": false
                },
                {
                    "id": "flag",
                    "name": "A flag",
                    "type": "Flag",
                    "value-key": "[FLAG]",
                    "command-line-flag": "--flag",
                    "optional": true
                }
            ],
            "output-files": []
        })
    }

    #[test]
    fn compiles_a_minimal_descriptor() {
        let interface = compile(&minimal_descriptor()).unwrap();
        assert_eq!(interface.package.name, "dummy");
        assert_eq!(interface.package.version.as_deref(), Some("1.0.0"));
        assert_eq!(interface.root_name(), "dummy");
        assert!(interface.uid.ends_with(".boutiques"));
    }

    #[test]
    fn root_struct_has_two_children() {
        let interface = compile(&minimal_descriptor()).unwrap();
        assert_eq!(interface.root.struct_children().len(), 2);
    }

    #[test]
    fn missing_name_is_an_error() {
        let descriptor = json!({"command-line": "dummy"});
        assert!(matches!(
            compile(&descriptor),
            Err(FrontendError::MissingField { field, .. }) if field == "name"
        ));
    }

    #[test]
    fn null_command_line_is_an_error() {
        let descriptor = json!({"name": "dummy", "command-line": null});
        assert!(matches!(compile(&descriptor), Err(FrontendError::NullCommandLine)));
    }
}
