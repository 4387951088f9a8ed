// SPDX-License-Identifier: MIT OR Apache-2.0

use serde_json::json;
use styx_ir::{ParamBody, ParamId};

fn resolve<'a>(children: &'a [styx_ir::Param], id: ParamId) -> Option<&'a styx_ir::Param> {
    children.iter().find(|p| p.base.id == id)
}

#[test]
fn lowers_nested_subcommand_with_group_and_list_input() {
    let descriptor = json!({
        "name": "toolbox",
        "command-line": "toolbox [MODE] [FILES] --threshold=[THRESH]",
        "groups": [
            {
                "id": "mode_group",
                "members": ["mode"],
                "mutually-exclusive": true
            }
        ],
        "inputs": [
            {
                "id": "mode",
                "name": "Mode",
                "type": {
                    "command-line": "run --fast [VERBOSE]",
                    "inputs": [
                        {
                            "id": "verbose",
                            "type": "Flag",
                            "value-key": "[VERBOSE]",
                            "command-line-flag": "--verbose",
                            "optional": true
                        }
                    ]
                },
                "value-key": "[MODE]"
            },
            {
                "id": "files",
                "name": "Input files",
                "type": "File",
                "value-key": "[FILES]",
                "list": true,
                "min-list-entries": 1
            },
            {
                "id": "thresh",
                "name": "Threshold",
                "type": "Number",
                "integer": true,
                "value-key": "[THRESH]",
                "minimum": 0,
                "maximum": 100,
                "exclusive-maximum": true,
                "optional": true
            }
        ],
        "output-files": [
            {
                "id": "result",
                "name": "Result",
                "path-template": "[FILES].out"
            }
        ]
    });

    let interface = styx_frontend::compile(&descriptor).expect("descriptor should lower");
    let children = interface.root.struct_children();
    assert_eq!(children.len(), 3);

    let mode = children.iter().find(|p| p.base.name == "mode").unwrap();
    match &mode.body {
        ParamBody::Struct {
            name, children, ..
        } => {
            assert_eq!(name, "mode");
            assert_eq!(children.len(), 1);
            assert_eq!(children[0].base.name, "verbose");
        }
        other => panic!("expected a Struct body, got {other:?}"),
    }

    let files = children.iter().find(|p| p.base.name == "files").unwrap();
    assert!(files.is_list());
    assert_eq!(files.list.unwrap().min_entries, Some(1));

    let thresh = children.iter().find(|p| p.base.name == "thresh").unwrap();
    match &thresh.body {
        ParamBody::Int { min, max } => {
            assert_eq!(*min, Some(0));
            assert_eq!(*max, Some(99));
        }
        other => panic!("expected an Int body, got {other:?}"),
    }
    assert!(thresh.nullable);

    match &interface.root.body {
        ParamBody::Struct { mutex_groups, .. } => {
            assert_eq!(mutex_groups.len(), 1);
            assert!(mutex_groups[0].mutually_exclusive);
            assert_eq!(mutex_groups[0].members, vec![mode.base.id]);
        }
        other => panic!("expected root Struct body, got {other:?}"),
    }

    assert_eq!(interface.root.base.outputs.len(), 1);
    let output = &interface.root.base.outputs[0];
    assert_eq!(output.name, "result");
    let ref_id = output.ref_ids().next().unwrap();
    assert!(resolve(children, ref_id).is_some());
}

#[test]
fn union_alternatives_each_get_their_own_struct() {
    let descriptor = json!({
        "name": "toolbox",
        "command-line": "toolbox [BACKEND]",
        "inputs": [
            {
                "id": "backend",
                "value-key": "[BACKEND]",
                "type": [
                    {
                        "id": "cpu",
                        "command-line": "cpu",
                        "inputs": []
                    },
                    {
                        "id": "gpu",
                        "command-line": "gpu --device [DEVICE]",
                        "inputs": [
                            {"id": "device", "type": "String", "value-key": "[DEVICE]"}
                        ]
                    }
                ]
            }
        ]
    });

    let interface = styx_frontend::compile(&descriptor).expect("descriptor should lower");
    let backend = interface
        .root
        .struct_children()
        .iter()
        .find(|p| p.base.name == "backend")
        .unwrap();
    match &backend.body {
        ParamBody::StructUnion { alts } => {
            assert_eq!(alts.len(), 2);
            assert_eq!(alts[0].body.struct_name(), Some("cpu"));
            assert_eq!(alts[1].body.struct_name(), Some("gpu"));
        }
        other => panic!("expected a StructUnion body, got {other:?}"),
    }
}
