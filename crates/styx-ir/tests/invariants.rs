// SPDX-License-Identifier: MIT OR Apache-2.0

use styx_ir::{
    interface::StreamCapture, Documentation, IdGen, Interface, Output, OutputParamReference,
    OutputToken, Package, Param, ParamBase, ParamBody,
};

fn sample_interface() -> Interface {
    let mut ids = IdGen::new();
    let x_id = ids.next();
    let x = Param::new(ParamBase::new(x_id, "x"), ParamBody::String);
    let out = Output {
        id: ids.next(),
        name: "out".into(),
        docs: Documentation::empty(),
        tokens: vec![
            OutputToken::Literal("out-".into()),
            OutputToken::Ref(OutputParamReference {
                ref_id: x_id,
                file_remove_suffixes: vec![".txt".into()],
            }),
        ],
    };
    let root_id = ids.next();
    let mut base = ParamBase::new(root_id, "dummy");
    base.outputs.push(out);
    let root = Param::new(
        base,
        ParamBody::Struct {
            name: "dummy".into(),
            groups: vec![],
            children: vec![x],
            mutex_groups: vec![],
            docs: Documentation::empty(),
        },
    );
    Interface {
        uid: "deadbeef.boutiques".into(),
        package: Package::new("dummy"),
        root,
        stdout: None,
        stderr: None,
    }
}

#[test]
fn well_formed_interface_passes_validation() {
    let iface = sample_interface();
    styx_ir::invariant::validate(&iface).expect("sample interface should be valid");
    styx_ir::invariant::validate_normalized_names(&iface)
        .expect("sample interface has no name collisions");
}

#[test]
fn dangling_output_reference_is_rejected() {
    let mut iface = sample_interface();
    if let ParamBody::Struct { children, .. } = &mut iface.root.body {
        children.clear();
    }
    let err = styx_ir::invariant::validate(&iface).unwrap_err();
    assert!(matches!(
        err,
        styx_ir::IrError::DanglingOutputReference { .. }
    ));
}

#[test]
fn stream_capture_round_trips_through_serde() {
    let mut iface = sample_interface();
    iface.stdout = Some(StreamCapture {
        name: "log".into(),
    });
    let json = serde_json::to_string(&iface).unwrap();
    let back: Interface = serde_json::from_str(&json).unwrap();
    assert_eq!(back.stdout.unwrap().name, "log");
}
