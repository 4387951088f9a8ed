// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end scenarios (spec §8/§9): one descriptor each, run through the
//! full `frontend -> normalize -> compile_interface` pipeline, asserted
//! against the generated Python source text. These check the emitted
//! *code's shape*, not its runtime behavior — nothing here ever invokes a
//! Rust or Python toolchain.

use serde_json::json;
use styx_provider::LanguageProvider;
use styx_provider_python::PythonLanguageProvider;
use styx_provider_r::RLanguageProvider;
use styx_provider_typescript::TypeScriptLanguageProvider;

fn compile_python(descriptor: &serde_json::Value) -> styx_compiler::Module {
    let mut interface = styx_frontend::compile(descriptor).expect("descriptor should lower");
    styx_normalize::normalize(&mut interface);
    styx_compiler::compile_interface(&interface, &PythonLanguageProvider).expect("should compile")
}

/// S1 — Positional string: a single `String` input spliced directly into
/// the command line produces one cargs push for the literal command name
/// and one for the param.
#[test]
fn s1_positional_string() {
    let descriptor = json!({
        "name": "dummy",
        "command-line": "dummy [X]",
        "inputs": [
            {"id": "x", "name": "X", "type": "String", "value-key": "[X]"}
        ]
    });
    let module = compile_python(&descriptor);
    assert!(module.text.contains("def cargs_dummy("));
    assert!(module.text.contains("cargs.append(\"dummy\")"));
    assert!(module.text.contains("cargs.append(params[\"x\"])"));
}

/// S2 — Flag: a `Flag` input emits its token only when true, nothing when
/// false (degenerate `Bool { value_true, value_false: [] }`).
#[test]
fn s2_flag() {
    let descriptor = json!({
        "name": "dummy",
        "command-line": "dummy [V]",
        "inputs": [
            {
                "id": "v",
                "name": "V",
                "type": "Flag",
                "value-key": "[V]",
                "command-line-flag": "-v",
                "optional": true
            }
        ]
    });
    let module = compile_python(&descriptor);
    assert!(module.text.contains("cargs.extend(([\"-v\"] if params[\"v\"] else []))"));
}

/// S3 — Range validation: an integer bounded `[5, 10]` rejects out-of-range
/// values with a descriptive error in `params_*`.
#[test]
fn s3_range_validation() {
    let descriptor = json!({
        "name": "dummy",
        "command-line": "dummy [X]",
        "inputs": [
            {
                "id": "x",
                "name": "X",
                "type": "Number",
                "integer": true,
                "value-key": "[X]",
                "minimum": 5,
                "maximum": 10
            }
        ]
    });
    let module = compile_python(&descriptor);
    assert!(module.text.contains("def params_dummy("));
    assert!(module.text.contains("x < 5"));
    assert!(module.text.contains("x > 10"));
    assert!(module.text.contains("is out of range"));
    assert!(module.text.contains("raise ValueError"));
}

/// S4 — List with joiner: a `list-separator` collapses the list into one
/// joined scalar token instead of one push per element.
#[test]
fn s4_list_with_joiner() {
    let descriptor = json!({
        "name": "dummy",
        "command-line": "dummy [Y]",
        "inputs": [
            {
                "id": "y",
                "name": "Y",
                "type": "String",
                "value-key": "[Y]",
                "list": true,
                "list-separator": " "
            }
        ]
    });
    let module = compile_python(&descriptor);
    assert!(module.text.contains("\" \".join(params[\"y\"])"));
    assert!(module.text.contains("cargs.append(\" \".join(params[\"y\"]))"));
}

/// S5 — Output template with stripped extensions: the `out` field strips
/// `.txt` from `x`'s basename before substitution.
#[test]
fn s5_output_template_stripped_extensions() {
    let descriptor = json!({
        "name": "dummy",
        "command-line": "dummy [X]",
        "inputs": [
            {"id": "x", "name": "X", "type": "File", "value-key": "[X]"}
        ],
        "output-files": [
            {
                "id": "out",
                "name": "Out",
                "path-template": "out-[X].png",
                "path-template-stripped-extensions": [".txt"]
            }
        ]
    });
    let module = compile_python(&descriptor);
    assert!(module.text.contains("def outputs_dummy("));
    assert!(module.text.contains("pathlib.Path("));
    assert!(module.text.contains(".removesuffix(\".txt\")"));
}

/// S6 — Mutually exclusive group: at most one of three optional numeric
/// inputs may be set.
#[test]
fn s6_mutually_exclusive_group() {
    let descriptor = json!({
        "name": "dummy",
        "command-line": "dummy [X] [Y] [Z]",
        "groups": [
            {"id": "xyz", "members": ["x", "y", "z"], "mutually-exclusive": true}
        ],
        "inputs": [
            {"id": "x", "name": "X", "type": "Number", "value-key": "[X]", "optional": true},
            {"id": "y", "name": "Y", "type": "Number", "value-key": "[Y]", "optional": true},
            {"id": "z", "name": "Z", "type": "Number", "value-key": "[Z]", "optional": true}
        ]
    });
    let module = compile_python(&descriptor);
    assert!(module.text.contains("at most one of x, y, z may be set"));
    assert!(!module.text.contains("is required")); // one_is_required was not set
}

/// S7 — Optional-before-required: when an optional child is declared
/// before a required one, `params_*`'s signature puts the required
/// argument first (defaulted args sort last), so the wrapper's call must
/// not rely on declaration-order positions. Python passes by keyword;
/// TypeScript must reorder its positional call to match.
#[test]
fn s7_optional_before_required_call_site_matches_signature() {
    let descriptor = json!({
        "name": "dummy",
        "command-line": "dummy [X] [Y]",
        "inputs": [
            {"id": "y", "name": "Y", "type": "String", "value-key": "[Y]", "optional": true},
            {"id": "x", "name": "X", "type": "String", "value-key": "[X]"}
        ]
    });
    let module = compile_python(&descriptor);
    assert!(module.text.contains("params_dummy(y=y, x=x)"));

    let mut interface = styx_frontend::compile(&descriptor).expect("descriptor should lower");
    styx_normalize::normalize(&mut interface);
    let ts_module =
        styx_compiler::compile_interface(&interface, &TypeScriptLanguageProvider).expect("should compile");
    assert!(ts_module.text.contains("function params_dummy("));
    let params_fn_start = ts_module.text.find("function params_dummy(").unwrap();
    let params_fn_body = &ts_module.text[params_fn_start..];
    let x_pos = params_fn_body.find("x:").unwrap();
    let y_pos = params_fn_body.find("y:").unwrap();
    assert!(x_pos < y_pos, "required x must precede optional y in the declaration");
    assert!(ts_module.text.contains("params_dummy(x, y)"));
}

/// Every target-language provider compiles the same normalized interface
/// without error — the driver logic is language-neutral even though these
/// assertions only inspect Python's output above.
#[test]
fn every_provider_compiles_the_same_interface() {
    let descriptor = json!({
        "name": "dummy",
        "command-line": "dummy [X]",
        "inputs": [
            {"id": "x", "name": "X", "type": "String", "value-key": "[X]"}
        ],
        "stdout-output": "log"
    });
    let mut interface = styx_frontend::compile(&descriptor).expect("descriptor should lower");
    styx_normalize::normalize(&mut interface);

    let providers: Vec<Box<dyn LanguageProvider>> = vec![
        Box::new(PythonLanguageProvider),
        Box::new(TypeScriptLanguageProvider),
        Box::new(RLanguageProvider),
    ];
    for provider in &providers {
        let module = styx_compiler::compile_interface(&interface, provider.as_ref()).expect("should compile");
        assert!(!module.text.is_empty());
        assert!(module.path[0].ends_with(provider.file_extension()));
    }
}
