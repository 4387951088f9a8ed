// SPDX-License-Identifier: MIT OR Apache-2.0
//! Integration tests for the `styx` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn styx() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("styx").expect("binary `styx` should be built")
}

fn write_descriptor(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("dummy.json");
    fs::write(
        &path,
        r#"{
            "name": "dummy",
            "command-line": "dummy [X]",
            "inputs": [
                {"id": "x", "name": "X", "type": "String", "value-key": "[X]"}
            ]
        }"#,
    )
    .unwrap();
    path
}

#[test]
fn help_exits_zero_and_lists_compile_subcommand() {
    styx()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("compile"));
}

#[test]
fn version_shows_version_string() {
    styx()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn compile_writes_module_and_entry_file() {
    let dir = tempfile::tempdir().unwrap();
    let descriptor = write_descriptor(dir.path());
    let out_dir = dir.path().join("out");

    styx()
        .arg("compile")
        .arg("--descriptor")
        .arg(&descriptor)
        .arg("--lang")
        .arg("python")
        .arg("--out-dir")
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("wrote 2 module(s)"));

    let module_text = fs::read_to_string(out_dir.join("dummy.py")).unwrap();
    assert!(module_text.contains("def dummy("));
    assert!(fs::read_to_string(out_dir.join("__init__.py"))
        .unwrap()
        .contains("from .dummy import *"));
}

#[test]
fn compile_without_lang_or_config_fails_with_message() {
    let dir = tempfile::tempdir().unwrap();
    let descriptor = write_descriptor(dir.path());

    styx()
        .arg("compile")
        .arg("--descriptor")
        .arg(&descriptor)
        .arg("--out-dir")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no target language given"));
}

#[test]
fn compile_reads_languages_and_out_dir_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let descriptor = write_descriptor(dir.path());
    let out_dir = dir.path().join("configured_out");
    let config_path = dir.path().join("styx.toml");
    fs::write(
        &config_path,
        format!(
            "languages = [\"python\", \"r\"]\nout_dir = \"{}\"\n",
            out_dir.display()
        ),
    )
    .unwrap();

    styx()
        .arg("compile")
        .arg("--descriptor")
        .arg(&descriptor)
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("wrote 4 module(s)"));

    assert!(out_dir.join("dummy.py").exists());
    assert!(out_dir.join("dummy.R").exists() || out_dir.join("dummy.r").exists());
}

#[test]
fn compile_rejects_unknown_language() {
    let dir = tempfile::tempdir().unwrap();
    let descriptor = write_descriptor(dir.path());

    styx()
        .arg("compile")
        .arg("--descriptor")
        .arg(&descriptor)
        .arg("--lang")
        .arg("fortran")
        .arg("--out-dir")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown target language"));
}
