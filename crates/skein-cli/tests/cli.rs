//! End-to-end tests for the `skein` binary.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn skein(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_skein"));
    cmd.current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("SKEIN_INPUT")
        .env_remove("SKEIN_OUTPUT__FILE")
        .env_remove("SKEIN_OUTPUT__FORMAT")
        .env_remove("SKEIN_OUTPUT__NAME")
        .env_remove("SKEIN_OUTPUT__SOURCEMAP");
    cmd
}

fn write_entry(dir: &Path) {
    fs::create_dir_all(dir.join("dist")).unwrap();
    fs::write(dir.join("dist/Delta.js"), "module.exports = {};\n").unwrap();
}

#[test]
fn init_then_check_reference_project() {
    let temp = TempDir::new().unwrap();
    write_entry(temp.path());

    skein(temp.path()).arg("init").assert().success();
    assert!(temp.path().join("skein.toml").is_file());

    skein(temp.path())
        .arg("check")
        .assert()
        .success()
        .stderr(predicate::str::contains("commonjs -> node-resolve"));
}

#[test]
fn check_fails_for_missing_entry() {
    let temp = TempDir::new().unwrap();
    skein(temp.path()).arg("init").assert().success();

    skein(temp.path())
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("dist/Delta.js"));

    skein(temp.path())
        .args(["check", "--schema-only"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Skipped the entry check"));
}

#[test]
fn check_fails_for_amd_without_name() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("skein.config.json"),
        r#"{
  "input": "dist/Delta.js",
  "output": { "file": "delta-rollup.js", "format": "amd" }
}"#,
    )
    .unwrap();

    skein(temp.path())
        .args(["check", "--schema-only"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("output.name"));
}

#[test]
fn check_without_config_fails() {
    let temp = TempDir::new().unwrap();
    skein(temp.path()).arg("check").assert().failure();
}

#[test]
fn environment_overrides_apply_unless_disabled() {
    let temp = TempDir::new().unwrap();
    skein(temp.path()).arg("init").assert().success();

    skein(temp.path())
        .args(["print", "--as", "json"])
        .env("SKEIN_OUTPUT__FILE", "out/delta.js")
        .assert()
        .success()
        .stdout(predicate::str::contains("out/delta.js"));

    skein(temp.path())
        .args(["print", "--as", "json", "--no-env"])
        .env("SKEIN_OUTPUT__FILE", "out/delta.js")
        .assert()
        .success()
        .stdout(predicate::str::contains("delta-rollup.js"));
}

#[test]
fn print_json_reports_reference_values() {
    let temp = TempDir::new().unwrap();
    skein(temp.path()).arg("init").assert().success();

    let output = skein(temp.path())
        .args(["print", "--as", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["output"]["name"], "quill-delta");
    assert_eq!(value["output"]["format"], "amd");
    assert_eq!(value["output"]["sourcemap"], "inline");
    assert_eq!(value["plugins"], serde_json::json!(["commonjs", "node-resolve"]));
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let temp = TempDir::new().unwrap();
    skein(temp.path()).arg("init").assert().success();

    skein(temp.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    skein(temp.path())
        .args(["init", "--force", "--format", "es", "--no-name"])
        .assert()
        .success();
}

#[test]
fn package_json_field_is_discovered() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("package.json"),
        r#"{
  "name": "quill-delta",
  "skein": {
    "input": "dist/Delta.js",
    "output": { "file": "delta-rollup.js", "format": "iife", "name": "Quill.Delta" },
    "plugins": ["nodeResolve"]
  }
}"#,
    )
    .unwrap();

    skein(temp.path())
        .args(["print", "--as", "toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("node-resolve"))
        .stdout(predicate::str::contains("Quill.Delta"));
}

#[test]
fn schema_is_json() {
    let temp = TempDir::new().unwrap();
    let output = skein(temp.path()).arg("schema").output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(value["properties"]["plugins"].is_object());
}

#[test]
fn print_keeps_globals_order_and_string_overrides() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("skein.toml"),
        r#"
input = "dist/Delta.js"

[output]
file = "delta.umd.js"
format = "umd"
name = "Delta"

[output.globals]
"lodash.debounce" = "debounce"
"@scope/pkg" = "Pkg"
"#,
    )
    .unwrap();

    let output = skein(temp.path())
        .args(["print", "--as", "json"])
        .env("SKEIN_OUTPUT__NAME", "2024")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["output"]["name"], "2024");
    let keys: Vec<_> = value["output"]["globals"]
        .as_object()
        .unwrap()
        .keys()
        .cloned()
        .collect();
    assert_eq!(keys, vec!["lodash.debounce", "@scope/pkg"]);
}
