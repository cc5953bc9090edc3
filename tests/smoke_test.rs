//! Smoke tests for the explore-host CLI.
//!
//! These tests verify basic CLI functionality:
//! - `explore-host --version` outputs version info
//! - `explore-host --help` outputs help text
//! - `explore-host scripts` outputs valid JSON

mod common;

use common::{TestEnv, stdout_json};
use predicates::prelude::*;

#[test]
fn test_version_flag() {
    TestEnv::new()
        .cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("explore-host"))
        .stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_help_flag() {
    TestEnv::new()
        .cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("build"));
}

#[test]
fn test_no_subcommand_fails() {
    TestEnv::new()
        .cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_invalid_command() {
    TestEnv::new()
        .cmd()
        .arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_scripts_json() {
    let output = TestEnv::new().cmd().arg("scripts").output().unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let scripts = json["scripts"].as_array().unwrap();
    assert_eq!(scripts.len(), 2);
    assert_eq!(scripts[0]["src"], "wasm/explore.js");
    assert_eq!(scripts[0]["type"], "text/javascript");
    assert_eq!(scripts[1]["src"], "wasm/binding.js");
    assert_eq!(scripts[1]["type"], "text/javascript");
}

#[test]
fn test_scripts_human() {
    TestEnv::new()
        .cmd()
        .args(["scripts", "-H"])
        .assert()
        .success()
        .stdout("1. wasm/explore.js (text/javascript)\n2. wasm/binding.js (text/javascript)\n");
}

#[test]
fn test_scripts_identical_across_invocations() {
    let env = TestEnv::new();
    let first = env.cmd().arg("scripts").output().unwrap();
    let second = env.cmd().arg("scripts").output().unwrap();
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_missing_project_path() {
    TestEnv::new()
        .cmd()
        .args(["pages", "-C", "/definitely/not/here"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_project_path_from_env() {
    let project = TestEnv::with_config(
        r#"
[[pages]]
path = "only.html"
title = "Only"
"#,
    );
    let elsewhere = TestEnv::new();

    elsewhere
        .cmd()
        .env("EXPLORE_PROJECT", project.path())
        .args(["pages", "-H"])
        .assert()
        .success()
        .stdout(predicate::str::contains("only.html"));
}
