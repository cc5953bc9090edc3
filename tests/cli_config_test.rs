//! Integration tests for `explore-host config show` and config file handling.

mod common;

use common::{TestEnv, stdout_json};
use predicates::prelude::*;

#[test]
fn test_config_show_defaults() {
    let env = TestEnv::new();
    let output = env.cmd().args(["config", "show"]).output().unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["config_file"], serde_json::Value::Null);
    assert_eq!(json["out_dir"]["source"], "default");
    assert_eq!(json["wasm_dir"], serde_json::Value::Null);
    assert_eq!(json["pages"]["source"], "default");
}

#[test]
fn test_config_show_file_values() {
    let env = TestEnv::with_config("out_dir = \"dist\"\nwasm_dir = \"pkg\"\n");
    let output = env.cmd().args(["config", "show"]).output().unwrap();
    let json = stdout_json(&output);

    assert_eq!(json["out_dir"]["source"], "config");
    assert!(json["out_dir"]["value"].as_str().unwrap().ends_with("dist"));
    assert_eq!(json["wasm_dir"]["source"], "config");
}

#[test]
fn test_config_show_env_source() {
    let env = TestEnv::with_config("out_dir = \"dist\"\n");
    let output = env
        .cmd()
        .args(["config", "show"])
        .env("EXPLORE_OUT_DIR", "from-env")
        .env("EXPLORE_WASM_DIR", "wasm-env")
        .output()
        .unwrap();
    let json = stdout_json(&output);

    assert_eq!(json["out_dir"]["source"], "env:EXPLORE_OUT_DIR");
    assert_eq!(json["wasm_dir"]["source"], "env:EXPLORE_WASM_DIR");
}

#[test]
fn test_config_show_human() {
    TestEnv::new()
        .cmd()
        .args(["config", "show", "-H"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config file: (none)"))
        .stdout(predicate::str::contains("pages: index.html, home.html [default]"));
}

#[test]
fn test_explicit_config_flag() {
    let env = TestEnv::new();
    let path = env.write(
        "configs/site.toml",
        r#"
[[pages]]
path = "alt.html"
title = "Alt"
"#,
    );

    env.cmd()
        .args(["pages", "-H", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("alt.html"));
}

#[test]
fn test_config_from_env_var() {
    let env = TestEnv::new();
    let path = env.write("site.toml", "[[pages]]\npath = \"env.html\"\ntitle = \"Env\"\n");

    env.cmd()
        .args(["pages", "-H"])
        .env("EXPLORE_CONFIG", &path)
        .assert()
        .success()
        .stdout(predicate::str::contains("env.html"));
}

#[test]
fn test_missing_config_flag_file() {
    TestEnv::new()
        .cmd()
        .args(["pages", "--config", "nope.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn test_unknown_config_key() {
    TestEnv::with_config("output = \"dist\"\n")
        .cmd()
        .arg("pages")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config parse error"));
}

#[test]
fn test_duplicate_page_paths() {
    TestEnv::with_config(
        r#"
[[pages]]
path = "index.html"
title = "One"

[[pages]]
path = "index.html"
title = "Two"
"#,
    )
    .cmd()
    .arg("pages")
    .assert()
    .failure()
    .stderr(predicate::str::contains("duplicate page path"));
}
