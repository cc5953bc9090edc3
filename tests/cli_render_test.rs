//! Integration tests for `explore-host render` and `explore-host pages`.
//!
//! Rendering must always produce exactly one 640x480 canvas with id `canvas`
//! and declare the loader script before the glue script.

mod common;

use common::{TestEnv, stdout_json};
use predicates::prelude::*;

const CANVAS: &str = r#"<canvas id="canvas" width="640" height="480""#;
const LOADER: &str = r#"<script src="wasm/explore.js" type="text/javascript"></script>"#;
const GLUE: &str = r#"<script src="wasm/binding.js" type="text/javascript"></script>"#;

fn render_html(env: &TestEnv, page: &str) -> String {
    let output = env.cmd().args(["render", page, "-H"]).output().unwrap();
    assert!(
        output.status.success(),
        "render failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

// === Host page variants ===

#[test]
fn test_render_explore_page() {
    let html = render_html(&TestEnv::new(), "index.html");

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Explore</title>"));
    assert_eq!(html.matches(r#"id="canvas""#).count(), 1);
    assert!(html.contains(CANVAS));
    assert_eq!(html.matches("<li").count(), 3);
    for action in ["Pick up item", "Drop item", "Open inventory"] {
        assert!(html.contains(&format!("<span>{}</span>", action)), "{}", action);
    }
}

#[test]
fn test_render_home_page() {
    let html = render_html(&TestEnv::new(), "home.html");

    assert!(html.contains("<title>Home Page</title>"));
    assert_eq!(html.matches(r#"id="canvas""#).count(), 1);
    assert!(html.contains(CANVAS));
    assert!(!html.contains("<ul"));
    assert!(!html.contains("<p"));
}

#[test]
fn test_render_defaults_to_index() {
    TestEnv::new()
        .cmd()
        .args(["render", "-H"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<title>Explore</title>"));
}

#[test]
fn test_render_by_route() {
    let html = render_html(&TestEnv::new(), "/");
    assert!(html.contains("<title>Explore</title>"));
}

#[test]
fn test_scripts_after_page_in_order() {
    for page in ["index.html", "home.html"] {
        let html = render_html(&TestEnv::new(), page);
        let main_end = html.find("</main>").unwrap();
        let loader = html.find(LOADER).unwrap();
        let glue = html.find(GLUE).unwrap();
        assert!(main_end < loader, "{}", page);
        assert!(loader < glue, "{}", page);
        assert_eq!(html.matches("<script").count(), 2, "{}", page);
    }
}

#[test]
fn test_render_is_deterministic() {
    let env = TestEnv::new();
    assert_eq!(render_html(&env, "index.html"), render_html(&env, "index.html"));
}

#[test]
fn test_render_json() {
    let output = TestEnv::new().cmd().args(["render", "home.html"]).output().unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["path"], "home.html");
    assert_eq!(json["title"], "Home Page");
    assert!(json["html"].as_str().unwrap().contains(CANVAS));
}

#[test]
fn test_render_unknown_page() {
    TestEnv::new()
        .cmd()
        .args(["render", "missing.html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(r#""error""#))
        .stderr(predicate::str::contains("Page not found: missing.html"));
}

#[test]
fn test_render_unknown_page_human() {
    TestEnv::new()
        .cmd()
        .args(["render", "missing.html", "-H"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error: Page not found"));
}

// === Configured pages ===

#[test]
fn test_render_configured_page() {
    let env = TestEnv::with_config(
        r#"
[[pages]]
path = "play.html"
title = "Caves & Dragons"
show_instructions = true
"#,
    );
    let html = render_html(&env, "/play.html");
    assert!(html.contains("<title>Caves &amp; Dragons</title>"));
    assert!(html.contains("Welcome to Explore, traveller!"));
    assert!(html.contains(CANVAS));
}

#[test]
fn test_render_rejects_page_in_subdirectory() {
    TestEnv::with_config(
        r#"
[[pages]]
path = "play/index.html"
title = "Play"
"#,
    )
    .cmd()
    .args(["render", "/play/"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("file name at the site root"));
}

#[test]
fn test_pages_lists_defaults() {
    let output = TestEnv::new().cmd().arg("pages").output().unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["count"], 2);
    assert_eq!(json["pages"][0]["path"], "index.html");
    assert_eq!(json["pages"][0]["route"], "/");
    assert_eq!(json["pages"][0]["show_instructions"], true);
    assert_eq!(json["pages"][1]["path"], "home.html");
    assert_eq!(json["pages"][1]["show_instructions"], false);
}

#[test]
fn test_pages_human() {
    TestEnv::new()
        .cmd()
        .args(["pages", "-H"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 page(s):"))
        .stdout(predicate::str::contains(r#"/ -> index.html "Explore" (instructions)"#))
        .stdout(predicate::str::contains(
            r#"/home.html -> home.html "Home Page" (canvas only)"#,
        ));
}
