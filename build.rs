//! Exposes the commit the binary was built from as `EXPLORE_GIT_COMMIT`.
//!
//! Packaged builds without a checkout can set `EXPLORE_GIT_COMMIT` in the
//! build environment; otherwise it is read from git, or left as "unknown".

use std::env;
use std::process::Command;

const COMMIT_ENV: &str = "EXPLORE_GIT_COMMIT";

fn main() {
    println!("cargo:rerun-if-env-changed={}", COMMIT_ENV);
    println!("cargo:rerun-if-changed=.git/HEAD");

    let commit = env::var(COMMIT_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .or_else(head_commit)
        .unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env={}={}", COMMIT_ENV, commit.trim());
}

fn head_commit() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=10", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout).ok()
}
