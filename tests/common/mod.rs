//! Common test utilities for explore-host integration tests.
//!
//! Provides `TestEnv`, a throwaway project directory plus a command builder
//! that ignores any `EXPLORE_*` variables set in the caller's environment.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
pub use tempfile::TempDir;

/// Environment variables the CLI reads; cleared for every test command.
const EXPLORE_ENV_VARS: &[&str] = &[
    "EXPLORE_PROJECT",
    "EXPLORE_CONFIG",
    "EXPLORE_OUT_DIR",
    "EXPLORE_WASM_DIR",
    "EXPLORE_PORT",
    "EXPLORE_HOST",
    "EXPLORE_LOG",
];

/// An isolated project directory.
pub struct TestEnv {
    pub project_dir: TempDir,
}

impl TestEnv {
    /// Create an empty project directory.
    pub fn new() -> Self {
        Self {
            project_dir: TempDir::new().unwrap(),
        }
    }

    /// Create a project directory containing `explore.toml` with `config`.
    pub fn with_config(config: &str) -> Self {
        let env = Self::new();
        env.write("explore.toml", config);
        env
    }

    /// Get a Command for the explore-host binary running in the project directory.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_explore-host"));
        cmd.current_dir(self.project_dir.path());
        for var in EXPLORE_ENV_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get the project directory path.
    pub fn path(&self) -> &Path {
        self.project_dir.path()
    }

    /// Write a file relative to the project directory, creating parents.
    pub fn write(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    /// Lay out a fake wasm build (loader, glue, binary) under `relative`.
    pub fn fake_wasm_build(&self, relative: &str) -> PathBuf {
        self.write(&format!("{}/explore.js", relative), "// loader");
        self.write(&format!("{}/binding.js", relative), "// glue");
        self.write(&format!("{}/explore_bg.wasm", relative), "\0asm");
        self.path().join(relative)
    }

    /// Read a file relative to the project directory.
    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path().join(relative)).unwrap()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse stdout of a successful command as JSON.
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}
