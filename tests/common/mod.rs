//! Shared testing utilities for strap CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Directory the CLI runs in; packages are generated below it.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `strap` binary within the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("strap").expect("Failed to locate strap binary");
        cmd.current_dir(self.work_dir())
            .env("HOME", self.root.path())
            .env_remove("STRAP_CONFIG")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Write a config file next to the work directory and return its path.
    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.root.path().join("strap.toml");
        fs::write(&path, content).expect("Failed to write config");
        path
    }

    /// Path of a generated package folder.
    pub fn package_dir(&self, folder: &str) -> PathBuf {
        self.work_dir.join(folder)
    }
}
