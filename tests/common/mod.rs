//! Shared testing utilities for projlayout CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const MANAGED_DIRS: [&str; 4] = ["data", "plots", "images", "scripts"];

/// Testing harness providing an isolated environment for CLI exercises.
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
        let work_dir = fs::canonicalize(&work_dir).expect("Failed to canonicalize work directory");

        Self { root, work_dir }
    }

    /// Canonical path of the directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled binary within the work directory.
    pub fn cli(&self) -> Command {
        self.cli_in(self.work_dir())
    }

    /// Build a command for invoking the compiled binary within a custom directory.
    pub fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("projlayout").expect("Failed to locate projlayout binary");
        cmd.current_dir(dir.as_ref());
        cmd
    }

    /// Write a file relative to the work directory, creating parents.
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Write `projlayout.toml` into the work directory.
    pub fn write_config(&self, content: &str) {
        self.write_file("projlayout.toml", content);
    }

    /// Assert that every managed directory exists under `base`.
    pub fn assert_layout_exists(&self, base: &Path) {
        for name in MANAGED_DIRS {
            let dir = base.join(name);
            assert!(dir.is_dir(), "{} should exist", dir.display());
        }
    }

    /// Assert that no managed directory exists under `base`.
    pub fn assert_layout_absent(&self, base: &Path) {
        for name in MANAGED_DIRS {
            let dir = base.join(name);
            assert!(!dir.exists(), "{} should not exist", dir.display());
        }
    }
}
