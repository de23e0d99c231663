//! Common test utilities for CLI testing.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::{tempdir, TempDir};

/// A freshly generated project skeleton and an empty search path.
pub struct TestContext {
    pub temp_dir: TempDir,
    pub project_dir: PathBuf,
    empty_path: PathBuf,
}

impl TestContext {
    pub fn new() -> Self {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path().join("ops-guide");
        let empty_path = temp_dir.path().join("bin");
        fs::create_dir_all(project_dir.join("tools")).expect("Failed to create tools dir");
        fs::create_dir_all(project_dir.join("chapters")).expect("Failed to create chapters dir");
        fs::create_dir_all(&empty_path).expect("Failed to create bin dir");

        Self {
            temp_dir,
            project_dir,
            empty_path,
        }
    }

    /// Add the empty placeholder files the template renders.
    pub fn with_placeholders(self) -> Self {
        self.write("tools/check_grammar.py", "");
        self.write("chapters/introduction.org", "");
        self
    }

    /// Put an executable shell script called `name` on the search path.
    #[cfg(unix)]
    pub fn with_tool_script(self, name: &str, body: &str) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let path = self.empty_path.join(name);
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("Failed to write script");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to make script executable");
        self
    }

    /// Write a file relative to the project directory.
    pub fn write(&self, relative: &str, contents: &str) {
        fs::write(self.project_dir.join(relative), contents).expect("Failed to write file");
    }

    pub fn path(&self) -> &Path {
        &self.project_dir
    }

    /// A command that sees no external tools at all.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("doctool").expect("Binary not found");
        cmd.current_dir(self.temp_dir.path())
            .env("PATH", &self.empty_path)
            .env("NO_COLOR", "1")
            .env("LANG", "C.UTF-8")
            .env("TERM", "xterm")
            .env_remove("DOCTOOL_ANSWERS");
        cmd
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
