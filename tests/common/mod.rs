//! Shared testing utilities for mili-release CLI tests.

#![allow(dead_code)]

mod fake_tools;

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub use fake_tools::FakeTools;

/// Isolated home, tool home, project directory and fake tool binaries.
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    tools: FakeTools,
}

impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        let tools = FakeTools::install(&root.path().join("bin"), &root.path().join("tools.log"));
        Self { root, work_dir, tools }
    }

    /// Emulated `$HOME`.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// `$MILI_RELEASE_HOME` for every invocation.
    pub fn tool_home(&self) -> PathBuf {
        self.root.path().join(".mili-release")
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub fn tools(&self) -> &FakeTools {
        &self.tools
    }

    /// Build a command for the compiled binary, run inside the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("mili-release").expect("Failed to locate binary");
        cmd.current_dir(&self.work_dir)
            .env("HOME", self.home())
            .env("MILI_RELEASE_HOME", self.tool_home())
            .env("PATH", self.tools.path_env())
            .env_remove("SHOPIFY_CLI_THEME_TOKEN")
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.work_dir.join(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(path, content).expect("Failed to write test file");
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.work_dir.join(relative).exists()
    }

    pub fn write_settings(&self, content: &str) {
        fs::create_dir_all(self.tool_home()).expect("Failed to create tool home");
        fs::write(self.tool_home().join("config.toml"), content).expect("Failed to write settings");
    }

    pub fn write_credentials(&self, json: &str) {
        fs::create_dir_all(self.tool_home()).expect("Failed to create tool home");
        fs::write(self.tool_home().join("credentials.json"), json)
            .expect("Failed to write credentials");
    }

    pub fn credentials(&self) -> Option<String> {
        fs::read_to_string(self.tool_home().join("credentials.json")).ok()
    }
}
