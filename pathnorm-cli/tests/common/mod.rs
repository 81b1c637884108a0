//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with an isolated home directory
//! - Command builder helpers for common patterns
//! - Output helpers

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables the CLI reads; cleared for every test command.
const PATHNORM_VARS: [&str; 7] = [
    "PATHNORM_CONFIG",
    "PATHNORM_FLAVOR",
    "PATHNORM_SEPARATOR",
    "PATHNORM_CASE",
    "PATHNORM_KEEP_TRAILING_SEPARATOR",
    "PATHNORM_OUTPUT_FORMAT",
    "PATHNORM_LOG_MODE",
];

/// Test environment with an isolated home directory.
///
/// The home directory is empty unless a test writes a user config into it,
/// so the developer's own `~/.pathnorm/config.yaml` never leaks into tests.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary home directory
    pub home: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let home = temp_dir.path().to_path_buf();

        Self { temp_dir, home }
    }

    /// Get a command builder with a clean environment and no extra flags.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("pathnorm").expect("Failed to find pathnorm binary");
        cmd.env("HOME", &self.home).env("USERPROFILE", &self.home);
        for var in PATHNORM_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder pinned to Unix rules and separators.
    ///
    /// Results then do not depend on the host running the tests.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.args(["--flavor", "unix", "--separator", "unix"]);
        cmd
    }

    /// Get a command builder pinned to Windows rules and separators.
    pub fn windows_command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.args(["--flavor", "windows", "--separator", "windows"]);
        cmd
    }

    /// Get the home path.
    pub fn path(&self) -> &Path {
        &self.home
    }

    /// Write `~/.pathnorm/config.yaml` in the isolated home.
    pub fn write_user_config(&self, content: &str) -> PathBuf {
        let dir = self.home.join(".pathnorm");
        std::fs::create_dir_all(&dir).expect("Failed to create config directory");
        let path = dir.join("config.yaml");
        std::fs::write(&path, content).expect("Failed to write user config");
        path
    }

    /// Write a file under the temporary directory.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.home.join(name);
        std::fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Run a command and return its trimmed stdout, asserting success.
    pub fn stdout_of(&self, mut cmd: Command) -> String {
        let output = cmd.output().expect("Failed to run pathnorm");
        assert!(
            output.status.success(),
            "pathnorm failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .trim_end()
            .to_string()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse JSON output.
#[allow(dead_code)]
pub fn parse_json(output: &str) -> serde_json::Value {
    serde_json::from_str(output).expect("Output is not valid JSON")
}
