//! Integration tests for error handling and exit codes.
//!
//! These tests verify that pathnorm handles errors correctly and returns
//! appropriate exit codes, including:
//! - Exit code 0: Success
//! - Exit code 1: Semantic failure (cannot normalize, comparison false)
//! - Exit code 4: Invalid arguments
//! - Exit code 6: Library error (path rejected)
//! - Exit code 7: Configuration error
//!
//! Each test documents the expected error scenario and verifies both the
//! exit code and error message quality.

mod common;

use common::TestEnv;
use predicates::prelude::*;

// ============================================================================
// Success Cases (Exit Code 0)
// ============================================================================

#[test]
fn test_success_exit_code() {
    let env = TestEnv::new();
    env.command().args(["normalize", "a/b"]).assert().code(0);
    env.command().args(["inspect", "a/b"]).assert().code(0);
    env.command().args(["extension", "a.b"]).assert().code(0);
    env.command()
        .args(["separators", "a/b", "--to", "unix"])
        .assert()
        .code(0);
}

// ============================================================================
// Semantic Failures (Exit Code 1)
// ============================================================================

#[test]
fn test_unnormalizable_path_exit_code() {
    let env = TestEnv::new();
    env.command()
        .args(["normalize", "/a/b/../../../c"])
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Error: cannot normalize"));
}

#[test]
fn test_invalid_prefix_is_semantic_failure() {
    let env = TestEnv::new();
    env.command().args(["normalize", "1:/a"]).assert().code(1);
}

#[test]
fn test_false_comparison_exit_code() {
    let env = TestEnv::new();
    env.command()
        .args(["matches", "a.txt", "*.md"])
        .assert()
        .code(1)
        .stdout("false\n")
        .stderr(predicate::str::contains("does not match"));
}

// ============================================================================
// Invalid Arguments (Exit Code 4)
// ============================================================================

#[test]
fn test_missing_argument_exit_code() {
    let env = TestEnv::new();
    env.command()
        .arg("concat")
        .arg("/only-base")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("ADD"));
}

#[test]
fn test_invalid_flavor_flag_exit_code() {
    let env = TestEnv::new();
    env.command_bare()
        .args(["--flavor", "vms", "normalize", "a"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("invalid flavor"));
}

#[test]
fn test_invalid_case_flag_exit_code() {
    let env = TestEnv::new();
    env.command()
        .args(["equals", "--case", "upper", "a", "A"])
        .assert()
        .code(4);
}

// ============================================================================
// Library Errors (Exit Code 6)
// ============================================================================

#[test]
fn test_stream_name_rejected_under_windows() {
    let env = TestEnv::new();
    env.windows_command()
        .args(["extension", "C:\\dir\\file.txt:hidden"])
        .assert()
        .code(6)
        .stderr(predicate::str::contains("NTFS alternate data stream"));
}

// ============================================================================
// Configuration Errors (Exit Code 7)
// ============================================================================

#[test]
fn test_missing_config_file() {
    let env = TestEnv::new();
    env.command()
        .arg("--config")
        .arg(env.path().join("missing.yaml"))
        .args(["normalize", "a"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_unknown_config_key() {
    let env = TestEnv::new();
    env.write_user_config("data_dir: /tmp\n");
    env.command()
        .args(["normalize", "a"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("data_dir"));
}

#[test]
fn test_invalid_env_value() {
    let env = TestEnv::new();
    env.command_bare()
        .env("PATHNORM_FLAVOR", "vms")
        .args(["normalize", "a"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("PATHNORM_FLAVOR"));
}

#[test]
fn test_invalid_env_boolean() {
    let env = TestEnv::new();
    env.command()
        .env("PATHNORM_KEEP_TRAILING_SEPARATOR", "sometimes")
        .args(["normalize", "a"])
        .assert()
        .code(7);
}
