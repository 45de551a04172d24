use crate::cli::support::{vault_with, vaultpick};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Error reporting and exit codes
// ============================================================================

#[test]
fn test_missing_vault_exit_code() {
    let dir = tempdir().unwrap();

    vaultpick()
        .current_dir(dir.path())
        .arg("status")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("vault not found"));
}

#[test]
fn test_missing_vault_json_error() {
    let dir = tempdir().unwrap();

    let output = vaultpick()
        .current_dir(dir.path())
        .args(["--format", "json", "status"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let error: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(error["error"]["type"], "vault_not_found");
    assert_eq!(error["error"]["code"], 3);
}

#[test]
fn test_unknown_command_json_error() {
    vaultpick()
        .args(["--format", "json", "shuffle"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("usage_error"));
}

#[test]
fn test_corrupt_state_is_data_error() {
    let dir = vault_with(&[("a.md", "")]);
    std::fs::write(dir.path().join(".vaultpick/state.json"), "{ not json").unwrap();

    vaultpick()
        .current_dir(dir.path())
        .arg("status")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid state file"));
}

#[test]
fn test_quiet_suppresses_error_text() {
    let dir = tempdir().unwrap();

    vaultpick()
        .current_dir(dir.path())
        .args(["--quiet", "status"])
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_verbose_logs_to_stderr() {
    let dir = vault_with(&[("a.md", "")]);

    vaultpick()
        .current_dir(dir.path())
        .args(["--verbose", "status"])
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG"));
}
