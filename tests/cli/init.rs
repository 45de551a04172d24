use crate::cli::support::vaultpick;
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Init command tests
// ============================================================================

#[test]
fn test_init_creates_config() {
    let dir = tempdir().unwrap();

    vaultpick()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized vaultpick"));

    let config = std::fs::read_to_string(dir.path().join(".vaultpick/config.toml")).unwrap();
    assert!(config.contains("extensions"));
}

#[test]
fn test_init_idempotent() {
    let dir = tempdir().unwrap();

    vaultpick()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    std::fs::write(
        dir.path().join(".vaultpick/config.toml"),
        "editor = \"nano\"\n",
    )
    .unwrap();

    vaultpick()
        .current_dir(dir.path())
        .args(["--format", "json", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"exists\""));

    let config = std::fs::read_to_string(dir.path().join(".vaultpick/config.toml")).unwrap();
    assert_eq!(config, "editor = \"nano\"\n");
}

#[test]
fn test_init_with_vault_flag() {
    let dir = tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("notes")).unwrap();

    vaultpick()
        .current_dir(dir.path())
        .args(["--vault", "notes", "init"])
        .assert()
        .success();

    assert!(dir.path().join("notes/.vaultpick/config.toml").exists());
    assert!(!dir.path().join(".vaultpick").exists());
}

#[test]
fn test_no_command_prints_version() {
    vaultpick()
        .assert()
        .success()
        .stdout(predicate::str::contains("vaultpick"))
        .stdout(predicate::str::contains("--help"));
}
