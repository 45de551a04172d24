use crate::cli::support::{enabled_vault_with, run_json, vault_with, vaultpick};
use predicates::prelude::*;

// ============================================================================
// Status command tests
// ============================================================================

#[test]
fn test_status_fresh_vault() {
    let dir = vault_with(&[("a.md", ""), ("b.md", "")]);

    vaultpick()
        .current_dir(dir.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Inspector: off"))
        .stdout(predicate::str::contains("Eligible:  2 notes"));
}

#[test]
fn test_status_after_draw() {
    let dir = enabled_vault_with(&[("Archive/x.md", ""), ("a.md", ""), ("b.md", "")]);
    run_json(dir.path(), &["exclude", "Archive"]);
    let drawn = run_json(dir.path(), &["random"]);

    let status = run_json(dir.path(), &["status"]);
    assert_eq!(status["enabled"], true);
    assert_eq!(status["current"], drawn["note"]["path"]);
    assert_eq!(status["remaining"], 1);
    assert_eq!(status["eligible"], 2);
    assert_eq!(status["excluded"][0], "Archive");
    assert!(status["cycle_started_at"].is_string());
}

#[test]
fn test_status_records() {
    let dir = vault_with(&[("a.md", "")]);

    vaultpick()
        .current_dir(dir.path())
        .args(["--format", "records", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=status"))
        .stdout(predicate::str::contains("enabled=false"));
}

#[test]
fn test_obsidian_vault_is_discovered_from_subfolder() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join(".obsidian")).unwrap();
    std::fs::create_dir_all(dir.path().join("Daily")).unwrap();
    std::fs::write(dir.path().join("Daily/today.md"), "").unwrap();

    let status = run_json(&dir.path().join("Daily"), &["status"]);
    assert_eq!(status["eligible"], 1);
}
