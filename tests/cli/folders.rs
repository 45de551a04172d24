use crate::cli::support::{enabled_vault_with, read_state, run_json, vault_with, vaultpick};
use predicates::prelude::*;

// ============================================================================
// Folder exclusion tests
// ============================================================================

#[test]
fn test_exclude_and_list() {
    let dir = vault_with(&[("Archive/old.md", ""), ("Daily/today.md", "")]);

    vaultpick()
        .current_dir(dir.path())
        .args(["exclude", "Archive/"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Excluded: Archive"));

    vaultpick()
        .current_dir(dir.path())
        .arg("excluded")
        .assert()
        .success()
        .stdout(predicate::str::contains("Archive"));

    assert_eq!(read_state(dir.path())["excluded_folders"][0], "Archive");
}

#[test]
fn test_exclude_twice_is_unchanged() {
    let dir = vault_with(&[("Archive/old.md", "")]);

    let first = run_json(dir.path(), &["exclude", "Archive"]);
    assert_eq!(first["changed"], true);
    let second = run_json(dir.path(), &["exclude", "Archive"]);
    assert_eq!(second["changed"], false);
    assert_eq!(second["status"], "unchanged");

    let listed = run_json(dir.path(), &["excluded"]);
    assert_eq!(listed["count"], 1);
}

#[test]
fn test_exclude_missing_folder_fails() {
    let dir = vault_with(&[("a.md", "")]);

    vaultpick()
        .current_dir(dir.path())
        .args(["exclude", "Nowhere"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("folder not found"));
}

#[test]
fn test_exclude_vault_root_is_usage_error() {
    let dir = vault_with(&[("a.md", "")]);

    vaultpick()
        .current_dir(dir.path())
        .args(["exclude", "/"])
        .assert()
        .code(2);
}

#[test]
fn test_exclude_clears_queue() {
    let dir = enabled_vault_with(&[("Archive/x.md", ""), ("a.md", ""), ("b.md", "")]);

    run_json(dir.path(), &["random"]);
    assert_eq!(
        read_state(dir.path())["remaining_paths"]
            .as_array()
            .unwrap()
            .len(),
        2
    );

    run_json(dir.path(), &["exclude", "Archive"]);
    let state = read_state(dir.path());
    assert!(state["remaining_paths"].as_array().unwrap().is_empty());
}

#[test]
fn test_include_restores_folder() {
    let dir = vault_with(&[("Archive/old.md", "")]);

    run_json(dir.path(), &["exclude", "Archive"]);
    vaultpick()
        .current_dir(dir.path())
        .args(["include", "Archive"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Included: Archive"));

    let listed = run_json(dir.path(), &["excluded"]);
    assert_eq!(listed["count"], 0);
}

#[test]
fn test_include_unknown_folder_is_noop() {
    let dir = vault_with(&[("a.md", "")]);

    let value = run_json(dir.path(), &["include", "Gone/Folder"]);
    assert_eq!(value["changed"], false);
}

#[test]
fn test_check_reports_matching_rule() {
    let dir = vault_with(&[("Archive/x.md", ""), ("Archive2/x.md", "")]);

    run_json(dir.path(), &["exclude", "Archive"]);

    let excluded = run_json(dir.path(), &["check", "Archive/x.md"]);
    assert_eq!(excluded["eligible"], false);
    assert_eq!(excluded["excluded_by"], "Archive");
    assert_eq!(excluded["note"], true);

    let eligible = run_json(dir.path(), &["check", "Archive2/x.md"]);
    assert_eq!(eligible["eligible"], true);
    assert!(eligible["excluded_by"].is_null());

    vaultpick()
        .current_dir(dir.path())
        .args(["check", "Archive"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Archive: excluded by Archive"));
}

#[test]
fn test_exclude_non_breaking_space_folder() {
    let dir = enabled_vault_with(&[("Old\u{00A0}Notes/x.md", ""), ("keep.md", "")]);

    let value = run_json(dir.path(), &["exclude", "Old\u{00A0}Notes"]);
    assert_eq!(value["changed"], true);

    let status = run_json(dir.path(), &["status"]);
    assert_eq!(status["eligible"], 1);
}
