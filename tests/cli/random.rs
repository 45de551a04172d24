use crate::cli::support::{enabled_vault_with, read_state, run_json, vault_with, vaultpick};
use predicates::prelude::*;
use std::collections::BTreeSet;

// ============================================================================
// Random draw tests
// ============================================================================

fn drawn_path(value: &serde_json::Value) -> String {
    value["note"]["path"].as_str().unwrap().to_string()
}

#[test]
fn test_random_disabled_prints_notice() {
    let dir = vault_with(&[("a.md", "")]);

    vaultpick()
        .current_dir(dir.path())
        .arg("random")
        .assert()
        .success()
        .stdout(predicate::str::contains("Inspector is off"));

    assert!(!dir.path().join(".vaultpick/state.json").exists());
}

#[test]
fn test_random_prints_basename() {
    let dir = enabled_vault_with(&[("Daily/Plan.md", "")]);

    vaultpick()
        .current_dir(dir.path())
        .arg("random")
        .assert()
        .success()
        .stdout(predicate::str::contains("Inspect: Plan"))
        .stdout(predicate::str::contains("Daily/Plan.md"));
}

#[test]
fn test_random_cycle_without_repeats() {
    let dir = enabled_vault_with(&[("a.md", ""), ("b.md", ""), ("c.md", "")]);

    let mut seen = BTreeSet::new();
    for expected_remaining in [2, 1, 0] {
        let value = run_json(dir.path(), &["--seed", "11", "random"]);
        assert_eq!(value["status"], "found");
        assert_eq!(value["remaining"], expected_remaining);
        assert!(seen.insert(drawn_path(&value)));
    }
    assert_eq!(seen.len(), 3);

    // Fourth draw starts a fresh cycle over the same notes
    let value = run_json(dir.path(), &["random"]);
    assert_eq!(value["remaining"], 2);
    assert!(seen.contains(&drawn_path(&value)));
    assert!(read_state(dir.path())["cycle_started_at"].is_string());
}

#[test]
fn test_random_respects_exclusions() {
    let dir = enabled_vault_with(&[
        ("Archive/x.md", ""),
        ("Archive2/x.md", ""),
        ("b.md", ""),
    ]);

    vaultpick()
        .current_dir(dir.path())
        .args(["exclude", "Archive"])
        .assert()
        .success();

    let drawn: BTreeSet<String> = (0..2)
        .map(|_| drawn_path(&run_json(dir.path(), &["random"])))
        .collect();
    let expected: BTreeSet<String> = ["Archive2/x.md", "b.md"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(drawn, expected);
}

#[test]
fn test_random_skips_deleted_notes() {
    let dir = enabled_vault_with(&[("a.md", ""), ("b.md", ""), ("c.md", "")]);

    run_json(dir.path(), &["random"]);
    let queue: Vec<String> = read_state(dir.path())["remaining_paths"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect();
    assert_eq!(queue.len(), 2);

    std::fs::remove_file(dir.path().join(&queue[0])).unwrap();

    let value = run_json(dir.path(), &["random"]);
    assert_eq!(drawn_path(&value), queue[1]);
    assert_eq!(value["remaining"], 0);
}

#[test]
fn test_random_empty_vault() {
    let dir = enabled_vault_with(&[]);

    vaultpick()
        .current_dir(dir.path())
        .arg("random")
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes found in vault"));

    assert_eq!(run_json(dir.path(), &["random"])["status"], "none");
}

#[test]
fn test_random_seed_is_reproducible() {
    let files = [("a.md", ""), ("b.md", ""), ("c.md", ""), ("d.md", "")];
    let first = enabled_vault_with(&files);
    let second = enabled_vault_with(&files);

    let a = run_json(first.path(), &["--seed", "42", "random"]);
    let b = run_json(second.path(), &["--seed", "42", "random"]);
    assert_eq!(drawn_path(&a), drawn_path(&b));
}

#[test]
fn test_random_ignores_hidden_and_non_notes() {
    let dir = enabled_vault_with(&[
        ("only.md", ""),
        (".trash/old.md", ""),
        ("image.png", ""),
    ]);

    for _ in 0..3 {
        assert_eq!(drawn_path(&run_json(dir.path(), &["random"])), "only.md");
    }
}

#[test]
fn test_random_records_output() {
    let dir = enabled_vault_with(&[("My Note.md", "")]);

    vaultpick()
        .current_dir(dir.path())
        .args(["--format", "records", "random"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "H vaultpick=1 records=1 mode=random status=found remaining=0",
        ))
        .stdout(predicate::str::contains(
            "N path=\"My Note.md\" basename=\"My Note\"",
        ));
}

#[test]
fn test_random_open_uses_editor() {
    let dir = enabled_vault_with(&[("a.md", "")]);

    vaultpick()
        .current_dir(dir.path())
        .args(["random", "--open", "--editor", "true"])
        .assert()
        .success();
}

#[test]
fn test_random_open_reports_editor_failure() {
    let dir = enabled_vault_with(&[("a.md", "")]);

    vaultpick()
        .current_dir(dir.path())
        .args(["random", "--open", "--editor", "false"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("non-zero status"));
}

#[test]
fn test_random_draws_non_breaking_space_name() {
    let dir = enabled_vault_with(&[("My\u{00A0}Note.md", "")]);

    for _ in 0..2 {
        let value = run_json(dir.path(), &["random"]);
        assert_eq!(value["status"], "found");
        assert_eq!(drawn_path(&value), "My\u{00A0}Note.md");
    }
}
