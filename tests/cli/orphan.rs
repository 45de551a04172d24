use crate::cli::support::{enabled_vault_with, read_state, run_json, vault_with, vaultpick};
use predicates::prelude::*;

// ============================================================================
// Orphan search tests
// ============================================================================

#[test]
fn test_orphan_finds_unlinked_note() {
    let dir = enabled_vault_with(&[
        ("a.md", "See [[b]] for details."),
        ("b.md", "Target."),
        ("c.md", "Nothing links here."),
    ]);

    vaultpick()
        .current_dir(dir.path())
        .arg("orphan")
        .assert()
        .success()
        .stdout(predicate::str::contains("Orphan: c"));

    assert_eq!(read_state(dir.path())["current"], "c.md");
}

#[test]
fn test_orphan_disabled_prints_notice() {
    let dir = vault_with(&[("a.md", "")]);

    vaultpick()
        .current_dir(dir.path())
        .arg("orphan")
        .assert()
        .success()
        .stdout(predicate::str::contains("Inspector is off"));

    let value = run_json(dir.path(), &["orphan"]);
    assert_eq!(value["status"], "disabled");
}

#[test]
fn test_orphan_none_found() {
    let dir = enabled_vault_with(&[("a.md", "[[b]]"), ("b.md", "[[a]]")]);

    vaultpick()
        .current_dir(dir.path())
        .arg("orphan")
        .assert()
        .success()
        .stdout(predicate::str::contains("No orphan notes found"));
}

#[test]
fn test_orphan_counts_markdown_links_and_embeds() {
    let dir = enabled_vault_with(&[
        ("a.md", "[next](Sub/b.md)"),
        ("Sub/b.md", "![[diagram.png]]"),
        ("z.md", "alone"),
    ]);

    let value = run_json(dir.path(), &["orphan"]);
    assert_eq!(value["status"], "found");
    assert_eq!(value["note"]["path"], "z.md");
}

#[test]
fn test_orphan_ignores_links_in_code() {
    let dir = enabled_vault_with(&[
        ("a.md", "```\n[[b]]\n```\nand `[[b]]` inline"),
        ("b.md", "[[c]]"),
        ("c.md", ""),
    ]);

    let value = run_json(dir.path(), &["orphan"]);
    assert_eq!(value["note"]["path"], "a.md");
}

#[test]
fn test_orphan_skips_excluded_folders() {
    let dir = enabled_vault_with(&[
        ("Inbox/loose.md", ""),
        ("a.md", "[[b]]"),
        ("b.md", ""),
        ("c.md", ""),
    ]);

    vaultpick()
        .current_dir(dir.path())
        .args(["exclude", "Inbox"])
        .assert()
        .success();

    let value = run_json(dir.path(), &["orphan"]);
    assert_eq!(value["note"]["path"], "c.md");
}

#[test]
fn test_orphan_all_lists_every_orphan() {
    let dir = enabled_vault_with(&[
        ("a.md", "[[b]]"),
        ("b.md", ""),
        ("c.md", ""),
        ("d.md", ""),
    ]);

    let value = run_json(dir.path(), &["orphan", "--all"]);
    assert_eq!(value["count"], 2);
    assert_eq!(value["notes"][0]["path"], "c.md");
    assert_eq!(value["notes"][1]["path"], "d.md");

    assert!(read_state(dir.path()).get("current").is_none());
}

#[test]
fn test_orphan_all_conflicts_with_open() {
    let dir = enabled_vault_with(&[("a.md", "")]);

    vaultpick()
        .current_dir(dir.path())
        .args(["orphan", "--all", "--open"])
        .assert()
        .code(2);
}

#[test]
fn test_orphan_ignores_in_page_anchor_links() {
    let dir = enabled_vault_with(&[
        ("a.md", "See [below](#summary)\n\n## Summary\n"),
        ("b.md", "[[c]]"),
        ("c.md", ""),
    ]);

    let value = run_json(dir.path(), &["orphan"]);
    assert_eq!(value["note"]["path"], "a.md");
}
