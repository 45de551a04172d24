use crate::cli::support::{read_state, vault_with, vaultpick};
use predicates::prelude::*;

// ============================================================================
// Toggle, on, off and done
// ============================================================================

#[test]
fn test_toggle_flips_enabled() {
    let dir = vault_with(&[("a.md", "")]);

    vaultpick()
        .current_dir(dir.path())
        .arg("toggle")
        .assert()
        .success()
        .stdout(predicate::str::contains("Inspector: on"));
    assert_eq!(read_state(dir.path())["enabled"], true);

    vaultpick()
        .current_dir(dir.path())
        .arg("toggle")
        .assert()
        .success()
        .stdout(predicate::str::contains("Inspector: off"));
    assert_eq!(read_state(dir.path())["enabled"], false);
}

#[test]
fn test_on_is_idempotent() {
    let dir = vault_with(&[("a.md", "")]);

    vaultpick().current_dir(dir.path()).arg("on").assert().success();
    vaultpick()
        .current_dir(dir.path())
        .args(["--format", "json", "on"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"changed\": false"));

    vaultpick()
        .current_dir(dir.path())
        .arg("off")
        .assert()
        .success()
        .stdout(predicate::str::contains("Inspector: off"));
}

#[test]
fn test_done_clears_current() {
    let dir = vault_with(&[("a.md", "")]);

    vaultpick().current_dir(dir.path()).arg("on").assert().success();
    vaultpick().current_dir(dir.path()).arg("random").assert().success();
    assert_eq!(read_state(dir.path())["current"], "a.md");

    vaultpick()
        .current_dir(dir.path())
        .arg("done")
        .assert()
        .success()
        .stdout(predicate::str::contains("Inspector: off"));

    let state = read_state(dir.path());
    assert_eq!(state["enabled"], false);
    assert!(state.get("current").is_none());
}

#[test]
fn test_records_output() {
    let dir = vault_with(&[("a.md", "")]);

    vaultpick()
        .current_dir(dir.path())
        .args(["--format", "records", "on"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "H vaultpick=1 records=1 mode=toggle enabled=on",
        ));
}
