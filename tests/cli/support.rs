use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

/// Get a Command for vaultpick
pub fn vaultpick() -> Command {
    cargo_bin_cmd!("vaultpick")
}

/// Write `files` (vault-relative path, content) under `root`
pub fn write_notes(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full = root.join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full, content).unwrap();
    }
}

/// A temporary vault marked by `.vaultpick/` holding `files`
pub fn vault_with(files: &[(&str, &str)]) -> TempDir {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join(".vaultpick")).unwrap();
    write_notes(dir.path(), files);
    dir
}

/// Like [`vault_with`] with the inspector already switched on
pub fn enabled_vault_with(files: &[(&str, &str)]) -> TempDir {
    let dir = vault_with(files);
    vaultpick()
        .current_dir(dir.path())
        .arg("on")
        .assert()
        .success();
    dir
}

/// Run a command with `--format json` and parse stdout
pub fn run_json(dir: &Path, args: &[&str]) -> serde_json::Value {
    let output = vaultpick()
        .current_dir(dir)
        .args(["--format", "json"])
        .args(args)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "command {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

/// Persisted state as JSON
pub fn read_state(dir: &Path) -> serde_json::Value {
    let content = fs::read_to_string(dir.join(".vaultpick/state.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}
