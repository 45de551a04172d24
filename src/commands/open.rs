//! Open a selected note in an editor
//!
//! Editor lookup order: `--editor`, config `editor`, `$VISUAL`, `$EDITOR`.
//! The command string is split on whitespace so `code --wait` works.

use std::process::Command;

use tracing::debug;

use vaultpick_core::error::{Result, VaultError};
use vaultpick_core::vault::{Note, Vault};

/// Pick the editor command, failing with a usage error when none is set
pub fn resolve_editor(vault: &Vault, editor_override: Option<&str>) -> Result<String> {
    editor_override
        .map(String::from)
        .or_else(|| vault.config().editor.clone())
        .or_else(|| std::env::var("VISUAL").ok())
        .or_else(|| std::env::var("EDITOR").ok())
        .filter(|editor| !editor.trim().is_empty())
        .ok_or_else(|| {
            VaultError::UsageError(
                "no editor configured. Set `editor` in .vaultpick/config.toml, VISUAL or EDITOR, or use --editor"
                    .to_string(),
            )
        })
}

/// Launch the editor on `note` and wait for it to exit
pub fn open_note(vault: &Vault, note: &Note, editor_override: Option<&str>) -> Result<()> {
    let editor = resolve_editor(vault, editor_override)?;
    let path = vault.absolute_path(note);
    if !path.is_file() {
        return Err(VaultError::NoteNotFound {
            path: note.path.clone(),
        });
    }

    let mut parts = editor.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| VaultError::UsageError("editor command is empty".to_string()))?;

    debug!(editor = %editor, path = %path.display(), "open_editor");

    let status = Command::new(program)
        .args(parts)
        .arg(&path)
        .status()
        .map_err(|e| VaultError::Other(format!("failed to open editor '{}': {}", editor, e)))?;

    if !status.success() {
        return Err(VaultError::Other(format!(
            "editor '{}' exited with non-zero status: {:?}",
            editor, status
        )));
    }

    Ok(())
}
