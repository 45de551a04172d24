use crate::error::{Result, VaultError};
use std::path::{Path, PathBuf};

/// Vaultpick metadata directory inside a vault
pub const VAULTPICK_DIR: &str = ".vaultpick";

/// Obsidian's settings directory, accepted as a vault marker
pub const OBSIDIAN_DIR: &str = ".obsidian";

/// Configuration filename
pub const CONFIG_FILE: &str = "config.toml";

/// Persisted state filename
pub const STATE_FILE: &str = "state.json";

/// Directories never scanned for notes
pub const ALWAYS_SKIPPED: &[&str] = &[VAULTPICK_DIR, ".git"];

/// Discover a vault root by walking up from `root`.
///
/// The nearest directory holding `.vaultpick/` or `.obsidian/` is the vault.
pub fn discover_vault(root: &Path) -> Result<PathBuf> {
    let mut current = root.to_path_buf();

    loop {
        if current.join(VAULTPICK_DIR).is_dir() || current.join(OBSIDIAN_DIR).is_dir() {
            return Ok(current);
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => {
                return Err(VaultError::VaultNotFound {
                    search_root: root.to_path_buf(),
                });
            }
        }
    }
}
