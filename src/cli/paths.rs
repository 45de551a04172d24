//! Path resolution for CLI commands

use std::env;
use std::path::{Path, PathBuf};

/// Resolve the base directory for vault discovery.
///
/// Falls back to the current working directory, or "." if that cannot be
/// determined.
pub fn resolve_root_path(root: Option<PathBuf>) -> PathBuf {
    root.unwrap_or_else(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Resolve an explicit `--vault` path against the base directory
pub fn resolve_vault_path(vault: &Path, root: &Path) -> PathBuf {
    if vault.is_absolute() {
        vault.to_path_buf()
    } else {
        root.join(vault)
    }
}
