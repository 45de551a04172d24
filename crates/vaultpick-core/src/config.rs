//! Vault configuration for vaultpick
//!
//! Configuration is stored in `.vaultpick/config.toml`. A missing file means
//! defaults; missing keys are default-filled.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::bail_invalid;
use crate::error::{Result, VaultError};

/// Current config format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// Vault configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultConfig {
    /// Config format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// File extensions treated as notes (without the dot)
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Include dot-files and dot-directories (`.obsidian/`, `.trash/`) in scans
    #[serde(default)]
    pub include_hidden: bool,

    /// Follow symlinks while scanning
    #[serde(default)]
    pub follow_links: bool,

    /// Editor command used by `--open` (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,
}

fn default_version() -> u32 {
    CONFIG_FORMAT_VERSION
}

fn default_extensions() -> Vec<String> {
    vec!["md".to_string()]
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            extensions: default_extensions(),
            include_hidden: false,
            follow_links: false,
            editor: None,
        }
    }
}

impl VaultConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let mut config: VaultConfig = toml::from_str(&content)?;

        if config.version > CONFIG_FORMAT_VERSION {
            tracing::warn!(
                version = config.version,
                supported = CONFIG_FORMAT_VERSION,
                "config written by a newer vaultpick"
            );
        }

        config.extensions = config
            .extensions
            .iter()
            .map(|ext| ext.trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();
        if config.extensions.is_empty() {
            bail_invalid!("config extensions", "[] (at least one note extension is required)");
        }

        Ok(config)
    }

    /// Load from `path` when it exists, defaults otherwise
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VaultError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Whether a file name carries one of the configured note extensions
    pub fn is_note_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| {
                self.extensions
                    .iter()
                    .any(|configured| configured.eq_ignore_ascii_case(ext))
            })
    }
}
