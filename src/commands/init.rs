//! `vaultpick init` command - create `.vaultpick/` in a vault
//!
//! - Idempotent (safe to run multiple times)
//! - Writes a default `config.toml` only when none exists

use std::path::Path;

use crate::cli::paths::resolve_vault_path;
use crate::cli::Cli;
use crate::commands::format::{output_by_format_result, print_records_header};
use vaultpick_core::error::{Result, VaultError};
use vaultpick_core::vault::Vault;

/// Execute the init command
pub fn execute(cli: &Cli, root: &Path) -> Result<()> {
    let target = match cli.vault.as_ref() {
        Some(path) => resolve_vault_path(path, root),
        None => root.to_path_buf(),
    };

    let (vault, created) = Vault::init(&target)?;
    let status = if created { "created" } else { "exists" };
    let vault_root = vault.root().display().to_string();

    output_by_format_result!(cli.format,
        json => {
            let output = serde_json::json!({
                "status": status,
                "vault": vault_root,
                "config": vault.config_path().display().to_string(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok::<(), VaultError>(())
        },
        human => {
            if created {
                println!("Initialized vaultpick in {}", vault_root);
            } else if !cli.quiet {
                println!("vaultpick already initialized in {}", vault_root);
            }
        },
        records => {
            print_records_header("init", &[("vault", vault_root.as_str()), ("status", status)]);
        }
    )?;

    Ok(())
}
