//! `vaultpick status` - show inspector state

use chrono::SecondsFormat;

use crate::cli::Cli;
use crate::commands::dispatch::open_inspector;
use crate::commands::format::{output_by_format_result, print_records_header};
use vaultpick_core::error::{Result, VaultError};
use vaultpick_core::vault::Vault;

/// Execute the status command
pub fn execute(cli: &Cli, vault: &Vault) -> Result<()> {
    let inspector = open_inspector(vault)?;
    let state = inspector.state();
    let eligible = inspector.eligible_notes()?.len();
    let cycle_started = state
        .cycle_started_at
        .map(|at| at.to_rfc3339_opts(SecondsFormat::Secs, true));
    let vault_root = vault.root().display().to_string();

    output_by_format_result!(cli.format,
        json => {
            let output = serde_json::json!({
                "vault": vault_root,
                "enabled": state.enabled,
                "current": state.current,
                "remaining": state.remaining_paths.len(),
                "cycle_started_at": cycle_started,
                "excluded": state.excluded_folders,
                "eligible": eligible,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok::<(), VaultError>(())
        },
        human => {
            println!("Vault:     {}", vault_root);
            println!("Inspector: {}", if state.enabled { "on" } else { "off" });
            println!("Current:   {}", state.current.as_deref().unwrap_or("-"));
            println!(
                "Queue:     {} remaining{}",
                state.remaining_paths.len(),
                cycle_started
                    .as_deref()
                    .map(|at| format!(" (cycle started {})", at))
                    .unwrap_or_default()
            );
            println!("Eligible:  {} notes", eligible);
            if state.excluded_folders.is_empty() {
                println!("Excluded:  -");
            } else {
                println!("Excluded:  {}", state.excluded_folders.join(", "));
            }
        },
        records => {
            let remaining = state.remaining_paths.len().to_string();
            let eligible = eligible.to_string();
            let excluded = state.excluded_folders.len().to_string();
            print_records_header(
                "status",
                &[
                    ("vault", vault_root.as_str()),
                    ("enabled", if state.enabled { "true" } else { "false" }),
                    ("current", state.current.as_deref().unwrap_or("")),
                    ("remaining", remaining.as_str()),
                    ("cycle_started_at", cycle_started.as_deref().unwrap_or("")),
                    ("eligible", eligible.as_str()),
                    ("excluded", excluded.as_str()),
                ],
            );
        }
    )?;

    Ok(())
}
