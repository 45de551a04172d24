//! `vaultpick toggle|on|off|done` - switch the inspector

use crate::cli::Cli;
use crate::commands::dispatch::open_inspector;
use crate::commands::format::{output_by_format_result, print_json_status, print_records_header};
use vaultpick_core::error::{Result, VaultError};
use vaultpick_core::vault::Vault;

/// Requested change to the enabled flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Switch {
    Toggle,
    On,
    Off,
}

fn label(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}

/// Execute toggle, on or off
pub fn execute(cli: &Cli, vault: &Vault, switch: Switch) -> Result<()> {
    let mut inspector = open_inspector(vault)?;

    let (enabled, changed) = match switch {
        Switch::Toggle => (inspector.toggle()?, true),
        Switch::On => (true, inspector.set_enabled(true)?),
        Switch::Off => (false, inspector.set_enabled(false)?),
    };

    output_by_format_result!(cli.format,
        json => {
            print_json_status(
                label(enabled),
                None,
                &[
                    ("enabled", serde_json::json!(enabled)),
                    ("changed", serde_json::json!(changed)),
                ],
            )?;
            Ok::<(), VaultError>(())
        },
        human => {
            println!("Inspector: {}", label(enabled));
        },
        records => {
            print_records_header(
                "toggle",
                &[
                    ("enabled", label(enabled)),
                    ("changed", if changed { "true" } else { "false" }),
                ],
            );
        }
    )?;

    Ok(())
}

/// Execute done: switch off and clear the current note
pub fn execute_done(cli: &Cli, vault: &Vault) -> Result<()> {
    let mut inspector = open_inspector(vault)?;
    let previous = inspector.done()?;

    output_by_format_result!(cli.format,
        json => {
            print_json_status(
                "off",
                None,
                &[
                    ("enabled", serde_json::json!(false)),
                    ("cleared", serde_json::json!(previous)),
                ],
            )?;
            Ok::<(), VaultError>(())
        },
        human => {
            println!("Inspector: off");
            if let Some(path) = &previous {
                if !cli.quiet {
                    println!("Cleared current note {}", path);
                }
            }
        },
        records => {
            let cleared = previous.as_deref().unwrap_or("");
            print_records_header("done", &[("enabled", "off"), ("cleared", cleared)]);
        }
    )?;

    Ok(())
}
