//! `vaultpick exclude|include|excluded|check` - folder exclusions

use crate::cli::Cli;
use crate::commands::dispatch::open_inspector;
use crate::commands::format::{output_by_format_result, print_json_status, print_records_header};
use vaultpick_core::eligibility::clean_path;
use vaultpick_core::error::{Result, VaultError};
use vaultpick_core::inspector::FolderChange;
use vaultpick_core::vault::{NoteHost, Vault};

/// Execute the exclude command; the folder must exist in the vault
pub fn execute_exclude(cli: &Cli, vault: &Vault, folder: &str) -> Result<()> {
    if !clean_path(folder).is_empty() && !vault.is_folder(folder) {
        return Err(VaultError::FolderNotFound {
            path: folder.to_string(),
        });
    }

    let mut inspector = open_inspector(vault)?;
    let change = inspector.exclude(folder)?;
    print_change(cli, "exclude", &change, "Excluded", "Already excluded")
}

/// Execute the include command
pub fn execute_include(cli: &Cli, vault: &Vault, folder: &str) -> Result<()> {
    let mut inspector = open_inspector(vault)?;
    let change = inspector.include(folder)?;
    print_change(cli, "include", &change, "Included", "Not excluded")
}

fn print_change(
    cli: &Cli,
    mode: &str,
    change: &FolderChange,
    changed_label: &str,
    unchanged_label: &str,
) -> Result<()> {
    let status = if change.changed { "ok" } else { "unchanged" };

    output_by_format_result!(cli.format,
        json => {
            print_json_status(
                status,
                None,
                &[
                    ("folder", serde_json::json!(change.folder)),
                    ("changed", serde_json::json!(change.changed)),
                ],
            )?;
            Ok::<(), VaultError>(())
        },
        human => {
            if change.changed {
                println!("{}: {}", changed_label, change.folder);
            } else if !cli.quiet {
                println!("{}: {}", unchanged_label, change.folder);
            }
        },
        records => {
            print_records_header(
                mode,
                &[("folder", change.folder.as_str()), ("status", status)],
            );
        }
    )?;

    Ok(())
}

/// Execute the excluded command: list the exclusion set
pub fn execute_list(cli: &Cli, vault: &Vault) -> Result<()> {
    let inspector = open_inspector(vault)?;
    let mut folders = inspector.state().excluded_folders.clone();
    folders.sort();

    output_by_format_result!(cli.format,
        json => {
            print_json_status(
                "ok",
                None,
                &[
                    ("count", serde_json::json!(folders.len())),
                    ("excluded", serde_json::json!(folders)),
                ],
            )?;
            Ok::<(), VaultError>(())
        },
        human => {
            if folders.is_empty() {
                if !cli.quiet {
                    println!("No excluded folders");
                }
            } else {
                for folder in &folders {
                    println!("{}", folder);
                }
            }
        },
        records => {
            let count = folders.len().to_string();
            print_records_header("excluded", &[("count", count.as_str())]);
            for folder in &folders {
                println!("F folder={}", vaultpick_core::format::records_value(folder));
            }
        }
    )?;

    Ok(())
}

/// Execute the check command: is `path` eligible for sampling?
pub fn execute_check(cli: &Cli, vault: &Vault, path: &str) -> Result<()> {
    let inspector = open_inspector(vault)?;
    let cleaned = clean_path(path);
    let eligibility = inspector.state().eligibility();
    let rule = eligibility.matching_rule(&cleaned).map(str::to_string);
    let is_note = vault.resolve(&cleaned)?.is_some();
    let eligible = rule.is_none();

    output_by_format_result!(cli.format,
        json => {
            print_json_status(
                if eligible { "eligible" } else { "excluded" },
                None,
                &[
                    ("path", serde_json::json!(cleaned)),
                    ("eligible", serde_json::json!(eligible)),
                    ("excluded_by", serde_json::json!(rule)),
                    ("note", serde_json::json!(is_note)),
                ],
            )?;
            Ok::<(), VaultError>(())
        },
        human => {
            match &rule {
                Some(rule) => println!("{}: excluded by {}", cleaned, rule),
                None => println!("{}: eligible", cleaned),
            }
            if !is_note && !cli.quiet {
                println!("  (not a note in this vault)");
            }
        },
        records => {
            print_records_header(
                "check",
                &[
                    ("path", cleaned.as_str()),
                    ("eligible", if eligible { "true" } else { "false" }),
                    ("excluded_by", rule.as_deref().unwrap_or("")),
                ],
            );
        }
    )?;

    Ok(())
}
