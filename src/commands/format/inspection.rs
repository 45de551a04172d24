//! Output for draw and orphan results

use crate::cli::Cli;
use crate::commands::format::{
    note_json, output_by_format_result, print_json_status, print_records_header,
    print_records_note,
};
use vaultpick_core::error::{Result, VaultError};
use vaultpick_core::inspector::Inspection;

const DISABLED_NOTICE: &str = "Inspector is off. Run `vaultpick on` to enable it.";

/// How a command labels its result
pub struct InspectionLabels<'a> {
    pub mode: &'a str,
    /// Human prefix for a found note, e.g. `Inspect`
    pub found: &'a str,
    /// Human message when nothing qualified
    pub none: &'a str,
}

fn status_of(inspection: &Inspection) -> &'static str {
    match inspection {
        Inspection::Disabled => "disabled",
        Inspection::NoneFound => "none",
        Inspection::Found(_) => "found",
    }
}

/// Print an inspection; `remaining` is the queue length after a draw
pub fn print_inspection(
    cli: &Cli,
    labels: &InspectionLabels<'_>,
    inspection: &Inspection,
    remaining: Option<usize>,
) -> Result<()> {
    let status = status_of(inspection);

    output_by_format_result!(cli.format,
        json => {
            let mut fields = Vec::new();
            if let Inspection::Found(note) = inspection {
                fields.push(("note", note_json(note)));
            }
            if let Some(remaining) = remaining {
                fields.push(("remaining", serde_json::json!(remaining)));
            }
            let message = match inspection {
                Inspection::Disabled => Some(DISABLED_NOTICE),
                Inspection::NoneFound => Some(labels.none),
                Inspection::Found(_) => None,
            };
            print_json_status(status, message, &fields)?;
            Ok::<(), VaultError>(())
        },
        human => {
            match inspection {
                Inspection::Disabled => {
                    if !cli.quiet {
                        println!("{}", DISABLED_NOTICE);
                    }
                }
                Inspection::NoneFound => println!("{}", labels.none),
                Inspection::Found(note) => {
                    println!("{}: {}", labels.found, note.basename);
                    if !cli.quiet {
                        println!("  {}", note.path);
                    }
                }
            }
        },
        records => {
            let remaining = remaining.map(|n| n.to_string());
            let mut fields = vec![("status", status)];
            if let Some(remaining) = remaining.as_deref() {
                fields.push(("remaining", remaining));
            }
            print_records_header(labels.mode, &fields);
            if let Inspection::Found(note) = inspection {
                print_records_note(note);
            }
        }
    )?;

    Ok(())
}
