//! `vaultpick orphan` - find notes with no links in or out

use std::time::Instant;

use crate::cli::{Cli, OpenArgs};
use crate::commands::dispatch::open_inspector;
use crate::commands::format::{
    note_json, output_by_format_result, print_inspection, print_json_status,
    print_records_header, print_records_note, InspectionLabels,
};
use crate::commands::open::open_note;
use vaultpick_core::error::{Result, VaultError};
use vaultpick_core::inspector::Inspection;
use vaultpick_core::trace_time;
use vaultpick_core::vault::Vault;

const LABELS: InspectionLabels<'static> = InspectionLabels {
    mode: "orphan",
    found: "Orphan",
    none: "No orphan notes found",
};

/// Execute the orphan command: the first orphan in vault order
pub fn execute(cli: &Cli, vault: &Vault, args: &OpenArgs) -> Result<()> {
    let mut inspector = open_inspector(vault)?;
    let start = Instant::now();
    let inspection = inspector.find_orphan()?;
    trace_time!(start, "find_orphan");

    print_inspection(cli, &LABELS, &inspection, None)?;

    if let Inspection::Found(note) = &inspection {
        if args.open {
            open_note(vault, note, args.editor.as_deref())?;
        }
    }

    Ok(())
}

/// Execute `orphan --all`: every orphan, without touching the current note
pub fn execute_all(cli: &Cli, vault: &Vault) -> Result<()> {
    let inspector = open_inspector(vault)?;

    let start = Instant::now();
    let Some(orphans) = inspector.list_orphans()? else {
        return print_inspection(cli, &LABELS, &Inspection::Disabled, None);
    };
    trace_time!(start, "find_orphans", count = orphans.len());

    output_by_format_result!(cli.format,
        json => {
            let notes: Vec<_> = orphans.iter().map(note_json).collect();
            print_json_status(
                "ok",
                None,
                &[
                    ("count", serde_json::json!(orphans.len())),
                    ("notes", serde_json::json!(notes)),
                ],
            )?;
            Ok::<(), VaultError>(())
        },
        human => {
            if orphans.is_empty() {
                println!("{}", LABELS.none);
            }
            for note in &orphans {
                println!("{}", note.path);
            }
        },
        records => {
            let count = orphans.len().to_string();
            print_records_header("orphans", &[("count", count.as_str())]);
            for note in &orphans {
                print_records_note(note);
            }
        }
    )?;

    Ok(())
}
