//! `vaultpick random` - show the next note of the shuffle cycle

use std::time::Instant;

use rand::Rng;
use tracing::debug;

use crate::cli::{Cli, OpenArgs};
use crate::commands::dispatch::open_inspector;
use crate::commands::format::{print_inspection, InspectionLabels};
use crate::commands::open::open_note;
use vaultpick_core::error::Result;
use vaultpick_core::inspector::Inspection;
use vaultpick_core::trace_time;
use vaultpick_core::vault::Vault;

const LABELS: InspectionLabels<'static> = InspectionLabels {
    mode: "random",
    found: "Inspect",
    none: "No notes found in vault",
};

/// Execute the random command
pub fn execute<R: Rng>(cli: &Cli, vault: &Vault, rng: &mut R, args: &OpenArgs) -> Result<()> {
    let mut inspector = open_inspector(vault)?;

    let start = Instant::now();
    let inspection = inspector.inspect_random(rng)?;
    trace_time!(start, "draw");
    let remaining = inspector.state().remaining_paths.len();
    debug!(remaining, "random_drawn");

    let shown = match inspection {
        Inspection::Disabled => None,
        _ => Some(remaining),
    };
    print_inspection(cli, &LABELS, &inspection, shown)?;

    if let Inspection::Found(note) = &inspection {
        if args.open {
            open_note(vault, note, args.editor.as_deref())?;
        }
    }

    Ok(())
}
