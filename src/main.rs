//! Vaultpick - random review and orphan finding for markdown vaults
//!
//! Walks a vault in shuffled, non-repeating order one note at a time, and
//! finds notes that neither link anywhere nor are linked from anywhere.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use vaultpick_core::error::{ExitCode as VaultExitCode, VaultError};
use vaultpick_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return parse_failure(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(VaultExitCode::Success as u8),
        Err(e) => {
            report_error(&e, cli.format, cli.quiet);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

/// Handle a clap failure. `--format` may not have been parsed yet, so a
/// JSON request is read straight from argv.
fn parse_failure(err: clap::Error) -> ExitCode {
    if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
        || !argv_requests_json(env::args().skip(1))
    {
        err.exit();
    }

    let error = match err.kind() {
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::MissingRequiredArgument
        | ErrorKind::ArgumentConflict => VaultError::UsageError(err.to_string()),
        _ => VaultError::Other(err.to_string()),
    };

    report_error(&error, OutputFormat::Json, false);
    ExitCode::from(error.exit_code() as u8)
}

fn report_error(error: &VaultError, format: OutputFormat, quiet: bool) {
    if format == OutputFormat::Json {
        eprintln!("{}", error.to_json());
    } else if !quiet {
        eprintln!("error: {}", error);
    }
}

fn argv_requests_json<I: IntoIterator<Item = String>>(args: I) -> bool {
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--format" => {
                if args.next().is_some_and(|v| v == "json") {
                    return true;
                }
            }
            "--format=json" => return true,
            _ => {}
        }
    }
    false
}
