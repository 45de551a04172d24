//! CLI argument parsing for vaultpick
//!
//! Global flags: --root, --vault, --format, --quiet, --verbose, --seed

pub mod paths;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub use vaultpick_core::format::OutputFormat;

/// Vaultpick - random review and orphan finding for markdown vaults
#[derive(Parser, Debug)]
#[command(name = "vaultpick")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base directory for vault discovery
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Explicit vault root (skips discovery)
    #[arg(long, global = true, env = "VAULTPICK_VAULT")]
    pub vault: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Debug-level logging on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter: a level (warn, debug, ...) or a full tracing directive
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Seed the shuffle for reproducible draws
    #[arg(long, global = true, env = "VAULTPICK_SEED")]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create .vaultpick/ with a default config in the vault
    Init,

    /// Show inspector state
    Status,

    /// Switch the inspector on or off
    Toggle,

    /// Switch the inspector on
    On,

    /// Switch the inspector off
    Off,

    /// Finish reviewing: switch off and clear the current note
    Done,

    /// Show the next random note of the cycle
    Random(OpenArgs),

    /// Show a note with no inbound or outbound links
    Orphan {
        #[command(flatten)]
        open: OpenArgs,

        /// List every orphan instead of picking the first
        #[arg(long, conflicts_with = "open")]
        all: bool,
    },

    /// Exclude a folder (and everything under it) from sampling
    Exclude {
        /// Vault-relative folder path
        folder: String,
    },

    /// Include a previously excluded folder again
    Include {
        /// Vault-relative folder path
        folder: String,
    },

    /// List excluded folders
    Excluded,

    /// Report whether a path is eligible for sampling
    Check {
        /// Vault-relative note or folder path
        path: String,
    },
}

/// Options for opening the selected note
#[derive(Args, Debug, Clone, Default)]
pub struct OpenArgs {
    /// Open the note in an editor
    #[arg(long)]
    pub open: bool,

    /// Editor command (defaults to config `editor`, then $VISUAL, then $EDITOR)
    #[arg(long, requires = "open")]
    pub editor: Option<String>,
}
