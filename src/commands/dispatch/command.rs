//! Command trait and context for dispatching commands

use std::path::{Path, PathBuf};
use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::cli::paths::resolve_vault_path;
use crate::cli::Cli;
use vaultpick_core::error::Result;
use vaultpick_core::inspector::Inspector;
use vaultpick_core::state::{StateFile, StateStore};
use vaultpick_core::vault::Vault;

/// Open the `--vault` path, or discover a vault from the base directory
pub fn discover_or_open_vault(cli: &Cli, root: &Path) -> Result<Vault> {
    match &cli.vault {
        Some(path) => Vault::open(&resolve_vault_path(path, root)),
        None => Vault::discover(root),
    }
}

/// Inspector over a vault and its state file
pub fn open_inspector(vault: &Vault) -> Result<Inspector<'_, Vault, StateFile>> {
    Ok(Inspector::new(vault, StateStore::open(vault.state_file())?))
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub root: &'a PathBuf,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, root: &'a PathBuf, start: Instant) -> Self {
        Self { cli, root, start }
    }

    pub fn discover_or_open_vault(&self) -> Result<Vault> {
        discover_or_open_vault(self.cli, self.root)
    }

    /// Random source for draws, seeded when `--seed` is given
    pub fn rng(&self) -> StdRng {
        match self.cli.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("vaultpick {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Random review and orphan finding for markdown vaults.");
        println!();
        println!("Run `vaultpick --help` for usage information.");
        Ok(())
    }
}
