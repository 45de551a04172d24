//! Command implementations for all vaultpick commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use vaultpick_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        dispatch_command::execute(self, ctx)
    }
}

pub(super) mod dispatch_command {
    use super::*;

    use tracing::debug;

    use crate::cli::OpenArgs;
    use crate::commands::toggle::Switch;
    use crate::commands::{folders, init, orphan, random, status, toggle};

    pub(super) fn execute(cmd: &Commands, ctx: &CommandContext) -> Result<()> {
        match cmd {
            Commands::Init => execute_init(ctx),
            Commands::Status => execute_status(ctx),
            Commands::Toggle => execute_switch(ctx, Switch::Toggle),
            Commands::On => execute_switch(ctx, Switch::On),
            Commands::Off => execute_switch(ctx, Switch::Off),
            Commands::Done => execute_done(ctx),
            Commands::Random(args) => execute_random(ctx, args),
            Commands::Orphan { open, all } => execute_orphan(ctx, open, *all),
            Commands::Exclude { folder } => execute_exclude(ctx, folder),
            Commands::Include { folder } => execute_include(ctx, folder),
            Commands::Excluded => execute_excluded(ctx),
            Commands::Check { path } => execute_check(ctx, path),
        }
    }

    fn execute_init(ctx: &CommandContext) -> Result<()> {
        init::execute(ctx.cli, ctx.root)
    }

    fn execute_status(ctx: &CommandContext) -> Result<()> {
        let vault = ctx.discover_or_open_vault()?;
        status::execute(ctx.cli, &vault)
    }

    fn execute_switch(ctx: &CommandContext, switch: Switch) -> Result<()> {
        let vault = ctx.discover_or_open_vault()?;
        toggle::execute(ctx.cli, &vault, switch)
    }

    fn execute_done(ctx: &CommandContext) -> Result<()> {
        let vault = ctx.discover_or_open_vault()?;
        toggle::execute_done(ctx.cli, &vault)
    }

    fn execute_random(ctx: &CommandContext, args: &OpenArgs) -> Result<()> {
        let vault = ctx.discover_or_open_vault()?;
        debug!(elapsed = ?ctx.start.elapsed(), "open_vault");
        let mut rng = ctx.rng();
        random::execute(ctx.cli, &vault, &mut rng, args)
    }

    fn execute_orphan(ctx: &CommandContext, args: &OpenArgs, all: bool) -> Result<()> {
        let vault = ctx.discover_or_open_vault()?;
        debug!(elapsed = ?ctx.start.elapsed(), "open_vault");
        if all {
            orphan::execute_all(ctx.cli, &vault)
        } else {
            orphan::execute(ctx.cli, &vault, args)
        }
    }

    fn execute_exclude(ctx: &CommandContext, folder: &str) -> Result<()> {
        let vault = ctx.discover_or_open_vault()?;
        folders::execute_exclude(ctx.cli, &vault, folder)
    }

    fn execute_include(ctx: &CommandContext, folder: &str) -> Result<()> {
        let vault = ctx.discover_or_open_vault()?;
        folders::execute_include(ctx.cli, &vault, folder)
    }

    fn execute_excluded(ctx: &CommandContext) -> Result<()> {
        let vault = ctx.discover_or_open_vault()?;
        folders::execute_list(ctx.cli, &vault)
    }

    fn execute_check(ctx: &CommandContext, path: &str) -> Result<()> {
        let vault = ctx.discover_or_open_vault()?;
        folders::execute_check(ctx.cli, &vault, path)
    }
}
