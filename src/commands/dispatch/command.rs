//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::Cli;
use graphstep_core::config::{EngineConfig, PacingConfig};
use graphstep_core::error::Result;

/// Load the engine configuration named on the command line, if any, and
/// apply the `--delay-ms` override
pub fn load_config(cli: &Cli) -> Result<EngineConfig> {
    let mut config = match &cli.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };

    if let Some(ms) = cli.delay_ms {
        config.pacing = PacingConfig::uniform(ms);
    }

    Ok(config)
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: EngineConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: EngineConfig, start: Instant) -> Self {
        Self { cli, config, start }
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
        println!("graphstep {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Build a graph and watch classical graph algorithms run step by step.");
        println!();
        println!("Run `graphstep --help` for usage information.");
        Ok(())
    }
}
