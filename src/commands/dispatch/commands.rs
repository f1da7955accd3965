//! Command implementations for all graphstep commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{path, shortest, traverse};
use graphstep_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Traverse(args) => traverse::execute(ctx, args),
            Commands::Path(args) => path::execute(ctx, args),
            Commands::Shortest(args) => shortest::execute(ctx, args),
        }
    }
}
