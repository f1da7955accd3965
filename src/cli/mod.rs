//! CLI argument parsing for graphstep
//!
//! Uses clap for argument parsing.
//! Supports global flags: --format, --quiet, --verbose, --config, --delay-ms

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{GraphArgs, PathArgs, ShortestArgs, ShortestAlgorithm, TraversalAlgorithm, TraverseArgs};
pub use graphstep_core::format::OutputFormat;
use parse::parse_output_format;

/// Graphstep - build a graph and watch classical algorithms run on it
#[derive(Parser, Debug)]
#[command(name = "graphstep")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_parser = parse_output_format, default_value = "human")]
    pub format: OutputFormat,

    /// Print only the final result, not every step
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (e.g. "trace", or a full directive like "graphstep_core=debug")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Engine configuration file (TOML)
    #[arg(long, global = true, env = "GRAPHSTEP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Delay between steps in milliseconds, overriding the configured pacing
    #[arg(long, global = true)]
    pub delay_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Visit every vertex reachable from a source
    Traverse(TraverseArgs),

    /// Look for a path between two vertices
    Path(PathArgs),

    /// Compute shortest paths from a source to every reachable vertex
    Shortest(ShortestArgs),
}
