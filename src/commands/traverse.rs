//! `graphstep traverse` command

use serde_json::json;

use crate::cli::{OutputFormat, TraverseArgs};
use crate::commands::dispatch::{trace_command, CommandContext};
use crate::commands::graph::build_graph;
use crate::commands::output::format_ids;
use crate::commands::playback::Playback;
use graphstep_core::error::Result;
use graphstep_core::graph::{GraphTraversal, VertexId};

pub fn execute(ctx: &CommandContext, args: &TraverseArgs) -> Result<()> {
    let mut graph = build_graph(&args.graph, &ctx.config)?;
    trace_command!(ctx.cli, ctx.start, "build_graph");

    let algorithm = GraphTraversal::from(args.algorithm);
    let source = VertexId::new(args.source);
    let playback = Playback::new(ctx, ctx.config.pacing.traversal_delay(algorithm));
    let outcome = playback.play(algorithm.traverse(&mut graph, source)?)?;

    trace_command!(ctx.cli, ctx.start, "traverse");

    match ctx.cli.format {
        OutputFormat::Human => {
            println!("Visit order: {}", format_ids(&outcome.visited));
        }
        OutputFormat::Json => {
            let output = json!({
                "algorithm": algorithm.as_str(),
                "source": source,
                "visited": outcome.visited,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
