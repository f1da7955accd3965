//! `graphstep path` command

use serde_json::json;

use crate::cli::{OutputFormat, PathArgs};
use crate::commands::dispatch::{trace_command, CommandContext};
use crate::commands::graph::build_graph;
use crate::commands::output::{format_path, highlighted_edges};
use crate::commands::playback::Playback;
use graphstep_core::error::Result;
use graphstep_core::graph::{GraphTraversal, VertexId};

pub fn execute(ctx: &CommandContext, args: &PathArgs) -> Result<()> {
    let mut graph = build_graph(&args.graph, &ctx.config)?;
    trace_command!(ctx.cli, ctx.start, "build_graph");

    let algorithm = GraphTraversal::from(args.algorithm);
    let from = VertexId::new(args.from);
    let to = VertexId::new(args.to);
    let playback = Playback::new(ctx, ctx.config.pacing.traversal_delay(algorithm));
    let outcome = playback.play(algorithm.search(&mut graph, from, to)?)?;

    trace_command!(ctx.cli, ctx.start, "search");

    if let Some(path) = &outcome.path {
        GraphTraversal::highlight_path(&mut graph, path);
    }

    match ctx.cli.format {
        OutputFormat::Human => match &outcome.path {
            Some(path) => println!("Path: {}", format_path(path)),
            None => println!("No path from {} to {}", from, to),
        },
        OutputFormat::Json => {
            let output = json!({
                "algorithm": algorithm.as_str(),
                "from": from,
                "to": to,
                "found": outcome.path.is_some(),
                "path": outcome.path,
                "visited": outcome.visited,
                "highlighted_edges": highlighted_edges(&graph),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
