//! `graphstep shortest` command

use serde_json::json;

use crate::cli::{OutputFormat, ShortestArgs};
use crate::commands::dispatch::{trace_command, CommandContext};
use crate::commands::graph::build_graph;
use crate::commands::output::{format_path, highlighted_edges};
use crate::commands::playback::Playback;
use graphstep_core::error::Result;
use graphstep_core::graph::{ExtremalPath, VertexId};

pub fn execute(ctx: &CommandContext, args: &ShortestArgs) -> Result<()> {
    let mut graph = build_graph(&args.graph, &ctx.config)?;
    trace_command!(ctx.cli, ctx.start, "build_graph");

    let algorithm = ExtremalPath::from(args.algorithm);
    let source = VertexId::new(args.source);
    let playback = Playback::new(ctx, ctx.config.pacing.extremal_delay());
    let paths = playback.play(algorithm.start(&mut graph, source)?)??;

    trace_command!(ctx.cli, ctx.start, "shortest_paths");

    ExtremalPath::highlight_shortest_paths(&mut graph, &paths);
    let unreachable: Vec<VertexId> = graph
        .vertex_ids()
        .into_iter()
        .filter(|id| !paths.contains(*id))
        .collect();

    match ctx.cli.format {
        OutputFormat::Human => {
            println!("Shortest paths from {} ({}):", source, algorithm);
            for (vertex, path) in paths.paths() {
                let distance = paths
                    .distance_to(*vertex)
                    .map(|d| d.to_string())
                    .unwrap_or_default();
                println!("  {}: distance {}, path {}", vertex, distance, format_path(path));
            }
            for vertex in &unreachable {
                println!("  {}: unreachable", vertex);
            }
        }
        OutputFormat::Json => {
            let output = json!({
                "algorithm": algorithm.as_str(),
                "source": source,
                "distances": paths.distances(),
                "paths": paths.paths(),
                "unreachable": unreachable,
                "highlighted_edges": highlighted_edges(&graph),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
