//! Graph construction from command-line flags

use std::f32::consts::PI;

use crate::cli::GraphArgs;
use graphstep_core::config::EngineConfig;
use graphstep_core::error::Result;
use graphstep_core::graph::{Graph, Point, Vertex, VertexIdAllocator};
use graphstep_core::{bail_invalid, bail_usage};

/// Build the graph described by `args`: vertices 1..=N evenly spaced on a
/// circle, then the edges in the order given
pub fn build_graph(args: &GraphArgs, config: &EngineConfig) -> Result<Graph> {
    if args.vertices == 0 {
        bail_usage!("--vertices must be at least 1");
    }

    let mut graph = config.new_graph(args.kind());
    let mut ids = VertexIdAllocator::new();
    for position in circle_layout(args.vertices, graph.vertex_radius()) {
        let id = ids.allocate();
        if !graph.add_vertex(Vertex::new(id, position)) {
            bail_invalid!("vertex {} collides with an existing vertex", id);
        }
    }

    for edge in &args.edges {
        let weight = edge.weight.unwrap_or(config.canvas.default_edge_weight);
        if !graph.add_edge(edge.from, edge.to, weight)? {
            tracing::warn!(from = %edge.from, to = %edge.to, "duplicate edge ignored");
        }
    }

    tracing::debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        kind = ?graph.kind(),
        "graph built"
    );
    Ok(graph)
}

/// Positions for `count` vertices on a circle wide enough that neighbours
/// sit three radii apart
pub fn circle_layout(count: u32, vertex_radius: f32) -> Vec<Point> {
    let n = count as f32;
    let ring = if count <= 1 {
        0.0
    } else {
        1.5 * vertex_radius / (PI / n).sin()
    };
    let center = ring + vertex_radius;

    (0..count)
        .map(|i| {
            let angle = 2.0 * PI * i as f32 / n;
            Point::new(center + ring * angle.cos(), center + ring * angle.sin())
        })
        .collect()
}
