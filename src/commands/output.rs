//! Helpers shared by the command result printers

use graphstep_core::graph::{Graph, VertexId};

/// `1 -> 2 -> 3`
pub fn format_path(path: &[VertexId]) -> String {
    path.iter()
        .map(VertexId::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// `1 2 3`
pub fn format_ids(ids: &[VertexId]) -> String {
    ids.iter()
        .map(VertexId::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Endpoints of every highlighted edge, in edge order
pub fn highlighted_edges(graph: &Graph) -> Vec<[VertexId; 2]> {
    graph
        .edges()
        .iter()
        .filter(|e| e.is_highlighted())
        .map(|e| [e.from(), e.to()])
        .collect()
}
