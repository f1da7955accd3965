use std::collections::VecDeque;

use crate::error::{GraphError, Result};
use crate::graph::algos::shared::{
    highlight_shortest_paths, require_vertex, Scan, Selection, ShortestPaths, Tentative,
};
use crate::graph::step::{Algorithm, Step};
use crate::graph::structure::Graph;
use crate::graph::types::VertexId;

/// Bellman-Ford single-source shortest paths with negative-cycle detection.
///
/// Runs exactly `|V| - 1` passes over every edge (vertices in graph order,
/// each vertex's edges in insertion order, unreachable vertices skipped),
/// then one more scan. Any edge that still relaxes on that scan proves a
/// reachable negative cycle and the whole result is discarded.
pub struct BellmanFord<'g> {
    graph: &'g mut Graph,
    source: VertexId,
    order: Vec<VertexId>,
    passes: usize,
    pass: usize,
    cursor: usize,
    scan: Option<Scan>,
    tentative: Tentative,
    selection: Selection,
    cycle: Option<(VertexId, VertexId)>,
}

impl<'g> BellmanFord<'g> {
    #[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
    pub fn new(graph: &'g mut Graph, source: VertexId) -> Result<Self> {
        require_vertex(graph, source)?;
        graph.reset_markers();
        graph.clear_highlighting();
        graph.clear_selection();

        let order = graph.vertex_ids();
        let tentative = Tentative::new(graph, source);
        Ok(Self {
            graph,
            source,
            passes: order.len().saturating_sub(1),
            order,
            pass: 0,
            cursor: 0,
            scan: None,
            tentative,
            selection: Selection::default(),
            cycle: None,
        })
    }

    /// First edge out of a reachable vertex that still improves a distance
    fn find_relaxable_edge(&self) -> Option<(VertexId, VertexId)> {
        self.order
            .iter()
            .filter(|&&v| self.tentative.distance(v).is_finite())
            .flat_map(|&v| self.graph.neighbors(v).into_iter().map(move |n| (v, n)))
            .find(|&(from, to)| {
                self.graph
                    .edge(from, to)
                    .and_then(|e| self.tentative.improvement(from, to, e.weight()))
                    .is_some()
            })
    }

    fn verify(&mut self) {
        self.selection.clear(self.graph);
        match self.find_relaxable_edge() {
            Some((from, to)) => {
                tracing::debug!(source = %self.source, %from, %to, "negative-weight cycle detected");
                self.graph.clear_highlighting();
                self.cycle = Some((from, to));
            }
            None => {
                let forest = self.tentative.forest();
                highlight_shortest_paths(self.graph, &forest);
                tracing::debug!(source = %self.source, reachable = forest.len(), "bellman-ford finished");
            }
        }
    }
}

impl Algorithm for BellmanFord<'_> {
    type Output = Result<ShortestPaths>;

    fn advance(&mut self, steps: &mut VecDeque<Step>) -> bool {
        if let Some(scan) = self.scan.as_mut() {
            let from = scan.vertex;
            match scan.next_neighbor() {
                Some(neighbor) => {
                    self.selection.select(self.graph, from, neighbor);
                    self.tentative
                        .relax_edge(self.graph, from, neighbor, steps);
                }
                None => self.scan = None,
            }
            return true;
        }

        if self.pass >= self.passes {
            self.verify();
            return false;
        }

        match self.order.get(self.cursor).copied() {
            Some(vertex) => {
                self.cursor += 1;
                if self.tentative.distance(vertex).is_finite() {
                    self.scan = Some(Scan::new(self.graph, vertex));
                }
            }
            None => {
                self.pass += 1;
                self.cursor = 0;
                tracing::trace!(pass = self.pass, of = self.passes, "bellman-ford pass complete");
            }
        }
        true
    }

    fn graph(&self) -> &Graph {
        self.graph
    }

    fn into_output(self) -> Result<ShortestPaths> {
        match self.cycle {
            Some((from, to)) => Err(GraphError::NegativeCycle { from, to }),
            None => Ok(self.tentative.forest()),
        }
    }
}
