use std::collections::{BTreeSet, HashMap, VecDeque};

use crate::error::Result;
use crate::graph::algos::shared::{
    highlight_shortest_paths, require_vertex, Scan, Selection, ShortestPaths, Tentative,
};
use crate::graph::step::{Algorithm, Step};
use crate::graph::structure::Graph;
use crate::graph::types::{Distance, Marker, VertexId};

/// Frontier key: distance first, then insertion sequence so equal
/// distances come out in the order they were (re)queued
type FrontierKey = (Distance, u64, VertexId);

/// Min-ordered frontier with decrease-key by remove-then-reinsert
#[derive(Debug, Default)]
struct Frontier {
    entries: BTreeSet<FrontierKey>,
    keys: HashMap<VertexId, FrontierKey>,
    sequence: u64,
}

impl Frontier {
    fn push(&mut self, vertex: VertexId, distance: Distance) {
        if let Some(old) = self.keys.remove(&vertex) {
            self.entries.remove(&old);
        }
        let key = (distance, self.sequence, vertex);
        self.sequence += 1;
        self.entries.insert(key);
        self.keys.insert(vertex, key);
    }

    fn contains(&self, vertex: VertexId) -> bool {
        self.keys.contains_key(&vertex)
    }

    fn pop_min(&mut self) -> Option<(VertexId, Distance)> {
        let (distance, _, vertex) = self.entries.pop_first()?;
        self.keys.remove(&vertex);
        Some((vertex, distance))
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.keys.clear();
    }
}

/// Dijkstra's single-source shortest paths.
///
/// Negative edge weights are not supported: a vertex is settled once it
/// leaves the frontier and a later, cheaper route to it is ignored, so the
/// returned distances always match the returned paths.
pub struct Dijkstra<'g> {
    graph: &'g mut Graph,
    source: VertexId,
    frontier: Frontier,
    tentative: Tentative,
    scan: Option<Scan>,
    selection: Selection,
}

impl<'g> Dijkstra<'g> {
    #[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
    pub fn new(graph: &'g mut Graph, source: VertexId) -> Result<Self> {
        require_vertex(graph, source)?;
        graph.reset_markers();
        graph.clear_highlighting();
        graph.clear_selection();

        let tentative = Tentative::new(graph, source);
        let mut frontier = Frontier::default();
        for vertex in graph.vertex_ids() {
            frontier.push(vertex, tentative.distance(vertex));
        }

        Ok(Self {
            graph,
            source,
            frontier,
            tentative,
            scan: None,
            selection: Selection::default(),
        })
    }

    fn mark(&mut self, vertex: VertexId, marker: Marker, steps: &mut VecDeque<Step>) {
        self.graph.set_marker(vertex, marker);
        tracing::trace!(%vertex, %marker, "vertex marked");
        steps.push_back(Step::VertexMarked { vertex, marker });
    }

    fn settle_next(&mut self, steps: &mut VecDeque<Step>) -> bool {
        match self.frontier.pop_min() {
            Some((vertex, distance)) if distance.is_finite() => {
                self.mark(vertex, Marker::InProgress, steps);
                self.scan = Some(Scan::new(self.graph, vertex));
                true
            }
            Some((vertex, _)) => {
                // Everything left in the frontier is unreachable
                tracing::debug!(%vertex, remaining = self.frontier.entries.len(), "frontier unreachable");
                self.frontier.clear();
                self.complete();
                false
            }
            None => {
                self.complete();
                false
            }
        }
    }

    fn complete(&mut self) {
        self.selection.clear(self.graph);
        let forest = self.tentative.forest();
        highlight_shortest_paths(self.graph, &forest);
        tracing::debug!(source = %self.source, reachable = forest.len(), "dijkstra finished");
    }
}

impl Algorithm for Dijkstra<'_> {
    type Output = Result<ShortestPaths>;

    fn advance(&mut self, steps: &mut VecDeque<Step>) -> bool {
        let Some(scan) = self.scan.as_mut() else {
            return self.settle_next(steps);
        };

        let from = scan.vertex;
        match scan.next_neighbor() {
            Some(neighbor) => {
                self.selection.select(self.graph, from, neighbor);
                if self.frontier.contains(neighbor) {
                    if let Some(distance) =
                        self.tentative.relax_edge(self.graph, from, neighbor, steps)
                    {
                        self.frontier.push(neighbor, distance);
                    }
                } else if let Some(distance) = self
                    .graph
                    .edge(from, neighbor)
                    .and_then(|e| self.tentative.improvement(from, neighbor, e.weight()))
                {
                    // Settled distances are final; the cheaper route is dropped
                    tracing::warn!(
                        vertex = %neighbor,
                        %distance,
                        "settled vertex not updated; negative weights are not supported"
                    );
                }
            }
            None => {
                self.selection.clear(self.graph);
                self.scan = None;
                self.mark(from, Marker::Done, steps);
            }
        }
        true
    }

    fn graph(&self) -> &Graph {
        self.graph
    }

    fn into_output(self) -> Result<ShortestPaths> {
        Ok(self.tentative.forest())
    }
}
