use std::collections::VecDeque;

use crate::error::Result;
use crate::graph::algos::shared::{reconstruct_path, require_vertex, Predecessors, Scan};
use crate::graph::step::{Algorithm, Step};
use crate::graph::structure::Graph;
use crate::graph::traversal::TraversalOutcome;
use crate::graph::types::{Marker, VertexId};

/// Breadth-first search with a FIFO frontier and tri-color marking.
///
/// Without a destination it visits everything reachable from the source in
/// level order. With one it stops as soon as the destination is discovered.
pub struct BreadthFirst<'g> {
    graph: &'g mut Graph,
    source: VertexId,
    destination: Option<VertexId>,
    started: bool,
    queue: VecDeque<VertexId>,
    scan: Option<Scan>,
    visited: Vec<VertexId>,
    predecessors: Predecessors,
    path: Option<Vec<VertexId>>,
}

impl<'g> BreadthFirst<'g> {
    #[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
    pub fn new(
        graph: &'g mut Graph,
        source: VertexId,
        destination: Option<VertexId>,
    ) -> Result<Self> {
        require_vertex(graph, source)?;
        if let Some(destination) = destination {
            require_vertex(graph, destination)?;
        }

        graph.reset_markers();
        graph.clear_highlighting();

        Ok(Self {
            graph,
            source,
            destination,
            started: false,
            queue: VecDeque::new(),
            scan: None,
            visited: Vec::new(),
            predecessors: Predecessors::new(),
            path: None,
        })
    }

    fn mark(&mut self, vertex: VertexId, marker: Marker, steps: &mut VecDeque<Step>) {
        self.graph.set_marker(vertex, marker);
        if marker == Marker::Done {
            self.graph.highlight_vertex(vertex);
        }
        tracing::trace!(%vertex, %marker, "vertex marked");
        steps.push_back(Step::VertexMarked { vertex, marker });
    }

    fn discover(&mut self, from: VertexId, to: VertexId, steps: &mut VecDeque<Step>) {
        self.graph.highlight_edge_between(from, to);
        steps.push_back(Step::EdgeTraversed { from, to });

        self.mark(to, Marker::InProgress, steps);
        self.predecessors.insert(to, from);
        self.visited.push(to);
        self.queue.push_back(to);
    }

    /// Destination reached: record the path and leave a clean graph for
    /// the caller to highlight it
    fn found(&mut self, destination: VertexId) {
        let limit = self.graph.vertex_count();
        self.path = Some(reconstruct_path(&self.predecessors, destination, limit));
        self.graph.reset_markers();
        self.graph.clear_highlighting();
        tracing::debug!(%destination, visited = self.visited.len(), "bfs reached destination");
    }

    fn exhausted(&mut self) {
        if self.destination.is_some() {
            self.graph.reset_markers();
        }
        self.graph.clear_highlighting();
        tracing::debug!(
            source = %self.source,
            visited = self.visited.len(),
            "bfs exhausted reachable vertices"
        );
    }
}

impl Algorithm for BreadthFirst<'_> {
    type Output = TraversalOutcome;

    fn advance(&mut self, steps: &mut VecDeque<Step>) -> bool {
        if self.path.is_some() {
            return false;
        }

        if !self.started {
            self.started = true;
            self.mark(self.source, Marker::InProgress, steps);
            self.visited.push(self.source);
            self.queue.push_back(self.source);
            return true;
        }

        if let Some(scan) = self.scan.as_mut() {
            let from = scan.vertex;
            match scan.next_neighbor() {
                Some(neighbor) => {
                    if self.graph.marker_of(neighbor) == Marker::Unvisited {
                        self.discover(from, neighbor, steps);
                        if self.destination == Some(neighbor) {
                            self.found(neighbor);
                            return false;
                        }
                    }
                }
                None => {
                    self.scan = None;
                    self.mark(from, Marker::Done, steps);
                }
            }
            return true;
        }

        match self.queue.pop_front() {
            Some(vertex) if self.destination == Some(vertex) => {
                self.found(vertex);
                false
            }
            Some(vertex) => {
                self.scan = Some(Scan::new(self.graph, vertex));
                true
            }
            None => {
                self.exhausted();
                false
            }
        }
    }

    fn graph(&self) -> &Graph {
        self.graph
    }

    fn into_output(self) -> TraversalOutcome {
        TraversalOutcome {
            visited: self.visited,
            path: self.path,
        }
    }
}
