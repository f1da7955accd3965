use std::collections::VecDeque;

use crate::error::Result;
use crate::graph::algos::shared::{reconstruct_path, require_vertex, Predecessors, Scan};
use crate::graph::step::{Algorithm, Step};
use crate::graph::structure::Graph;
use crate::graph::traversal::TraversalOutcome;
use crate::graph::types::{Marker, VertexId};

/// Depth-first search with discovery/finish timestamps.
///
/// The recursion of the textbook formulation lives in `stack`, one frame
/// per vertex still being explored, so the search can pause between any
/// two steps. A path query returns the first path the descent finds, which
/// is not necessarily the shortest.
pub struct DepthFirst<'g> {
    graph: &'g mut Graph,
    source: VertexId,
    destination: Option<VertexId>,
    started: bool,
    clock: u32,
    stack: Vec<Scan>,
    visited: Vec<VertexId>,
    predecessors: Predecessors,
    path: Option<Vec<VertexId>>,
}

impl<'g> DepthFirst<'g> {
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

        // A vertex trivially reaches itself; the graph is left untouched.
        let path = (destination == Some(source)).then(|| vec![source]);
        let visited = if path.is_some() {
            vec![source]
        } else {
            graph.reset_markers();
            graph.clear_timestamps();
            graph.clear_highlighting();
            Vec::new()
        };

        Ok(Self {
            graph,
            source,
            destination,
            started: false,
            clock: 0,
            stack: Vec::new(),
            visited,
            predecessors: Predecessors::new(),
            path,
        })
    }

    fn tick(&mut self) -> u32 {
        self.clock += 1;
        self.clock
    }

    fn discover(&mut self, vertex: VertexId, steps: &mut VecDeque<Step>) {
        let time = self.tick();
        if let Some(v) = self.graph.vertex_mut(vertex) {
            v.marker = Marker::InProgress;
            v.discovery_time = time;
            v.highlighted = true;
        }
        steps.push_back(Step::VertexMarked {
            vertex,
            marker: Marker::InProgress,
        });

        self.visited.push(vertex);
        self.stack.push(Scan::new(self.graph, vertex));
    }

    fn finish_vertex(&mut self, vertex: VertexId, steps: &mut VecDeque<Step>) {
        let time = self.tick();
        if let Some(v) = self.graph.vertex_mut(vertex) {
            v.marker = Marker::Done;
            v.finish_time = time;
            v.highlighted = true;
        }
        steps.push_back(Step::VertexMarked {
            vertex,
            marker: Marker::Done,
        });
    }

    fn found(&mut self, destination: VertexId) {
        let limit = self.graph.vertex_count();
        self.path = Some(reconstruct_path(&self.predecessors, destination, limit));
        self.stack.clear();
        self.graph.reset_markers();
        tracing::debug!(%destination, visited = self.visited.len(), "dfs reached destination");
    }

    fn exhausted(&mut self) {
        if self.destination.is_some() {
            self.graph.reset_markers();
        }
        self.graph.clear_highlighting();
        tracing::debug!(
            source = %self.source,
            visited = self.visited.len(),
            clock = self.clock,
            "dfs exhausted reachable vertices"
        );
    }
}

impl Algorithm for DepthFirst<'_> {
    type Output = TraversalOutcome;

    fn advance(&mut self, steps: &mut VecDeque<Step>) -> bool {
        if self.path.is_some() {
            return false;
        }

        if !self.started {
            self.started = true;
            self.discover(self.source, steps);
            return true;
        }

        let Some(top) = self.stack.last_mut() else {
            self.exhausted();
            return false;
        };

        let from = top.vertex;
        match top.next_neighbor() {
            Some(neighbor) if self.graph.marker_of(neighbor) == Marker::Unvisited => {
                self.graph.highlight_edge_between(from, neighbor);
                steps.push_back(Step::EdgeTraversed { from, to: neighbor });
                self.predecessors.insert(neighbor, from);

                if self.destination == Some(neighbor) {
                    self.visited.push(neighbor);
                    self.found(neighbor);
                    return false;
                }
                self.discover(neighbor, steps);
            }
            Some(_) => {}
            None => {
                self.stack.pop();
                self.finish_vertex(from, steps);
            }
        }
        true
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::step::Run;
    use crate::graph::{GraphKind, Point, Vertex};

    fn id(n: u32) -> VertexId {
        VertexId::new(n)
    }

    fn graph_with_edges(kind: GraphKind, count: u32, edges: &[(u32, u32)]) -> Graph {
        let mut graph = Graph::new(kind);
        for n in 1..=count {
            graph.add_vertex(Vertex::new(id(n), Point::new(n as f32 * 100.0, 0.0)));
        }
        for &(from, to) in edges {
            graph.add_edge(id(from), id(to), 1).unwrap();
        }
        graph
    }

    #[test]
    fn test_pre_order_with_full_descent() {
        // 1 -> 2 -> 4, 1 -> 3
        let mut graph = graph_with_edges(GraphKind::Directed, 4, &[(1, 2), (1, 3), (2, 4)]);
        let outcome = Run::new(DepthFirst::new(&mut graph, id(1), None).unwrap()).finish();

        assert_eq!(outcome.visited, vec![id(1), id(2), id(4), id(3)]);
    }

    #[test]
    fn test_timestamps_nest() {
        let mut graph = graph_with_edges(GraphKind::Directed, 3, &[(1, 2), (2, 3)]);
        Run::new(DepthFirst::new(&mut graph, id(1), None).unwrap()).finish();

        let times: Vec<(u32, u32)> = graph
            .vertices()
            .iter()
            .map(|v| (v.discovery_time(), v.finish_time()))
            .collect();
        assert_eq!(times, vec![(1, 6), (2, 5), (3, 4)]);
        assert!(graph.vertices().iter().all(|v| v.marker() == Marker::Done));
    }

    #[test]
    fn test_handles_cycles() {
        let mut graph =
            graph_with_edges(GraphKind::Undirected, 3, &[(1, 2), (2, 3), (3, 1)]);
        let outcome = Run::new(DepthFirst::new(&mut graph, id(1), None).unwrap()).finish();
        assert_eq!(outcome.visited, vec![id(1), id(2), id(3)]);
    }

    #[test]
    fn test_search_returns_first_descent_path() {
        // The direct edge 1 -> 3 comes after the detour through 2
        let mut graph = graph_with_edges(GraphKind::Directed, 3, &[(1, 2), (2, 3), (1, 3)]);
        let outcome =
            Run::new(DepthFirst::new(&mut graph, id(1), Some(id(3))).unwrap()).finish();
        assert_eq!(outcome.path, Some(vec![id(1), id(2), id(3)]));
        assert_eq!(outcome.visited, vec![id(1), id(2), id(3)]);
    }

    #[test]
    fn test_search_visits_match_breadth_first() {
        use crate::graph::algos::BreadthFirst;

        let mut graph = graph_with_edges(GraphKind::Directed, 3, &[(1, 2), (2, 3)]);
        let dfs = Run::new(DepthFirst::new(&mut graph, id(1), Some(id(3))).unwrap()).finish();
        let bfs =
            Run::new(BreadthFirst::new(&mut graph, id(1), Some(id(3))).unwrap()).finish();
        assert_eq!(dfs.visited, bfs.visited);
    }

    #[test]
    fn test_rerun_clears_stale_timestamps() {
        let mut graph = graph_with_edges(GraphKind::Directed, 2, &[(1, 2)]);
        Run::new(DepthFirst::new(&mut graph, id(1), None).unwrap()).finish();
        assert_eq!(graph.vertices()[1].discovery_time(), 2);

        graph.remove_edge(0);
        Run::new(DepthFirst::new(&mut graph, id(1), None).unwrap()).finish();

        let unreachable = &graph.vertices()[1];
        assert_eq!(unreachable.marker(), Marker::Unvisited);
        assert_eq!(unreachable.discovery_time(), 0);
        assert_eq!(unreachable.finish_time(), 0);
        assert_eq!(graph.vertices()[0].discovery_time(), 1);
        assert_eq!(graph.vertices()[0].finish_time(), 2);
    }

    #[test]
    fn test_search_to_self_is_trivial() {
        let mut graph = graph_with_edges(GraphKind::Directed, 2, &[(1, 2)]);
        let mut run = Run::new(DepthFirst::new(&mut graph, id(2), Some(id(2))).unwrap());
        assert!(run.next().is_none());
        let outcome = run.finish();
        assert_eq!(outcome.path, Some(vec![id(2)]));
        assert_eq!(outcome.visited, vec![id(2)]);
    }

    #[test]
    fn test_search_without_path() {
        let mut graph = graph_with_edges(GraphKind::Directed, 3, &[(2, 1), (1, 3)]);
        let outcome =
            Run::new(DepthFirst::new(&mut graph, id(1), Some(id(2))).unwrap()).finish();
        assert!(outcome.path.is_none());
        assert_eq!(outcome.visited, vec![id(1), id(3)]);
    }
}
