use std::collections::{HashSet, VecDeque};

use crate::error::Result;
use crate::graph::algos::shared::{
    highlight_shortest_paths, require_vertex, Scan, Selection, ShortestPaths, Tentative,
};
use crate::graph::step::{Algorithm, Step};
use crate::graph::structure::Graph;
use crate::graph::types::{Marker, VertexId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Sorting,
    Relaxing,
    Finished,
}

/// Shortest paths over a DAG: topological sort, then one relaxation pass.
///
/// The order comes from depth-first post-order over every vertex. On a
/// graph with a cycle that order is not topological and the result may be
/// suboptimal; no error is raised. Despite the name the pass minimises
/// distances.
pub struct CriticalPath<'g> {
    graph: &'g mut Graph,
    source: VertexId,
    phase: Phase,
    roots: Vec<VertexId>,
    cursor: usize,
    stack: Vec<Scan>,
    seen: HashSet<VertexId>,
    order: Vec<VertexId>,
    scan: Option<Scan>,
    tentative: Tentative,
    selection: Selection,
}

impl<'g> CriticalPath<'g> {
    #[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
    pub fn new(graph: &'g mut Graph, source: VertexId) -> Result<Self> {
        require_vertex(graph, source)?;
        graph.reset_markers();
        graph.clear_highlighting();
        graph.clear_selection();

        let roots = graph.vertex_ids();
        let tentative = Tentative::new(graph, source);
        Ok(Self {
            graph,
            source,
            phase: Phase::Sorting,
            order: Vec::with_capacity(roots.len()),
            roots,
            cursor: 0,
            stack: Vec::new(),
            seen: HashSet::new(),
            scan: None,
            tentative,
            selection: Selection::default(),
        })
    }

    fn mark(&mut self, vertex: VertexId, marker: Marker, steps: &mut VecDeque<Step>) {
        self.graph.set_marker(vertex, marker);
        tracing::trace!(%vertex, %marker, "vertex marked");
        steps.push_back(Step::VertexMarked { vertex, marker });
    }

    fn enter(&mut self, vertex: VertexId, steps: &mut VecDeque<Step>) {
        self.seen.insert(vertex);
        self.mark(vertex, Marker::InProgress, steps);
        self.stack.push(Scan::new(self.graph, vertex));
    }

    fn sort_step(&mut self, steps: &mut VecDeque<Step>) {
        if let Some(top) = self.stack.last_mut() {
            let vertex = top.vertex;
            match top.next_neighbor() {
                Some(neighbor) if !self.seen.contains(&neighbor) => self.enter(neighbor, steps),
                Some(_) => {}
                None => {
                    self.stack.pop();
                    self.mark(vertex, Marker::Done, steps);
                    self.order.push(vertex);
                }
            }
            return;
        }

        match self.roots.get(self.cursor).copied() {
            Some(root) => {
                self.cursor += 1;
                if !self.seen.contains(&root) {
                    self.enter(root, steps);
                }
            }
            None => {
                // Reversed post-order is the topological order
                self.order.reverse();
                self.cursor = 0;
                self.phase = Phase::Relaxing;
                tracing::debug!(order = ?self.order, "topological order computed");
            }
        }
    }

    fn relax_step(&mut self, steps: &mut VecDeque<Step>) {
        if let Some(scan) = self.scan.as_mut() {
            let from = scan.vertex;
            match scan.next_neighbor() {
                Some(neighbor) => {
                    self.selection.select(self.graph, from, neighbor);
                    self.tentative
                        .relax_edge(self.graph, from, neighbor, steps);
                }
                None => {
                    self.selection.clear(self.graph);
                    self.scan = None;
                    self.mark(from, Marker::Done, steps);
                }
            }
            return;
        }

        match self.order.get(self.cursor).copied() {
            Some(vertex) => {
                self.cursor += 1;
                self.mark(vertex, Marker::InProgress, steps);
                self.scan = Some(Scan::new(self.graph, vertex));
            }
            None => {
                self.selection.clear(self.graph);
                let forest = self.tentative.forest();
                highlight_shortest_paths(self.graph, &forest);
                self.phase = Phase::Finished;
                tracing::debug!(source = %self.source, reachable = forest.len(), "critical path finished");
            }
        }
    }
}

impl Algorithm for CriticalPath<'_> {
    type Output = Result<ShortestPaths>;

    fn advance(&mut self, steps: &mut VecDeque<Step>) -> bool {
        match self.phase {
            Phase::Sorting => self.sort_step(steps),
            Phase::Relaxing => self.relax_step(steps),
            Phase::Finished => {}
        }
        self.phase != Phase::Finished
    }

    fn graph(&self) -> &Graph {
        self.graph
    }

    fn into_output(self) -> Result<ShortestPaths> {
        Ok(self.tentative.forest())
    }
}
