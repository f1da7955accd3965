use serde::Serialize;
use std::collections::{BTreeMap, HashMap, VecDeque};

use crate::error::{GraphError, Result};
use crate::graph::step::Step;
use crate::graph::structure::Graph;
use crate::graph::types::{Distance, VertexId, Weight};

/// Predecessor links recorded during one run
pub type Predecessors = HashMap<VertexId, VertexId>;

/// Cursor over the neighbors of one vertex, consumed an edge at a time
#[derive(Debug, Clone)]
pub struct Scan {
    pub vertex: VertexId,
    neighbors: Vec<VertexId>,
    next: usize,
}

impl Scan {
    pub fn new(graph: &Graph, vertex: VertexId) -> Self {
        Self {
            vertex,
            neighbors: graph.neighbors(vertex),
            next: 0,
        }
    }

    pub fn next_neighbor(&mut self) -> Option<VertexId> {
        let neighbor = self.neighbors.get(self.next).copied()?;
        self.next += 1;
        Some(neighbor)
    }
}

/// Fail unless `vertex` belongs to `graph`
pub fn require_vertex(graph: &Graph, vertex: VertexId) -> Result<()> {
    if graph.contains_vertex(vertex) {
        Ok(())
    } else {
        Err(GraphError::unknown_vertex(vertex))
    }
}

/// Walk predecessor links back from `destination`.
///
/// The walk takes at most `limit` steps, so an inconsistent (cyclic)
/// predecessor map still terminates.
pub fn reconstruct_path(
    predecessors: &Predecessors,
    destination: VertexId,
    limit: usize,
) -> Vec<VertexId> {
    let mut path = vec![destination];
    let mut current = destination;

    while let Some(&previous) = predecessors.get(&current) {
        if path.len() > limit {
            tracing::debug!(%destination, limit, "predecessor chain exceeds vertex count");
            break;
        }
        path.push(previous);
        current = previous;
    }

    path.reverse();
    path
}

/// Clear highlighting, then highlight every edge along `path`
pub fn highlight_path(graph: &mut Graph, path: &[VertexId]) {
    graph.clear_highlighting();
    for pair in path.windows(2) {
        graph.highlight_edge_between(pair[0], pair[1]);
    }
}

/// Shortest paths from one source to every vertex with a finite distance
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPaths {
    source: VertexId,
    paths: BTreeMap<VertexId, Vec<VertexId>>,
    distances: BTreeMap<VertexId, Distance>,
}

impl ShortestPaths {
    /// Build the forest from a run's final distance and predecessor maps.
    /// Vertices at infinite distance are left out.
    pub fn from_predecessors(
        source: VertexId,
        distances: &HashMap<VertexId, Distance>,
        predecessors: &Predecessors,
        limit: usize,
    ) -> Self {
        let distances: BTreeMap<VertexId, Distance> = distances
            .iter()
            .filter(|(_, d)| d.is_finite())
            .map(|(&v, &d)| (v, d))
            .collect();
        let paths = distances
            .keys()
            .map(|&v| (v, reconstruct_path(predecessors, v, limit)))
            .collect();

        Self {
            source,
            paths,
            distances,
        }
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn path_to(&self, vertex: VertexId) -> Option<&[VertexId]> {
        self.paths.get(&vertex).map(Vec::as_slice)
    }

    pub fn distance_to(&self, vertex: VertexId) -> Option<Distance> {
        self.distances.get(&vertex).copied()
    }

    pub fn contains(&self, vertex: VertexId) -> bool {
        self.paths.contains_key(&vertex)
    }

    /// Reachable vertices in id order
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.paths.keys().copied()
    }

    pub fn paths(&self) -> &BTreeMap<VertexId, Vec<VertexId>> {
        &self.paths
    }

    pub fn distances(&self) -> &BTreeMap<VertexId, Distance> {
        &self.distances
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Tentative distances and predecessors of one extremal-path run
#[derive(Debug, Clone)]
pub struct Tentative {
    source: VertexId,
    distances: HashMap<VertexId, Distance>,
    predecessors: Predecessors,
    /// Forest children per vertex, for keeping vertex highlights in step
    children: HashMap<VertexId, usize>,
    limit: usize,
}

impl Tentative {
    /// Every vertex starts infinitely far away except `source`
    pub fn new(graph: &Graph, source: VertexId) -> Self {
        let distances = graph
            .vertices()
            .iter()
            .map(|v| {
                let d = if v.id() == source {
                    Distance::ZERO
                } else {
                    Distance::INFINITE
                };
                (v.id(), d)
            })
            .collect();

        Self {
            source,
            distances,
            predecessors: Predecessors::new(),
            children: HashMap::new(),
            limit: graph.vertex_count(),
        }
    }

    pub fn distance(&self, vertex: VertexId) -> Distance {
        self.distances
            .get(&vertex)
            .copied()
            .unwrap_or(Distance::INFINITE)
    }

    /// Distance `to` would get by arriving over `from -> to`, if that
    /// improves on what is known
    pub fn improvement(&self, from: VertexId, to: VertexId, weight: Weight) -> Option<Distance> {
        let candidate = self.distance(from).extend(weight);
        (candidate.is_finite() && candidate < self.distance(to)).then_some(candidate)
    }

    /// Relax the edge `from -> to`. On improvement the new distance and
    /// predecessor are recorded, the forest highlighting is moved from the
    /// old tree edge to the new one and a step is pushed.
    pub fn relax_edge(
        &mut self,
        graph: &mut Graph,
        from: VertexId,
        to: VertexId,
        steps: &mut VecDeque<Step>,
    ) -> Option<Distance> {
        let weight = graph.edge(from, to)?.weight();
        let distance = self.improvement(from, to, weight)?;

        tracing::trace!(%from, %to, %distance, "edge relaxed");
        self.distances.insert(to, distance);
        self.reparent(graph, to, from);
        steps.push_back(Step::EdgeRelaxed { from, to, distance });
        Some(distance)
    }

    /// Make `parent` the predecessor of `vertex`, updating only the
    /// highlights of the two tree edges involved
    fn reparent(&mut self, graph: &mut Graph, vertex: VertexId, parent: VertexId) {
        if let Some(old) = self.predecessors.insert(vertex, parent) {
            // In a predecessor cycle both directions can share one undirected edge
            if self.predecessors.get(&old) != Some(&vertex) {
                graph.unhighlight_edge_between(old, vertex);
            }
            if let Some(count) = self.children.get_mut(&old) {
                *count = count.saturating_sub(1);
                if *count == 0 {
                    graph.unhighlight_vertex(old);
                }
            }
        }

        graph.highlight_edge_between(parent, vertex);
        graph.highlight_vertex(parent);
        *self.children.entry(parent).or_insert(0) += 1;
    }

    pub fn forest(&self) -> ShortestPaths {
        ShortestPaths::from_predecessors(
            self.source,
            &self.distances,
            &self.predecessors,
            self.limit,
        )
    }
}

/// The one edge currently shown as being relaxed
#[derive(Debug, Default)]
pub struct Selection(Option<usize>);

impl Selection {
    pub fn select(&mut self, graph: &mut Graph, from: VertexId, to: VertexId) {
        self.clear(graph);
        if let Some(index) = graph.edge_index(from, to) {
            graph.set_selected(index, true);
            self.0 = Some(index);
        }
    }

    pub fn clear(&mut self, graph: &mut Graph) {
        if let Some(index) = self.0.take() {
            graph.set_selected(index, false);
        }
    }
}

/// Clear highlighting, then highlight every edge and every vertex except
/// the last on each path of the forest
pub fn highlight_shortest_paths(graph: &mut Graph, paths: &ShortestPaths) {
    graph.clear_highlighting();
    for path in paths.paths.values() {
        for pair in path.windows(2) {
            graph.highlight_edge_between(pair[0], pair[1]);
            graph.highlight_vertex(pair[0]);
        }
    }
}
