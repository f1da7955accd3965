//! The owned vertex/edge collections and their structural rules

use serde::Serialize;

use crate::bail_invalid;
use crate::error::Result;

use super::edge::Edge;
use super::types::{GraphKind, Marker, VertexId, Weight};
use super::vertex::{Vertex, DEFAULT_VERTEX_RADIUS};

/// A directed or undirected graph.
///
/// Vertices and edges are kept in insertion order. Neighbor enumeration
/// follows edge insertion order, which is what makes every algorithm's
/// tie-breaking deterministic.
#[derive(Debug, Clone, Serialize)]
pub struct Graph {
    kind: GraphKind,
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    #[serde(skip)]
    vertex_radius: f32,
}

impl Graph {
    pub fn new(kind: GraphKind) -> Self {
        Self::with_vertex_radius(kind, DEFAULT_VERTEX_RADIUS)
    }

    pub fn directed() -> Self {
        Self::new(GraphKind::Directed)
    }

    pub fn undirected() -> Self {
        Self::new(GraphKind::Undirected)
    }

    /// Create a graph whose collision and hit tests use `vertex_radius`
    pub fn with_vertex_radius(kind: GraphKind, vertex_radius: f32) -> Self {
        Self {
            kind,
            vertices: Vec::new(),
            edges: Vec::new(),
            vertex_radius,
        }
    }

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    pub fn is_directed(&self) -> bool {
        self.kind == GraphKind::Directed
    }

    pub fn vertex_radius(&self) -> f32 {
        self.vertex_radius
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.iter().find(|v| v.id() == id)
    }

    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.vertex(id).is_some()
    }

    pub fn vertex_ids(&self) -> Vec<VertexId> {
        self.vertices.iter().map(Vertex::id).collect()
    }

    pub(crate) fn vertex_mut(&mut self, id: VertexId) -> Option<&mut Vertex> {
        self.vertices.iter_mut().find(|v| v.id() == id)
    }

    /// Insert a vertex unless it collides with one already placed.
    ///
    /// Returns whether the vertex was inserted.
    pub fn add_vertex(&mut self, vertex: Vertex) -> bool {
        let radius = self.vertex_radius;
        if self.vertices.iter().any(|v| v.collides(&vertex, radius)) {
            tracing::debug!(vertex = %vertex.id(), "vertex collides, not added");
            return false;
        }
        self.vertices.push(vertex);
        true
    }

    /// Insert an edge between two member vertices.
    ///
    /// Returns `Ok(false)` when an equivalent edge already exists (the
    /// existing edge and its weight are kept).
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, weight: Weight) -> Result<bool> {
        if !self.contains_vertex(from) || !self.contains_vertex(to) {
            bail_invalid!(
                "both endpoints of edge {} -> {} must be part of the graph",
                from,
                to
            );
        }

        let directed = self.is_directed();
        if self.edges.iter().any(|e| e.connects(from, to)) {
            return Ok(false);
        }

        let mut edge = Edge::new(from, to, weight, directed);
        if directed {
            if let Some(reverse) = self
                .edges
                .iter_mut()
                .find(|e| e.from() == to && e.to() == from)
            {
                reverse.curved = true;
                edge.curved = true;
            }
        }

        self.edges.push(edge);
        Ok(true)
    }

    /// Remove the vertex at `index` and every edge touching it.
    pub fn remove_vertex(&mut self, index: usize) -> Option<Vertex> {
        if index >= self.vertices.len() {
            return None;
        }
        let removed = self.vertices.remove(index);
        let id = removed.id();
        self.edges.retain(|e| !e.touches(id));
        Some(removed)
    }

    /// Remove the edge at `index`. A surviving opposite edge loses its
    /// curved hint.
    pub fn remove_edge(&mut self, index: usize) -> Option<Edge> {
        if index >= self.edges.len() {
            return None;
        }
        let removed = self.edges.remove(index);
        if removed.is_curved() {
            for edge in &mut self.edges {
                if edge.from() == removed.to() && edge.to() == removed.from() {
                    edge.curved = false;
                }
            }
        }
        Some(removed)
    }

    /// Change the weight of the edge at `index`; returns false for a bad index
    pub fn set_edge_weight(&mut self, index: usize, weight: Weight) -> bool {
        match self.edges.get_mut(index) {
            Some(edge) => {
                edge.weight = weight;
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
    }

    /// Vertices adjacent to `vertex`, in edge insertion order.
    ///
    /// Directed graphs follow outgoing edges only; undirected graphs return
    /// the opposite endpoint of every incident edge.
    pub fn neighbors(&self, vertex: VertexId) -> Vec<VertexId> {
        match self.kind {
            GraphKind::Directed => self
                .edges
                .iter()
                .filter(|e| e.from() == vertex)
                .map(Edge::to)
                .collect(),
            GraphKind::Undirected => self
                .edges
                .iter()
                .filter(|e| e.touches(vertex))
                .map(|e| e.other_end(vertex))
                .collect(),
        }
    }

    /// Position of the edge `a -> b` (either orientation when undirected)
    pub fn edge_index(&self, a: VertexId, b: VertexId) -> Option<usize> {
        self.edges
            .iter()
            .position(|e| e.from() == a && e.to() == b)
            .or_else(|| self.edges.iter().position(|e| e.connects(a, b)))
    }

    pub fn edge(&self, a: VertexId, b: VertexId) -> Option<&Edge> {
        self.edge_index(a, b).map(|i| &self.edges[i])
    }

    pub fn highlight_vertex(&mut self, id: VertexId) {
        if let Some(vertex) = self.vertex_mut(id) {
            vertex.highlighted = true;
        }
    }

    pub fn highlight_edge(&mut self, index: usize) {
        if let Some(edge) = self.edges.get_mut(index) {
            edge.highlighted = true;
        }
    }

    /// Highlight the edge `a -> b` if there is one
    pub fn highlight_edge_between(&mut self, a: VertexId, b: VertexId) {
        if let Some(index) = self.edge_index(a, b) {
            self.highlight_edge(index);
        }
    }

    pub(crate) fn unhighlight_vertex(&mut self, id: VertexId) {
        if let Some(vertex) = self.vertex_mut(id) {
            vertex.highlighted = false;
        }
    }

    pub(crate) fn unhighlight_edge_between(&mut self, a: VertexId, b: VertexId) {
        if let Some(index) = self.edge_index(a, b) {
            self.edges[index].highlighted = false;
        }
    }

    pub fn clear_highlighting(&mut self) {
        self.vertices.iter_mut().for_each(|v| v.highlighted = false);
        self.edges.iter_mut().for_each(|e| e.highlighted = false);
    }

    pub(crate) fn clear_selection(&mut self) {
        self.edges.iter_mut().for_each(|e| e.selected = false);
    }

    /// Put every vertex back to `Unvisited`
    pub fn reset_markers(&mut self) {
        self.vertices
            .iter_mut()
            .for_each(|v| v.marker = Marker::Unvisited);
    }

    /// Zero every discovery and finish time
    pub(crate) fn clear_timestamps(&mut self) {
        self.vertices.iter_mut().for_each(|v| {
            v.discovery_time = 0;
            v.finish_time = 0;
        });
    }

    pub(crate) fn set_marker(&mut self, id: VertexId, marker: Marker) {
        if let Some(vertex) = self.vertex_mut(id) {
            vertex.marker = marker;
        }
    }

    pub(crate) fn marker_of(&self, id: VertexId) -> Marker {
        self.vertex(id).map_or(Marker::Unvisited, Vertex::marker)
    }

    pub(crate) fn set_selected(&mut self, index: usize, selected: bool) {
        if let Some(edge) = self.edges.get_mut(index) {
            edge.selected = selected;
        }
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::directed()
    }
}

#[cfg(test)]
mod tests;
