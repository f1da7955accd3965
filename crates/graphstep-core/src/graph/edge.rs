use serde::Serialize;

use super::types::{VertexId, Weight};

/// A weighted relation between two vertices of the owning graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    from: VertexId,
    to: VertexId,
    pub(crate) weight: Weight,
    directed: bool,
    pub(crate) highlighted: bool,
    pub(crate) selected: bool,
    pub(crate) curved: bool,
}

impl Edge {
    pub(crate) fn new(from: VertexId, to: VertexId, weight: Weight, directed: bool) -> Self {
        Self {
            from,
            to,
            weight,
            directed,
            highlighted: false,
            selected: false,
            curved: false,
        }
    }

    pub fn from(&self) -> VertexId {
        self.from
    }

    pub fn to(&self) -> VertexId {
        self.to
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    /// True while an algorithm is relaxing this edge
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Rendering hint: an opposite edge exists between the same vertices
    pub fn is_curved(&self) -> bool {
        self.curved
    }

    pub fn touches(&self, vertex: VertexId) -> bool {
        self.from == vertex || self.to == vertex
    }

    /// Whether the edge runs `a -> b`, or either way when undirected
    pub fn connects(&self, a: VertexId, b: VertexId) -> bool {
        (self.from == a && self.to == b) || (!self.directed && self.from == b && self.to == a)
    }

    /// The endpoint opposite `vertex`
    pub fn other_end(&self, vertex: VertexId) -> VertexId {
        if self.from == vertex {
            self.to
        } else {
            self.from
        }
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let arrow = if self.directed { "->" } else { "--" };
        write!(f, "{} {} {}", self.from, arrow, self.to)
    }
}
