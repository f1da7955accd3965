//! Reachability traversals: breadth-first and depth-first
//!
//! A traversal either walks everything reachable from a source or searches
//! for a path to a destination. Both forms are exposed as a steppable
//! [`TraversalRun`] plus blocking conveniences.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use crate::error::{GraphError, Result};

use super::algos::shared;
use super::algos::{BreadthFirst, DepthFirst};
use super::step::{Algorithm, Run, Step};
use super::structure::Graph;
use super::types::VertexId;

/// The traversal family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphTraversal {
    BreadthFirst,
    DepthFirst,
}

/// What a finished traversal produced
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TraversalOutcome {
    /// Vertices in the order they were first reached
    pub visited: Vec<VertexId>,
    /// Source-to-destination path for a successful search
    pub path: Option<Vec<VertexId>>,
}

/// Running state of either traversal
pub enum TraversalState<'g> {
    BreadthFirst(BreadthFirst<'g>),
    DepthFirst(DepthFirst<'g>),
}

impl Algorithm for TraversalState<'_> {
    type Output = TraversalOutcome;

    fn advance(&mut self, steps: &mut VecDeque<Step>) -> bool {
        match self {
            TraversalState::BreadthFirst(state) => state.advance(steps),
            TraversalState::DepthFirst(state) => state.advance(steps),
        }
    }

    fn graph(&self) -> &Graph {
        match self {
            TraversalState::BreadthFirst(state) => state.graph(),
            TraversalState::DepthFirst(state) => state.graph(),
        }
    }

    fn into_output(self) -> TraversalOutcome {
        match self {
            TraversalState::BreadthFirst(state) => state.into_output(),
            TraversalState::DepthFirst(state) => state.into_output(),
        }
    }
}

pub type TraversalRun<'g> = Run<TraversalState<'g>>;

impl GraphTraversal {
    pub const ALL: [GraphTraversal; 2] = [GraphTraversal::BreadthFirst, GraphTraversal::DepthFirst];

    /// Short name used on the command line and in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            GraphTraversal::BreadthFirst => "bfs",
            GraphTraversal::DepthFirst => "dfs",
        }
    }

    fn state<'g>(
        self,
        graph: &'g mut Graph,
        source: VertexId,
        destination: Option<VertexId>,
    ) -> Result<TraversalState<'g>> {
        Ok(match self {
            GraphTraversal::BreadthFirst => {
                TraversalState::BreadthFirst(BreadthFirst::new(graph, source, destination)?)
            }
            GraphTraversal::DepthFirst => {
                TraversalState::DepthFirst(DepthFirst::new(graph, source, destination)?)
            }
        })
    }

    /// Steppable walk of everything reachable from `source`
    pub fn traverse<'g>(self, graph: &'g mut Graph, source: VertexId) -> Result<TraversalRun<'g>> {
        tracing::debug!(algorithm = self.as_str(), %source, "starting traversal");
        Ok(Run::new(self.state(graph, source, None)?))
    }

    /// Steppable search from `source` that stops once `destination` is reached
    pub fn search<'g>(
        self,
        graph: &'g mut Graph,
        source: VertexId,
        destination: VertexId,
    ) -> Result<TraversalRun<'g>> {
        tracing::debug!(algorithm = self.as_str(), %source, %destination, "starting search");
        Ok(Run::new(self.state(graph, source, Some(destination))?))
    }

    /// Run a full traversal and return the visit order
    pub fn traverse_graph(self, graph: &mut Graph, source: VertexId) -> Result<Vec<VertexId>> {
        Ok(self.traverse(graph, source)?.finish().visited)
    }

    /// Run a search and return the path, or `None` when the destination is
    /// unreachable
    pub fn has_path(
        self,
        graph: &mut Graph,
        source: VertexId,
        destination: VertexId,
    ) -> Result<Option<Vec<VertexId>>> {
        Ok(self.search(graph, source, destination)?.finish().path)
    }

    /// Clear highlighting and highlight the edges along `path`
    pub fn highlight_path(graph: &mut Graph, path: &[VertexId]) {
        shared::highlight_path(graph, path);
    }
}

impl fmt::Display for GraphTraversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GraphTraversal {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" | "breadth_first" | "breadth-first" => Ok(GraphTraversal::BreadthFirst),
            "dfs" | "depth_first" | "depth-first" => Ok(GraphTraversal::DepthFirst),
            other => Err(GraphError::invalid_argument(format!(
                "unknown traversal '{}' (expected bfs or dfs)",
                other
            ))),
        }
    }
}
