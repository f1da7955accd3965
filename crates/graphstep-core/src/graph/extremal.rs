//! Single-source shortest paths: Dijkstra, Bellman-Ford and critical path
//!
//! All three produce a [`ShortestPaths`] forest. Only Bellman-Ford can fail
//! after starting, with [`GraphError::NegativeCycle`].

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use crate::error::{GraphError, Result};

use super::algos::shared;
use super::algos::{BellmanFord, CriticalPath, Dijkstra, ShortestPaths};
use super::step::{Algorithm, Run, Step};
use super::structure::Graph;
use super::types::VertexId;

/// The extremal-path family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtremalPath {
    Dijkstra,
    BellmanFord,
    CriticalPath,
}

/// Running state of any extremal-path algorithm
pub enum ExtremalState<'g> {
    Dijkstra(Dijkstra<'g>),
    BellmanFord(BellmanFord<'g>),
    CriticalPath(CriticalPath<'g>),
}

impl Algorithm for ExtremalState<'_> {
    type Output = Result<ShortestPaths>;

    fn advance(&mut self, steps: &mut VecDeque<Step>) -> bool {
        match self {
            ExtremalState::Dijkstra(state) => state.advance(steps),
            ExtremalState::BellmanFord(state) => state.advance(steps),
            ExtremalState::CriticalPath(state) => state.advance(steps),
        }
    }

    fn graph(&self) -> &Graph {
        match self {
            ExtremalState::Dijkstra(state) => state.graph(),
            ExtremalState::BellmanFord(state) => state.graph(),
            ExtremalState::CriticalPath(state) => state.graph(),
        }
    }

    fn into_output(self) -> Result<ShortestPaths> {
        match self {
            ExtremalState::Dijkstra(state) => state.into_output(),
            ExtremalState::BellmanFord(state) => state.into_output(),
            ExtremalState::CriticalPath(state) => state.into_output(),
        }
    }
}

pub type ExtremalRun<'g> = Run<ExtremalState<'g>>;

impl ExtremalPath {
    pub const ALL: [ExtremalPath; 3] = [
        ExtremalPath::Dijkstra,
        ExtremalPath::BellmanFord,
        ExtremalPath::CriticalPath,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExtremalPath::Dijkstra => "dijkstra",
            ExtremalPath::BellmanFord => "bellman-ford",
            ExtremalPath::CriticalPath => "critical-path",
        }
    }

    /// Steppable shortest-path computation from `source`
    pub fn start<'g>(self, graph: &'g mut Graph, source: VertexId) -> Result<ExtremalRun<'g>> {
        tracing::debug!(algorithm = self.as_str(), %source, "starting extremal path");
        let state = match self {
            ExtremalPath::Dijkstra => ExtremalState::Dijkstra(Dijkstra::new(graph, source)?),
            ExtremalPath::BellmanFord => {
                ExtremalState::BellmanFord(BellmanFord::new(graph, source)?)
            }
            ExtremalPath::CriticalPath => {
                ExtremalState::CriticalPath(CriticalPath::new(graph, source)?)
            }
        };
        Ok(Run::new(state))
    }

    /// Run to completion and return the forest
    pub fn find_shortest_path(self, graph: &mut Graph, source: VertexId) -> Result<ShortestPaths> {
        self.start(graph, source)?.finish()
    }

    /// Clear highlighting, then highlight every edge and intermediate vertex
    /// of every path in `paths`
    pub fn highlight_shortest_paths(graph: &mut Graph, paths: &ShortestPaths) {
        shared::highlight_shortest_paths(graph, paths);
    }
}

impl fmt::Display for ExtremalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExtremalPath {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "dijkstra" => Ok(ExtremalPath::Dijkstra),
            "bellman-ford" => Ok(ExtremalPath::BellmanFord),
            "critical-path" | "dag" => Ok(ExtremalPath::CriticalPath),
            other => Err(GraphError::invalid_argument(format!(
                "unknown shortest-path algorithm '{}' (expected dijkstra, bellman-ford or critical-path)",
                other
            ))),
        }
    }
}
