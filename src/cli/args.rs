use clap::{Args, ValueEnum};

use graphstep_core::graph::{ExtremalPath, GraphKind, GraphTraversal};

use super::parse::{parse_edge, EdgeSpec};

/// Graph construction flags shared by every command
#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// Number of vertices; ids run from 1 to N
    #[arg(long, short = 'n')]
    pub vertices: u32,

    /// Edge as FROM:TO or FROM:TO:WEIGHT (repeatable)
    #[arg(long = "edge", short = 'e', value_parser = parse_edge, action = clap::ArgAction::Append)]
    pub edges: Vec<EdgeSpec>,

    /// Build an undirected graph
    #[arg(long)]
    pub undirected: bool,
}

impl GraphArgs {
    pub fn kind(&self) -> GraphKind {
        if self.undirected {
            GraphKind::Undirected
        } else {
            GraphKind::Directed
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct TraverseArgs {
    /// Traversal algorithm
    #[arg(long, short, value_enum, default_value = "bfs")]
    pub algorithm: TraversalAlgorithm,

    /// Vertex to start from
    #[arg(long, short)]
    pub source: u32,

    #[command(flatten)]
    pub graph: GraphArgs,
}

#[derive(Args, Debug, Clone)]
pub struct PathArgs {
    /// Traversal algorithm used for the search
    #[arg(long, short, value_enum, default_value = "bfs")]
    pub algorithm: TraversalAlgorithm,

    /// Vertex to start from
    #[arg(long)]
    pub from: u32,

    /// Vertex to reach
    #[arg(long)]
    pub to: u32,

    #[command(flatten)]
    pub graph: GraphArgs,
}

#[derive(Args, Debug, Clone)]
pub struct ShortestArgs {
    /// Shortest-path algorithm
    #[arg(long, short, value_enum, default_value = "dijkstra")]
    pub algorithm: ShortestAlgorithm,

    /// Vertex to start from
    #[arg(long, short)]
    pub source: u32,

    #[command(flatten)]
    pub graph: GraphArgs,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalAlgorithm {
    Bfs,
    Dfs,
}

impl From<TraversalAlgorithm> for GraphTraversal {
    fn from(algorithm: TraversalAlgorithm) -> Self {
        match algorithm {
            TraversalAlgorithm::Bfs => GraphTraversal::BreadthFirst,
            TraversalAlgorithm::Dfs => GraphTraversal::DepthFirst,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortestAlgorithm {
    Dijkstra,
    BellmanFord,
    CriticalPath,
}

impl From<ShortestAlgorithm> for ExtremalPath {
    fn from(algorithm: ShortestAlgorithm) -> Self {
        match algorithm {
            ShortestAlgorithm::Dijkstra => ExtremalPath::Dijkstra,
            ShortestAlgorithm::BellmanFord => ExtremalPath::BellmanFord,
            ShortestAlgorithm::CriticalPath => ExtremalPath::CriticalPath,
        }
    }
}
