//! Graph algorithm implementations
//!
//! Each algorithm is a resumable state machine driven through
//! [`Run`](crate::graph::step::Run):
//! - `bfs`: Breadth-first traversal and search
//! - `dfs`: Depth-first traversal and search with timestamps
//! - `dijkstra`: Shortest paths with non-negative weights
//! - `bellman_ford`: Shortest paths with negative-cycle detection
//! - `critical_path`: Shortest paths over a topological order
//! - `shared`: Common utilities used by multiple algorithms

pub mod bellman_ford;
pub mod bfs;
pub mod critical_path;
pub mod dfs;
pub mod dijkstra;
pub mod shared;

pub use bellman_ford::BellmanFord;
pub use bfs::BreadthFirst;
pub use critical_path::CriticalPath;
pub use dfs::DepthFirst;
pub use dijkstra::Dijkstra;
pub use shared::{highlight_path, highlight_shortest_paths, reconstruct_path, ShortestPaths};
