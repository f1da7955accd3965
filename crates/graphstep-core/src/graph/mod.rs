//! Graph model and steppable algorithms
//!
//! Provides the owned graph structure and the two algorithm families run
//! against it:
//! - Traversals (breadth-first, depth-first) for reachability and paths
//! - Extremal paths (Dijkstra, Bellman-Ford, critical path) for shortest
//!   path forests
//! - Step events every run emits as it changes the graph

pub mod algos;
pub mod edge;
pub mod extremal;
pub mod geometry;
pub mod step;
pub mod structure;
pub mod traversal;
pub mod types;
pub mod vertex;

pub use algos::ShortestPaths;
pub use edge::Edge;
pub use extremal::{ExtremalPath, ExtremalRun};
pub use step::{Run, Step, StepObserver};
pub use structure::Graph;
pub use traversal::{GraphTraversal, TraversalOutcome, TraversalRun};
pub use types::{Distance, GraphKind, Marker, Point, VertexId, VertexIdAllocator, Weight};
pub use vertex::{Vertex, DEFAULT_VERTEX_RADIUS};
