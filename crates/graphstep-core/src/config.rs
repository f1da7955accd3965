//! Engine configuration for graphstep
//!
//! Configuration is an optional TOML file; every field has a default, so a
//! missing table or key falls back to the built-in value.

pub mod types;

use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::error::Result;
use crate::graph::{Graph, GraphKind, GraphTraversal, Point};

pub use types::{CanvasConfig, EngineConfig, PacingConfig, CONFIG_FORMAT_VERSION};

impl EngineConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: EngineConfig = toml::from_str(&content)?;

        if config.version != CONFIG_FORMAT_VERSION {
            tracing::warn!(
                path = %path.display(),
                version = config.version,
                expected = CONFIG_FORMAT_VERSION,
                "config format version mismatch"
            );
        }

        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Empty graph using the configured vertex radius
    pub fn new_graph(&self, kind: GraphKind) -> Graph {
        Graph::with_vertex_radius(kind, self.canvas.vertex_radius)
    }

    /// Edge whose weight label is within the configured hit radius of `point`
    pub fn edge_label_at(&self, graph: &Graph, point: Point) -> Option<usize> {
        graph.edge_label_at(point, self.canvas.label_hit_radius)
    }
}

impl PacingConfig {
    /// Delay between steps of the given traversal
    pub fn traversal_delay(&self, kind: GraphTraversal) -> Duration {
        Duration::from_millis(match kind {
            GraphTraversal::BreadthFirst => self.breadth_first_ms,
            GraphTraversal::DepthFirst => self.depth_first_ms,
        })
    }

    /// Delay between steps of any extremal-path algorithm
    pub fn extremal_delay(&self) -> Duration {
        Duration::from_millis(self.extremal_path_ms)
    }

    /// Same delay for every algorithm
    pub fn uniform(ms: u64) -> Self {
        PacingConfig {
            breadth_first_ms: ms,
            depth_first_ms: ms,
            extremal_path_ms: ms,
        }
    }
}
