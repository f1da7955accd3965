//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::graph::types::Weight;
use crate::graph::DEFAULT_VERTEX_RADIUS;

/// Current config format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Config format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Canvas geometry used by graph construction and hit tests
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Delays a consumer waits between observed steps
    #[serde(default)]
    pub pacing: PacingConfig,
}

/// Canvas geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Radius of a drawn vertex; also the collision and edge hit distance
    #[serde(default = "default_vertex_radius")]
    pub vertex_radius: f32,

    /// How close a point must be to an edge's weight label to hit it
    #[serde(default = "default_label_hit_radius")]
    pub label_hit_radius: f32,

    /// Weight given to edges created without one
    #[serde(default = "default_edge_weight")]
    pub default_edge_weight: Weight,
}

/// Step pacing, in milliseconds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PacingConfig {
    #[serde(default = "default_breadth_first_ms")]
    pub breadth_first_ms: u64,

    #[serde(default = "default_depth_first_ms")]
    pub depth_first_ms: u64,

    #[serde(default = "default_extremal_path_ms")]
    pub extremal_path_ms: u64,
}

fn default_version() -> u32 {
    CONFIG_FORMAT_VERSION
}

fn default_vertex_radius() -> f32 {
    DEFAULT_VERTEX_RADIUS
}

fn default_label_hit_radius() -> f32 {
    5.0
}

fn default_edge_weight() -> Weight {
    1
}

fn default_breadth_first_ms() -> u64 {
    1000
}

fn default_depth_first_ms() -> u64 {
    750
}

fn default_extremal_path_ms() -> u64 {
    1500
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            version: CONFIG_FORMAT_VERSION,
            canvas: CanvasConfig::default(),
            pacing: PacingConfig::default(),
        }
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        CanvasConfig {
            vertex_radius: default_vertex_radius(),
            label_hit_radius: default_label_hit_radius(),
            default_edge_weight: default_edge_weight(),
        }
    }
}

impl Default for PacingConfig {
    fn default() -> Self {
        PacingConfig {
            breadth_first_ms: default_breadth_first_ms(),
            depth_first_ms: default_depth_first_ms(),
            extremal_path_ms: default_extremal_path_ms(),
        }
    }
}
