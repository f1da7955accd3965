//! CLI commands for graphstep

pub mod dispatch;
pub mod graph;
pub mod output;
pub mod path;
pub mod playback;
pub mod shortest;
pub mod traverse;
