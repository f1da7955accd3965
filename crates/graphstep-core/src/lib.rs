//! Graphstep Core Library
//!
//! Graph model and steppable graph algorithms: breadth-first and
//! depth-first traversal, and Dijkstra, Bellman-Ford and critical-path
//! shortest paths. Every algorithm runs as an iterator of [`graph::Step`]s
//! so a front end can animate it at its own pace.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
