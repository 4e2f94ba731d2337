//! route-planner core
//!
//! Graph engine and route assembly for planning travel between locations
//! linked by directed, weighted connections.

pub mod traits;
pub mod error;
pub mod graph;
pub mod matrix_graph;
mod shortest_path;
mod all_paths;
pub mod model;
pub mod route;
pub mod service;
