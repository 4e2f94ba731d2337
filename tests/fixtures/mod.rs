//! Test fixtures for route-planner.
//!
//! Provides a small Costa Rica central-valley network:
//! - Real city names with approximate road distances
//! - Builders for locations with attached stations

pub mod costa_rica;

pub use costa_rica::*;
