//! Core capability traits for the route planner.
//!
//! These are intentionally minimal and domain-agnostic. Concrete apps should
//! implement them for their own data models; `crate::model` ships the
//! location/connection variants used by the route service.

/// A graph vertex with a stable identifier.
///
/// Identity is by `id` only: two nodes with the same id are the same node,
/// whatever their display name says.
pub trait Node {
    fn id(&self) -> &str;

    /// Display name.
    fn name(&self) -> &str;
}

/// A directed, weighted link between two nodes.
///
/// Endpoints are referenced by node id, never by embedded node values. The
/// graph resolves ids through its index map.
pub trait Edge {
    fn source_id(&self) -> &str;

    fn target_id(&self) -> &str;

    /// Weight minimized by the shortest-path search. Must lie in
    /// `0.0..=MAX_EDGE_WEIGHT` (see `crate::matrix_graph::MAX_EDGE_WEIGHT`).
    fn weight(&self) -> f64;

    /// Length of the link in kilometers. Finite and non-negative.
    fn distance_km(&self) -> f64;

    /// Travel time in minutes.
    fn time_minutes(&self) -> u32;

    /// Finite and non-negative.
    fn cost(&self) -> f64;
}

/// A node that has stops (stations, terminals, chargers...) attached to it.
pub trait StopSite: Node {
    type Stop;

    /// Attached stops, in attachment order.
    fn stops(&self) -> &[Self::Stop];
}

/// The vehicle (or other unit) travelling a route.
pub trait MobileUnit<S> {
    /// Whether this unit can use the given stop.
    fn is_compatible_with(&self, stop: &S) -> bool;
}
