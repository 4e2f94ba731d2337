use thiserror::Error;

/// Errors returned by graph mutations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("node {0} is already in the graph")]
    DuplicateNode(String),
    #[error("edge {from} -> {to} is already in the graph")]
    DuplicateEdge { from: String, to: String },
    #[error("edge endpoint {0} is not a node of the graph")]
    UnknownEndpoint(String),
    #[error("node {0} not found")]
    NodeNotFound(String),
    #[error("edge {from} -> {to} not found")]
    EdgeNotFound { from: String, to: String },
    #[error("edge {from} -> {to} has invalid weight {weight}")]
    InvalidWeight { from: String, to: String, weight: f64 },
    #[error("edge {from} -> {to} has invalid {attribute} {value}")]
    InvalidAttribute {
        from: String,
        to: String,
        attribute: &'static str,
        value: f64,
    },
}

/// Errors returned while assembling or discovering routes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RouteError {
    #[error("a route needs at least two locations, got {0}")]
    PathTooShort(usize),
    #[error("{locations} locations need {} legs, got {legs}", .locations.saturating_sub(1))]
    LegCountMismatch { locations: usize, legs: usize },
    #[error("no connection between {from} and {to}")]
    MissingLeg { from: String, to: String },
    #[error("graph has {nodes} nodes, path enumeration is limited to {limit}")]
    EnumerationLimitExceeded { nodes: usize, limit: usize },
}
