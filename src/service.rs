//! Route discovery over a snapshot of locations and connections.

use std::sync::Arc;

use parking_lot::RwLock;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::error::RouteError;
use crate::graph::Graph;
use crate::matrix_graph::{AdjacencyMatrixGraph, GraphStatistics};
use crate::model::{Connection, Location};
use crate::route::Route;

pub type LocationGraph = AdjacencyMatrixGraph<Location, Connection>;
pub type LocationRoute = Route<Location, Connection>;

/// Default bound on the graph size for alternative-route enumeration.
const DEFAULT_MAX_ENUMERATION_NODES: usize = 64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteServiceOptions {
    /// Whether `find_routes` also enumerates alternative routes.
    pub include_alternatives: bool,
    /// Largest graph (in nodes) on which alternatives are enumerated.
    /// `None` removes the bound.
    pub max_enumeration_nodes: Option<usize>,
}

impl Default for RouteServiceOptions {
    fn default() -> Self {
        Self {
            include_alternatives: true,
            max_enumeration_nodes: Some(DEFAULT_MAX_ENUMERATION_NODES),
        }
    }
}

/// Builds the location graph once and answers route queries against it.
///
/// The service never mutates its graph after `build`; to pick up new data,
/// build a new service (see [`SharedRouteService`]).
#[derive(Debug, Clone)]
pub struct RouteService {
    graph: LocationGraph,
    options: RouteServiceOptions,
}

impl RouteService {
    /// Adds every location as a node, then every connection whose endpoints
    /// both resolve. Connections that can't be added are dropped.
    #[instrument(skip_all, fields(locations = locations.len(), connections = connections.len()))]
    pub fn build(locations: &[Location], connections: &[Connection], options: RouteServiceOptions) -> Self {
        let mut graph = LocationGraph::new();

        for location in locations {
            if let Err(err) = graph.add_node(location.clone()) {
                warn!(%err, "skipping location");
            }
        }

        let mut dropped = 0;
        for connection in connections {
            if let Err(err) = graph.add_edge(connection.clone()) {
                debug!(%err, "dropping connection");
                dropped += 1;
            }
        }

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            dropped,
            "route graph built"
        );

        Self { graph, options }
    }

    pub fn graph(&self) -> &LocationGraph {
        &self.graph
    }

    pub fn options(&self) -> &RouteServiceOptions {
        &self.options
    }

    pub fn statistics(&self) -> GraphStatistics {
        self.graph.statistics()
    }

    pub fn direct_connections(&self, location_id: &str) -> Vec<Location> {
        self.graph.direct_connections(location_id)
    }

    /// The lowest-weight route between two locations.
    ///
    /// `None` when either location is unknown, when no path exists, or when
    /// both ids name the same location.
    pub fn find_best_route(&self, from: &str, to: &str) -> Option<LocationRoute> {
        let path = self.graph.find_path(from, to);
        self.assemble(&path)
    }

    /// Every other simple route between two locations, in discovery order.
    ///
    /// Fails when the graph is larger than `max_enumeration_nodes`.
    pub fn find_alternative_routes(&self, from: &str, to: &str) -> Result<Vec<LocationRoute>, RouteError> {
        let best = self.find_best_route(from, to);
        self.alternatives(from, to, best.as_ref())
    }

    /// Best route first, then the alternatives when enabled.
    ///
    /// Empty when either location is unknown or they are not connected.
    #[instrument(skip(self))]
    pub fn find_routes(&self, from: &str, to: &str) -> Result<Vec<LocationRoute>, RouteError> {
        if !self.graph.contains_node(from) || !self.graph.contains_node(to) {
            debug!("unknown location");
            return Ok(Vec::new());
        }

        let Some(best) = self.find_best_route(from, to) else {
            return Ok(Vec::new());
        };

        let alternatives = if self.options.include_alternatives {
            self.alternatives(from, to, Some(&best))?
        } else {
            Vec::new()
        };

        let mut routes = Vec::with_capacity(alternatives.len() + 1);
        routes.push(best);
        routes.extend(alternatives);
        Ok(routes)
    }

    fn alternatives(
        &self,
        from: &str,
        to: &str,
        best: Option<&LocationRoute>,
    ) -> Result<Vec<LocationRoute>, RouteError> {
        let nodes = self.graph.node_count();
        if let Some(limit) = self.options.max_enumeration_nodes {
            if nodes > limit {
                return Err(RouteError::EnumerationLimitExceeded { nodes, limit });
            }
        }

        let paths = self.graph.find_all_paths(from, to);
        debug!(paths = paths.len(), "enumerated paths");

        let routes = paths
            .par_iter()
            .filter_map(|path| self.assemble(path))
            .filter(|route| best.is_none_or(|best| !route.same_path_as(best)))
            .collect();

        Ok(routes)
    }

    fn assemble(&self, path: &[Location]) -> Option<LocationRoute> {
        match Route::from_path(&self.graph, path) {
            Ok(route) => Some(route),
            Err(RouteError::PathTooShort(_)) => None,
            Err(err) => {
                warn!(%err, "discarding malformed path");
                None
            }
        }
    }
}

/// Rebuild-and-swap holder for a route service shared between threads.
///
/// Readers take a snapshot with `current` and query it without holding any
/// lock; writers build a complete new service and publish it in one step.
#[derive(Debug, Clone)]
pub struct SharedRouteService {
    current: Arc<RwLock<Arc<RouteService>>>,
}

impl SharedRouteService {
    pub fn new(service: RouteService) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(service))),
        }
    }

    pub fn current(&self) -> Arc<RouteService> {
        self.current.read().clone()
    }

    /// Replaces the published service, returning the previous one.
    pub fn publish(&self, service: RouteService) -> Arc<RouteService> {
        std::mem::replace(&mut *self.current.write(), Arc::new(service))
    }

    /// Builds a service from a fresh snapshot with the current options and
    /// publishes it.
    pub fn rebuild(&self, locations: &[Location], connections: &[Connection]) -> Arc<RouteService> {
        let options = self.current().options().clone();
        self.publish(RouteService::build(locations, connections, options))
    }
}
