//! Priced itineraries built from node paths.

use std::fmt;

use serde::Serialize;

use crate::error::RouteError;
use crate::matrix_graph::AdjacencyMatrixGraph;
use crate::traits::{Edge, MobileUnit, Node, StopSite};

/// An ordered sequence of visited locations and the connections travelled
/// between them, with pre-computed totals.
///
/// Always holds at least one location and exactly one leg per consecutive
/// pair of locations. A single-location route has no legs and zero totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route<N, E> {
    locations: Vec<N>,
    legs: Vec<E>,
    total_distance_km: f64,
    total_time_minutes: u64,
    total_cost: f64,
}

impl<N, E> Route<N, E>
where
    N: Node + Clone,
    E: Edge + Clone + PartialEq,
{
    /// Builds a route from a path found in `graph`, looking up the edge behind
    /// every consecutive pair of nodes.
    ///
    /// Fails when the path has fewer than two nodes or when a pair has no
    /// backing edge; a route is never built with missing legs.
    pub fn from_path(graph: &AdjacencyMatrixGraph<N, E>, path: &[N]) -> Result<Self, RouteError> {
        if path.len() < 2 {
            return Err(RouteError::PathTooShort(path.len()));
        }

        let legs = path
            .windows(2)
            .map(|pair| {
                graph
                    .find_edge(pair[0].id(), pair[1].id())
                    .cloned()
                    .ok_or_else(|| RouteError::MissingLeg {
                        from: pair[0].id().to_string(),
                        to: pair[1].id().to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(path.to_vec(), legs)
    }

    /// Builds a route from explicit locations and legs.
    ///
    /// Leg `i` must link location `i` to location `i + 1`.
    pub fn new(locations: Vec<N>, legs: Vec<E>) -> Result<Self, RouteError> {
        check_legs(&locations, &legs)?;
        let mut route = Self {
            locations,
            legs,
            total_distance_km: 0.0,
            total_time_minutes: 0,
            total_cost: 0.0,
        };
        route.compute_totals();
        Ok(route)
    }

    /// Replaces the locations and legs and recomputes the totals.
    ///
    /// The route is left unchanged when the new locations and legs don't fit
    /// together.
    pub fn set_path(&mut self, locations: Vec<N>, legs: Vec<E>) -> Result<(), RouteError> {
        check_legs(&locations, &legs)?;
        self.locations = locations;
        self.legs = legs;
        self.compute_totals();
        Ok(())
    }

    fn compute_totals(&mut self) {
        self.total_distance_km = self.legs.iter().map(|leg| leg.distance_km()).sum();
        self.total_time_minutes = self
            .legs
            .iter()
            .map(|leg| u64::from(leg.time_minutes()))
            .sum();
        self.total_cost = self.legs.iter().map(|leg| leg.cost()).sum();
    }

    pub fn origin(&self) -> &N {
        &self.locations[0]
    }

    pub fn destination(&self) -> &N {
        &self.locations[self.locations.len() - 1]
    }

    pub fn locations(&self) -> &[N] {
        &self.locations
    }

    pub fn legs(&self) -> &[E] {
        &self.legs
    }

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    pub fn total_distance_km(&self) -> f64 {
        self.total_distance_km
    }

    /// Summed in 64 bits; exceeds `u32::MAX` on long itineraries.
    pub fn total_time_minutes(&self) -> u64 {
        self.total_time_minutes
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Whether both routes visit the same locations in the same order.
    pub fn same_path_as(&self, other: &Self) -> bool {
        self.locations.len() == other.locations.len()
            && self
                .locations
                .iter()
                .zip(&other.locations)
                .all(|(a, b)| a.id() == b.id())
    }
}

impl<N, E> Route<N, E>
where
    N: StopSite + Clone,
    E: Edge + Clone + PartialEq,
{
    /// Stops along the route that `unit` can use.
    ///
    /// Stops come in route order, then in attachment order at each location.
    /// Nothing is de-duplicated.
    pub fn compatible_stations<M>(&self, unit: &M) -> Vec<&N::Stop>
    where
        M: MobileUnit<N::Stop>,
    {
        self.locations
            .iter()
            .flat_map(|location| location.stops())
            .filter(|stop| unit.is_compatible_with(stop))
            .collect()
    }
}

fn check_legs<N: Node, E: Edge>(locations: &[N], legs: &[E]) -> Result<(), RouteError> {
    if locations.is_empty() {
        return Err(RouteError::PathTooShort(0));
    }

    if legs.len() != locations.len() - 1 {
        return Err(RouteError::LegCountMismatch {
            locations: locations.len(),
            legs: legs.len(),
        });
    }

    for (pair, leg) in locations.windows(2).zip(legs) {
        if leg.source_id() != pair[0].id() || leg.target_id() != pair[1].id() {
            return Err(RouteError::MissingLeg {
                from: pair[0].id().to_string(),
                to: pair[1].id().to_string(),
            });
        }
    }

    Ok(())
}

impl<N, E> fmt::Display for Route<N, E>
where
    N: Node,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, location) in self.locations.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            f.write_str(location.name())?;
        }
        write!(
            f,
            " ({:.1} km, {} min, cost {:.2})",
            self.total_distance_km, self.total_time_minutes, self.total_cost
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use crate::model::{Connection, Location, Station, Vehicle};

    fn network() -> AdjacencyMatrixGraph<Location, Connection> {
        let mut graph = AdjacencyMatrixGraph::new();
        graph
            .add_node(
                Location::new("A", "Alpha")
                    .with_station(Station::new("S1", "Diesel pump").service("diesel")),
            )
            .unwrap();
        graph
            .add_node(
                Location::new("B", "Bravo")
                    .with_station(Station::new("S2", "Charger").service("ev-charging")),
            )
            .unwrap();
        graph.add_node(Location::new("C", "Charlie")).unwrap();
        graph
            .add_edge(Connection::new("A", "B", 10.0, 15, 500.0))
            .unwrap();
        graph
            .add_edge(Connection::new("B", "C", 12.5, 20, 750.0))
            .unwrap();
        graph
    }

    fn path(graph: &AdjacencyMatrixGraph<Location, Connection>, ids: &[&str]) -> Vec<Location> {
        ids.iter().map(|id| graph.node(id).unwrap().clone()).collect()
    }

    #[test]
    fn test_totals_sum_legs() {
        let graph = network();
        let route = Route::from_path(&graph, &path(&graph, &["A", "B", "C"])).unwrap();
        assert_eq!(route.total_distance_km(), 22.5);
        assert_eq!(route.total_time_minutes(), 35);
        assert_eq!(route.total_cost(), 1250.0);
        assert_eq!(route.origin().id(), "A");
        assert_eq!(route.destination().id(), "C");
        assert_eq!(route.legs().len(), 2);
    }

    #[test]
    fn test_rebuilding_gives_identical_totals() {
        let graph = network();
        let nodes = path(&graph, &["A", "B", "C"]);
        let first = Route::from_path(&graph, &nodes).unwrap();
        let second = Route::from_path(&graph, &nodes).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_short_path_is_rejected() {
        let graph = network();
        assert_eq!(
            Route::from_path(&graph, &path(&graph, &["A"])),
            Err(RouteError::PathTooShort(1))
        );
        assert_eq!(Route::from_path(&graph, &[]), Err(RouteError::PathTooShort(0)));
    }

    #[test]
    fn test_missing_leg_is_rejected() {
        let graph = network();
        let result = Route::from_path(&graph, &path(&graph, &["A", "C"]));
        assert_eq!(
            result,
            Err(RouteError::MissingLeg {
                from: "A".to_string(),
                to: "C".to_string(),
            })
        );
    }

    #[test]
    fn test_single_location_route() {
        let route: Route<Location, Connection> = Route::new(vec![Location::new("A", "Alpha")], vec![]).unwrap();
        assert_eq!(route.total_distance_km(), 0.0);
        assert_eq!(route.total_time_minutes(), 0);
        assert_eq!(route.total_cost(), 0.0);
        assert_eq!(route.origin(), route.destination());
    }

    #[test]
    fn test_set_path_recomputes_totals() {
        let graph = network();
        let mut route = Route::from_path(&graph, &path(&graph, &["A", "B", "C"])).unwrap();
        let leg = graph.find_edge("A", "B").unwrap().clone();
        route.set_path(path(&graph, &["A", "B"]), vec![leg]).unwrap();
        assert_eq!(route.total_time_minutes(), 15);
        assert_eq!(route.destination().id(), "B");

        let result = route.set_path(path(&graph, &["A", "B"]), vec![]);
        assert!(matches!(result, Err(RouteError::LegCountMismatch { .. })));
        assert_eq!(route.total_time_minutes(), 15);
    }

    #[test]
    fn test_compatible_stations() {
        let graph = network();
        let route = Route::from_path(&graph, &path(&graph, &["A", "B", "C"])).unwrap();
        let truck = Vehicle::new("T1", "Truck").requires("diesel");
        let stations: Vec<&str> = route
            .compatible_stations(&truck)
            .into_iter()
            .map(|station| station.id.as_str())
            .collect();
        assert_eq!(stations, vec!["S1"]);
    }

    #[test]
    fn test_display() {
        let graph = network();
        let route = Route::from_path(&graph, &path(&graph, &["A", "B", "C"])).unwrap();
        assert_eq!(
            route.to_string(),
            "Alpha -> Bravo -> Charlie (22.5 km, 35 min, cost 1250.00)"
        );
    }

    #[test]
    fn test_time_total_exceeds_leg_range() {
        let mut graph = AdjacencyMatrixGraph::new();
        for id in ["A", "B", "C"] {
            graph.add_node(Location::new(id, id)).unwrap();
        }
        graph
            .add_edge(Connection::new("A", "B", 1.0, 3_000_000_000, 1.0).with_weight(1.0))
            .unwrap();
        graph
            .add_edge(Connection::new("B", "C", 1.0, 3_000_000_000, 1.0).with_weight(1.0))
            .unwrap();

        let route = Route::from_path(&graph, &path(&graph, &["A", "B", "C"])).unwrap();
        assert_eq!(route.total_time_minutes(), 6_000_000_000);
    }
}
