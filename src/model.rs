//! Concrete locations, connections, stations and vehicles.
//!
//! These are the records a location/connection provider hands to the route
//! service. How they are stored is up to the provider; they only derive
//! serde traits so it can persist them.

use serde::{Deserialize, Serialize};

use crate::traits::{Edge, MobileUnit, Node, StopSite};

/// A named place on the network (a city).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub stations: Vec<Station>,
}

impl Location {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            stations: Vec::new(),
        }
    }

    pub fn with_station(mut self, station: Station) -> Self {
        self.stations.push(station);
        self
    }
}

impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Location {}

impl Node for Location {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl StopSite for Location {
    type Stop = Station;

    fn stops(&self) -> &[Station] {
        &self.stations
    }
}

/// A facility attached to a location, offering a set of services
/// (e.g. "diesel", "ev-charging").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub services: Vec<String>,
}

impl Station {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            services: Vec::new(),
        }
    }

    pub fn service(mut self, service: &str) -> Self {
        self.services.push(service.to_string());
        self
    }

    pub fn offers(&self, service: &str) -> bool {
        self.services.iter().any(|offered| offered == service)
    }
}

/// A directed link between two locations.
///
/// Travel in both directions needs two connections; see [`Connection::reversed`].
/// Two connections are equal when they link the same ordered pair of
/// locations, so a graph holds at most one connection per direction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Connection {
    pub from: String,
    pub to: String,
    pub distance_km: f64,
    pub time_minutes: u32,
    pub cost: f64,
    /// Overrides the optimized weight, which defaults to the travel time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl Connection {
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        distance_km: f64,
        time_minutes: u32,
        cost: f64,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            distance_km,
            time_minutes,
            cost,
            weight: None,
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// The same link travelled the other way, with identical attributes.
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to.clone(),
            to: self.from.clone(),
            ..self.clone()
        }
    }
}

impl PartialEq for Connection {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl Edge for Connection {
    fn source_id(&self) -> &str {
        &self.from
    }

    fn target_id(&self) -> &str {
        &self.to
    }

    fn weight(&self) -> f64 {
        self.weight.unwrap_or(self.time_minutes as f64)
    }

    fn distance_km(&self) -> f64 {
        self.distance_km
    }

    fn time_minutes(&self) -> u32 {
        self.time_minutes
    }

    fn cost(&self) -> f64 {
        self.cost
    }
}

/// A vehicle travelling a route.
///
/// It can use a station only if the station offers every service it requires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub required_services: Vec<String>,
}

impl Vehicle {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            required_services: Vec::new(),
        }
    }

    pub fn requires(mut self, service: &str) -> Self {
        self.required_services.push(service.to_string());
        self
    }
}

impl MobileUnit<Station> for Vehicle {
    fn is_compatible_with(&self, station: &Station) -> bool {
        self.required_services
            .iter()
            .all(|service| station.offers(service))
    }
}
