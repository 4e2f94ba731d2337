//! Central-valley cities and the roads between them.
//!
//! Distances and times are rough driving figures; costs are bus fares in
//! colones. Good enough to give routes distinct, predictable totals.

use route_planner::model::{Connection, Location, Station};

pub const SAN_JOSE: &str = "SJ";
pub const CARTAGO: &str = "CAR";
pub const ALAJUELA: &str = "ALA";
pub const HEREDIA: &str = "HER";
pub const PUNTARENAS: &str = "PUN";

pub fn location(id: &str) -> Location {
    match id {
        SAN_JOSE => Location::new(SAN_JOSE, "San José")
            .with_station(Station::new("SJ-FUEL", "Servicentro La Sabana").service("diesel").service("gasoline"))
            .with_station(Station::new("SJ-EV", "Electrolinera Paseo Colón").service("ev-charging")),
        CARTAGO => Location::new(CARTAGO, "Cartago")
            .with_station(Station::new("CAR-FUEL", "Bomba Los Ángeles").service("gasoline")),
        ALAJUELA => Location::new(ALAJUELA, "Alajuela")
            .with_station(Station::new("ALA-EV", "Electrolinera Aeropuerto").service("ev-charging"))
            .with_station(Station::new("ALA-FUEL", "Bomba El Coyol").service("diesel")),
        HEREDIA => Location::new(HEREDIA, "Heredia"),
        PUNTARENAS => Location::new(PUNTARENAS, "Puntarenas")
            .with_station(Station::new("PUN-FUEL", "Bomba El Roble").service("diesel")),
        other => Location::new(other, other),
    }
}

/// Builds the three-city network: a two-way San José–Cartago road and a
/// one-way San José → Alajuela road.
pub fn three_cities() -> (Vec<Location>, Vec<Connection>) {
    let locations = vec![location(SAN_JOSE), location(CARTAGO), location(ALAJUELA)];
    let connections = vec![
        Connection::new(SAN_JOSE, CARTAGO, 22.0, 35, 1200.0),
        Connection::new(CARTAGO, SAN_JOSE, 22.0, 35, 1200.0),
        Connection::new(SAN_JOSE, ALAJUELA, 20.0, 30, 1100.0),
    ];
    (locations, connections)
}

/// Five cities, every road two-way. San José → Puntarenas has a direct road
/// and two detours through Alajuela and Heredia.
pub fn central_valley() -> (Vec<Location>, Vec<Connection>) {
    let locations = vec![
        location(SAN_JOSE),
        location(CARTAGO),
        location(ALAJUELA),
        location(HEREDIA),
        location(PUNTARENAS),
    ];

    let roads = [
        Connection::new(SAN_JOSE, CARTAGO, 22.0, 35, 1200.0),
        Connection::new(SAN_JOSE, ALAJUELA, 20.0, 30, 1100.0),
        Connection::new(SAN_JOSE, HEREDIA, 11.0, 25, 600.0),
        Connection::new(HEREDIA, ALAJUELA, 12.0, 20, 550.0),
        Connection::new(ALAJUELA, PUNTARENAS, 75.0, 70, 2800.0),
        Connection::new(SAN_JOSE, PUNTARENAS, 95.0, 110, 3200.0),
    ];

    let connections = roads
        .iter()
        .flat_map(|road| [road.clone(), road.reversed()])
        .collect();

    (locations, connections)
}
