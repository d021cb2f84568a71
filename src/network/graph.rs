use std::collections::{HashMap, HashSet};

use geo::Point;
use itertools::Itertools;

use crate::overpass::elements::{NodeElement, RelationElement};

/// Colour given to stations whose route carries no `colour` tag.
pub const DEFAULT_COLOUR: &str = "#808080";

/// A graph vertex: one subway station with display attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub id: i64,
    /// (longitude, latitude)
    pub position: Point<f64>,
    pub name: String,
    pub colour: String,
}

impl Station {
    /// All attribute fallbacks live here: a missing `name` tag falls
    /// back to the stringified id, a missing route colour to
    /// [`DEFAULT_COLOUR`].
    pub fn from_node(node: &NodeElement, colour: Option<&str>) -> Station {
        Station {
            id: node.id,
            position: Point::new(node.lon, node.lat),
            name: node
                .tags
                .get("name")
                .cloned()
                .unwrap_or_else(|| node.id.to_string()),
            colour: colour.unwrap_or(DEFAULT_COLOUR).to_string(),
        }
    }
}

/// Simple undirected graph of stations and adjacencies.
///
/// Connections are stored as (min, max) id pairs, so the same
/// adjacency reached from two routes collapses into one edge and
/// orientation never matters. A connection may reference an id with no
/// matching station: member refs absent from the node index still take
/// part in the consecutive-pair walk (see [`build_graph`]), and
/// consumers must resolve both endpoints before using positions.
#[derive(Debug, Default)]
pub struct RouteGraph {
    stations: HashMap<i64, Station>,
    connections: HashSet<(i64, i64)>,
}

impl RouteGraph {
    pub fn add_station(&mut self, station: Station) {
        self.stations.insert(station.id, station);
    }

    pub fn add_connection(&mut self, a: i64, b: i64) {
        self.connections.insert((a.min(b), a.max(b)));
    }

    pub fn station(&self, id: i64) -> Option<&Station> {
        self.stations.get(&id)
    }

    /// Stations in ascending id order, so rendered output is stable.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.values().sorted_by_key(|station| station.id)
    }

    pub fn connections(&self) -> impl Iterator<Item = (i64, i64)> {
        self.connections.iter().copied().sorted()
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }
}

/// Fold routes and the node index into one graph.
///
/// Members qualify as stops when their role contains the substring
/// `stop`. Stops that resolve against the node index become stations;
/// every consecutive stop pair becomes a connection by raw ref id,
/// whether or not the refs resolved. A station on several routes keeps
/// the colour of the route processed last.
pub fn build_graph(routes: &[RelationElement], nodes: &HashMap<i64, NodeElement>) -> RouteGraph {
    let mut graph = RouteGraph::default();

    for route in routes {
        let colour = route.tags.get("colour").map(String::as_str);
        let stops = route.stop_members().collect::<Vec<_>>();

        for stop in &stops {
            if let Some(node) = nodes.get(&stop.member_ref) {
                graph.add_station(Station::from_node(node, colour));
            }
        }

        for (a, b) in stops.iter().tuple_windows() {
            graph.add_connection(a.member_ref, b.member_ref);
        }
    }

    graph
}
