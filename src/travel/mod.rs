use std::{fmt, str::FromStr};

use ahash::{HashMap, HashMapExt};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::graphs::{vec_graph::VecGraph, Edge, Graph, Vertex};

pub mod loading;
pub mod planner;

/// Means of travel along a transport edge.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Bus,
    Train,
    Plane,
}

impl TransportMode {
    pub fn label(&self) -> &'static str {
        match self {
            TransportMode::Bus => "bus",
            TransportMode::Train => "train",
            TransportMode::Plane => "plane",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown transport mode `{0}`")]
pub struct UnknownMode(String);

impl FromStr for TransportMode {
    type Err = UnknownMode;

    fn from_str(label: &str) -> Result<TransportMode, UnknownMode> {
        match label.trim().to_ascii_lowercase().as_str() {
            "bus" => Ok(TransportMode::Bus),
            "train" => Ok(TransportMode::Train),
            "plane" => Ok(TransportMode::Plane),
            other => Err(UnknownMode(other.to_string())),
        }
    }
}

/// A directed transport connection between two cities, with the price
/// and duration the route queries minimize over.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transport {
    source: Vertex,
    target: Vertex,
    mode: TransportMode,
    price: f64,
    minutes: f64,
}

impl Transport {
    pub fn new(
        source: Vertex,
        target: Vertex,
        mode: TransportMode,
        price: f64,
        minutes: f64,
    ) -> Transport {
        Transport {
            source,
            target,
            mode,
            price,
            minutes,
        }
    }

    pub fn mode(&self) -> TransportMode {
        self.mode
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn minutes(&self) -> f64 {
        self.minutes
    }
}

impl Edge for Transport {
    fn source(&self) -> Vertex {
        self.source
    }

    fn target(&self) -> Vertex {
        self.target
    }
}

/// The travel network: cities by name plus their transport connections.
///
/// City names resolve to dense vertex ids and the adjacency itself lives
/// in a [`VecGraph`]. Name resolution stays here so the search
/// algorithms only ever see resolved vertices. Cities are added through
/// [`TravelGraph::add_city`], which keeps the name table and the
/// adjacency in sync.
#[derive(Clone, Debug, Default)]
pub struct TravelGraph {
    graph: VecGraph<Transport>,
    names: Vec<String>,
    ids: HashMap<String, Vertex>,
}

impl TravelGraph {
    pub fn new() -> TravelGraph {
        TravelGraph {
            graph: VecGraph::new(),
            names: Vec::new(),
            ids: HashMap::new(),
        }
    }

    /// Adds a city and returns its vertex id. Adding the same name twice
    /// returns the existing id.
    pub fn add_city(&mut self, name: &str) -> Vertex {
        if let Some(&vertex) = self.ids.get(name) {
            return vertex;
        }

        let vertex = self.names.len() as Vertex;
        self.names.push(name.to_string());
        self.ids.insert(name.to_string(), vertex);
        self.graph.add_vertex(vertex);

        vertex
    }

    /// Resolves a city name to its vertex, if the city exists.
    pub fn city(&self, name: &str) -> Option<Vertex> {
        self.ids.get(name).copied()
    }

    /// # Panics
    ///
    /// Panics if `vertex` was never added through [`TravelGraph::add_city`].
    pub fn city_name(&self, vertex: Vertex) -> &str {
        &self.names[vertex as usize]
    }

    pub fn number_of_cities(&self) -> u32 {
        self.names.len() as u32
    }

    pub fn add_transport(
        &mut self,
        mode: TransportMode,
        origin: Vertex,
        destination: Vertex,
        price: f64,
        minutes: f64,
    ) {
        let transport = Transport::new(origin, destination, mode, price, minutes);
        self.graph.add_edge(origin, transport);
    }
}

impl Graph for TravelGraph {
    type Edge = Transport;

    fn number_of_vertices(&self) -> u32 {
        self.graph.number_of_vertices()
    }

    fn out_edges(&self, source: Vertex) -> &[Transport] {
        self.graph.out_edges(source)
    }

    fn add_vertex(&mut self, vertex: Vertex) {
        self.graph.add_vertex(vertex);
    }

    fn add_edge(&mut self, origin: Vertex, edge: Transport) {
        self.graph.add_edge(origin, edge);
    }
}
