use thiserror::Error;
use tracing::debug;

use super::{Transport, TravelGraph};
use crate::{
    graphs::Vertex,
    search::{bfs, dijkstra},
};

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("unknown city `{0}`")]
    UnknownCity(String),
}

/// Answers route queries over a loaded [`TravelGraph`].
///
/// City names are resolved here, so the search algorithms only receive
/// vertices that exist in the graph. An `Ok` empty route means the
/// destination is unreachable from the source (or equal to it).
pub struct TravelPlanner {
    graph: TravelGraph,
}

impl TravelPlanner {
    pub fn new(graph: TravelGraph) -> TravelPlanner {
        TravelPlanner { graph }
    }

    pub fn graph(&self) -> &TravelGraph {
        &self.graph
    }

    /// Route minimizing the total travel time.
    pub fn fastest_route(
        &self,
        source: &str,
        destination: &str,
    ) -> Result<Vec<Transport>, RouteError> {
        let (source, destination) = self.resolve(source, destination)?;

        Ok(dijkstra::shortest_path(
            &self.graph,
            source,
            destination,
            |transport| transport.minutes(),
        ))
    }

    /// Route minimizing the total price.
    pub fn cheapest_route(
        &self,
        source: &str,
        destination: &str,
    ) -> Result<Vec<Transport>, RouteError> {
        let (source, destination) = self.resolve(source, destination)?;

        Ok(dijkstra::shortest_path(
            &self.graph,
            source,
            destination,
            |transport| transport.price(),
        ))
    }

    /// Route minimizing the number of legs.
    pub fn most_direct_route(
        &self,
        source: &str,
        destination: &str,
    ) -> Result<Vec<Transport>, RouteError> {
        let (source, destination) = self.resolve(source, destination)?;

        Ok(bfs::path(&self.graph, source, destination))
    }

    fn resolve(&self, source: &str, destination: &str) -> Result<(Vertex, Vertex), RouteError> {
        let source = self.city(source)?;
        let destination = self.city(destination)?;
        debug!(source, destination, "resolved route request");

        Ok((source, destination))
    }

    fn city(&self, name: &str) -> Result<Vertex, RouteError> {
        self.graph
            .city(name)
            .ok_or_else(|| RouteError::UnknownCity(name.to_string()))
    }
}
