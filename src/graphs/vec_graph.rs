use serde::{Deserialize, Serialize};

use super::{Edge, Graph, Vertex};

/// Adjacency-list multigraph. `edges[v]` holds the outgoing edges of
/// vertex `v`; parallel edges between the same pair of vertices are kept
/// as is.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VecGraph<E> {
    edges: Vec<Vec<E>>,
}

impl<E> Default for VecGraph<E> {
    fn default() -> Self {
        VecGraph { edges: Vec::new() }
    }
}

impl<E: Edge> VecGraph<E> {
    pub fn new() -> VecGraph<E> {
        VecGraph::default()
    }

    pub fn from_edges(edges: impl IntoIterator<Item = E>) -> VecGraph<E> {
        let mut graph = VecGraph::new();

        for edge in edges {
            graph.add_edge(edge.source(), edge);
        }

        graph
    }
}

impl<E: Edge> Graph for VecGraph<E> {
    type Edge = E;

    fn number_of_vertices(&self) -> u32 {
        self.edges.len() as u32
    }

    fn out_edges(&self, source: Vertex) -> &[E] {
        self.edges
            .get(source as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn add_vertex(&mut self, vertex: Vertex) {
        // Ensure the vertex is within the bounds of self.edges.
        if vertex as usize >= self.edges.len() {
            self.edges.resize_with(vertex as usize + 1, Vec::new);
        }
    }

    fn add_edge(&mut self, origin: Vertex, edge: E) {
        self.add_vertex(origin.max(edge.target()));
        self.edges[origin as usize].push(edge);
    }
}
