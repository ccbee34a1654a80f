use ahash::{HashSet, HashSetExt};

use crate::graphs::{Edge, Graph, Vertex};

/// Minimum total weight over all simple paths from `source` to
/// `destination`, by exhaustive depth-first enumeration. `None` when
/// `destination` is unreachable.
///
/// Exponential in the graph size; only meant as an independent oracle
/// for validating the real search algorithms on small graphs.
pub fn minimum_weight<G, W>(
    graph: &G,
    source: Vertex,
    destination: Vertex,
    edge_weight: &W,
) -> Option<f64>
where
    G: Graph,
    W: Fn(&G::Edge) -> f64,
{
    let mut visited = HashSet::new();
    visited.insert(source);

    minimum_weight_from(graph, source, destination, edge_weight, &mut visited)
}

/// Minimum number of edges over all simple paths from `source` to
/// `destination`, or `None` when unreachable.
pub fn minimum_hops<G: Graph>(graph: &G, source: Vertex, destination: Vertex) -> Option<usize> {
    minimum_weight(graph, source, destination, &|_| 1.0).map(|hops| hops as usize)
}

fn minimum_weight_from<G, W>(
    graph: &G,
    current: Vertex,
    destination: Vertex,
    edge_weight: &W,
    visited: &mut HashSet<Vertex>,
) -> Option<f64>
where
    G: Graph,
    W: Fn(&G::Edge) -> f64,
{
    if current == destination {
        return Some(0.0);
    }

    let mut best: Option<f64> = None;
    for edge in graph.out_edges(current) {
        let neighbor = edge.target();
        if !visited.insert(neighbor) {
            continue;
        }

        if let Some(remainder) =
            minimum_weight_from(graph, neighbor, destination, edge_weight, visited)
        {
            let candidate = edge_weight(edge) + remainder;
            if best.map_or(true, |best| candidate < best) {
                best = Some(candidate);
            }
        }

        visited.remove(&neighbor);
    }

    best
}
