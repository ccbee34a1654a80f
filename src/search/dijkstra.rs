use std::collections::BinaryHeap;

use ahash::{HashMap, HashMapExt, HashSet, HashSetExt};

use super::{path::backtrace, queue::QueueElement};
use crate::graphs::{Edge, Graph, Vertex};

/// Minimum-total-weight path from `source` to `destination` under
/// `edge_weight`.
///
/// Returns an empty vector if `destination` is unreachable or equals
/// `source`. Ties between equal-weight paths resolve by strict `<`
/// relaxation: a recorded path is only replaced by a strictly shorter
/// one.
///
/// `edge_weight` must be non-negative for every edge. This is a
/// precondition, not a checked error; negative weights produce
/// unspecified results.
pub fn shortest_path<G, W>(
    graph: &G,
    source: Vertex,
    destination: Vertex,
    edge_weight: W,
) -> Vec<G::Edge>
where
    G: Graph,
    W: Fn(&G::Edge) -> f64,
{
    // An absent entry reads as an infinite tentative distance.
    let mut distances: HashMap<Vertex, f64> = HashMap::new();
    let mut finalized = HashSet::new();
    let mut came_from: HashMap<Vertex, &G::Edge> = HashMap::new();
    let mut queue = BinaryHeap::new();

    distances.insert(source, 0.0);
    queue.push(QueueElement::new(0.0, source));

    while let Some(QueueElement {
        vertex: current, ..
    }) = queue.pop()
    {
        // Non-negative weights guarantee that the distance of the first
        // popped occurrence of `destination` is final.
        if current == destination {
            return backtrace(&came_from, source, destination);
        }

        if !finalized.insert(current) {
            continue;
        }

        let distance_current = distances[&current];

        for edge in graph.out_edges(current) {
            let neighbor = edge.target();
            let distance_neighbor = distances.get(&neighbor).copied().unwrap_or(f64::INFINITY);
            let alternative_distance = distance_current + edge_weight(edge);

            if alternative_distance < distance_neighbor {
                distances.insert(neighbor, alternative_distance);
                came_from.insert(neighbor, edge);
                queue.push(QueueElement::new(alternative_distance, neighbor));
            }
        }
    }

    Vec::new()
}
