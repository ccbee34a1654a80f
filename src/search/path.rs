use ahash::HashMap;

use crate::graphs::{Edge, Vertex};

/// Walks the predecessor map backwards from `end` to `start` and returns
/// the traversed edges in forward order.
///
/// Both search algorithms record, for every discovered vertex, the edge
/// that reached it; reconstruction repeatedly follows
/// `came_from[current].source()` until it arrives at `start`. With
/// `start == end` the walk terminates immediately and the path is empty.
///
/// # Panics
///
/// Panics if the map holds no chain from `end` back to `start`. Callers
/// must only reconstruct after the search has actually reached `end`.
pub fn backtrace<E: Edge>(came_from: &HashMap<Vertex, &E>, start: Vertex, end: Vertex) -> Vec<E> {
    let mut path = Vec::new();

    let mut current = end;
    while current != start {
        let edge = came_from[&current];
        path.push(edge.clone());
        current = edge.source();
    }

    path.reverse();
    path
}

/// Total projected weight of a path under `edge_weight`.
pub fn total_weight<E, W>(path: &[E], edge_weight: W) -> f64
where
    W: Fn(&E) -> f64,
{
    path.iter().map(edge_weight).sum()
}
