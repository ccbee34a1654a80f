use itertools::Itertools;
use rand::Rng;

use crate::graphs::{Edge, Graph, Vertex};

/// Checks that `path` is a well-formed route from `source` to `target`
/// in `graph`: contiguous, correctly anchored at both ends, and made of
/// edges the graph actually contains.
///
/// An empty path is accepted as is, since the search algorithms use it
/// both for "unreachable" and for `source == target`.
pub fn validate_path<G>(
    graph: &G,
    source: Vertex,
    target: Vertex,
    path: &[G::Edge],
) -> Result<(), String>
where
    G: Graph,
    G::Edge: PartialEq,
{
    if path.is_empty() {
        return Ok(());
    }

    if path[0].source() != source {
        return Err("first edge of path does not leave the source".to_string());
    }

    if path[path.len() - 1].target() != target {
        return Err("last edge of path does not enter the target".to_string());
    }

    for (edge, next) in path.iter().tuple_windows() {
        if edge.target() != next.source() {
            return Err(format!(
                "path breaks between {} and {}",
                edge.target(),
                next.source()
            ));
        }
    }

    for edge in path {
        if !graph.out_edges(edge.source()).contains(edge) {
            return Err(format!(
                "edge {} -> {} is not in the graph",
                edge.source(),
                edge.target()
            ));
        }
    }

    Ok(())
}

/// Draws a source/target pair with `source != target`, or `None` if the
/// graph has too few vertices for such a pair.
pub fn random_request<G: Graph>(graph: &G, rng: &mut impl Rng) -> Option<(Vertex, Vertex)> {
    if graph.number_of_vertices() <= 1 {
        // not enough vertices to get a request with source != target
        return None;
    }

    // guarantee that source != target
    let source = rng.gen_range(0..graph.number_of_vertices());
    let mut target = rng.gen_range(0..graph.number_of_vertices() - 1);
    if target >= source {
        target += 1;
    }

    Some((source, target))
}
