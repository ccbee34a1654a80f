use std::cmp::Ordering;

use ordered_float::OrderedFloat;

use crate::graphs::Vertex;

/// Entry of the Dijkstra priority queue: a vertex keyed by its tentative
/// distance at the time of insertion.
///
/// Instead of a decrease-key operation, relaxing a vertex re-inserts it
/// with the improved distance. Entries superseded that way stay in the
/// heap and are skipped at pop time via the finalized set.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct QueueElement {
    pub distance: OrderedFloat<f64>,
    pub vertex: Vertex,
}

impl QueueElement {
    pub fn new(distance: f64, vertex: Vertex) -> QueueElement {
        QueueElement {
            distance: OrderedFloat(distance),
            vertex,
        }
    }
}

// The priority queue depends on `Ord`.
// Explicitly implement the trait so the queue becomes a min-heap
// instead of a max-heap.
impl Ord for QueueElement {
    fn cmp(&self, other: &Self) -> Ordering {
        // Notice that we flip the ordering on distances.
        // In case of a tie we compare vertices - this step is necessary
        // to make implementations of `PartialEq` and `Ord` consistent.
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

// `PartialOrd` needs to be implemented as well.
impl PartialOrd for QueueElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BinaryHeap;

    use super::QueueElement;

    #[test]
    fn pops_smallest_distance_first() {
        let mut heap = BinaryHeap::new();
        heap.push(QueueElement::new(3.5, 0));
        heap.push(QueueElement::new(0.5, 1));
        heap.push(QueueElement::new(2.0, 2));

        let order: Vec<_> = std::iter::from_fn(|| heap.pop())
            .map(|element| element.vertex)
            .collect();

        assert_eq!(order, vec![1, 2, 0]);
    }
}
