use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-priority frontier of `(vertex, tentative distance)` entries.
///
/// Entries are popped by smallest distance, ties by smallest vertex index,
/// so extraction order is fully determined by the pushes. Stale entries are
/// not removed on decrease-key; callers skip them on pop.
#[derive(Debug, Clone)]
pub struct Frontier<P>
where
    P: Ord + Copy + Debug,
{
    heap: BinaryHeap<Reverse<(P, usize)>>,
}

impl<P> Frontier<P>
where
    P: Ord + Copy + Debug,
{
    /// Creates an empty frontier that can hold `capacity` entries without reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        Frontier {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, vertex: usize, distance: P) {
        self.heap.push(Reverse((distance, vertex)));
    }

    /// Removes the entry with the smallest distance
    pub fn pop(&mut self) -> Option<(usize, P)> {
        self.heap.pop().map(|Reverse((distance, vertex))| (vertex, distance))
    }

    /// Empties the frontier, keeping its allocation
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}
