use std::fmt::Debug;
use num_traits::{CheckedAdd, Zero};
use ordered_float::OrderedFloat;

/// Numeric domain of edge weights and path distances.
///
/// Integer costs (`u32`, `i64`, ...) and `OrderedFloat<f32>` /
/// `OrderedFloat<f64>` qualify. A sum that does not fit in `W` is reported
/// as `None` by [`checked_sum`](Weight::checked_sum) instead of wrapping.
pub trait Weight: Copy + Debug + Ord + Zero + Send + Sync {
    /// `self + other`, or `None` if the sum is not representable
    fn checked_sum(self, other: Self) -> Option<Self>;

    /// False for values that are not usable as a cost (NaN, infinities)
    fn is_finite(self) -> bool {
        true
    }
}

macro_rules! integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn checked_sum(self, other: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &other)
                }
            }
        )*
    };
}

integer_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! float_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for OrderedFloat<$t> {
                fn checked_sum(self, other: Self) -> Option<Self> {
                    let sum = self.0 + other.0;
                    sum.is_finite().then_some(OrderedFloat(sum))
                }

                fn is_finite(self) -> bool {
                    self.0.is_finite()
                }
            }
        )*
    };
}

float_weight!(f32, f64);

/// Trait representing an immutable weighted directed graph over dense vertex indices
pub trait Graph<W>: Debug + Sync
where
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex, in insertion order
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.outgoing_edges(from).any(|(target, _)| target == to)
    }

    /// Gets the cheapest weight among the parallel edges `from -> to`, if any
    fn edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.outgoing_edges(from)
            .filter(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
            .min()
    }
}
