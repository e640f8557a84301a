use crate::graph::builder::check_weight;
use crate::graph::traits::{Graph, Weight};
use crate::{Error, Result};

/// A directed graph in compressed adjacency form.
///
/// Outgoing edges of vertex `v` live in `heads[first_out[v]..first_out[v + 1]]`
/// (weights at the same positions), in the order they were supplied. Parallel
/// edges are kept. The graph cannot be modified once built.
#[derive(Debug, Clone)]
pub struct DirectedGraph<W>
where
    W: Weight,
{
    /// Offsets into `heads`/`weights`, `vertex_count + 1` entries
    first_out: Vec<usize>,

    /// Target vertex of each edge
    heads: Vec<usize>,

    /// Total weight of each edge
    weights: Vec<W>,
}

impl<W> DirectedGraph<W>
where
    W: Weight,
{
    /// Creates a graph from `(from, to, weight)` triples over dense indices.
    ///
    /// Fails on the first endpoint outside `0..vertex_count` or the first
    /// negative or non-finite weight; nothing is built in that case.
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let edges: Vec<(usize, usize, W)> = edges.into_iter().collect();

        let mut first_out = vec![0usize; vertex_count + 1];
        for (row, &(from, to, weight)) in edges.iter().enumerate() {
            if from >= vertex_count {
                return Err(Error::InvalidVertex(from));
            }
            if to >= vertex_count {
                return Err(Error::InvalidVertex(to));
            }
            check_weight(row, weight)?;
            first_out[from + 1] += 1;
        }

        for v in 0..vertex_count {
            first_out[v + 1] += first_out[v];
        }

        // Stable counting sort by tail keeps per-vertex input order
        let mut cursor = first_out.clone();
        let mut heads = vec![0usize; edges.len()];
        let mut weights = vec![W::zero(); edges.len()];
        for (from, to, weight) in edges {
            let slot = cursor[from];
            heads[slot] = to;
            weights[slot] = weight;
            cursor[from] += 1;
        }

        Ok(DirectedGraph {
            first_out,
            heads,
            weights,
        })
    }

    /// Out-degree of a vertex; zero for vertices outside the graph
    pub fn out_degree(&self, vertex: usize) -> usize {
        if vertex >= self.vertex_count() {
            return 0;
        }
        self.first_out[vertex + 1] - self.first_out[vertex]
    }

    /// Heads and weights of the outgoing edges of `vertex` as parallel slices
    pub fn out_slices(&self, vertex: usize) -> (&[usize], &[W]) {
        if vertex >= self.vertex_count() {
            return (&[], &[]);
        }
        let range = self.first_out[vertex]..self.first_out[vertex + 1];
        (&self.heads[range.clone()], &self.weights[range])
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.first_out.len() - 1
    }

    fn edge_count(&self) -> usize {
        self.heads.len()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        let (heads, weights) = self.out_slices(vertex);
        Box::new(heads.iter().copied().zip(weights.iter().copied()))
    }
}
