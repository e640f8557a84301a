use log::debug;

use crate::graph::directed::DirectedGraph;
use crate::graph::table::EdgeTable;
use crate::graph::traits::{Graph, Weight};
use crate::graph::vertex_index::VertexIndex;
use crate::{Error, Result};

/// Resolves an edge table against a vertex index and builds the graph.
///
/// Every edge is stored under its resolved tail with weight
/// `dist + transfer`. The first unknown key, non-finite or negative
/// component, or unrepresentable sum aborts the build.
pub fn build_graph<W>(edges: &EdgeTable<W>, index: &VertexIndex) -> Result<DirectedGraph<W>>
where
    W: Weight,
{
    let mut resolved = Vec::with_capacity(edges.len());

    for (row, edge) in edges.iter().enumerate() {
        for component in [edge.dist, edge.transfer] {
            check_weight(row, component)?;
        }

        let from = index.resolve(edge.from)?;
        let to = index.resolve(edge.to)?;
        let weight = edge
            .dist
            .checked_sum(edge.transfer)
            .ok_or(Error::WeightOverflow { edge: row })?;
        resolved.push((from, to, weight));
    }

    let graph = DirectedGraph::from_edges(index.len(), resolved)?;
    debug!(
        "built graph with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    Ok(graph)
}

/// Rejects weights that cannot be shortest-path costs
pub(crate) fn check_weight<W>(edge: usize, weight: W) -> Result<()>
where
    W: Weight,
{
    if !weight.is_finite() {
        return Err(Error::InvalidWeight {
            edge,
            weight: format!("{:?}", weight),
        });
    }
    if weight < W::zero() {
        return Err(Error::NegativeWeight {
            edge,
            weight: format!("{:?}", weight),
        });
    }
    Ok(())
}
