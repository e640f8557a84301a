use crate::algorithm::batch::BatchQuery;
use crate::graph::builder::build_graph;
use crate::graph::directed::DirectedGraph;
use crate::graph::table::{EdgeTable, VertexTable};
use crate::graph::traits::{Graph, Weight};
use crate::graph::vertex_index::VertexIndex;
use crate::Result;

/// A vertex index together with the graph built over it.
///
/// Build once, then hand out `&Network` (or `Arc<Network>`) to every query.
#[derive(Debug, Clone)]
pub struct Network<W>
where
    W: Weight,
{
    index: VertexIndex,
    graph: DirectedGraph<W>,
}

impl<W> Network<W>
where
    W: Weight,
{
    /// Builds the vertex index from `vertices`, then the graph from `edges`
    pub fn from_tables(edges: &EdgeTable<W>, vertices: &VertexTable) -> Result<Self> {
        let index = VertexIndex::from_table(vertices)?;
        let graph = build_graph(edges, &index)?;
        Ok(Network { index, graph })
    }

    pub fn index(&self) -> &VertexIndex {
        &self.index
    }

    pub fn graph(&self) -> &DirectedGraph<W> {
        &self.graph
    }

    /// Batch queries over this network's graph
    pub fn query(&self) -> BatchQuery<'_, DirectedGraph<W>> {
        BatchQuery::new(&self.graph)
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
