pub mod traits;
pub mod directed;
pub mod table;
pub mod vertex_index;
pub mod builder;
pub mod network;
pub mod generators;

pub use traits::{Graph, Weight};
pub use directed::DirectedGraph;
pub use builder::build_graph;
pub use network::Network;
pub use table::{EdgeRecord, EdgeTable, VertexTable};
pub use vertex_index::VertexIndex;
