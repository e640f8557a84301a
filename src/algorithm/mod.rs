pub mod traits;
pub mod dijkstra;
pub mod path;
pub mod interrupt;
pub mod results;
pub mod batch;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
