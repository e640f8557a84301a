//! Transit SSSP - batch shortest paths over weighted transit networks
//!
//! Builds an immutable directed graph from an edge table (`from`, `to`, `d`,
//! `transfer`) and a vertex correspondence table (`vert`, `id`), then answers
//! two batch queries for arbitrary origin and destination sets:
//!
//! * a distance matrix, one Dijkstra run per origin;
//! * the vertex sequence of every shortest path, reconstructed from the
//!   predecessor array of the same run.
//!
//! Edge weights must be non-negative. The effective weight of an edge is its
//! base cost plus its transfer penalty.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
#[cfg(feature = "python")]
mod python;
pub mod web;

pub use algorithm::{
    batch::{BatchOptions, BatchQuery},
    dijkstra::{Dijkstra, DijkstraEngine},
    interrupt::{FnInterrupt, Interrupt, NeverInterrupt, TryInterrupt},
    results::{DistanceMatrix, PathList},
    ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::{
    directed::DirectedGraph,
    network::Network,
    table::{EdgeTable, VertexTable},
    vertex_index::VertexIndex,
};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Unknown vertex key: {0:?}")]
    UnknownVertexKey(String),

    #[error("Duplicate vertex key: {0:?}")]
    DuplicateVertexKey(String),

    #[error("Vertex key {key:?} has index {index}, expected a unique index below {count}")]
    NonDenseIndex {
        key: String,
        index: usize,
        count: usize,
    },

    #[error("Negative weight on edge {edge}: {weight}")]
    NegativeWeight { edge: usize, weight: String },

    #[error("Non-finite weight on edge {edge}: {weight}")]
    InvalidWeight { edge: usize, weight: String },

    #[error("Weight of edge {edge} overflows its numeric type")]
    WeightOverflow { edge: usize },

    #[error("Column {column:?} of the {table} table has {found} rows, expected {expected}")]
    ShapeMismatch {
        table: &'static str,
        column: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Batch interrupted before origin {origin}")]
    Interrupted { origin: usize },
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
