use chrono::{DateTime, Utc};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::graph::{EdgeTable, Network, VertexTable};
use crate::Result;

/// Edge table columns as sent by clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeColumns {
    pub from: Vec<String>,
    pub to: Vec<String>,
    pub d: Vec<f64>,
    #[serde(default)]
    pub transfer: Option<Vec<f64>>,
}

impl EdgeColumns {
    /// Validated edge table; a missing `transfer` column means no penalties
    pub fn into_table(self) -> Result<EdgeTable<OrderedFloat<f64>>> {
        let transfer = match self.transfer {
            Some(transfer) => transfer,
            None => vec![0.0; self.d.len()],
        };
        EdgeTable::new(
            self.from,
            self.to,
            self.d.into_iter().map(OrderedFloat).collect(),
            transfer.into_iter().map(OrderedFloat).collect(),
        )
    }
}

/// Vertex correspondence table columns as sent by clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VertexColumns {
    pub vert: Vec<String>,
    pub id: Vec<usize>,
}

impl VertexColumns {
    pub fn into_table(self) -> Result<VertexTable> {
        VertexTable::new(self.vert, self.id)
    }
}

/// Body of `POST /api/networks`
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkUploadRequest {
    pub edges: EdgeColumns,
    pub vertices: VertexColumns,
}

/// Body of the distance and path query endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct QueryRequest {
    /// Dense 0-based origin indices
    pub fromi: Vec<usize>,
    /// Dense 0-based destination indices
    pub toi: Vec<usize>,
    #[serde(default)]
    pub parallel: bool,
}

/// Distance matrix; `null` marks unreachable pairs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistanceResponse {
    pub session_id: Uuid,
    pub execution_time_ms: f64,
    pub distances: Vec<Vec<Option<f64>>>,
}

/// Paths as 1-based vertex indices; `null` for unreachable or trivial pairs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathResponse {
    pub session_id: Uuid,
    pub execution_time_ms: f64,
    pub paths: Vec<Vec<Option<Vec<usize>>>>,
}

/// Public view of a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    pub id: Uuid,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub created_at: DateTime<Utc>,
}

/// Error response for API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// An uploaded network kept in memory between queries
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub network: Arc<Network<OrderedFloat<f64>>>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(network: Network<OrderedFloat<f64>>) -> Self {
        Self {
            id: Uuid::new_v4(),
            network: Arc::new(network),
            created_at: Utc::now(),
        }
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            id: self.id,
            vertex_count: self.network.vertex_count(),
            edge_count: self.network.edge_count(),
            created_at: self.created_at,
        }
    }
}
