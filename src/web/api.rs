use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use log::{info, warn};
use ordered_float::OrderedFloat;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Instant;
use uuid::Uuid;

use crate::algorithm::batch::BatchOptions;
use crate::algorithm::results::{DistanceMatrix, PathList};
use crate::graph::Network;
use crate::web::models::*;
use crate::Error;

type ApiError = (StatusCode, Json<ErrorResponse>);
type ApiResult<T> = Result<Json<T>, ApiError>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
    pub max_sessions: usize,
}

impl AppState {
    pub fn new(max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            max_sessions,
        }
    }

    fn lock_sessions(&self) -> std::sync::MutexGuard<'_, HashMap<Uuid, Session>> {
        self.sessions.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn network(&self, session_id: Uuid) -> Result<Arc<Network<OrderedFloat<f64>>>, ApiError> {
        self.lock_sessions()
            .get(&session_id)
            .map(|session| Arc::clone(&session.network))
            .ok_or_else(session_not_found)
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/networks", post(upload_network).get(list_sessions))
        .route("/api/networks/:session_id", get(get_session).delete(delete_session))
        .route("/api/networks/:session_id/distances", post(run_distances))
        .route("/api/networks/:session_id/paths", post(run_paths))
        .route("/api/health", get(health_check))
}

/// Build a network from uploaded tables and store it in a new session
pub async fn upload_network(
    State(state): State<AppState>,
    Json(request): Json<NetworkUploadRequest>,
) -> ApiResult<SessionSummary> {
    let edges = request.edges.into_table().map_err(library_error)?;
    let vertices = request.vertices.into_table().map_err(library_error)?;
    let network = Network::from_tables(&edges, &vertices).map_err(library_error)?;

    let session = Session::new(network);
    let summary = session.summary();

    // Limit check and insert under one guard
    let mut sessions = state.lock_sessions();
    if sessions.len() >= state.max_sessions {
        return Err(error_response(
            StatusCode::TOO_MANY_REQUESTS,
            "session_limit_reached",
            format!("At most {} networks can be held at once", state.max_sessions),
        ));
    }
    sessions.insert(session.id, session);
    drop(sessions);

    info!(
        "created session {} with {} vertices and {} edges",
        summary.id, summary.vertex_count, summary.edge_count
    );

    Ok(Json(summary))
}

/// List all active sessions
pub async fn list_sessions(State(state): State<AppState>) -> ApiResult<Vec<Uuid>> {
    let sessions = state.lock_sessions();
    let session_ids: Vec<Uuid> = sessions.keys().cloned().collect();
    Ok(Json(session_ids))
}

/// Get session information
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> ApiResult<SessionSummary> {
    let sessions = state.lock_sessions();
    match sessions.get(&session_id) {
        Some(session) => Ok(Json(session.summary())),
        None => Err(session_not_found()),
    }
}

/// Drop a session and its network
pub async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    match state.lock_sessions().remove(&session_id) {
        Some(_) => Ok(StatusCode::NO_CONTENT),
        None => Err(session_not_found()),
    }
}

/// Distance matrix between the requested origins and destinations
pub async fn run_distances(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<QueryRequest>,
) -> ApiResult<DistanceResponse> {
    let network = state.network(session_id)?;
    let cancel = CancelOnDrop::new();
    let flag = cancel.flag();
    let options = BatchOptions {
        parallel: request.parallel,
    };

    let start_time = Instant::now();
    let matrix: DistanceMatrix<OrderedFloat<f64>> = tokio::task::spawn_blocking(move || {
        network
            .query()
            .distances::<OrderedFloat<f64>, AtomicBool>(&request.fromi, &request.toi, options, flag.as_ref())
    })
    .await
    .map_err(task_failed)?
    .map_err(library_error)?;

    Ok(Json(DistanceResponse {
        session_id,
        execution_time_ms: start_time.elapsed().as_secs_f64() * 1000.0,
        distances: matrix.map(OrderedFloat::into_inner).to_nested(),
    }))
}

/// Shortest paths between the requested origins and destinations, 1-based
pub async fn run_paths(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<QueryRequest>,
) -> ApiResult<PathResponse> {
    let network = state.network(session_id)?;
    let cancel = CancelOnDrop::new();
    let flag = cancel.flag();
    let options = BatchOptions {
        parallel: request.parallel,
    };

    let start_time = Instant::now();
    let paths: PathList = tokio::task::spawn_blocking(move || {
        network.query().paths::<OrderedFloat<f64>, AtomicBool>(
            &request.fromi,
            &request.toi,
            options,
            flag.as_ref(),
        )
    })
    .await
    .map_err(task_failed)?
    .map_err(library_error)?;

    Ok(Json(PathResponse {
        session_id,
        execution_time_ms: start_time.elapsed().as_secs_f64() * 1000.0,
        paths: paths.one_based(),
    }))
}

/// Health check endpoint
pub async fn health_check() -> ApiResult<serde_json::Value> {
    Ok(Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    })))
}

// Helper functions

/// Raises its flag when dropped, so a batch whose request was abandoned
/// stops at the next origin.
struct CancelOnDrop(Arc<AtomicBool>);

impl CancelOnDrop {
    fn new() -> Self {
        CancelOnDrop(Arc::new(AtomicBool::new(false)))
    }

    fn flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.0)
    }
}

impl Drop for CancelOnDrop {
    fn drop(&mut self) {
        self.0.store(true, Ordering::Relaxed);
    }
}

fn error_response(status: StatusCode, error: &str, message: String) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
            message,
        }),
    )
}

fn session_not_found() -> ApiError {
    error_response(
        StatusCode::NOT_FOUND,
        "session_not_found",
        "Session not found".to_string(),
    )
}

fn library_error(err: Error) -> ApiError {
    let (status, code) = match &err {
        Error::InvalidVertex(_) => (StatusCode::BAD_REQUEST, "invalid_vertex"),
        Error::UnknownVertexKey(_) => (StatusCode::BAD_REQUEST, "unknown_vertex_key"),
        Error::DuplicateVertexKey(_) => (StatusCode::BAD_REQUEST, "duplicate_vertex_key"),
        Error::NonDenseIndex { .. } => (StatusCode::BAD_REQUEST, "non_dense_index"),
        Error::NegativeWeight { .. } => (StatusCode::BAD_REQUEST, "negative_weight"),
        Error::InvalidWeight { .. } => (StatusCode::BAD_REQUEST, "invalid_weight"),
        Error::WeightOverflow { .. } => (StatusCode::BAD_REQUEST, "weight_overflow"),
        Error::ShapeMismatch { .. } => (StatusCode::BAD_REQUEST, "shape_mismatch"),
        Error::Interrupted { .. } => (StatusCode::SERVICE_UNAVAILABLE, "interrupted"),
    };
    error_response(status, code, err.to_string())
}

fn task_failed(err: tokio::task::JoinError) -> ApiError {
    warn!("query task failed: {}", err);
    error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        "query_failed",
        format!("Query execution failed: {}", err),
    )
}
