use std::{net::SocketAddr, path::PathBuf, sync::Arc};

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::{
    LoadError, LoadSummary, QueryError, QuerySpec, RecordStore, run_query,
    table::{column_titles, project_rows},
};

#[derive(Clone)]
pub struct AppState {
    store: Arc<RwLock<RecordStore>>,
}

impl AppState {
    pub fn new(store: RecordStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    fn store(&self) -> Arc<RwLock<RecordStore>> {
        self.store.clone()
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

#[derive(Debug)]
enum ApiError {
    NotFound(String),
    Conflict(String),
    Invalid(String),
    InvalidQuery(String),
}

#[derive(Debug, Deserialize)]
struct LoadPayload {
    folder: PathBuf,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ScheduleTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl From<LoadError> for ApiError {
    fn from(value: LoadError) -> Self {
        match value {
            LoadError::NoFilesFound { .. } => ApiError::NotFound(value.to_string()),
            LoadError::Io { .. } | LoadError::Csv { .. } => ApiError::Invalid(value.to_string()),
        }
    }
}

impl From<QueryError> for ApiError {
    fn from(value: QueryError) -> Self {
        match value {
            QueryError::NoDataLoaded => ApiError::Conflict(value.to_string()),
            QueryError::DateParse { .. } | QueryError::MissingField { .. } => {
                ApiError::InvalidQuery(value.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, "not_found", message),
            ApiError::Conflict(message) => (StatusCode::CONFLICT, "conflict", message),
            ApiError::Invalid(message) => (StatusCode::BAD_REQUEST, "invalid_request", message),
            ApiError::InvalidQuery(message) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "invalid_query", message)
            }
        };
        (status, Json(ErrorBody { error, message })).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/load", post(load_folder))
        .route("/schedules", get(list_schedules))
        .route("/records", delete(clear_records))
        .with_state(state)
}

pub async fn serve(addr: SocketAddr, store: RecordStore) -> std::io::Result<()> {
    let state = AppState::new(store);
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn load_folder(
    State(state): State<AppState>,
    Json(payload): Json<LoadPayload>,
) -> Result<Json<LoadSummary>, ApiError> {
    info!("POST /load {}", payload.folder.display());
    let store = state.store();
    let summary = {
        let mut guard = store.write();
        guard.load(&payload.folder)?
    };
    Ok(Json(summary))
}

async fn list_schedules(
    State(state): State<AppState>,
    Query(spec): Query<QuerySpec>,
) -> Result<Json<ScheduleTable>, ApiError> {
    info!("GET /schedules");
    let store = state.store();
    let records = {
        let guard = store.read();
        run_query(&guard, &spec)?
    };
    let rows = project_rows(&records)?;
    Ok(Json(ScheduleTable {
        columns: column_titles().into_iter().map(str::to_string).collect(),
        rows,
    }))
}

async fn clear_records(State(state): State<AppState>) -> StatusCode {
    info!("DELETE /records");
    let store = state.store();
    store.write().clear();
    StatusCode::NO_CONTENT
}
