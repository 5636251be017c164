//! Handler for `GET /resource/workers`.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::reconcile::workers::{self, WorkerFilter};
use crate::response::WorkerListResponse;
use crate::state::AppState;

/// Query params for `GET /resource/workers`.
#[derive(Debug, Deserialize)]
pub struct WorkerListQuery {
    pub status: Option<String>,
}

/// GET /resource/workers
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<WorkerListQuery>,
) -> Json<WorkerListResponse> {
    let filter = WorkerFilter {
        status: params.status,
    };
    Json(workers::fetch(state.store.as_ref(), &filter).await)
}
