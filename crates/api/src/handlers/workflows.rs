//! Handlers for the `/resource/workflows` endpoints.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use taskflow_core::workflow::CreateWorkflow;
use taskflow_db::models::workflow::WorkflowCreatedRow;

use crate::error::AppResult;
use crate::reconcile::workflows::{self, WorkflowFilter};
use crate::response::WorkflowListResponse;
use crate::state::AppState;

/// Query params for `GET /resource/workflows`.
#[derive(Debug, Deserialize)]
pub struct WorkflowListQuery {
    pub status: Option<String>,
    pub search: Option<String>,
}

/// GET /resource/workflows
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<WorkflowListQuery>,
) -> Json<WorkflowListResponse> {
    let filter = WorkflowFilter {
        status: params.status,
        search: params.search,
    };
    Json(workflows::fetch(state.store.as_ref(), &filter).await)
}

/// POST /resource/workflows
///
/// Creates a workflow; 400 when name/description are missing, 503 when the
/// store is not initialized.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateWorkflow>,
) -> AppResult<(StatusCode, Json<WorkflowCreatedRow>)> {
    let row = workflows::create(state.store.as_ref(), &input).await?;
    Ok((StatusCode::CREATED, Json(row)))
}
