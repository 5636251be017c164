//! Handler for `GET /resource/tasks`.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::reconcile::tasks::{self, TaskFilter};
use crate::response::TaskListResponse;
use crate::state::AppState;

/// Query params for `GET /resource/tasks`.
#[derive(Debug, Deserialize)]
pub struct TaskListQuery {
    pub status: Option<String>,
    /// Case-insensitive substring match on the owning workflow name.
    pub workflow: Option<String>,
}

/// GET /resource/tasks
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<TaskListQuery>,
) -> Json<TaskListResponse> {
    let filter = TaskFilter {
        status: params.status,
        workflow: params.workflow,
    };
    Json(tasks::fetch(state.store.as_ref(), &filter).await)
}
