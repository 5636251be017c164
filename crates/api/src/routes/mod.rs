use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the application route tree.
///
/// ```text
/// GET  /health                service + database health
/// GET  /schema-status         required-table provisioning report
/// POST /auth/login            demo-user login (public)
/// GET  /resource/workflows    list workflows
/// POST /resource/workflows    create workflow
/// GET  /resource/tasks        list task executions
/// GET  /resource/workers      list worker fleet
/// GET  /resource/metrics      synthetic metric series
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/schema-status", get(handlers::schema_status::schema_status))
        .route("/auth/login", post(handlers::auth::login))
        .route(
            "/resource/workflows",
            get(handlers::workflows::list).post(handlers::workflows::create),
        )
        .route("/resource/tasks", get(handlers::tasks::list))
        .route("/resource/workers", get(handlers::workers::list))
        .route("/resource/metrics", get(handlers::metrics::list))
}
