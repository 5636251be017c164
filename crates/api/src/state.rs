use std::sync::Arc;

use crate::auth::users::DemoUserDirectory;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// Everything here is constructed once at startup and injected; there is no
/// lazily-initialized ambient handle.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool; `None` when no backing store is configured,
    /// in which case every resource serves its mock data set.
    pub store: Option<taskflow_db::DbPool>,
    /// Server configuration (accessed by middleware and handlers).
    pub config: Arc<ServerConfig>,
    /// Fixed demo-user directory backing `/auth/login`.
    pub users: Arc<DemoUserDirectory>,
}
