//! Handler for `GET /health`.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use taskflow_core::types::format_timestamp;
use taskflow_db::schema::{self, SchemaStatus};

use crate::state::AppState;

/// Health check response payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `healthy` when the store is connected, `degraded` otherwise.
    pub status: &'static str,
    pub timestamp: String,
    pub database: DatabaseBlock,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    pub features: Features,
}

/// Backing-store portion of the health report.
#[derive(Debug, Serialize)]
pub struct DatabaseBlock {
    /// `connected`, `unavailable` (not configured), or `error`.
    pub status: &'static str,
    pub timestamp: Option<String>,
    pub schema: SchemaStatus,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct Features {
    #[serde(rename = "mockDataFallback")]
    pub mock_data_fallback: bool,
    #[serde(rename = "realTimeUpdates")]
    pub real_time_updates: bool,
    pub authentication: bool,
}

/// GET /health -- service and database health.
///
/// Store errors degrade the report; they never fail the endpoint.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match &state.store {
        None => DatabaseBlock {
            status: "unavailable",
            timestamp: None,
            schema: SchemaStatus::unprovisioned(),
            message: "Database connection not configured".to_string(),
        },
        Some(pool) => match taskflow_db::connection_timestamp(pool).await {
            Ok(ts) => DatabaseBlock {
                status: "connected",
                timestamp: Some(format_timestamp(ts)),
                schema: schema::check_schema(pool).await,
                message: "Database connected successfully".to_string(),
            },
            Err(err) => {
                tracing::error!(error = %err, "Database health check failed");
                DatabaseBlock {
                    status: "error",
                    timestamp: None,
                    schema: SchemaStatus::unprovisioned(),
                    message: format!("Database error: {err}"),
                }
            }
        },
    };

    let connected = database.status == "connected";

    Json(HealthResponse {
        status: if connected { "healthy" } else { "degraded" },
        timestamp: format_timestamp(Utc::now()),
        database,
        version: env!("CARGO_PKG_VERSION"),
        features: Features {
            mock_data_fallback: true,
            real_time_updates: connected,
            authentication: state.config.environment.is_production(),
        },
    })
}
