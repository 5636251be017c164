//! Handler for `GET /schema-status`.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use taskflow_core::types::format_timestamp;
use taskflow_db::schema::{self, SchemaStatus};

use crate::state::AppState;

/// Provisioning report for the required-table set.
#[derive(Debug, Serialize)]
pub struct SchemaStatusResponse {
    /// `ready`, `incomplete`, or `unavailable`.
    pub status: &'static str,
    pub message: String,
    #[serde(flatten)]
    pub schema: SchemaStatus,
    pub timestamp: String,
}

/// GET /schema-status -- which required tables exist.
pub async fn schema_status(State(state): State<AppState>) -> Json<SchemaStatusResponse> {
    let response = match &state.store {
        None => SchemaStatusResponse {
            status: "unavailable",
            message: "Database connection not configured. Using mock data.".to_string(),
            schema: SchemaStatus::unprovisioned(),
            timestamp: format_timestamp(Utc::now()),
        },
        Some(pool) => {
            let schema = schema::check_schema(pool).await;
            let (status, message) = if schema.all_tables_exist {
                ("ready", "Database is properly configured".to_string())
            } else {
                (
                    "incomplete",
                    format!(
                        "Missing tables: {}. Using mock data.",
                        schema.missing_tables.join(", ")
                    ),
                )
            };
            SchemaStatusResponse {
                status,
                message,
                schema,
                timestamp: format_timestamp(Utc::now()),
            }
        }
    };

    Json(response)
}
