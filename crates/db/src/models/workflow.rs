use serde::Serialize;
use sqlx::FromRow;
use taskflow_core::types::Timestamp;

/// A workflow row from the list query.
///
/// `status` is computed in SQL from `is_active`; `owner` and `tasks` fall
/// back to literals when the enrichment tables are missing.
#[derive(Debug, Clone, FromRow)]
pub struct WorkflowRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: String,
    pub schedule: Option<String>,
    pub owner: String,
    pub tasks: i64,
    pub created_at: Timestamp,
}

/// The row returned by a workflow insert.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WorkflowCreatedRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub team_id: String,
    pub created_by: String,
    pub definition: serde_json::Value,
    pub schedule_expression: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
}
