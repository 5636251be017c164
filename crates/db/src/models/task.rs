use sqlx::FromRow;
use taskflow_core::types::Timestamp;

/// A task execution row joined to its task and workflow names.
#[derive(Debug, Clone, FromRow)]
pub struct TaskExecutionRow {
    pub id: String,
    pub name: String,
    pub workflow: String,
    pub status: String,
    pub started_at: Option<Timestamp>,
    pub completed_at: Option<Timestamp>,
    pub worker: Option<String>,
    pub retries: i32,
    pub error: Option<String>,
}

/// One status bucket from the 24-hour summary aggregate.
#[derive(Debug, Clone, FromRow)]
pub struct TaskStatusCount {
    pub status: String,
    pub count: i64,
}
