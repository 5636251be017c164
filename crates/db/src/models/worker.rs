use sqlx::FromRow;
use taskflow_core::types::Timestamp;

/// A worker node row before metric enrichment.
#[derive(Debug, Clone, FromRow)]
pub struct WorkerNodeRow {
    pub id: String,
    pub name: String,
    pub status: String,
    pub region: String,
    pub instance_type: String,
    pub active_tasks: i64,
    pub max_concurrent_tasks: i64,
    pub last_heartbeat: Option<Timestamp>,
}

/// One named sample from `system_metrics`.
#[derive(Debug, Clone, FromRow)]
pub struct MetricRow {
    pub metric_name: String,
    pub metric_value: f64,
}
