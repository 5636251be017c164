//! Worker reconciler.

use std::collections::HashMap;

use futures::future::join_all;
use taskflow_core::filter;
use taskflow_core::mock;
use taskflow_core::types::format_timestamp;
use taskflow_core::worker::{UsageSnapshot, WorkerRecord};
use taskflow_db::models::worker::WorkerNodeRow;
use taskflow_db::repositories::{SystemMetricRepo, WorkerRepo};
use taskflow_db::safe::safe_query;
use taskflow_db::{schema, DbPool};

use crate::response::WorkerListResponse;

/// Filters accepted by the worker list endpoint.
#[derive(Debug, Default)]
pub struct WorkerFilter {
    pub status: Option<String>,
}

/// Serve the worker fleet from the store when `worker_nodes` exists,
/// otherwise from the mock set.
///
/// `system_metrics` is enrichment only: when it is missing (or a lookup
/// fails for one worker) that worker gets bounded synthetic usage numbers
/// and the rest of the fleet is unaffected.
pub async fn fetch(store: Option<&DbPool>, filter: &WorkerFilter) -> WorkerListResponse {
    let status = filter::status_filter(filter.status.as_deref());

    let Some(pool) = store else {
        return mock_response(status);
    };

    let (nodes_exist, metrics_exist) = futures::join!(
        schema::table_exists(pool, "worker_nodes"),
        schema::table_exists(pool, "system_metrics"),
    );
    if !nodes_exist {
        return mock_response(status);
    }

    let rows = safe_query(
        WorkerRepo::list(pool, status),
        Vec::new(),
        "Failed to fetch workers from database",
    )
    .await;

    // Metric lookups are independent per worker; issue them concurrently
    // and join. Each future resolves to its own record slot.
    let workers: Vec<WorkerRecord> = join_all(
        rows.into_iter()
            .map(|row| enrich_with_metrics(pool, metrics_exist, row)),
    )
    .await;

    WorkerListResponse::live(workers)
}

fn mock_response(status: Option<&str>) -> WorkerListResponse {
    let workers: Vec<WorkerRecord> = mock::workers()
        .into_iter()
        .filter(|w| w.matches_status(status))
        .collect();
    WorkerListResponse::mock(workers)
}

/// Attach recent usage samples to a worker row, falling back to synthetic
/// values for any metric with no sample in the window.
async fn enrich_with_metrics(
    pool: &DbPool,
    metrics_exist: bool,
    row: WorkerNodeRow,
) -> WorkerRecord {
    let samples = if metrics_exist {
        let label = format!("Failed to fetch metrics for worker {}", row.id);
        safe_query(
            SystemMetricRepo::recent_for_source(pool, &row.id),
            Vec::new(),
            &label,
        )
        .await
    } else {
        Vec::new()
    };

    // Rows arrive newest first; keep the newest sample per metric name.
    let mut latest: HashMap<String, f64> = HashMap::new();
    for sample in samples {
        latest.entry(sample.metric_name).or_insert(sample.metric_value);
    }

    let fallback = UsageSnapshot::synthetic();
    let percent =
        |name: &str, fallback: i64| latest.get(name).map_or(fallback, |v| v.round() as i64);

    WorkerRecord {
        cpu_usage: percent("cpu_usage_percent", fallback.cpu_usage),
        memory_usage: percent("memory_usage_percent", fallback.memory_usage),
        disk_usage: percent("disk_usage_percent", fallback.disk_usage),
        network_io: latest
            .get("network_io_gbps")
            .copied()
            .unwrap_or(fallback.network_io),
        id: row.id,
        name: row.name,
        status: row.status,
        region: row.region,
        instance_type: row.instance_type,
        active_tasks: row.active_tasks,
        max_concurrent_tasks: row.max_concurrent_tasks,
        // Rollups over task_executions are not wired in yet.
        completed_tasks: 1247,
        failed_tasks: 12,
        uptime: "15d 4h 23m".to_string(),
        last_heartbeat: row.last_heartbeat.map(format_timestamp),
    }
}
