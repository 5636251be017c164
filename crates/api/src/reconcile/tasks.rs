//! Task reconciler.

use taskflow_core::filter;
use taskflow_core::mock;
use taskflow_core::task::{TaskRecord, TaskStatus, TaskSummary};
use taskflow_core::types::format_timestamp;
use taskflow_db::models::task::{TaskExecutionRow, TaskStatusCount};
use taskflow_db::repositories::TaskRepo;
use taskflow_db::safe::safe_query;
use taskflow_db::{schema, DbPool};

use crate::response::TaskListResponse;

/// Tables the task list depends on.
const REQUIRED_TABLES: [&str; 3] = ["task_executions", "tasks", "workflows"];

/// Filters accepted by the task list endpoint.
#[derive(Debug, Default)]
pub struct TaskFilter {
    pub status: Option<String>,
    pub workflow: Option<String>,
}

/// Serve the task list from the store when its tables exist, otherwise from
/// the mock set.
pub async fn fetch(store: Option<&DbPool>, filter: &TaskFilter) -> TaskListResponse {
    let status = filter::status_filter(filter.status.as_deref());
    let workflow = filter::text_filter(filter.workflow.as_deref());

    let Some(pool) = store else {
        return mock_response(status, workflow);
    };
    if !schema::all_exist(pool, &REQUIRED_TABLES).await {
        return mock_response(status, workflow);
    }

    let rows = safe_query(
        TaskRepo::list(pool, status, workflow),
        Vec::new(),
        "Failed to fetch tasks from database",
    )
    .await;
    let tasks: Vec<TaskRecord> = rows.into_iter().map(record_from_row).collect();

    // The summary is a separate aggregate over the last 24 hours, not a
    // recount of the filtered page.
    let summary = safe_query(
        async {
            TaskRepo::status_counts_last_day(pool)
                .await
                .map(|counts| summary_from_counts(&counts))
        },
        TaskSummary::default(),
        "Failed to fetch task summary",
    )
    .await;

    TaskListResponse::live(tasks, summary)
}

fn mock_response(status: Option<&str>, workflow: Option<&str>) -> TaskListResponse {
    let tasks: Vec<TaskRecord> = mock::tasks()
        .into_iter()
        .filter(|t| t.matches_status(status) && t.matches_workflow(workflow))
        .collect();
    TaskListResponse::mock(tasks)
}

/// Map a joined execution row into the canonical record shape.
///
/// Progress is derived from status; duration is computed from the start and
/// completion timestamps when both exist.
fn record_from_row(row: TaskExecutionRow) -> TaskRecord {
    let progress = TaskStatus::parse(&row.status).map_or(0, TaskStatus::derived_progress);
    let duration = match (row.started_at, row.completed_at) {
        (Some(started), Some(completed)) => {
            Some(format!("{}s", (completed - started).num_seconds()))
        }
        _ => None,
    };

    TaskRecord {
        id: row.id,
        name: row.name,
        workflow: row.workflow,
        status: row.status,
        progress,
        start_time: row.started_at.map(format_timestamp),
        duration,
        worker: row.worker,
        retries: row.retries,
        // No priority column yet; every stored execution reports high.
        priority: "high".to_string(),
        error: row.error,
    }
}

fn summary_from_counts(counts: &[TaskStatusCount]) -> TaskSummary {
    let mut summary = TaskSummary::default();
    for bucket in counts {
        match bucket.status.as_str() {
            "running" => summary.running = bucket.count,
            "completed" => summary.completed = bucket.count,
            "failed" => summary.failed = bucket.count,
            "pending" => summary.pending = bucket.count,
            _ => {}
        }
    }
    summary
}
