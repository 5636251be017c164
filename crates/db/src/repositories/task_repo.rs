//! Repository for the `task_executions` table and its joins.

use sqlx::PgPool;

use crate::models::task::{TaskExecutionRow, TaskStatusCount};

/// Cap on the task list; the dashboard shows recent executions only.
const LIST_LIMIT: i64 = 50;

pub struct TaskRepo;

impl TaskRepo {
    /// List recent task executions joined to their task and workflow names.
    ///
    /// `status` filters by equality; `workflow` is a case-insensitive
    /// substring match on the workflow name.
    pub async fn list(
        pool: &PgPool,
        status: Option<&str>,
        workflow: Option<&str>,
    ) -> Result<Vec<TaskExecutionRow>, sqlx::Error> {
        let mut conditions: Vec<String> = Vec::new();
        if status.is_some() {
            conditions.push(format!("te.status = ${}", conditions.len() + 1));
        }
        if workflow.is_some() {
            conditions.push(format!("w.name ILIKE ${}", conditions.len() + 1));
        }
        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT \
                 te.id::text AS id, \
                 t.name AS name, \
                 w.name AS workflow, \
                 te.status, \
                 te.started_at, \
                 te.completed_at, \
                 te.worker_node_id::text AS worker, \
                 te.retry_count AS retries, \
                 te.error_message AS error \
             FROM task_executions te \
             JOIN tasks t ON te.task_id = t.id \
             JOIN workflows w ON t.workflow_id = w.id{where_clause} \
             ORDER BY te.created_at DESC \
             LIMIT {LIST_LIMIT}"
        );

        let mut q = sqlx::query_as::<_, TaskExecutionRow>(&query);
        if let Some(status) = status {
            q = q.bind(status);
        }
        if let Some(workflow) = workflow {
            q = q.bind(format!("%{workflow}%"));
        }
        q.fetch_all(pool).await
    }

    /// Per-status execution counts over the last 24 hours.
    pub async fn status_counts_last_day(
        pool: &PgPool,
    ) -> Result<Vec<TaskStatusCount>, sqlx::Error> {
        sqlx::query_as::<_, TaskStatusCount>(
            "SELECT status, COUNT(*) AS count \
             FROM task_executions \
             WHERE created_at > NOW() - INTERVAL '24 hours' \
             GROUP BY status",
        )
        .fetch_all(pool)
        .await
    }
}
