//! Repository for the `worker_nodes` table.

use sqlx::PgPool;

use crate::models::worker::WorkerNodeRow;

pub struct WorkerRepo;

impl WorkerRepo {
    /// List worker nodes, optionally filtered by health status.
    pub async fn list(
        pool: &PgPool,
        status: Option<&str>,
    ) -> Result<Vec<WorkerNodeRow>, sqlx::Error> {
        let where_clause = if status.is_some() { " WHERE status = $1" } else { "" };

        let query = format!(
            "SELECT \
                 id::text AS id, \
                 name, \
                 status, \
                 region, \
                 instance_type, \
                 current_load::bigint AS active_tasks, \
                 max_concurrent_tasks::bigint AS max_concurrent_tasks, \
                 last_heartbeat \
             FROM worker_nodes{where_clause} \
             ORDER BY created_at DESC"
        );

        let mut q = sqlx::query_as::<_, WorkerNodeRow>(&query);
        if let Some(status) = status {
            q = q.bind(status);
        }
        q.fetch_all(pool).await
    }
}
