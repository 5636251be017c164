//! Schema probing and provisioning status.
//!
//! Every resource endpoint decides between real and mock data based on the
//! probes here. The probe never raises: absence of proof is treated as
//! absence of the table, so an unreachable store degrades to mock data
//! instead of an error page.

use futures::future::join_all;
use serde::Serialize;

use crate::DbPool;

/// Every table a fully provisioned store carries.
///
/// All are equally required for "full" status; each resource depends on its
/// own subset only.
pub const REQUIRED_TABLES: [&str; 10] = [
    "users",
    "teams",
    "team_members",
    "workflows",
    "workflow_executions",
    "tasks",
    "task_executions",
    "worker_nodes",
    "system_metrics",
    "audit_logs",
];

/// Existence of a single required table.
#[derive(Debug, Clone, Serialize)]
pub struct TableStatus {
    pub table: String,
    pub exists: bool,
}

/// Partition of the required-table set into existing and missing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaStatus {
    pub all_tables_exist: bool,
    pub missing_tables: Vec<String>,
    pub existing_tables: Vec<String>,
    pub table_status: Vec<TableStatus>,
}

impl SchemaStatus {
    /// The status reported when no backing store is configured at all.
    pub fn unprovisioned() -> Self {
        SchemaStatus {
            all_tables_exist: false,
            missing_tables: REQUIRED_TABLES.iter().map(|t| t.to_string()).collect(),
            existing_tables: Vec::new(),
            table_status: REQUIRED_TABLES
                .iter()
                .map(|t| TableStatus {
                    table: t.to_string(),
                    exists: false,
                })
                .collect(),
        }
    }
}

/// Check whether `table_name` exists in the `public` schema.
///
/// Returns `false` — never an error — when the store is unreachable or the
/// catalog query itself fails.
pub async fn table_exists(pool: &DbPool, table_name: &str) -> bool {
    let result: Result<(bool,), sqlx::Error> = sqlx::query_as(
        "SELECT EXISTS (\
            SELECT FROM information_schema.tables \
            WHERE table_schema = 'public' AND table_name = $1\
         )",
    )
    .bind(table_name)
    .fetch_one(pool)
    .await;

    match result {
        Ok((exists,)) => exists,
        Err(err) => {
            tracing::warn!(error = %err, table = table_name, "Table existence probe failed");
            false
        }
    }
}

/// True iff every listed table exists. Probes run concurrently.
pub async fn all_exist(pool: &DbPool, tables: &[&str]) -> bool {
    join_all(tables.iter().map(|t| table_exists(pool, t)))
        .await
        .into_iter()
        .all(|exists| exists)
}

/// Probe the full required-table set and aggregate the result.
///
/// Probes are issued concurrently with no ordering guarantee among them;
/// the aggregate preserves [`REQUIRED_TABLES`] order.
pub async fn check_schema(pool: &DbPool) -> SchemaStatus {
    let table_status: Vec<TableStatus> = join_all(REQUIRED_TABLES.iter().map(|t| async move {
        TableStatus {
            table: t.to_string(),
            exists: table_exists(pool, t).await,
        }
    }))
    .await;

    SchemaStatus {
        all_tables_exist: table_status.iter().all(|t| t.exists),
        missing_tables: table_status
            .iter()
            .filter(|t| !t.exists)
            .map(|t| t.table.clone())
            .collect(),
        existing_tables: table_status
            .iter()
            .filter(|t| t.exists)
            .map(|t| t.table.clone())
            .collect(),
        table_status,
    }
}
