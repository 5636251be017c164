//! Workflow reconciler.

use taskflow_core::error::CoreError;
use taskflow_core::filter;
use taskflow_core::mock;
use taskflow_core::types::format_timestamp;
use taskflow_core::workflow::{CreateWorkflow, WorkflowRecord};
use taskflow_db::models::workflow::{WorkflowCreatedRow, WorkflowRow};
use taskflow_db::repositories::WorkflowRepo;
use taskflow_db::safe::safe_query;
use taskflow_db::{schema, DbPool};

use crate::error::{AppError, AppResult};
use crate::response::WorkflowListResponse;

/// Returned when creation is attempted against an uninitialized store.
const DB_NOT_INITIALIZED: &str =
    "Database not initialized. Please run database setup scripts first.";

/// Filters accepted by the workflow list endpoint.
#[derive(Debug, Default)]
pub struct WorkflowFilter {
    pub status: Option<String>,
    pub search: Option<String>,
}

/// Serve the workflow list from the store when the `workflows` table exists,
/// otherwise from the mock set.
///
/// The `users` and `tasks` tables are enrichment only: their absence
/// degrades the owner and task-count columns, not the whole listing.
pub async fn fetch(store: Option<&DbPool>, filter: &WorkflowFilter) -> WorkflowListResponse {
    let status = filter::status_filter(filter.status.as_deref());
    let search = filter::text_filter(filter.search.as_deref());

    let Some(pool) = store else {
        return mock_response(status, search);
    };

    let (workflows_exist, users_exist, tasks_exist) = futures::join!(
        schema::table_exists(pool, "workflows"),
        schema::table_exists(pool, "users"),
        schema::table_exists(pool, "tasks"),
    );
    if !workflows_exist {
        return mock_response(status, search);
    }

    // The stored status space is binary (active/paused); any other status
    // value can match nothing, so skip the query entirely.
    let active = match status {
        None => None,
        Some("active") => Some(true),
        Some("paused") => Some(false),
        Some(_) => return WorkflowListResponse::live(Vec::new()),
    };

    let rows = safe_query(
        WorkflowRepo::list(pool, active, search, users_exist, tasks_exist),
        Vec::new(),
        "Failed to fetch workflows from database",
    )
    .await;

    WorkflowListResponse::live(rows.into_iter().map(record_from_row).collect())
}

/// Create a workflow. Creation cannot be served from mock data: an absent
/// store or missing `workflows` table is a configuration error.
pub async fn create(
    store: Option<&DbPool>,
    input: &CreateWorkflow,
) -> AppResult<WorkflowCreatedRow> {
    input.validate().map_err(AppError::Core)?;

    let Some(pool) = store else {
        return Err(AppError::Core(CoreError::Unavailable(
            DB_NOT_INITIALIZED.to_string(),
        )));
    };
    if !schema::table_exists(pool, "workflows").await {
        return Err(AppError::Core(CoreError::Unavailable(
            DB_NOT_INITIALIZED.to_string(),
        )));
    }

    let row = WorkflowRepo::insert(pool, input).await?;
    tracing::info!(workflow_id = %row.id, name = %row.name, "Workflow created");
    Ok(row)
}

fn mock_response(status: Option<&str>, search: Option<&str>) -> WorkflowListResponse {
    let workflows: Vec<WorkflowRecord> = mock::workflows()
        .into_iter()
        .filter(|w| w.matches_status(status) && w.matches_search(search))
        .collect();
    WorkflowListResponse::mock(workflows)
}

/// Map a workflow row into the canonical record shape.
///
/// Run history is not wired in yet, so `lastRun`, `nextRun`, `duration`,
/// and `success_rate` carry the same placeholders the stored path has
/// always shown.
fn record_from_row(row: WorkflowRow) -> WorkflowRecord {
    WorkflowRecord {
        id: row.id,
        name: row.name,
        description: row.description,
        status: row.status,
        schedule: row.schedule,
        last_run: "2024-01-15T02:00:00Z".to_string(),
        next_run: "2024-01-16T02:00:00Z".to_string(),
        duration: "5m 23s".to_string(),
        success_rate: 0.0,
        tasks: row.tasks,
        owner: row.owner,
        created: format_timestamp(row.created_at),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn filter(status: Option<&str>, search: Option<&str>) -> WorkflowFilter {
        WorkflowFilter {
            status: status.map(String::from),
            search: search.map(String::from),
        }
    }

    #[tokio::test]
    async fn unconfigured_store_serves_the_full_mock_set() {
        let response = fetch(None, &WorkflowFilter::default()).await;
        assert!(response.using_mock_data);
        assert_eq!(response.total, 3);
    }

    #[tokio::test]
    async fn status_filter_selects_matching_workflows() {
        let response = fetch(None, &filter(Some("active"), None)).await;
        assert_eq!(response.total, 1);
        assert_eq!(response.workflows[0].id, "wf-001");

        let response = fetch(None, &filter(Some("running"), None)).await;
        assert_eq!(response.total, 1);
        assert_eq!(response.workflows[0].id, "wf-002");
    }

    #[tokio::test]
    async fn search_matches_name_and_description() {
        let by_name = fetch(None, &filter(None, Some("etl"))).await;
        assert_eq!(by_name.total, 1);
        assert_eq!(by_name.workflows[0].id, "wf-001");

        let by_description = fetch(None, &filter(None, Some("machine learning"))).await;
        assert_eq!(by_description.total, 1);
        assert_eq!(by_description.workflows[0].id, "wf-002");
    }

    #[tokio::test]
    async fn empty_search_is_no_filter() {
        let response = fetch(None, &filter(None, Some(""))).await;
        assert_eq!(response.total, 3);
    }

    #[tokio::test]
    async fn create_without_a_store_is_a_configuration_error() {
        let input = CreateWorkflow {
            name: "Nightly ETL".to_string(),
            description: "Loads the warehouse".to_string(),
            schedule: None,
            definition: None,
        };
        let err = create(None, &input).await.unwrap_err();
        assert_matches!(err, AppError::Core(CoreError::Unavailable(_)));
    }

    #[tokio::test]
    async fn create_rejects_missing_fields_before_touching_the_store() {
        let input = CreateWorkflow {
            name: String::new(),
            description: "Loads the warehouse".to_string(),
            schedule: None,
            definition: None,
        };
        let err = create(None, &input).await.unwrap_err();
        assert_matches!(err, AppError::Core(CoreError::Validation(_)));
    }

    #[test]
    fn row_mapping_normalizes_created_timestamp() {
        let row = WorkflowRow {
            id: "3e61c9b2-0000-0000-0000-000000000000".to_string(),
            name: "Nightly ETL".to_string(),
            description: "Loads the warehouse".to_string(),
            status: "active".to_string(),
            schedule: Some("0 2 * * *".to_string()),
            owner: "Unknown User".to_string(),
            tasks: 0,
            created_at: chrono::Utc::now(),
        };
        let record = record_from_row(row);
        assert_eq!(record.status, "active");
        assert_eq!(record.success_rate, 0.0);
        assert!(record.created.ends_with('Z'));
    }
}
