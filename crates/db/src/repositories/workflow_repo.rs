//! Repository for the `workflows` table.

use sqlx::PgPool;
use taskflow_core::workflow::CreateWorkflow;

use crate::models::workflow::{WorkflowCreatedRow, WorkflowRow};

/// Placeholder owning team until multi-tenant attribution is implemented.
const PLACEHOLDER_TEAM_ID: &str = "660e8400-e29b-41d4-a716-446655440001";
/// Placeholder creating user until multi-tenant attribution is implemented.
const PLACEHOLDER_USER_ID: &str = "550e8400-e29b-41d4-a716-446655440001";

pub struct WorkflowRepo;

impl WorkflowRepo {
    /// List workflows with optional activation and text filters.
    ///
    /// Owner and task-count enrichment degrade with the schema: when the
    /// `users` or `tasks` table is missing, the corresponding column falls
    /// back to a literal so a partially provisioned store still lists its
    /// workflows.
    pub async fn list(
        pool: &PgPool,
        active: Option<bool>,
        search: Option<&str>,
        users_table: bool,
        tasks_table: bool,
    ) -> Result<Vec<WorkflowRow>, sqlx::Error> {
        let owner_expr = if users_table {
            "COALESCE(u.first_name || ' ' || u.last_name, 'Unknown User')"
        } else {
            "'Unknown User'"
        };
        let tasks_expr = if tasks_table { "COUNT(t.id)" } else { "0::bigint" };
        let users_join = if users_table {
            " LEFT JOIN users u ON w.created_by = u.id"
        } else {
            ""
        };
        let tasks_join = if tasks_table {
            " LEFT JOIN tasks t ON t.workflow_id = w.id"
        } else {
            ""
        };

        // Filters bind positionally; each condition carries exactly one
        // parameter, so its index is the running condition count.
        let mut conditions: Vec<String> = Vec::new();
        if active.is_some() {
            conditions.push(format!("w.is_active = ${}", conditions.len() + 1));
        }
        if search.is_some() {
            conditions.push(format!(
                "(w.name ILIKE ${idx} OR w.description ILIKE ${idx})",
                idx = conditions.len() + 1
            ));
        }
        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", conditions.join(" AND "))
        };

        let group_by = if tasks_table {
            if users_table {
                " GROUP BY w.id, w.name, w.description, w.is_active, \
                  w.schedule_expression, w.created_at, u.first_name, u.last_name"
            } else {
                " GROUP BY w.id, w.name, w.description, w.is_active, \
                  w.schedule_expression, w.created_at"
            }
        } else {
            ""
        };

        let query = format!(
            "SELECT \
                 w.id::text AS id, \
                 w.name, \
                 w.description, \
                 CASE WHEN w.is_active THEN 'active' ELSE 'paused' END AS status, \
                 w.schedule_expression AS schedule, \
                 {owner_expr} AS owner, \
                 {tasks_expr} AS tasks, \
                 w.created_at \
             FROM workflows w{users_join}{tasks_join}{where_clause}{group_by} \
             ORDER BY w.created_at DESC"
        );

        let mut q = sqlx::query_as::<_, WorkflowRow>(&query);
        if let Some(active) = active {
            q = q.bind(active);
        }
        if let Some(search) = search {
            q = q.bind(format!("%{search}%"));
        }
        q.fetch_all(pool).await
    }

    /// Insert a workflow, attributed to the placeholder team and user.
    pub async fn insert(
        pool: &PgPool,
        input: &CreateWorkflow,
    ) -> Result<WorkflowCreatedRow, sqlx::Error> {
        let definition = input
            .definition
            .clone()
            .unwrap_or_else(|| serde_json::json!({}));

        sqlx::query_as::<_, WorkflowCreatedRow>(
            "INSERT INTO workflows \
                 (name, description, team_id, created_by, definition, schedule_expression, is_active) \
             VALUES ($1, $2, $3::uuid, $4::uuid, $5, $6, true) \
             RETURNING \
                 id::text AS id, name, description, \
                 team_id::text AS team_id, created_by::text AS created_by, \
                 definition, schedule_expression, is_active, created_at",
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(PLACEHOLDER_TEAM_ID)
        .bind(PLACEHOLDER_USER_ID)
        .bind(definition)
        .bind(&input.schedule)
        .fetch_one(pool)
        .await
    }
}
