//! Failure absorption at the data-access boundary.

use std::future::Future;

/// Run a data-access operation, resolving to `fallback` on any failure.
///
/// This is the sole error-isolation mechanism between the reconciliation
/// layer and the query layer: connectivity loss, malformed queries, and
/// constraint violations are all logged under `label` and replaced by the
/// caller-supplied fallback. Callers never observe an `Err` through this
/// path, and nothing is retried.
pub async fn safe_query<T, F>(operation: F, fallback: T, label: &str) -> T
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    match operation.await {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(error = %err, label, "Query failed, using fallback");
            fallback
        }
    }
}
