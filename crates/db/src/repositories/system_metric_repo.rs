//! Repository for the `system_metrics` table.

use sqlx::PgPool;

use crate::models::worker::MetricRow;

pub struct SystemMetricRepo;

impl SystemMetricRepo {
    /// Samples recorded for `source` within the last five minutes, newest
    /// first. Used to enrich worker rows with live usage numbers.
    pub async fn recent_for_source(
        pool: &PgPool,
        source: &str,
    ) -> Result<Vec<MetricRow>, sqlx::Error> {
        sqlx::query_as::<_, MetricRow>(
            "SELECT metric_name, metric_value::float8 AS metric_value \
             FROM system_metrics \
             WHERE source = $1 \
               AND recorded_at > NOW() - INTERVAL '5 minutes' \
             ORDER BY recorded_at DESC \
             LIMIT 10",
        )
        .bind(source)
        .fetch_all(pool)
        .await
    }
}
