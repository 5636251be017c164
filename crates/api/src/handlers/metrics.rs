//! Handler for `GET /resource/metrics`.

use axum::extract::Query;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use taskflow_core::filter;

use crate::error::AppResult;
use crate::reconcile::metrics;

/// Query params for `GET /resource/metrics`.
#[derive(Debug, Deserialize)]
pub struct MetricsQuery {
    /// Echoed back in the all-metrics envelope (default: `24h`).
    pub range: Option<String>,
    /// When present, selects a single-metric time series.
    pub metric: Option<String>,
}

/// GET /resource/metrics
///
/// Returns the all-metrics envelope, or a single-metric series when
/// `metric` names one. Unknown metric names are a 400.
pub async fn list(Query(params): Query<MetricsQuery>) -> AppResult<Response> {
    match filter::text_filter(params.metric.as_deref()) {
        Some(name) => Ok(Json(metrics::metric_series(name)?).into_response()),
        None => {
            let range = params.range.as_deref().unwrap_or("24h");
            Ok(Json(metrics::all_metrics(range)).into_response())
        }
    }
}
