//! Metrics reconciler.
//!
//! The metrics resource has no backing tables at all: every series is
//! synthetic. The reconciler only shapes the generated samples into the
//! all-metrics envelope or a single-metric time series.

use taskflow_core::metrics::{generate_series, MetricSample, MetricsSummary};

use crate::error::{AppError, AppResult};
use crate::response::{MetricPoint, MetricSeriesResponse, MetricsResponse};

/// Hours of history in every generated series.
const SERIES_HOURS: i64 = 24;

/// Build the all-metrics envelope. The requested range is echoed back;
/// generation always covers the last 24 hours.
pub fn all_metrics(range: &str) -> MetricsResponse {
    let metrics = generate_series(SERIES_HOURS);
    MetricsResponse {
        time_range: range.to_string(),
        summary: MetricsSummary::from_samples(&metrics),
        metrics,
    }
}

/// Build a single-metric time series, rejecting unknown metric names.
pub fn metric_series(name: &str) -> AppResult<MetricSeriesResponse> {
    if !MetricSample::FIELD_NAMES.contains(&name) {
        return Err(AppError::BadRequest(format!(
            "Unknown metric '{name}'. Valid metrics: {}",
            MetricSample::FIELD_NAMES.join(", ")
        )));
    }

    let data = generate_series(SERIES_HOURS)
        .iter()
        .map(|sample| MetricPoint {
            timestamp: sample.timestamp.clone(),
            value: sample.field(name).unwrap_or(serde_json::Value::Null),
        })
        .collect();

    Ok(MetricSeriesResponse {
        metric: name.to_string(),
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_metrics_covers_24_hours_and_echoes_the_range() {
        let response = all_metrics("6h");
        assert_eq!(response.time_range, "6h");
        assert_eq!(response.metrics.len(), 24);
        assert_eq!(
            response.summary.current_queue_depth,
            response.metrics.last().unwrap().queue_depth
        );
    }

    #[test]
    fn series_returns_a_point_per_sample() {
        let response = metric_series("cpuUsage").unwrap();
        assert_eq!(response.metric, "cpuUsage");
        assert_eq!(response.data.len(), 24);
        for point in &response.data {
            let value = point.value.as_i64().unwrap();
            assert!((40..80).contains(&value));
        }
    }

    #[test]
    fn unknown_metric_is_rejected() {
        let err = metric_series("temperature").unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
