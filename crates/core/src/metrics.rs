//! Synthetic system metrics.
//!
//! There is no measurement pipeline behind these numbers: every sample is
//! drawn from a bounded range chosen to render plausibly on the dashboard.
//! The same ranges back the per-worker fallback values when a worker has no
//! recent sample in `system_metrics`.

use std::ops::Range;

use chrono::{Duration, Utc};
use rand::Rng;
use serde::Serialize;

use crate::types::format_timestamp;

/// CPU usage, percent.
pub const CPU_USAGE_RANGE: Range<i64> = 40..80;
/// Memory usage, percent.
pub const MEMORY_USAGE_RANGE: Range<i64> = 30..60;
/// Disk usage, percent.
pub const DISK_USAGE_RANGE: Range<i64> = 20..40;
/// Network throughput, Gbps.
pub const NETWORK_IO_RANGE: Range<f64> = 0.5..2.5;
/// Concurrently running tasks.
pub const ACTIVE_TASKS_RANGE: Range<i64> = 5..15;
/// Queued tasks.
pub const QUEUE_DEPTH_RANGE: Range<i64> = 50..150;
/// Completed tasks per minute.
pub const THROUGHPUT_RANGE: Range<i64> = 250..450;

/// One synthetic sample across every tracked metric.
#[derive(Debug, Clone, Serialize)]
pub struct MetricSample {
    pub timestamp: String,
    #[serde(rename = "cpuUsage")]
    pub cpu_usage: i64,
    #[serde(rename = "memoryUsage")]
    pub memory_usage: i64,
    #[serde(rename = "diskUsage")]
    pub disk_usage: i64,
    #[serde(rename = "networkIO")]
    pub network_io: f64,
    #[serde(rename = "activeTasks")]
    pub active_tasks: i64,
    #[serde(rename = "queueDepth")]
    pub queue_depth: i64,
    pub throughput: i64,
}

impl MetricSample {
    /// Serialized names of the selectable metric fields.
    pub const FIELD_NAMES: [&'static str; 7] = [
        "cpuUsage",
        "memoryUsage",
        "diskUsage",
        "networkIO",
        "activeTasks",
        "queueDepth",
        "throughput",
    ];

    /// Look up a metric value by its serialized field name.
    pub fn field(&self, name: &str) -> Option<serde_json::Value> {
        match name {
            "cpuUsage" => Some(self.cpu_usage.into()),
            "memoryUsage" => Some(self.memory_usage.into()),
            "diskUsage" => Some(self.disk_usage.into()),
            "networkIO" => Some(self.network_io.into()),
            "activeTasks" => Some(self.active_tasks.into()),
            "queueDepth" => Some(self.queue_depth.into()),
            "throughput" => Some(self.throughput.into()),
            _ => None,
        }
    }
}

/// Generate `hours` hourly samples, oldest first, ending at the current hour.
pub fn generate_series(hours: i64) -> Vec<MetricSample> {
    let now = Utc::now();
    let mut rng = rand::rng();

    (0..hours)
        .rev()
        .map(|hours_ago| MetricSample {
            timestamp: format_timestamp(now - Duration::hours(hours_ago)),
            cpu_usage: rng.random_range(CPU_USAGE_RANGE),
            memory_usage: rng.random_range(MEMORY_USAGE_RANGE),
            disk_usage: rng.random_range(DISK_USAGE_RANGE),
            network_io: rng.random_range(NETWORK_IO_RANGE),
            active_tasks: rng.random_range(ACTIVE_TASKS_RANGE),
            queue_depth: rng.random_range(QUEUE_DEPTH_RANGE),
            throughput: rng.random_range(THROUGHPUT_RANGE),
        })
        .collect()
}

/// Averages and point-in-time figures over a generated series.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSummary {
    #[serde(rename = "avgCpuUsage")]
    pub avg_cpu_usage: f64,
    #[serde(rename = "avgMemoryUsage")]
    pub avg_memory_usage: f64,
    #[serde(rename = "avgDiskUsage")]
    pub avg_disk_usage: f64,
    #[serde(rename = "avgNetworkIO")]
    pub avg_network_io: f64,
    #[serde(rename = "totalThroughput")]
    pub total_throughput: i64,
    #[serde(rename = "currentQueueDepth")]
    pub current_queue_depth: i64,
}

impl MetricsSummary {
    /// Averages over the series; throughput and queue depth come from the
    /// most recent sample.
    pub fn from_samples(samples: &[MetricSample]) -> Self {
        let count = samples.len().max(1) as f64;
        let last = samples.last();
        MetricsSummary {
            avg_cpu_usage: samples.iter().map(|s| s.cpu_usage as f64).sum::<f64>() / count,
            avg_memory_usage: samples.iter().map(|s| s.memory_usage as f64).sum::<f64>() / count,
            avg_disk_usage: samples.iter().map(|s| s.disk_usage as f64).sum::<f64>() / count,
            avg_network_io: samples.iter().map(|s| s.network_io).sum::<f64>() / count,
            total_throughput: last.map_or(0, |s| s.throughput),
            current_queue_depth: last.map_or(0, |s| s.queue_depth),
        }
    }
}
