//! Worker node records, fleet summary math, and synthetic usage fallback.

use rand::Rng;
use serde::Serialize;

use crate::metrics::{
    CPU_USAGE_RANGE, DISK_USAGE_RANGE, MEMORY_USAGE_RANGE, NETWORK_IO_RANGE,
};

/// A worker node in the shape the worker endpoints return.
#[derive(Debug, Clone, Serialize)]
pub struct WorkerRecord {
    pub id: String,
    pub name: String,
    /// `healthy`, `warning`, or `critical`.
    pub status: String,
    pub region: String,
    pub instance_type: String,
    #[serde(rename = "cpuUsage")]
    pub cpu_usage: i64,
    #[serde(rename = "memoryUsage")]
    pub memory_usage: i64,
    #[serde(rename = "diskUsage")]
    pub disk_usage: i64,
    #[serde(rename = "networkIO")]
    pub network_io: f64,
    pub active_tasks: i64,
    pub max_concurrent_tasks: i64,
    #[serde(rename = "completedTasks")]
    pub completed_tasks: i64,
    #[serde(rename = "failedTasks")]
    pub failed_tasks: i64,
    pub uptime: String,
    pub last_heartbeat: Option<String>,
}

impl WorkerRecord {
    /// Status equality filter. `None` means "no filter".
    pub fn matches_status(&self, status: Option<&str>) -> bool {
        status.is_none_or(|s| self.status == s)
    }
}

/// Resource-usage snapshot for one worker.
///
/// When no recent `system_metrics` sample exists for a worker, a snapshot is
/// drawn from the same bounded ranges the synthetic metrics series uses, so
/// the display contract never sees a null.
#[derive(Debug, Clone, Copy)]
pub struct UsageSnapshot {
    pub cpu_usage: i64,
    pub memory_usage: i64,
    pub disk_usage: i64,
    pub network_io: f64,
}

impl UsageSnapshot {
    /// Draw a bounded synthetic snapshot.
    pub fn synthetic() -> Self {
        let mut rng = rand::rng();
        UsageSnapshot {
            cpu_usage: rng.random_range(CPU_USAGE_RANGE),
            memory_usage: rng.random_range(MEMORY_USAGE_RANGE),
            disk_usage: rng.random_range(DISK_USAGE_RANGE),
            network_io: rng.random_range(NETWORK_IO_RANGE),
        }
    }
}

/// Fleet summary over a filtered worker collection.
#[derive(Debug, Clone, Serialize)]
pub struct WorkerSummary {
    pub total: i64,
    pub healthy: i64,
    pub warning: i64,
    pub critical: i64,
    #[serde(rename = "avgCpuUsage")]
    pub avg_cpu_usage: f64,
    #[serde(rename = "avgMemoryUsage")]
    pub avg_memory_usage: f64,
    #[serde(rename = "totalActiveTasks")]
    pub total_active_tasks: i64,
}

impl WorkerSummary {
    /// Aggregate over the same filtered set returned alongside.
    ///
    /// Averages over an empty set are reported as `0.0`.
    pub fn from_records(records: &[WorkerRecord]) -> Self {
        let count = |status: &str| records.iter().filter(|w| w.status == status).count() as i64;
        let divisor = records.len().max(1) as f64;
        WorkerSummary {
            total: records.len() as i64,
            healthy: count("healthy"),
            warning: count("warning"),
            critical: count("critical"),
            avg_cpu_usage: records.iter().map(|w| w.cpu_usage as f64).sum::<f64>() / divisor,
            avg_memory_usage: records.iter().map(|w| w.memory_usage as f64).sum::<f64>() / divisor,
            total_active_tasks: records.iter().map(|w| w.active_tasks).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;

    #[test]
    fn summary_over_mock_fleet() {
        let workers = mock::workers();
        let summary = WorkerSummary::from_records(&workers);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.healthy, 2);
        assert_eq!(summary.warning, 1);
        assert_eq!(summary.critical, 0);
        assert_eq!(summary.total_active_tasks, 6);
        assert!((summary.avg_cpu_usage - (68.0 + 42.0 + 85.0) / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn summary_over_empty_set_has_zero_averages() {
        let summary = WorkerSummary::from_records(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.avg_cpu_usage, 0.0);
        assert_eq!(summary.avg_memory_usage, 0.0);
        assert_eq!(summary.total_active_tasks, 0);
    }

    #[test]
    fn synthetic_snapshot_stays_in_bounds() {
        for _ in 0..32 {
            let snapshot = UsageSnapshot::synthetic();
            assert!(CPU_USAGE_RANGE.contains(&snapshot.cpu_usage));
            assert!(MEMORY_USAGE_RANGE.contains(&snapshot.memory_usage));
            assert!(DISK_USAGE_RANGE.contains(&snapshot.disk_usage));
            assert!(NETWORK_IO_RANGE.contains(&snapshot.network_io));
        }
    }
}
