//! Response envelope types shared by the resource endpoints.
//!
//! Every list endpoint wraps its records in a typed envelope carrying the
//! `usingMockData` flag; `total` always counts the returned, filtered
//! collection. `message` appears only on mock-path responses.

use serde::Serialize;
use taskflow_core::metrics::{MetricSample, MetricsSummary};
use taskflow_core::task::{TaskRecord, TaskSummary};
use taskflow_core::worker::{WorkerRecord, WorkerSummary};
use taskflow_core::workflow::WorkflowRecord;

/// Standard explanation attached to every mock-path response.
pub const MOCK_DATA_MESSAGE: &str =
    "Database tables not found. Using mock data. Please run database initialization scripts.";

#[derive(Debug, Serialize)]
pub struct WorkflowListResponse {
    pub workflows: Vec<WorkflowRecord>,
    pub total: usize,
    #[serde(rename = "usingMockData")]
    pub using_mock_data: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl WorkflowListResponse {
    pub fn mock(workflows: Vec<WorkflowRecord>) -> Self {
        WorkflowListResponse {
            total: workflows.len(),
            workflows,
            using_mock_data: true,
            message: Some(MOCK_DATA_MESSAGE.to_string()),
        }
    }

    pub fn live(workflows: Vec<WorkflowRecord>) -> Self {
        WorkflowListResponse {
            total: workflows.len(),
            workflows,
            using_mock_data: false,
            message: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TaskListResponse {
    pub tasks: Vec<TaskRecord>,
    pub total: usize,
    pub summary: TaskSummary,
    #[serde(rename = "usingMockData")]
    pub using_mock_data: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl TaskListResponse {
    /// Mock envelope; the summary is counted over the filtered set itself.
    pub fn mock(tasks: Vec<TaskRecord>) -> Self {
        TaskListResponse {
            total: tasks.len(),
            summary: TaskSummary::from_records(&tasks),
            tasks,
            using_mock_data: true,
            message: Some(MOCK_DATA_MESSAGE.to_string()),
        }
    }

    pub fn live(tasks: Vec<TaskRecord>, summary: TaskSummary) -> Self {
        TaskListResponse {
            total: tasks.len(),
            summary,
            tasks,
            using_mock_data: false,
            message: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WorkerListResponse {
    pub workers: Vec<WorkerRecord>,
    pub summary: WorkerSummary,
    #[serde(rename = "usingMockData")]
    pub using_mock_data: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl WorkerListResponse {
    pub fn mock(workers: Vec<WorkerRecord>) -> Self {
        WorkerListResponse {
            summary: WorkerSummary::from_records(&workers),
            workers,
            using_mock_data: true,
            message: Some(MOCK_DATA_MESSAGE.to_string()),
        }
    }

    pub fn live(workers: Vec<WorkerRecord>) -> Self {
        WorkerListResponse {
            summary: WorkerSummary::from_records(&workers),
            workers,
            using_mock_data: false,
            message: None,
        }
    }
}

/// Full synthetic series across every metric.
#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    #[serde(rename = "timeRange")]
    pub time_range: String,
    pub metrics: Vec<MetricSample>,
    pub summary: MetricsSummary,
}

/// Time series for a single named metric.
#[derive(Debug, Serialize)]
pub struct MetricSeriesResponse {
    pub metric: String,
    pub data: Vec<MetricPoint>,
}

#[derive(Debug, Serialize)]
pub struct MetricPoint {
    pub timestamp: String,
    pub value: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskflow_core::mock;

    #[test]
    fn mock_envelopes_carry_flag_message_and_filtered_total() {
        let response = TaskListResponse::mock(mock::tasks());
        assert!(response.using_mock_data);
        assert_eq!(response.total, 4);
        assert_eq!(response.message.as_deref(), Some(MOCK_DATA_MESSAGE));
        assert_eq!(response.summary.total(), 4);
    }

    #[test]
    fn live_envelopes_omit_the_message_key() {
        let json = serde_json::to_value(WorkflowListResponse::live(mock::workflows())).unwrap();
        assert_eq!(json["usingMockData"], false);
        assert_eq!(json["total"], 3);
        assert!(json.get("message").is_none());
    }

    #[test]
    fn worker_envelope_summary_tracks_records() {
        let json = serde_json::to_value(WorkerListResponse::mock(mock::workers())).unwrap();
        assert_eq!(json["summary"]["total"], 3);
        assert_eq!(json["summary"]["healthy"], 2);
        assert!(json["summary"]["avgCpuUsage"].is_f64());
        assert_eq!(json["usingMockData"], true);
    }
}
