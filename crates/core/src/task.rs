//! Task records and the status-derived progress policy.

use serde::Serialize;

use crate::filter::contains_ci;

/// Lifecycle status of a task execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Pending,
    Running,
    Completed,
    Failed,
}

impl TaskStatus {
    /// Parse a status string as stored in `task_executions.status`.
    ///
    /// Returns `None` for unrecognized values; callers treat those as
    /// zero-progress rather than erroring.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(TaskStatus::Pending),
            "running" => Some(TaskStatus::Running),
            "completed" => Some(TaskStatus::Completed),
            "failed" => Some(TaskStatus::Failed),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Running => "running",
            TaskStatus::Completed => "completed",
            TaskStatus::Failed => "failed",
        }
    }

    /// Progress percentage derived from status alone.
    ///
    /// Used whenever no measured progress exists (mock data and the
    /// partial-schema real path). The mapping is an approximation, not a
    /// measurement: completed 100, running 65, failed 45, pending 0.
    pub fn derived_progress(self) -> u8 {
        match self {
            TaskStatus::Completed => 100,
            TaskStatus::Running => 65,
            TaskStatus::Failed => 45,
            TaskStatus::Pending => 0,
        }
    }
}

/// A task execution in the shape the task endpoints return.
#[derive(Debug, Clone, Serialize)]
pub struct TaskRecord {
    pub id: String,
    pub name: String,
    /// Owning workflow, referenced by name.
    pub workflow: String,
    pub status: String,
    /// Always within 0..=100.
    pub progress: u8,
    pub start_time: Option<String>,
    pub duration: Option<String>,
    /// Assigned worker node, if any.
    pub worker: Option<String>,
    pub retries: i32,
    pub priority: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TaskRecord {
    /// Status equality filter. `None` means "no filter".
    pub fn matches_status(&self, status: Option<&str>) -> bool {
        status.is_none_or(|s| self.status == s)
    }

    /// Case-insensitive substring match on the owning workflow name.
    pub fn matches_workflow(&self, workflow: Option<&str>) -> bool {
        workflow.is_none_or(|w| contains_ci(&self.workflow, w))
    }
}

/// Per-status counts over a filtered task collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TaskSummary {
    pub running: i64,
    pub completed: i64,
    pub failed: i64,
    pub pending: i64,
}

impl TaskSummary {
    /// Count statuses over the same filtered set returned alongside.
    pub fn from_records(records: &[TaskRecord]) -> Self {
        let mut summary = TaskSummary::default();
        for record in records {
            match record.status.as_str() {
                "running" => summary.running += 1,
                "completed" => summary.completed += 1,
                "failed" => summary.failed += 1,
                "pending" => summary.pending += 1,
                _ => {}
            }
        }
        summary
    }

    pub fn total(self) -> i64 {
        self.running + self.completed + self.failed + self.pending
    }
}
