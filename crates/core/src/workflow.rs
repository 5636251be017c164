//! Workflow records and the creation input DTO.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::filter::contains_ci;

/// A workflow in the shape the workflow endpoints return.
///
/// `lastRun`, `nextRun`, and `duration` are placeholders on the real data
/// path until execution history is wired in; the mock set carries plausible
/// fixed values for them.
#[derive(Debug, Clone, Serialize)]
pub struct WorkflowRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    /// `active`, `paused`, or `running`.
    pub status: String,
    pub schedule: Option<String>,
    #[serde(rename = "lastRun")]
    pub last_run: String,
    #[serde(rename = "nextRun")]
    pub next_run: String,
    pub duration: String,
    pub success_rate: f64,
    /// Number of tasks belonging to this workflow.
    pub tasks: i64,
    pub owner: String,
    pub created: String,
}

impl WorkflowRecord {
    /// Status equality filter. `None` means "no filter".
    pub fn matches_status(&self, status: Option<&str>) -> bool {
        status.is_none_or(|s| self.status == s)
    }

    /// Case-insensitive substring match on name or description.
    pub fn matches_search(&self, search: Option<&str>) -> bool {
        search.is_none_or(|needle| {
            contains_ci(&self.name, needle) || contains_ci(&self.description, needle)
        })
    }
}

/// Input for creating a workflow.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateWorkflow {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub schedule: Option<String>,
    pub definition: Option<serde_json::Value>,
}

impl CreateWorkflow {
    /// Both `name` and `description` are required, non-empty strings.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.is_empty() || self.description.is_empty() {
            return Err(CoreError::Validation(
                "Name and description are required".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, description: &str) -> CreateWorkflow {
        CreateWorkflow {
            name: name.to_string(),
            description: description.to_string(),
            schedule: None,
            definition: None,
        }
    }

    #[test]
    fn create_requires_name_and_description() {
        assert!(input("Nightly ETL", "Loads the warehouse").validate().is_ok());
        assert!(input("", "Loads the warehouse").validate().is_err());
        assert!(input("Nightly ETL", "").validate().is_err());
    }

    #[test]
    fn search_matches_name_or_description() {
        let record = WorkflowRecord {
            id: "wf-x".to_string(),
            name: "ETL Data Pipeline".to_string(),
            description: "Extract, transform, and load customer data".to_string(),
            status: "active".to_string(),
            schedule: None,
            last_run: String::new(),
            next_run: String::new(),
            duration: String::new(),
            success_rate: 0.0,
            tasks: 0,
            owner: String::new(),
            created: String::new(),
        };
        assert!(record.matches_search(Some("pipeline")));
        assert!(record.matches_search(Some("CUSTOMER")));
        assert!(!record.matches_search(Some("training")));
        assert!(record.matches_search(None));
    }
}
