//! Static mock data sets.
//!
//! Served whenever the backing store is unconfigured or a resource's
//! required tables are missing. The records are fixed so the dashboard
//! renders a stable, plausible picture out of the box; tests pin several of
//! them (notably `task-002`) as part of the HTTP contract.

use crate::task::TaskRecord;
use crate::worker::WorkerRecord;
use crate::workflow::WorkflowRecord;

/// The mock workflow catalog.
pub fn workflows() -> Vec<WorkflowRecord> {
    vec![
        WorkflowRecord {
            id: "wf-001".to_string(),
            name: "ETL Data Pipeline".to_string(),
            description: "Extract, transform, and load customer data from multiple sources"
                .to_string(),
            status: "active".to_string(),
            schedule: Some("Daily at 2:00 AM".to_string()),
            last_run: "2024-01-15T02:00:00Z".to_string(),
            next_run: "2024-01-16T02:00:00Z".to_string(),
            duration: "5m 23s".to_string(),
            success_rate: 98.5,
            tasks: 12,
            owner: "Sarah Kim".to_string(),
            created: "2024-01-01T00:00:00Z".to_string(),
        },
        WorkflowRecord {
            id: "wf-002".to_string(),
            name: "ML Model Training".to_string(),
            description: "Train and validate machine learning models for recommendation system"
                .to_string(),
            status: "running".to_string(),
            schedule: Some("Weekly on Sunday".to_string()),
            last_run: "2024-01-14T10:00:00Z".to_string(),
            next_run: "2024-01-21T10:00:00Z".to_string(),
            duration: "45m 12s".to_string(),
            success_rate: 95.2,
            tasks: 8,
            owner: "Mike Chen".to_string(),
            created: "2024-01-05T00:00:00Z".to_string(),
        },
        WorkflowRecord {
            id: "wf-003".to_string(),
            name: "Report Generation".to_string(),
            description: "Generate daily business intelligence reports and dashboards".to_string(),
            status: "paused".to_string(),
            schedule: Some("Daily at 6:00 AM".to_string()),
            last_run: "2024-01-14T06:00:00Z".to_string(),
            next_run: "Paused".to_string(),
            duration: "2m 45s".to_string(),
            success_rate: 99.1,
            tasks: 6,
            owner: "Alex Johnson".to_string(),
            created: "2024-01-03T00:00:00Z".to_string(),
        },
    ]
}

/// The mock task executions.
pub fn tasks() -> Vec<TaskRecord> {
    vec![
        TaskRecord {
            id: "task-001".to_string(),
            name: "Extract Customer Data".to_string(),
            workflow: "ETL Data Pipeline".to_string(),
            status: "running".to_string(),
            progress: 65,
            start_time: Some("2024-01-15T14:30:00Z".to_string()),
            duration: Some("2m 15s".to_string()),
            worker: Some("worker-node-01".to_string()),
            retries: 0,
            priority: "high".to_string(),
            error: None,
        },
        TaskRecord {
            id: "task-002".to_string(),
            name: "Transform User Profiles".to_string(),
            workflow: "ETL Data Pipeline".to_string(),
            status: "completed".to_string(),
            progress: 100,
            start_time: Some("2024-01-15T14:28:00Z".to_string()),
            duration: Some("1m 45s".to_string()),
            worker: Some("worker-node-02".to_string()),
            retries: 0,
            priority: "medium".to_string(),
            error: None,
        },
        TaskRecord {
            id: "task-003".to_string(),
            name: "Train Recommendation Model".to_string(),
            workflow: "ML Model Training".to_string(),
            status: "failed".to_string(),
            progress: 45,
            start_time: Some("2024-01-15T14:25:00Z".to_string()),
            duration: Some("5m 30s".to_string()),
            worker: Some("worker-node-03".to_string()),
            retries: 2,
            priority: "high".to_string(),
            error: Some("Out of memory error during model training".to_string()),
        },
        TaskRecord {
            id: "task-004".to_string(),
            name: "Generate Sales Report".to_string(),
            workflow: "Report Generation".to_string(),
            status: "pending".to_string(),
            progress: 0,
            start_time: None,
            duration: None,
            worker: None,
            retries: 0,
            priority: "low".to_string(),
            error: None,
        },
    ]
}

/// The mock worker fleet.
pub fn workers() -> Vec<WorkerRecord> {
    vec![
        WorkerRecord {
            id: "worker-node-01".to_string(),
            name: "Primary Worker 01".to_string(),
            status: "healthy".to_string(),
            region: "us-east-1".to_string(),
            instance_type: "c5.2xlarge".to_string(),
            cpu_usage: 68,
            memory_usage: 45,
            disk_usage: 32,
            network_io: 1.2,
            active_tasks: 3,
            max_concurrent_tasks: 5,
            completed_tasks: 1247,
            failed_tasks: 12,
            uptime: "15d 4h 23m".to_string(),
            last_heartbeat: Some("2024-01-15T14:35:00Z".to_string()),
        },
        WorkerRecord {
            id: "worker-node-02".to_string(),
            name: "Primary Worker 02".to_string(),
            status: "healthy".to_string(),
            region: "us-east-1".to_string(),
            instance_type: "c5.2xlarge".to_string(),
            cpu_usage: 42,
            memory_usage: 38,
            disk_usage: 28,
            network_io: 0.8,
            active_tasks: 2,
            max_concurrent_tasks: 5,
            completed_tasks: 1156,
            failed_tasks: 8,
            uptime: "12d 8h 15m".to_string(),
            last_heartbeat: Some("2024-01-15T14:35:00Z".to_string()),
        },
        WorkerRecord {
            id: "worker-node-03".to_string(),
            name: "ML Worker 01".to_string(),
            status: "warning".to_string(),
            region: "us-west-2".to_string(),
            instance_type: "p3.2xlarge".to_string(),
            cpu_usage: 85,
            memory_usage: 78,
            disk_usage: 65,
            network_io: 2.1,
            active_tasks: 1,
            max_concurrent_tasks: 3,
            completed_tasks: 342,
            failed_tasks: 23,
            uptime: "8d 12h 45m".to_string(),
            last_heartbeat: Some("2024-01-15T14:34:30Z".to_string()),
        },
    ]
}
