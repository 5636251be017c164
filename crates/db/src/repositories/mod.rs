//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument. Repositories return plain
//! `sqlx::Error` results; the reconciliation layer decides what a failure
//! degrades to.

pub mod system_metric_repo;
pub mod task_repo;
pub mod worker_repo;
pub mod workflow_repo;

pub use system_metric_repo::SystemMetricRepo;
pub use task_repo::TaskRepo;
pub use worker_repo::WorkerRepo;
pub use workflow_repo::WorkflowRepo;
