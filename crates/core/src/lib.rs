//! Domain layer for the TaskFlow monitoring API.
//!
//! Holds the canonical record types served by every resource endpoint, the
//! static mock data sets used when the backing store is not provisioned, and
//! the derivation policies (status-derived task progress, synthetic worker
//! metrics) shared by the mock and real data paths.

pub mod error;
pub mod filter;
pub mod metrics;
pub mod mock;
pub mod task;
pub mod types;
pub mod worker;
pub mod workflow;
