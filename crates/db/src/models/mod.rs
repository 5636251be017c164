//! Row structs for repository queries.
//!
//! Each submodule contains `FromRow` structs matching the exact column list
//! its repository selects. Identifier columns are cast to text at the query
//! boundary so row structs stay storage-agnostic; the reconciliation layer
//! maps rows into canonical records.

pub mod task;
pub mod worker;
pub mod workflow;
