//! Resource reconcilers.
//!
//! One module per resource. Each reconciler probes the minimal table set
//! its resource requires, then serves either the static mock set (filtered
//! by the request parameters) or real rows reshaped into the canonical
//! record type — always producing the same envelope, flagged with
//! `usingMockData`. List fetches never fail: query errors degrade to
//! fallbacks at the safe-query boundary.

pub mod metrics;
pub mod tasks;
pub mod workers;
pub mod workflows;
