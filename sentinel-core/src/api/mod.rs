//! API Module
//!
//! Structure:
//! - client.rs: `SentinelClient` (v2 scoring) + `evaluate_v3` adaptive entrypoint
//! - monitor.rs: `SentinelWrapper` with last-result cache
//! - watcher.rs: stream consumption helper
//!
//! Usage:
//! - `api::SentinelClient::new(config).evaluate(&telemetry)` - v2
//! - `api::evaluate_v3(&request)` - contract v3 (fail-closed)

pub mod client;
pub mod monitor;
pub mod watcher;

pub use client::{evaluate_v3, evaluate_v3_bytes, evaluate_v3_json, SentinelClient, SentinelResult};
pub use monitor::{SentinelWrapper, NO_DATA_STATUS};
pub use watcher::{log_summary, summary_line, watch_stream};
