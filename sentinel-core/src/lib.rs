//! Sentinel Core
//!
//! Telemetry risk scoring for blockchain nodes, with a fail-closed
//! contract v3 boundary for the adaptive core.
//!
//! ## Usage
//! ```rust,ignore
//! use sentinel_core::api::{evaluate_v3, SentinelClient};
//! use sentinel_core::logic::config::load_config;
//!
//! let client = SentinelClient::new(load_config(None)?);
//! let result = client.evaluate(&telemetry)?;
//! let response = evaluate_v3(&request);
//! ```

pub mod api;
pub mod constants;
pub mod logic;

pub use api::{
    evaluate_v3, evaluate_v3_bytes, evaluate_v3_json, SentinelClient, SentinelResult, SentinelWrapper,
};
pub use logic::contract::{Decision, ReasonCode, SentinelV3, SentinelV3Response};
pub use logic::scoring::Status;
