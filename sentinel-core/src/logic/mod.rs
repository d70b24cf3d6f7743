//! Logic Module - scoring engines and the v3 contract
//!
//! ## Structure
//! - `telemetry/` - raw snapshot normalization
//! - `features/` - flat numeric feature extraction
//! - `threat/` - correlation, adversarial heuristics, circuit breakers
//! - `model/` - hash-verified model artifact + inference
//! - `scoring/` - v2 orchestrator (tier + score + details)
//! - `pipeline` - telemetry to score, shared by v2 and v3
//! - `contract/` - fail-closed v3 boundary
//! - `adaptive/` - optional adaptive-core notifier
//! - `config` - thresholds and model settings

pub mod adaptive;
pub mod config;
pub mod contract;
pub mod features;
pub mod model;
pub mod pipeline;
pub mod scoring;
pub mod telemetry;
pub mod threat;
