//! Scoring Module - Risk Scoring Orchestrator (v2)
//!
//! Correlation -> adversarial -> circuit breakers, in that fixed order,
//! combined into a status + score + ordered details.
//!
//! ## Structure
//! - `types`: `Status`, `SentinelScore`
//! - `engine`: orchestration + tiering
//!
//! ## Usage
//! ```ignore
//! use crate::logic::scoring::{compute_risk_score, Status};
//!
//! let score = compute_risk_score(&features, &thresholds);
//! if score.status == Status::Critical { ... }
//! ```

pub mod types;
pub mod engine;

pub use types::{SentinelScore, Status};
pub use engine::{combine, compute_risk_score, status_for_score};
