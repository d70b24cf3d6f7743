//! Telemetry Module
//!
//! Intake of raw node telemetry (entropy, mempool, reorg, peers, ...).
//! The v2 surface is permissive: unknown keys are dropped and families are
//! not schema-checked. Values that cannot be read as numbers fail extraction.
//! Strict checks live in `contract` (v3).
//!
//! ## Usage
//! ```ignore
//! use crate::logic::telemetry::normalize_raw_telemetry;
//!
//! let snapshot = normalize_raw_telemetry(&raw);
//! let features = extract_features(&snapshot);
//! ```

pub mod snapshot;

pub use snapshot::{json_kind, normalize_raw_telemetry, normalize_value, SubMap, TelemetrySnapshot};
