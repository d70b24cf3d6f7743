//! Features Module - Feature Extraction Engine
//!
//! Flattens a normalized `TelemetrySnapshot` into the named numeric
//! features consumed by correlation, adversarial heuristics and breakers.
//!
//! ## Structure
//! - `layout`: feature names (single source of truth)
//! - `set`: `FeatureSet` - flat name -> f64 mapping
//! - `extract`: snapshot -> `FeatureSet`

pub mod layout;
pub mod set;
pub mod extract;


// Re-export common types
pub use layout::*;
pub use set::FeatureSet;
pub use extract::{extract_features, numeric_value, FeatureError};
