//! Threat Rules & Thresholds
//!
//! Constants for tiering, boosts and breaker reasons.
//! No classification logic here.

// ============================================================================
// TIER THRESHOLDS
// ============================================================================

/// At or above this score = HIGH
pub const HIGH_THRESHOLD: f64 = 0.8;

/// At or above this score = ELEVATED
pub const ELEVATED_THRESHOLD: f64 = 0.4;

/// Floor applied to the score when a circuit breaker fires
pub const BREAKER_SCORE_FLOOR: f64 = 0.99;

// ============================================================================
// ADVERSARIAL BOOSTS
// ============================================================================

/// Boost for artificially uniform telemetry
pub const SUSPICIOUS_SMOOTHNESS_BOOST: f64 = 0.2;

// ============================================================================
// BREAKER REASONS (parsed downstream, keep stable)
// ============================================================================

pub const COMBO_BREAKER_REASON: &str = "combo: entropy + mempool + reorg";
