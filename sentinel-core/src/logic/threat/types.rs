//! Threat Types
//!
//! Result types of the signal engines.
//! No logic here - only data structures.

use serde::{Deserialize, Serialize};

// ============================================================================
// CORRELATION
// ============================================================================

/// Outcome of multi-signal correlation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorrelationResult {
    /// Sum of the present per-signal scores (unbounded)
    pub base_score: f64,
    /// `base_score` clamped into [0, 1]
    pub adjusted_score: f64,
    /// One entry per contributor, in entropy, mempool, reorg order
    pub details: Vec<String>,
}

// ============================================================================
// ADVERSARIAL
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdversarialResult {
    /// Additive, never negative
    pub risk_boost: f64,
    /// Names of matched patterns
    pub reasons: Vec<String>,
}

impl AdversarialResult {
    pub fn is_clean(&self) -> bool {
        self.reasons.is_empty()
    }
}

// ============================================================================
// CIRCUIT BREAKER
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircuitBreakerOutcome {
    pub triggered: bool,
    pub reasons: Vec<String>,
}

impl CircuitBreakerOutcome {
    /// Build from matched rule names. `triggered` follows the list.
    pub fn from_reasons(reasons: Vec<String>) -> Self {
        Self {
            triggered: !reasons.is_empty(),
            reasons,
        }
    }
}
