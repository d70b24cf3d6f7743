//! Scoring Types
//!
//! No logic here - only data structures.

use serde::{Deserialize, Serialize};

use crate::logic::threat::{AdversarialResult, CircuitBreakerOutcome, CorrelationResult};

// ============================================================================
// STATUS (severity tier)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Normal,
    Elevated,
    High,
    Critical,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Normal => "NORMAL",
            Status::Elevated => "ELEVATED",
            Status::High => "HIGH",
            Status::Critical => "CRITICAL",
        }
    }

    pub fn severity_level(&self) -> u8 {
        match self {
            Status::Normal => 0,
            Status::Elevated => 1,
            Status::High => 2,
            Status::Critical => 3,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// SENTINEL SCORE
// ============================================================================

/// Final aggregated risk for one snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentinelScore {
    pub status: Status,
    /// Always in [0, 1]
    pub risk_score: f64,
    /// correlation details, then `adversarial:*`, then `circuit_breaker:*`
    pub details: Vec<String>,
    pub correlation: CorrelationResult,
    pub adversarial: AdversarialResult,
    pub circuit_breakers: CircuitBreakerOutcome,
}
