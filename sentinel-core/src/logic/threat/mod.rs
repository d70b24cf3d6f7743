//! Threat Module
//!
//! The three signal engines that feed the risk score:
//! - `correlation`: raw per-signal scores -> bounded base score
//! - `adversarial`: known evasion / spoofing signatures -> additive boost
//! - `circuit_breaker`: fixed emergency rules -> forced CRITICAL
//!
//! All engines are pure: `&FeatureSet` in, result out.
//!
//! ## Usage
//! ```ignore
//! use crate::logic::threat::{correlate_signals, analyse_for_adversarial_patterns, evaluate_circuit_breakers};
//!
//! let corr = correlate_signals(&features);
//! let adv = analyse_for_adversarial_patterns(&features);
//! let cb = evaluate_circuit_breakers(&features, &thresholds);
//! ```

pub mod types;
pub mod rules;
pub mod correlation;
pub mod adversarial;
pub mod circuit_breaker;

// Re-export main types for convenience
pub use types::{AdversarialResult, CircuitBreakerOutcome, CorrelationResult};

pub use rules::{
    ELEVATED_THRESHOLD,
    HIGH_THRESHOLD,
    BREAKER_SCORE_FLOOR,
    SUSPICIOUS_SMOOTHNESS_BOOST,
    COMBO_BREAKER_REASON,
};

pub use correlation::correlate_signals;
pub use adversarial::{
    analyse_for_adversarial_patterns,
    AdversarialEngine,
    AdversarialPattern,
    SuspiciousSmoothness,
};
pub use circuit_breaker::evaluate_circuit_breakers;
