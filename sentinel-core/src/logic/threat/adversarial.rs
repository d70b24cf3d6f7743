//! Adversarial Heuristics Engine (Extensible)
//!
//! Detects known evasion / spoofing signatures in the feature set.
//! New heuristics implement `AdversarialPattern`; the engine interface
//! (features in, boost + reasons out) never changes.

use super::rules::SUSPICIOUS_SMOOTHNESS_BOOST;
use super::types::AdversarialResult;
use crate::logic::features::{FeatureSet, SUSPICIOUS_SMOOTHNESS};

// ============================================================================
// PATTERN TRAIT
// ============================================================================

pub trait AdversarialPattern: Send + Sync {
    /// Reason tag reported when the pattern matches
    fn name(&self) -> &str;
    fn matches(&self, features: &FeatureSet) -> bool;
    /// Additive contribution, must be >= 0
    fn boost(&self) -> f64;
}

// ============================================================================
// BUILT-IN PATTERNS
// ============================================================================

/// Artificially uniform, noise-free telemetry. Classic sign of synthetic spoofing.
pub struct SuspiciousSmoothness;

impl AdversarialPattern for SuspiciousSmoothness {
    fn name(&self) -> &str {
        "suspicious_smoothness"
    }

    fn matches(&self, features: &FeatureSet) -> bool {
        features.get(SUSPICIOUS_SMOOTHNESS) != 0.0
    }

    fn boost(&self) -> f64 {
        SUSPICIOUS_SMOOTHNESS_BOOST
    }
}

static BUILTIN_PATTERNS: &[&dyn AdversarialPattern] = &[&SuspiciousSmoothness];

// ============================================================================
// ENGINE
// ============================================================================

/// Ordered pattern set. Results accumulate in registration order.
pub struct AdversarialEngine {
    extra: Vec<Box<dyn AdversarialPattern>>,
}

impl AdversarialEngine {
    /// Built-in patterns only
    pub fn new() -> Self {
        Self { extra: Vec::new() }
    }

    /// Register an additional pattern after the built-ins
    pub fn with_pattern(mut self, pattern: Box<dyn AdversarialPattern>) -> Self {
        self.extra.push(pattern);
        self
    }

    pub fn analyse(&self, features: &FeatureSet) -> AdversarialResult {
        let mut result = AdversarialResult::default();

        let mut apply = |pattern: &dyn AdversarialPattern| {
            if pattern.matches(features) {
                result.risk_boost += pattern.boost().max(0.0);
                result.reasons.push(pattern.name().to_string());
            }
        };

        for pattern in BUILTIN_PATTERNS {
            apply(*pattern);
        }
        for pattern in &self.extra {
            apply(pattern.as_ref());
        }

        result
    }
}

impl Default for AdversarialEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the built-in patterns
pub fn analyse_for_adversarial_patterns(features: &FeatureSet) -> AdversarialResult {
    AdversarialEngine::new().analyse(features)
}
