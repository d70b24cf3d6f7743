//! Circuit Breaker Engine
//!
//! Fixed, auditable emergency rules. They override every probabilistic signal
//! and never read `model_score`.

use super::rules::COMBO_BREAKER_REASON;
use super::types::CircuitBreakerOutcome;
use crate::logic::config::CircuitBreakerThresholds;
use crate::logic::features::{FeatureSet, ENTROPY_DROP, MEMPOOL_ANOMALY, REORG_DEPTH};

/// Evaluate the hard rules against the feature set
pub fn evaluate_circuit_breakers(
    features: &FeatureSet,
    thresholds: &CircuitBreakerThresholds,
) -> CircuitBreakerOutcome {
    let mut reasons = Vec::new();

    let entropy_drop = features.get(ENTROPY_DROP);
    let mempool_anomaly = features.get(MEMPOOL_ANOMALY);
    // Depth counts whole blocks
    let reorg_depth = features.get(REORG_DEPTH).trunc();

    if entropy_drop >= thresholds.entropy_drop_threshold
        && mempool_anomaly >= thresholds.mempool_anomaly_threshold
        && reorg_depth >= thresholds.reorg_depth_threshold as f64
    {
        reasons.push(COMBO_BREAKER_REASON.to_string());
    }

    let outcome = CircuitBreakerOutcome::from_reasons(reasons);
    if outcome.triggered {
        log::warn!(
            "Circuit breaker tripped: entropy_drop={} mempool_anomaly={} reorg_depth={}",
            entropy_drop, mempool_anomaly, reorg_depth
        );
    }
    outcome
}
