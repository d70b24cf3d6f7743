//! Scoring Engine
//!
//! Input: FeatureSet + CircuitBreakerThresholds
//! Output: SentinelScore
//!
//! The circuit breaker wins unconditionally.

use super::types::{SentinelScore, Status};
use crate::logic::config::CircuitBreakerThresholds;
use crate::logic::features::FeatureSet;
use crate::logic::threat::{
    analyse_for_adversarial_patterns, correlate_signals, evaluate_circuit_breakers,
    AdversarialResult, CircuitBreakerOutcome, CorrelationResult, BREAKER_SCORE_FLOOR,
    ELEVATED_THRESHOLD, HIGH_THRESHOLD,
};

// ============================================================================
// MAIN SCORING FUNCTION
// ============================================================================

/// Run the three engines in fixed order and combine
pub fn compute_risk_score(
    features: &FeatureSet,
    thresholds: &CircuitBreakerThresholds,
) -> SentinelScore {
    // 1) multi-signal correlation
    let correlation = correlate_signals(features);
    // 2) adversarial heuristics
    let adversarial = analyse_for_adversarial_patterns(features);
    // 3) circuit breakers (override everything)
    let circuit_breakers = evaluate_circuit_breakers(features, thresholds);

    combine(correlation, adversarial, circuit_breakers)
}

/// Tier for a score when no breaker fired
pub fn status_for_score(score: f64) -> Status {
    if score >= HIGH_THRESHOLD {
        Status::High
    } else if score >= ELEVATED_THRESHOLD {
        Status::Elevated
    } else {
        Status::Normal
    }
}

/// Combine engine results into the final score.
///
/// Detail order is parsed by downstream log tooling and must not change.
pub fn combine(
    correlation: CorrelationResult,
    adversarial: AdversarialResult,
    circuit_breakers: CircuitBreakerOutcome,
) -> SentinelScore {
    let mut score = (correlation.adjusted_score + adversarial.risk_boost).clamp(0.0, 1.0);

    let status = if circuit_breakers.triggered {
        score = score.max(BREAKER_SCORE_FLOOR);
        Status::Critical
    } else {
        status_for_score(score)
    };

    let mut details = correlation.details.clone();
    details.extend(adversarial.reasons.iter().map(|r| format!("adversarial:{}", r)));
    details.extend(circuit_breakers.reasons.iter().map(|r| format!("circuit_breaker:{}", r)));

    log::debug!("risk score {:.3} -> {}", score, status);

    SentinelScore {
        status,
        risk_score: score,
        details,
        correlation,
        adversarial,
        circuit_breakers,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::features::*;

    fn corr(adjusted: f64) -> CorrelationResult {
        CorrelationResult {
            base_score: adjusted,
            adjusted_score: adjusted,
            details: vec!["corr".to_string()],
        }
    }

    #[test]
    fn test_breaker_forces_critical() {
        let adv = AdversarialResult {
            risk_boost: 0.1,
            reasons: vec!["adv".to_string()],
        };
        let cb = CircuitBreakerOutcome::from_reasons(vec!["X".to_string()]);

        let out = combine(corr(0.1), adv, cb);
        assert_eq!(out.status, Status::Critical);
        assert!(out.risk_score >= 0.99);
        assert_eq!(out.details, vec!["corr", "adversarial:adv", "circuit_breaker:X"]);
    }

    #[test]
    fn test_breaker_keeps_higher_score() {
        let adv = AdversarialResult {
            risk_boost: 0.5,
            reasons: vec![],
        };
        let cb = CircuitBreakerOutcome::from_reasons(vec!["X".to_string()]);
        let out = combine(corr(0.9), adv, cb);
        assert_eq!(out.risk_score, 1.0);
    }

    #[test]
    fn test_status_branches() {
        let clean = || (AdversarialResult::default(), CircuitBreakerOutcome::default());

        let (a, c) = clean();
        assert_eq!(combine(corr(0.85), a, c).status, Status::High);
        let (a, c) = clean();
        assert_eq!(combine(corr(0.45), a, c).status, Status::Elevated);
        let (a, c) = clean();
        assert_eq!(combine(corr(0.10), a, c).status, Status::Normal);
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(status_for_score(0.8), Status::High);
        assert_eq!(status_for_score(0.79), Status::Elevated);
        assert_eq!(status_for_score(0.4), Status::Elevated);
        assert_eq!(status_for_score(0.39), Status::Normal);
    }

    #[test]
    fn test_adversarial_boost_can_raise_tier() {
        let f = FeatureSet::new()
            .with(ENTROPY_SCORE, 0.3)
            .with(SUSPICIOUS_SMOOTHNESS, 1.0);
        let out = compute_risk_score(&f, &CircuitBreakerThresholds::default());
        assert!((out.risk_score - 0.5).abs() < 1e-12);
        assert_eq!(out.status, Status::Elevated);
        assert_eq!(out.details, vec!["entropy_score=0.3", "adversarial:suspicious_smoothness"]);
    }

    #[test]
    fn test_full_pipeline_with_breaker() {
        let f = FeatureSet::new()
            .with(MEMPOOL_SCORE, 0.1)
            .with(ENTROPY_DROP, 0.3)
            .with(MEMPOOL_ANOMALY, 0.8)
            .with(REORG_DEPTH, 4.0);
        let out = compute_risk_score(&f, &CircuitBreakerThresholds::default());
        assert_eq!(out.status, Status::Critical);
        assert_eq!(out.risk_score, 0.99);
        assert_eq!(
            out.details,
            vec!["mempool_score=0.1", "circuit_breaker:combo: entropy + mempool + reorg"]
        );
    }

    #[test]
    fn test_score_always_bounded() {
        let t = CircuitBreakerThresholds::default();
        for (e, m, r) in [(0.0, 0.0, 0.0), (5.0, 5.0, 5.0), (-2.0, 0.1, 0.0), (0.3, 0.3, 0.3)] {
            let f = FeatureSet::new()
                .with(ENTROPY_SCORE, e)
                .with(MEMPOOL_SCORE, m)
                .with(REORG_SCORE, r)
                .with(SUSPICIOUS_SMOOTHNESS, 1.0);
            let out = compute_risk_score(&f, &t);
            assert!((0.0..=1.0).contains(&out.risk_score));
            assert!((0.0..=1.0).contains(&out.correlation.adjusted_score));
        }
    }
}
