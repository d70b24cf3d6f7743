//! Correlation Engine
//!
//! Sums the per-signal scores that are present and clamps into [0, 1].

use super::types::CorrelationResult;
use crate::logic::features::{FeatureSet, ENTROPY_SCORE, MEMPOOL_SCORE, REORG_SCORE};

/// Contributors in detail order
const SIGNALS: [&str; 3] = [ENTROPY_SCORE, MEMPOOL_SCORE, REORG_SCORE];

/// Render a score the way detail lines always have.
///
/// Shortest round-trip digits. Integral values keep `.0`. Magnitudes below
/// 1e-4 or from 1e16 up use an exponent with a sign and at least two digits
/// (`1e-05`, `1.5e+16`).
pub(crate) fn fmt_score(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let abs = value.abs();
    if abs != 0.0 && !(1e-4..1e16).contains(&abs) {
        let sci = format!("{:e}", value);
        if let Some((mantissa, exp)) = sci.split_once('e') {
            if let Ok(exp) = exp.parse::<i32>() {
                let sign = if exp < 0 { '-' } else { '+' };
                return format!("{}e{}{:02}", mantissa, sign, exp.abs());
            }
        }
        return sci;
    }

    let plain = format!("{}", value);
    if plain.contains('.') {
        plain
    } else {
        format!("{}.0", plain)
    }
}

/// Combine the raw signal scores into a base anomaly score
pub fn correlate_signals(features: &FeatureSet) -> CorrelationResult {
    let mut details = Vec::new();
    let mut base = 0.0;

    for name in SIGNALS {
        let score = features.get(name);
        if score != 0.0 {
            base += score;
            details.push(format!("{}={}", name, fmt_score(score)));
        }
    }

    CorrelationResult {
        base_score: base,
        adjusted_score: base.clamp(0.0, 1.0),
        details,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_signals() {
        let f = FeatureSet::new()
            .with(MEMPOOL_SCORE, 0.2)
            .with(REORG_SCORE, 0.3);
        let r = correlate_signals(&f);

        assert!((r.base_score - 0.5).abs() < 1e-12);
        assert_eq!(r.adjusted_score, r.base_score);
        assert_eq!(r.details, vec!["mempool_score=0.2", "reorg_score=0.3"]);
    }

    #[test]
    fn test_detail_order_is_fixed() {
        let f = FeatureSet::new()
            .with(REORG_SCORE, 0.1)
            .with(ENTROPY_SCORE, 1.0)
            .with(MEMPOOL_SCORE, 0.2);
        let r = correlate_signals(&f);
        assert_eq!(
            r.details,
            vec!["entropy_score=1.0", "mempool_score=0.2", "reorg_score=0.1"]
        );
    }

    #[test]
    fn test_clamped_above_one() {
        let f = FeatureSet::new()
            .with(ENTROPY_SCORE, 0.9)
            .with(MEMPOOL_SCORE, 0.9);
        let r = correlate_signals(&f);
        assert!(r.base_score > 1.0);
        assert_eq!(r.adjusted_score, 1.0);
    }

    #[test]
    fn test_negative_clamps_to_zero() {
        let f = FeatureSet::new().with(ENTROPY_SCORE, -0.5);
        let r = correlate_signals(&f);
        assert_eq!(r.base_score, -0.5);
        assert_eq!(r.adjusted_score, 0.0);
    }

    #[test]
    fn test_score_format() {
        assert_eq!(fmt_score(0.5), "0.5");
        assert_eq!(fmt_score(1.0), "1.0");
        assert_eq!(fmt_score(0.0), "0.0");
        assert_eq!(fmt_score(-2.0), "-2.0");
        assert_eq!(fmt_score(0.0001), "0.0001");
        assert_eq!(fmt_score(0.00001), "1e-05");
        assert_eq!(fmt_score(-0.000015), "-1.5e-05");
        assert_eq!(fmt_score(1.5e-300), "1.5e-300");
        assert_eq!(fmt_score(123456789012345.0), "123456789012345.0");
        assert_eq!(fmt_score(1e16), "1e+16");
        assert_eq!(fmt_score(2.5e20), "2.5e+20");
    }

    #[test]
    fn test_tiny_score_detail() {
        let r = correlate_signals(&FeatureSet::new().with(ENTROPY_SCORE, 0.00001));
        assert_eq!(r.details, vec!["entropy_score=1e-05"]);
    }

    #[test]
    fn test_empty_features() {
        let r = correlate_signals(&FeatureSet::new());
        assert_eq!(r.base_score, 0.0);
        assert_eq!(r.adjusted_score, 0.0);
        assert!(r.details.is_empty());
    }
}
