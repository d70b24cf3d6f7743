//! Feature Extraction
//!
//! TelemetrySnapshot -> FeatureSet. Missing fields read as 0. A value that
//! cannot be read as a finite number is an error, never a zero.

use serde_json::Value;
use thiserror::Error;

use super::layout::*;
use super::set::FeatureSet;
use crate::logic::telemetry::{json_kind, SubMap, TelemetrySnapshot};

/// Families the extractor reads from
const READ_FAMILIES: [&str; 4] = ["entropy", "mempool", "reorg", "extra"];

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeatureError {
    #[error("telemetry '{family}' is not a mapping ({found})")]
    MalformedFamily {
        family: &'static str,
        found: &'static str,
    },

    #[error("telemetry '{family}.{key}' is not a finite number ({found})")]
    NonNumeric {
        family: &'static str,
        key: &'static str,
        found: &'static str,
    },
}

/// Numeric reading of a JSON value.
///
/// Booleans count as 1/0 and numeric strings are parsed after trimming.
/// Null, non-numeric strings and non-finite results give `None`.
pub fn numeric_value(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

fn field(map: &Option<SubMap>, family: &'static str, key: &'static str) -> Result<f64, FeatureError> {
    match map.as_ref().and_then(|m| m.get(key)) {
        None => Ok(0.0),
        Some(value) => numeric_value(value).ok_or(FeatureError::NonNumeric {
            family,
            key,
            found: json_kind(value),
        }),
    }
}

/// Flatten a snapshot into the scoring feature set
pub fn extract_features(snapshot: &TelemetrySnapshot) -> Result<FeatureSet, FeatureError> {
    for family in READ_FAMILIES {
        if let Some(&found) = snapshot.malformed.get(family) {
            return Err(FeatureError::MalformedFamily { family, found });
        }
    }

    let mut features = FeatureSet::new()
        .with(ENTROPY_SCORE, field(&snapshot.entropy, "entropy", "score")?)
        .with(MEMPOOL_SCORE, field(&snapshot.mempool, "mempool", "score")?)
        .with(REORG_SCORE, field(&snapshot.reorg, "reorg", "score")?)
        .with(ENTROPY_DROP, field(&snapshot.entropy, "entropy", "drop")?)
        .with(MEMPOOL_ANOMALY, field(&snapshot.mempool, "mempool", "anomaly")?)
        .with(REORG_DEPTH, field(&snapshot.reorg, "reorg", "depth")?);

    // Adversarial hint forwarded from `extra`
    let has_hint = snapshot
        .extra
        .as_ref()
        .is_some_and(|m| m.contains_key(SUSPICIOUS_SMOOTHNESS));
    if has_hint {
        let smooth = field(&snapshot.extra, "extra", SUSPICIOUS_SMOOTHNESS)?;
        features.set(SUSPICIOUS_SMOOTHNESS, smooth);
    }

    Ok(features)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::telemetry::normalize_value;
    use serde_json::json;

    #[test]
    fn test_full_snapshot() {
        let snap = normalize_value(&json!({
            "entropy": {"score": 0.3, "drop": 0.25},
            "mempool": {"score": 0.2, "anomaly": 0.8},
            "reorg": {"score": 0.1, "depth": 4},
        }));
        let f = extract_features(&snap).unwrap();

        assert_eq!(f.get(ENTROPY_SCORE), 0.3);
        assert_eq!(f.get(MEMPOOL_SCORE), 0.2);
        assert_eq!(f.get(REORG_SCORE), 0.1);
        assert_eq!(f.get(ENTROPY_DROP), 0.25);
        assert_eq!(f.get(MEMPOOL_ANOMALY), 0.8);
        assert_eq!(f.get(REORG_DEPTH), 4.0);
        assert_eq!(f.len(), FEATURE_COUNT);
    }

    #[test]
    fn test_empty_snapshot_is_all_zero() {
        let f = extract_features(&TelemetrySnapshot::default()).unwrap();
        assert_eq!(f.len(), FEATURE_COUNT);
        assert!(f.iter().all(|(_, v)| v == 0.0));
        assert!(!f.contains(SUSPICIOUS_SMOOTHNESS));
    }

    #[test]
    fn test_numeric_strings_and_bools() {
        let snap = normalize_value(&json!({
            "entropy": {"score": " 0.9 ", "drop": "5e-1"},
            "reorg": {"depth": "4"},
            "extra": {"suspicious_smoothness": true},
        }));
        let f = extract_features(&snap).unwrap();
        assert_eq!(f.get(ENTROPY_SCORE), 0.9);
        assert_eq!(f.get(ENTROPY_DROP), 0.5);
        assert_eq!(f.get(REORG_DEPTH), 4.0);
        assert_eq!(f.get(SUSPICIOUS_SMOOTHNESS), 1.0);
    }

    #[test]
    fn test_non_numeric_value_is_error() {
        let snap = normalize_value(&json!({"entropy": {"score": "high"}}));
        assert_eq!(
            extract_features(&snap),
            Err(FeatureError::NonNumeric {
                family: "entropy",
                key: "score",
                found: "string",
            })
        );

        for bad in [json!(null), json!([0.9]), json!({"v": 1}), json!("nan"), json!("inf")] {
            let snap = normalize_value(&json!({"mempool": {"anomaly": bad}}));
            assert!(extract_features(&snap).is_err(), "{} accepted", bad);
        }
    }

    #[test]
    fn test_malformed_family_is_error() {
        let snap = normalize_value(&json!({"reorg": 5}));
        assert_eq!(
            extract_features(&snap),
            Err(FeatureError::MalformedFamily {
                family: "reorg",
                found: "number",
            })
        );

        // Families the extractor never reads do not matter
        let snap = normalize_value(&json!({"peers": "many", "entropy": {"score": 0.2}}));
        assert_eq!(extract_features(&snap).unwrap().get(ENTROPY_SCORE), 0.2);
    }
}
