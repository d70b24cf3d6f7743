//! Scoring Pipeline
//!
//! raw telemetry -> snapshot -> features -> (model) -> score
//!
//! Shared by the v2 client and the v3 evaluator so both surfaces score
//! exactly the same way.

use serde_json::{Map, Value};

use crate::logic::config::CircuitBreakerThresholds;
use crate::logic::features::{extract_features, FeatureError, FeatureSet, MODEL_SCORE};
use crate::logic::model::{run_model_inference, LoadedModel};
use crate::logic::scoring::{compute_risk_score, SentinelScore};
use crate::logic::telemetry::normalize_raw_telemetry;

#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    /// Extracted features, plus `model_score` when a model ran
    pub features: FeatureSet,
    pub score: SentinelScore,
    pub model_used: bool,
}

pub fn evaluate_telemetry(
    raw: &Map<String, Value>,
    thresholds: &CircuitBreakerThresholds,
    model: Option<&LoadedModel>,
) -> Result<PipelineOutcome, FeatureError> {
    let snapshot = normalize_raw_telemetry(raw);
    let mut features = extract_features(&snapshot)?;

    // Heuristics see the extracted features only
    let score = compute_risk_score(&features, thresholds);

    let model_used = match model {
        Some(model) => {
            let model_score = run_model_inference(model, &features);
            features.set(MODEL_SCORE, model_score);
            true
        }
        None => false,
    };

    Ok(PipelineOutcome {
        features,
        score,
        model_used,
    })
}
