//! Sentinel Client - v2 scoring surface + v3 contract entrypoint
//!
//! The client owns the thresholds and the (optional) verified model.
//! Model load failure is fail-open for v2 scoring: heuristics still run.
//! Telemetry that cannot be read as numbers is an error on both surfaces.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::logic::config::SentinelConfig;
use crate::logic::contract::{SentinelV3, SentinelV3Response};
use crate::logic::features::FeatureError;
use crate::logic::model::{load_and_verify_model, LoadedModel};
use crate::logic::pipeline::{evaluate_telemetry, PipelineOutcome};
use crate::logic::scoring::SentinelScore;

// ============================================================================
// RESULT
// ============================================================================

/// Compact v2 result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentinelResult {
    pub status: String,
    pub risk_score: f64,
    pub details: Vec<String>,
}

impl From<&SentinelScore> for SentinelResult {
    fn from(score: &SentinelScore) -> Self {
        Self {
            status: score.status.as_str().to_string(),
            risk_score: score.risk_score,
            details: score.details.clone(),
        }
    }
}

// ============================================================================
// CLIENT
// ============================================================================

#[derive(Debug, Clone)]
pub struct SentinelClient {
    config: SentinelConfig,
    v3: SentinelV3,
}

impl SentinelClient {
    /// Build a client. The model (if configured) is loaded and verified once.
    pub fn new(config: SentinelConfig) -> Self {
        let model = config.model_path.as_ref().and_then(|path| {
            match load_and_verify_model(path, config.model_hash.as_deref()) {
                Ok(model) => {
                    log::info!("Model loaded: {} ({})", model.path().display(), model.hash());
                    Some(model)
                }
                Err(e) => {
                    log::warn!("Model unavailable, scoring without it: {}", e);
                    None
                }
            }
        });

        Self::with_model(config, model)
    }

    /// Build a client around an already verified model
    pub fn with_model(config: SentinelConfig, model: Option<LoadedModel>) -> Self {
        let v3 = SentinelV3::new(config.circuit_breakers.clone(), model);
        Self { config, v3 }
    }

    pub fn config(&self) -> &SentinelConfig {
        &self.config
    }

    pub fn model(&self) -> Option<&LoadedModel> {
        self.v3.model()
    }

    /// Full pipeline output (features, engine results, model flag)
    pub fn evaluate_detailed(&self, raw: &Map<String, Value>) -> Result<PipelineOutcome, FeatureError> {
        evaluate_telemetry(raw, self.v3.thresholds(), self.v3.model())
    }

    /// Evaluate one telemetry snapshot (v2 surface)
    pub fn evaluate(&self, raw: &Map<String, Value>) -> Result<SentinelResult, FeatureError> {
        Ok(SentinelResult::from(&self.evaluate_detailed(raw)?.score))
    }

    pub fn evaluate_snapshot(&self, raw: &Map<String, Value>) -> Result<SentinelResult, FeatureError> {
        self.evaluate(raw)
    }

    /// Contract v3 with this client's thresholds and model
    pub fn evaluate_v3(&self, request: &Value) -> SentinelV3Response {
        self.v3.evaluate(request)
    }

    pub fn evaluate_v3_json(&self, text: &str) -> SentinelV3Response {
        self.v3.evaluate_json(text)
    }

    pub fn evaluate_v3_bytes(&self, body: &[u8]) -> SentinelV3Response {
        self.v3.evaluate_bytes(body)
    }
}

// ============================================================================
// ADAPTIVE ENTRYPOINT
// ============================================================================

/// The only entrypoint the adaptive core may call. Default thresholds, no model.
pub fn evaluate_v3(request: &Value) -> SentinelV3Response {
    SentinelV3::default().evaluate(request)
}

/// `evaluate_v3` over raw JSON text
pub fn evaluate_v3_json(text: &str) -> SentinelV3Response {
    SentinelV3::default().evaluate_json(text)
}

/// `evaluate_v3` over a raw request body
pub fn evaluate_v3_bytes(body: &[u8]) -> SentinelV3Response {
    SentinelV3::default().evaluate_bytes(body)
}
