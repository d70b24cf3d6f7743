//! Contract v3 Evaluator
//!
//! RECEIVED -> VALIDATING -> VALID   -> SCORED(decision)
//!                        -> INVALID -> ERROR
//!
//! Any failure ends in an ERROR response that carries `fail_closed = true`.
//! Telemetry that passes validation but cannot be read as numbers fails as
//! `SNTL_ERROR_INVALID_REQUEST` after VALID.
//! Scoring never runs for an invalid request, and a panic while scoring is
//! turned into `SNTL_ERROR_INTERNAL` instead of unwinding into the caller.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::Instant;

use serde_json::{json, Map, Value};

use super::hash::canonical_hash_v3;
use super::numeric::parse_lenient;
use super::reason_codes::ReasonCode;
use super::types::{
    ContractError, Decision, Evidence, ResponseMeta, RiskBlock, SentinelV3Request,
    SentinelV3Response,
};
use super::validate::request_id_of;
use crate::constants::{COMPONENT, CONTRACT_VERSION, UNKNOWN_REQUEST_ID};
use crate::logic::config::CircuitBreakerThresholds;
use crate::logic::model::LoadedModel;
use crate::logic::pipeline::{evaluate_telemetry, PipelineOutcome};
use crate::logic::scoring::Status;

// ============================================================================
// STATE MACHINE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationState {
    Received,
    Validating,
    Valid,
    Invalid(ReasonCode),
    /// Terminal: ALLOW / WARN / BLOCK
    Scored(Decision),
    /// Terminal: decision is ERROR
    Error(ReasonCode),
}

impl EvaluationState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, EvaluationState::Scored(_) | EvaluationState::Error(_))
    }
}

/// Decision for a tier
pub fn decision_for_status(status: Status) -> Decision {
    match status {
        Status::Normal => Decision::Allow,
        Status::Elevated => Decision::Warn,
        Status::High | Status::Critical => Decision::Block,
    }
}

fn tier_reason_code(status: Status) -> ReasonCode {
    match status {
        Status::Normal => ReasonCode::Ok,
        Status::Elevated => ReasonCode::RiskElevated,
        Status::High => ReasonCode::RiskHigh,
        Status::Critical => ReasonCode::RiskCritical,
    }
}

const ZERO_HASH: &str = "0000000000000000000000000000000000000000000000000000000000000000";

// ============================================================================
// EVALUATOR
// ============================================================================

/// v3 entrypoint. Immutable after construction, shareable across threads.
#[derive(Debug, Clone, Default)]
pub struct SentinelV3 {
    thresholds: CircuitBreakerThresholds,
    model: Option<LoadedModel>,
}

impl SentinelV3 {
    pub fn new(thresholds: CircuitBreakerThresholds, model: Option<LoadedModel>) -> Self {
        Self { thresholds, model }
    }

    pub fn thresholds(&self) -> &CircuitBreakerThresholds {
        &self.thresholds
    }

    pub fn model(&self) -> Option<&LoadedModel> {
        self.model.as_ref()
    }

    pub fn evaluate(&self, request: &Value) -> SentinelV3Response {
        self.evaluate_with_trace(request).0
    }

    /// Wire entry: raw JSON text.
    ///
    /// NaN / Infinity literals survive parsing so they are refused as
    /// `SNTL_ERROR_INVALID_NUMERIC_VALUE`. Text that is not JSON at all is an
    /// invalid request.
    pub fn evaluate_json(&self, text: &str) -> SentinelV3Response {
        match parse_lenient(text) {
            Ok(parsed) => {
                let validated = SentinelV3Request::from_parsed(&parsed);
                self.run(&parsed.value, validated).0
            }
            Err(e) => {
                log::warn!("v3 request is not valid JSON: {}", e);
                error_response(
                    UNKNOWN_REQUEST_ID.to_string(),
                    ContractError::new(ReasonCode::InvalidRequest, "request is not valid JSON"),
                )
            }
        }
    }

    /// Wire entry: raw body bytes. Anything that is not UTF-8 is an invalid request.
    pub fn evaluate_bytes(&self, body: &[u8]) -> SentinelV3Response {
        match std::str::from_utf8(body) {
            Ok(text) => self.evaluate_json(text),
            Err(e) => {
                log::warn!("v3 request is not valid UTF-8: {}", e);
                error_response(
                    UNKNOWN_REQUEST_ID.to_string(),
                    ContractError::new(ReasonCode::InvalidRequest, "request is not valid UTF-8"),
                )
            }
        }
    }

    /// Evaluate and return every state visited, in order
    pub fn evaluate_with_trace(&self, request: &Value) -> (SentinelV3Response, Vec<EvaluationState>) {
        self.run(request, SentinelV3Request::from_value(request))
    }

    fn run(
        &self,
        request: &Value,
        validated: Result<SentinelV3Request, ContractError>,
    ) -> (SentinelV3Response, Vec<EvaluationState>) {
        let mut trace = vec![EvaluationState::Received, EvaluationState::Validating];
        let request_id = request_id_of(request);

        let validated = match validated {
            Ok(v) => v,
            Err(err) => {
                trace.push(EvaluationState::Invalid(err.code));
                trace.push(EvaluationState::Error(err.code));
                return (error_response(request_id, err), trace);
            }
        };
        trace.push(EvaluationState::Valid);

        match self.score(&validated) {
            Ok(response) => {
                trace.push(EvaluationState::Scored(response.decision));
                (response, trace)
            }
            Err(err) => {
                trace.push(EvaluationState::Error(err.code));
                (error_response(validated.request_id, err), trace)
            }
        }
    }

    fn score(&self, request: &SentinelV3Request) -> Result<SentinelV3Response, ContractError> {
        let started = Instant::now();

        let context = json!({
            "component": request.component,
            "contract_version": request.contract_version,
            "telemetry": Value::Object(request.telemetry.clone()),
        });
        let context_hash = canonical_hash_v3(&context).map_err(|e| {
            log::error!("context hash failed: {}", e);
            ContractError::new(ReasonCode::Internal, "internal error")
        })?;

        let outcome = run_guarded(|| {
            evaluate_telemetry(&request.telemetry, &self.thresholds, self.model.as_ref())
        })?
        .map_err(|e| {
            log::warn!("v3 request {}: {}", request.request_id, e);
            ContractError::new(ReasonCode::InvalidRequest, "telemetry value is not numeric")
        })?;

        let PipelineOutcome {
            features,
            score,
            model_used,
        } = outcome;

        let decision = decision_for_status(score.status);

        let mut reason_codes = vec![tier_reason_code(score.status)];
        if !score.adversarial.reasons.is_empty() {
            reason_codes.push(ReasonCode::AdversarialPattern);
        }
        if score.circuit_breakers.triggered {
            reason_codes.push(ReasonCode::CircuitBreaker);
        }

        // v2-shaped result, verbatim, for callers migrating from v2
        let mut details = Map::new();
        details.insert("v2_status".into(), Value::String(score.status.as_str().to_string()));
        details.insert("v2_risk_score".into(), json!(score.risk_score));
        details.insert("v2_details".into(), json!(score.details));

        log::debug!(
            "v3 request {} -> {} ({:.3})",
            request.request_id,
            decision,
            score.risk_score
        );

        Ok(SentinelV3Response {
            contract_version: CONTRACT_VERSION,
            component: COMPONENT.to_string(),
            request_id: request.request_id.clone(),
            context_hash,
            decision,
            risk: RiskBlock {
                score: score.risk_score,
                tier: score.status.as_str().to_string(),
            },
            reason_codes,
            evidence: Evidence {
                features: features.to_json(),
                details,
            },
            meta: ResponseMeta {
                model_used,
                latency_ms: started.elapsed().as_millis() as u64,
                fail_closed: true,
            },
        })
    }
}

/// Run scoring, converting a panic into an internal error
fn run_guarded<T>(f: impl FnOnce() -> T) -> Result<T, ContractError> {
    catch_unwind(AssertUnwindSafe(f)).map_err(|_| {
        log::error!("scoring panicked, failing closed");
        ContractError::new(ReasonCode::Internal, "internal error")
    })
}

/// Error envelope. The hash covers only fields that are safe to bind to:
/// never the unvalidated telemetry.
fn error_response(request_id: String, err: ContractError) -> SentinelV3Response {
    log::warn!("v3 request {} rejected: {}", request_id, err);

    let context = json!({
        "component": COMPONENT,
        "contract_version": CONTRACT_VERSION,
        "request_id": request_id,
        "reason_code": err.code.as_str(),
    });
    let context_hash = canonical_hash_v3(&context).unwrap_or_else(|e| {
        log::error!("error context hash failed: {}", e);
        ZERO_HASH.to_string()
    });

    SentinelV3Response::error(request_id, context_hash, err.code, err.message)
}
