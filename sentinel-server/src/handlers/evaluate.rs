//! v2 evaluation handler

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::sync::Arc;

use sentinel_core::SentinelResult;

use crate::{AppResult, AppState};

#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    /// Raw telemetry snapshot from a node
    pub telemetry: Map<String, Value>,
}

pub async fn evaluate(
    State(state): State<AppState>,
    payload: Result<Json<EvaluateRequest>, JsonRejection>,
) -> AppResult<Json<SentinelResult>> {
    let Json(req) = payload?;

    // Scoring is CPU-bound; keep it off the async workers
    let service = Arc::clone(&state.service);
    let result = tokio::task::spawn_blocking(move || service.evaluate(&req.telemetry)).await??;

    tracing::debug!(status = %result.status, score = result.risk_score, "snapshot evaluated");
    Ok(Json(result))
}
