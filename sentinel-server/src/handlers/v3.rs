//! Contract v3 handler
//!
//! Always 200: the outcome is carried by `decision`, and ERROR must be
//! treated as BLOCK by the caller. The raw body bytes go to the core, so a
//! body that is not UTF-8 still gets the fail-closed envelope, and NaN /
//! Infinity literals are refused with their own code.

use axum::{body::Bytes, extract::State, Json};

use sentinel_core::SentinelV3Response;

use crate::AppState;

pub async fn evaluate(State(state): State<AppState>, body: Bytes) -> Json<SentinelV3Response> {
    let response = state.service.evaluate_v3_bytes(&body);

    tracing::info!(
        request_id = %response.request_id,
        decision = %response.decision,
        context_hash = %response.context_hash,
        "v3 evaluated"
    );
    Json(response)
}
