//! Last evaluation snapshot, for dashboards

use axum::{extract::State, Json};
use sentinel_core::SentinelResult;

use crate::AppState;

pub async fn last(State(state): State<AppState>) -> Json<SentinelResult> {
    Json(state.service.last_status())
}
