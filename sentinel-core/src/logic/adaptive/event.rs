//! Adaptive Events
//!
//! Uniform anomaly record for the adaptive core. Emitting is a structured
//! debug log line for now; scoring never depends on it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::logic::contract::canonical_json_bytes;

pub const DEFAULT_EVENT_LAYER: &str = "sentinel";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdaptiveEvent {
    pub layer: String,
    pub anomaly_type: String,
    pub severity: f64,
    pub qri_before: f64,
    pub qri_after: f64,
    pub block_height: Option<u64>,
    pub txid: Option<String>,
    pub was_mitigated: bool,
    pub details: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl AdaptiveEvent {
    pub fn with_layer(mut self, layer: impl Into<String>) -> Self {
        self.layer = layer.into();
        self
    }

    pub fn with_qri(mut self, before: f64, after: f64) -> Self {
        self.qri_before = before;
        self.qri_after = after;
        self
    }

    pub fn with_block_height(mut self, height: u64) -> Self {
        self.block_height = Some(height);
        self
    }

    pub fn with_txid(mut self, txid: impl Into<String>) -> Self {
        self.txid = Some(txid.into());
        self
    }

    pub fn mitigated(mut self, was_mitigated: bool) -> Self {
        self.was_mitigated = was_mitigated;
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Sorted-key compact JSON
    pub fn to_json_line(&self) -> String {
        serde_json::to_value(self)
            .ok()
            .and_then(|v| canonical_json_bytes(&v).ok())
            .and_then(|b| String::from_utf8(b).ok())
            .unwrap_or_default()
    }
}

pub fn build_adaptive_event(anomaly_type: impl Into<String>, severity: f64) -> AdaptiveEvent {
    AdaptiveEvent {
        layer: DEFAULT_EVENT_LAYER.to_string(),
        anomaly_type: anomaly_type.into(),
        severity,
        qri_before: 0.0,
        qri_after: 0.0,
        block_height: None,
        txid: None,
        was_mitigated: false,
        details: None,
        created_at: Utc::now(),
    }
}

pub fn emit_adaptive_event(event: &AdaptiveEvent) {
    log::debug!("AdaptiveEvent {}", event.to_json_line());
}

/// Hand an event to the adaptive core. Only the log sink exists today.
pub fn export_to_adaptive_core(event: &AdaptiveEvent) {
    emit_adaptive_event(event);
}

/// Build and export an event straight from a detection signal.
///
/// `qri_after` is `severity + qri_delta` clamped to [0, 1]. The context is
/// stored as canonical JSON.
pub fn emit_adaptive_event_from_signal(
    signal_name: &str,
    severity: f64,
    qri_delta: f64,
    context: Option<&Map<String, Value>>,
    block_height: Option<u64>,
    txid: Option<&str>,
) -> AdaptiveEvent {
    let mut event = build_adaptive_event(signal_name, severity)
        .with_qri(severity, (severity + qri_delta).clamp(0.0, 1.0));

    if let Some(height) = block_height {
        event = event.with_block_height(height);
    }
    if let Some(txid) = txid {
        event = event.with_txid(txid);
    }
    if let Some(context) = context {
        let ctx = Value::Object(context.clone());
        let details = canonical_json_bytes(&ctx)
            .ok()
            .and_then(|b| String::from_utf8(b).ok())
            .unwrap_or_else(|| ctx.to_string());
        event = event.with_details(details);
    }

    export_to_adaptive_core(&event);
    event
}
