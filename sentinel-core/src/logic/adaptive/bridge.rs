//! Adaptive Core Bridge
//!
//! Optional link to an external adaptive-learning core. When no core is
//! wired in, every call is a silent no-op and scoring is unaffected.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

// ============================================================================
// PAYLOADS
// ============================================================================

/// Threat signal handed to the adaptive core
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreatPacket {
    pub id: Uuid,
    pub source_layer: String,
    pub threat_type: String,
    /// 0..=10
    pub severity: u8,
    pub description: String,
    pub node_id: Option<String>,
    pub wallet_id: Option<String>,
    pub tx_id: Option<String>,
    pub block_height: Option<u64>,
    pub metadata: Map<String, Value>,
    pub created_at: DateTime<Utc>,
}

impl ThreatPacket {
    pub fn new(
        source_layer: impl Into<String>,
        threat_type: impl Into<String>,
        severity: u8,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            source_layer: source_layer.into(),
            threat_type: threat_type.into(),
            severity: severity.min(10),
            description: description.into(),
            node_id: None,
            wallet_id: None,
            tx_id: None,
            block_height: None,
            metadata: Map::new(),
            created_at: Utc::now(),
        }
    }

    pub fn with_block_height(mut self, height: u64) -> Self {
        self.block_height = Some(height);
        self
    }

    pub fn with_metadata(mut self, metadata: Map<String, Value>) -> Self {
        self.metadata = metadata;
        self
    }
}

/// Labelled outcome used to teach the core
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackEvent {
    pub event_id: String,
    pub layer: String,
    /// TRUE_POSITIVE / FALSE_POSITIVE / MISSED_ATTACK
    pub feedback: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdaptiveState {
    pub global_threshold: f64,
    pub layer_weights: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LastUpdateMetadata {
    pub last_threat_received: Option<DateTime<Utc>>,
    pub last_learning_update: Option<DateTime<Utc>>,
}

// ============================================================================
// CORE INTERFACE
// ============================================================================

pub trait AdaptiveCore: Send + Sync {
    fn submit_threat_packet(&self, packet: ThreatPacket);
    fn submit_feedback_events(&self, events: Vec<FeedbackEvent>);
    fn immune_report_text(&self, min_severity: u8) -> String;
    fn adaptive_state(&self) -> AdaptiveState;
    fn last_update_metadata(&self) -> LastUpdateMetadata;
}

pub const UNAVAILABLE_REPORT: &str = "Adaptive Core integration not available in this environment.";

// ============================================================================
// BRIDGE
// ============================================================================

#[derive(Default)]
pub enum AdaptiveBridge {
    Available(Box<dyn AdaptiveCore>),
    #[default]
    Unavailable,
}

impl AdaptiveBridge {
    pub fn new(core: Box<dyn AdaptiveCore>) -> Self {
        AdaptiveBridge::Available(core)
    }

    pub fn is_available(&self) -> bool {
        matches!(self, AdaptiveBridge::Available(_))
    }

    pub fn core(&self) -> Option<&dyn AdaptiveCore> {
        match self {
            AdaptiveBridge::Available(core) => Some(core.as_ref()),
            AdaptiveBridge::Unavailable => None,
        }
    }

    pub fn submit_threat(&self, packet: ThreatPacket) {
        if let Some(core) = self.core() {
            log::debug!(
                "adaptive: threat {} severity={} from {}",
                packet.threat_type,
                packet.severity,
                packet.source_layer
            );
            core.submit_threat_packet(packet);
        }
    }

    /// Feedback tag is upper-cased before it leaves
    pub fn submit_feedback_label(&self, layer: &str, feedback: &str, event_id: &str) {
        if let Some(core) = self.core() {
            core.submit_feedback_events(vec![FeedbackEvent {
                event_id: event_id.to_string(),
                layer: layer.to_string(),
                feedback: feedback.to_uppercase(),
            }]);
        }
    }

    pub fn immune_report_text(&self, min_severity: u8) -> String {
        match self.core() {
            Some(core) => core.immune_report_text(min_severity),
            None => UNAVAILABLE_REPORT.to_string(),
        }
    }
}

impl std::fmt::Debug for AdaptiveBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdaptiveBridge::Available(_) => f.write_str("AdaptiveBridge::Available"),
            AdaptiveBridge::Unavailable => f.write_str("AdaptiveBridge::Unavailable"),
        }
    }
}
