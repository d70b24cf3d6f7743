//! Adaptive Hooks - detection signals to the adaptive core

use serde_json::{json, Map, Value};

use super::bridge::{AdaptiveBridge, ThreatPacket};
use crate::constants::ADAPTIVE_SOURCE_LAYER;

pub const REORG_THREAT_TYPE: &str = "reorg_pattern";

/// Score in [0, 1] -> severity in [0, 10]
pub fn severity_from_score(score: f64) -> u8 {
    if !score.is_finite() {
        return 0;
    }
    (score * 10.0).round().clamp(0.0, 10.0) as u8
}

/// Report a suspicious reorg pattern. No-op without a core.
pub fn report_reorg_anomaly(
    block_height: u64,
    score: f64,
    details: Option<&Map<String, Value>>,
    bridge: &AdaptiveBridge,
) {
    if !bridge.is_available() {
        return;
    }

    let mut metadata = Map::new();
    metadata.insert("score".to_string(), json!(score));
    if let Some(details) = details {
        metadata.extend(details.iter().map(|(k, v)| (k.clone(), v.clone())));
    }

    let packet = ThreatPacket::new(
        ADAPTIVE_SOURCE_LAYER,
        REORG_THREAT_TYPE,
        severity_from_score(score),
        "Suspicious reorg pattern detected by Sentinel AI v2.",
    )
    .with_block_height(block_height)
    .with_metadata(metadata);

    bridge.submit_threat(packet);
}

/// Send a feedback label (true_positive / false_positive / missed_attack)
pub fn send_feedback(layer: &str, event_id: &str, feedback: &str, bridge: &AdaptiveBridge) {
    if !bridge.is_available() {
        return;
    }
    bridge.submit_feedback_label(layer, feedback, event_id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::adaptive::bridge::tests::RecordingCore;

    #[test]
    fn test_severity_mapping() {
        assert_eq!(severity_from_score(0.66), 7);
        assert_eq!(severity_from_score(0.0), 0);
        assert_eq!(severity_from_score(3.0), 10);
        assert_eq!(severity_from_score(-1.0), 0);
        assert_eq!(severity_from_score(f64::NAN), 0);
    }

    #[test]
    fn test_reorg_report_merges_metadata() {
        let core = RecordingCore::default();
        let bridge = AdaptiveBridge::new(Box::new(core.clone()));
        let details = json!({"window": "30s"}).as_object().cloned().unwrap();

        report_reorg_anomaly(200, 0.66, Some(&details), &bridge);

        let threats = core.threats.lock();
        assert_eq!(threats.len(), 1);
        let p = &threats[0];
        assert_eq!(p.source_layer, "sentinel_ai_v2");
        assert_eq!(p.threat_type, REORG_THREAT_TYPE);
        assert_eq!(p.severity, 7);
        assert_eq!(p.block_height, Some(200));
        assert_eq!(p.metadata["score"], json!(0.66));
        assert_eq!(p.metadata["window"], "30s");
    }

    #[test]
    fn test_hooks_noop_when_unavailable() {
        let bridge = AdaptiveBridge::Unavailable;
        report_reorg_anomaly(1, 0.9, None, &bridge);
        send_feedback("sentinel_ai_v2", "e1", "true_positive", &bridge);
    }

    #[test]
    fn test_send_feedback() {
        let core = RecordingCore::default();
        let bridge = AdaptiveBridge::new(Box::new(core.clone()));
        send_feedback("sentinel_ai_v2", "e2", "missed_attack", &bridge);

        let events = core.feedback.lock();
        assert_eq!(events[0].layer, "sentinel_ai_v2");
        assert_eq!(events[0].feedback, "MISSED_ATTACK");
    }
}
