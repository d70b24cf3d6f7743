//! Shield heartbeat - health + adaptive intelligence summary

use std::fmt::Write;

use chrono::{DateTime, Utc};

use super::bridge::AdaptiveBridge;

pub const HEARTBEAT_UNAVAILABLE: &str = "Shield heartbeat: Adaptive Core not available.";

fn fmt_ts(ts: Option<DateTime<Utc>>) -> String {
    ts.map(|t| t.to_rfc3339()).unwrap_or_else(|| "None".to_string())
}

pub fn shield_heartbeat(min_severity: u8, bridge: &AdaptiveBridge) -> String {
    let Some(core) = bridge.core() else {
        return HEARTBEAT_UNAVAILABLE.to_string();
    };

    let report = core.immune_report_text(min_severity);
    let state = core.adaptive_state();
    let last = core.last_update_metadata();

    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = writeln!(out, "=== Sentinel Shield - Heartbeat ===");
    let _ = writeln!(out);
    let _ = writeln!(out, ">> Immune Report:");
    let _ = writeln!(out, "{}", report);
    let _ = writeln!(out);
    let _ = writeln!(out, ">> Last Updates:");
    let _ = writeln!(out, "  Last threat received: {}", fmt_ts(last.last_threat_received));
    let _ = writeln!(out, "  Last learning update: {}", fmt_ts(last.last_learning_update));
    let _ = writeln!(out);
    let _ = writeln!(out, ">> Adaptive State:");
    let _ = writeln!(out, "  Global Threshold: {:.3}", state.global_threshold);
    let _ = write!(out, "  Layer Weights:");
    for (layer, weight) in &state.layer_weights {
        let _ = write!(out, "\n    - {}: {:.3}", layer, weight);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::adaptive::bridge::tests::RecordingCore;

    #[test]
    fn test_unavailable() {
        assert_eq!(shield_heartbeat(0, &AdaptiveBridge::Unavailable), HEARTBEAT_UNAVAILABLE);
    }

    #[test]
    fn test_report_sections() {
        let bridge = AdaptiveBridge::new(Box::new(RecordingCore::default()));
        let text = shield_heartbeat(3, &bridge);

        assert!(text.contains("immune report (min severity 3)"));
        assert!(text.contains("Last threat received: None"));
        assert!(text.contains("Global Threshold: 0.750"));
        assert!(text.ends_with("    - sentinel_ai_v2: 0.500"));
    }
}
