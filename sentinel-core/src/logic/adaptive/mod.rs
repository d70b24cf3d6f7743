//! Adaptive Core integration (optional)
//!
//! Best-effort notifier. With `AdaptiveBridge::Unavailable` every call is a
//! no-op, and nothing here ever feeds back into scoring.

pub mod bridge;
pub mod event;
pub mod heartbeat;
pub mod hooks;

pub use bridge::{
    AdaptiveBridge, AdaptiveCore, AdaptiveState, FeedbackEvent, LastUpdateMetadata, ThreatPacket,
    UNAVAILABLE_REPORT,
};
pub use event::{
    build_adaptive_event, emit_adaptive_event, emit_adaptive_event_from_signal,
    export_to_adaptive_core, AdaptiveEvent,
};
pub use heartbeat::{shield_heartbeat, HEARTBEAT_UNAVAILABLE};
pub use hooks::{report_reorg_anomaly, send_feedback, severity_from_score};
