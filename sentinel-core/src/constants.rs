//! Central Configuration Constants
//!
//! Single source of truth for contract identifiers and defaults.
//! Anything on the v3 wire lives here so a change is visible in one diff.

/// Component identifier carried by every Shield Contract v3 message
pub const COMPONENT: &str = "sentinel";

/// The only accepted contract version on the v3 surface
pub const CONTRACT_VERSION: i64 = 3;

/// Hash algorithm pinned for contract v3.
///
/// Changing this is a contract break: bump the contract version instead.
pub const HASH_ALGO_V3: &str = "sha256";

/// Ceiling for the canonical serialized telemetry of a v3 request (bytes)
pub const MAX_TELEMETRY_BYTES: usize = 100_000;

/// `request_id` used when the caller did not send one
pub const UNKNOWN_REQUEST_ID: &str = "unknown";

/// Default location of the optional model artifact
pub const DEFAULT_MODEL_PATH: &str = "models/sentinel_v2.onnx";

/// Layer name reported to the adaptive core
pub const ADAPTIVE_SOURCE_LAYER: &str = "sentinel_ai_v2";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "Sentinel AI v2";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Model path override. An empty value disables the model entirely.
pub fn get_model_path_override() -> Option<String> {
    std::env::var("SENTINEL_MODEL_PATH").ok()
}

/// Expected model hash override
pub fn get_model_hash_override() -> Option<String> {
    std::env::var("SENTINEL_MODEL_HASH")
        .ok()
        .filter(|s| !s.trim().is_empty())
}
