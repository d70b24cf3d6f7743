//! Feature Layout - Centralized Feature Names
//!
//! Rename a feature here and every engine follows.
//! `model_score` is appended only when a verified model ran.

/// Correlation input: entropy signal score
pub const ENTROPY_SCORE: &str = "entropy_score";
/// Correlation input: mempool signal score
pub const MEMPOOL_SCORE: &str = "mempool_score";
/// Correlation input: reorg signal score
pub const REORG_SCORE: &str = "reorg_score";

/// Breaker input: observed entropy drop
pub const ENTROPY_DROP: &str = "entropy_drop";
/// Breaker input: mempool anomaly level
pub const MEMPOOL_ANOMALY: &str = "mempool_anomaly";
/// Breaker input: reorg depth in blocks
pub const REORG_DEPTH: &str = "reorg_depth";

/// Adversarial input: telemetry looks synthetically smooth
pub const SUSPICIOUS_SMOOTHNESS: &str = "suspicious_smoothness";

/// Optional ML contribution
pub const MODEL_SCORE: &str = "model_score";

/// Features always produced by extraction, in order
pub const FEATURE_LAYOUT: &[&str] = &[
    ENTROPY_SCORE,
    MEMPOOL_SCORE,
    REORG_SCORE,
    ENTROPY_DROP,
    MEMPOOL_ANOMALY,
    REORG_DEPTH,
];

/// Number of always-present features
pub const FEATURE_COUNT: usize = 6;

/// Position of a feature in the layout
pub fn feature_index(name: &str) -> Option<usize> {
    FEATURE_LAYOUT.iter().position(|n| *n == name)
}
