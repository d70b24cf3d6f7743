//! Sentinel Configuration
//!
//! Circuit breaker thresholds + optional model artifact.
//! Loaded once at construction, read-only afterwards.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{get_model_hash_override, get_model_path_override, DEFAULT_MODEL_PATH};

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

// ============================================================================
// CIRCUIT BREAKER THRESHOLDS
// ============================================================================

/// Static thresholds for the hard-coded circuit breakers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircuitBreakerThresholds {
    pub entropy_drop_threshold: f64,
    pub mempool_anomaly_threshold: f64,
    pub reorg_depth_threshold: i64,
    /// Correlation window, kept for audit records. Not evaluated per snapshot.
    pub multi_signal_window_seconds: u64,
}

impl Default for CircuitBreakerThresholds {
    fn default() -> Self {
        Self {
            entropy_drop_threshold: 0.2,
            mempool_anomaly_threshold: 0.7,
            reorg_depth_threshold: 3,
            multi_signal_window_seconds: 60,
        }
    }
}

// ============================================================================
// SENTINEL CONFIG
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SentinelConfig {
    /// Model artifact. `None` disables the ML contribution.
    pub model_path: Option<PathBuf>,
    /// Expected SHA-256 (hex) of the model artifact
    pub model_hash: Option<String>,
    /// Reserved for detached signatures
    pub model_signature_path: Option<PathBuf>,

    pub circuit_breakers: CircuitBreakerThresholds,

    pub enabled_detectors: BTreeMap<String, bool>,
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Default for SentinelConfig {
    fn default() -> Self {
        Self {
            model_path: Some(PathBuf::from(DEFAULT_MODEL_PATH)),
            model_hash: None,
            model_signature_path: None,
            circuit_breakers: CircuitBreakerThresholds::default(),
            enabled_detectors: BTreeMap::new(),
            extra: serde_json::Map::new(),
        }
    }
}

impl SentinelConfig {
    /// Config with no model at all (pure heuristics)
    pub fn without_model() -> Self {
        Self {
            model_path: None,
            ..Default::default()
        }
    }

    /// Apply operator overrides on top of file/default values.
    ///
    /// An empty `model_path` override switches the model off.
    pub fn with_overrides(mut self, model_path: Option<String>, model_hash: Option<String>) -> Self {
        if let Some(path) = model_path {
            self.model_path = if path.trim().is_empty() {
                None
            } else {
                Some(PathBuf::from(path))
            };
        }
        if model_hash.is_some() {
            self.model_hash = model_hash;
        }
        self
    }
}

/// Load configuration.
///
/// `None` -> defaults. `Some(path)` -> JSON file (missing fields take defaults).
/// Environment overrides (`SENTINEL_MODEL_PATH`, `SENTINEL_MODEL_HASH`) are applied last.
pub fn load_config(path: Option<&Path>) -> Result<SentinelConfig, ConfigError> {
    let base = match path {
        None => SentinelConfig::default(),
        Some(path) => {
            let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?
        }
    };

    Ok(base.with_overrides(get_model_path_override(), get_model_hash_override()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_thresholds() {
        let t = CircuitBreakerThresholds::default();
        assert_eq!(t.entropy_drop_threshold, 0.2);
        assert_eq!(t.mempool_anomaly_threshold, 0.7);
        assert_eq!(t.reorg_depth_threshold, 3);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"circuit_breakers": {{"reorg_depth_threshold": 5}}, "model_path": null}}"#).unwrap();

        let parsed: SentinelConfig =
            serde_json::from_str(&std::fs::read_to_string(file.path()).unwrap()).unwrap();
        assert_eq!(parsed.circuit_breakers.reorg_depth_threshold, 5);
        assert_eq!(parsed.circuit_breakers.entropy_drop_threshold, 0.2);
        assert!(parsed.model_path.is_none());
    }

    #[test]
    fn test_invalid_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();

        let err = load_config(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_config(Some(Path::new("/definitely/not/here.json"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_empty_path_override_disables_model() {
        let cfg = SentinelConfig::default().with_overrides(Some(String::new()), None);
        assert!(cfg.model_path.is_none());

        let cfg = SentinelConfig::without_model()
            .with_overrides(Some("m.bin".to_string()), Some("abc".to_string()));
        assert_eq!(cfg.model_path, Some(PathBuf::from("m.bin")));
        assert_eq!(cfg.model_hash.as_deref(), Some("abc"));
    }
}
