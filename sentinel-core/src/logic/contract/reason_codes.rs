//! Reason Codes (contract v3)
//!
//! Stability-pinned wire strings. Never rename; add new codes only with a
//! contract version bump.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReasonCode {
    // === Scored ===
    #[serde(rename = "SNTL_OK")]
    Ok,
    #[serde(rename = "SNTL_RISK_ELEVATED")]
    RiskElevated,
    #[serde(rename = "SNTL_RISK_HIGH")]
    RiskHigh,
    #[serde(rename = "SNTL_RISK_CRITICAL")]
    RiskCritical,
    #[serde(rename = "SNTL_ADVERSARIAL_PATTERN")]
    AdversarialPattern,
    #[serde(rename = "SNTL_CIRCUIT_BREAKER")]
    CircuitBreaker,

    // === Fail-closed ===
    #[serde(rename = "SNTL_ERROR_INVALID_REQUEST")]
    InvalidRequest,
    #[serde(rename = "SNTL_ERROR_SCHEMA_VERSION")]
    SchemaVersion,
    #[serde(rename = "SNTL_ERROR_UNKNOWN_TOP_LEVEL_KEY")]
    UnknownTopLevelKey,
    #[serde(rename = "SNTL_ERROR_TELEMETRY_TOO_LARGE")]
    TelemetryTooLarge,
    #[serde(rename = "SNTL_ERROR_INVALID_NUMERIC_VALUE")]
    InvalidNumericValue,
    #[serde(rename = "SNTL_ERROR_INTERNAL")]
    Internal,
    /// Reserved. The wired evaluator never emits it.
    #[serde(rename = "SNTL_ERROR_NOT_IMPLEMENTED")]
    NotImplemented,
}

impl ReasonCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReasonCode::Ok => "SNTL_OK",
            ReasonCode::RiskElevated => "SNTL_RISK_ELEVATED",
            ReasonCode::RiskHigh => "SNTL_RISK_HIGH",
            ReasonCode::RiskCritical => "SNTL_RISK_CRITICAL",
            ReasonCode::AdversarialPattern => "SNTL_ADVERSARIAL_PATTERN",
            ReasonCode::CircuitBreaker => "SNTL_CIRCUIT_BREAKER",
            ReasonCode::InvalidRequest => "SNTL_ERROR_INVALID_REQUEST",
            ReasonCode::SchemaVersion => "SNTL_ERROR_SCHEMA_VERSION",
            ReasonCode::UnknownTopLevelKey => "SNTL_ERROR_UNKNOWN_TOP_LEVEL_KEY",
            ReasonCode::TelemetryTooLarge => "SNTL_ERROR_TELEMETRY_TOO_LARGE",
            ReasonCode::InvalidNumericValue => "SNTL_ERROR_INVALID_NUMERIC_VALUE",
            ReasonCode::Internal => "SNTL_ERROR_INTERNAL",
            ReasonCode::NotImplemented => "SNTL_ERROR_NOT_IMPLEMENTED",
        }
    }

    pub fn is_error(&self) -> bool {
        self.as_str().starts_with("SNTL_ERROR_")
    }
}

impl std::fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_strings_match_serde() {
        for code in [
            ReasonCode::Ok,
            ReasonCode::RiskHigh,
            ReasonCode::UnknownTopLevelKey,
            ReasonCode::InvalidNumericValue,
            ReasonCode::NotImplemented,
        ] {
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, format!("\"{}\"", code.as_str()));
        }
    }

    #[test]
    fn test_error_classification() {
        assert!(ReasonCode::SchemaVersion.is_error());
        assert!(!ReasonCode::CircuitBreaker.is_error());
    }
}
