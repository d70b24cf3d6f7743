//! Contract v3 Types
//!
//! Request / response shapes of the Shield Contract v3 boundary.
//! Field names are stability-pinned.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use super::reason_codes::ReasonCode;
use crate::constants::{COMPONENT, CONTRACT_VERSION};

// ============================================================================
// DECISION
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Decision {
    Allow,
    Warn,
    Block,
    /// Fail-closed. Callers MUST treat ERROR as BLOCK.
    Error,
}

impl Decision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Allow => "ALLOW",
            Decision::Warn => "WARN",
            Decision::Block => "BLOCK",
            Decision::Error => "ERROR",
        }
    }

    /// Effective enforcement: ERROR blocks
    pub fn blocks(&self) -> bool {
        matches!(self, Decision::Block | Decision::Error)
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// Why a request was refused. `message` is static: no request content leaks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}: {message}")]
pub struct ContractError {
    pub code: ReasonCode,
    pub message: &'static str,
}

impl ContractError {
    pub fn new(code: ReasonCode, message: &'static str) -> Self {
        Self { code, message }
    }
}

// ============================================================================
// REQUEST
// ============================================================================

/// A request that passed every fail-closed check
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentinelV3Request {
    pub contract_version: i64,
    pub component: String,
    /// Trace only. Never a trust input.
    pub request_id: String,
    pub telemetry: Map<String, Value>,
    pub fail_closed: Option<bool>,
    pub constraints: Option<Map<String, Value>>,
}

// ============================================================================
// RESPONSE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskBlock {
    pub score: f64,
    pub tier: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Evidence {
    pub features: Map<String, Value>,
    pub details: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseMeta {
    pub model_used: bool,
    pub latency_ms: u64,
    pub fail_closed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentinelV3Response {
    pub contract_version: i64,
    pub component: String,
    pub request_id: String,
    /// 64-char lowercase hex SHA-256
    pub context_hash: String,
    pub decision: Decision,
    pub risk: RiskBlock,
    pub reason_codes: Vec<ReasonCode>,
    pub evidence: Evidence,
    pub meta: ResponseMeta,
}

/// Tier reported on ERROR responses
pub const ERROR_TIER: &str = "LOW";

impl SentinelV3Response {
    /// Fail-closed envelope. Nothing from the unvalidated request besides the
    /// echoed `request_id` goes in.
    pub fn error(request_id: String, context_hash: String, code: ReasonCode, message: &str) -> Self {
        let mut details = Map::new();
        details.insert("error".to_string(), Value::String(message.to_string()));

        Self {
            contract_version: CONTRACT_VERSION,
            component: COMPONENT.to_string(),
            request_id,
            context_hash,
            decision: Decision::Error,
            risk: RiskBlock {
                score: 0.0,
                tier: ERROR_TIER.to_string(),
            },
            reason_codes: vec![code],
            evidence: Evidence {
                features: Map::new(),
                details,
            },
            meta: ResponseMeta {
                model_used: false,
                latency_ms: 0,
                fail_closed: true,
            },
        }
    }

    pub fn is_error(&self) -> bool {
        self.decision == Decision::Error
    }

    /// JSON mapping form (what crosses the boundary)
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}
