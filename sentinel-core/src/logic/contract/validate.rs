//! Contract v3 Request Validation
//!
//! Checks run in a fixed order. The first failing check wins and nothing
//! after it is looked at.
//!
//! 1. request is an object
//! 2. `contract_version` is the integer 3
//! 3. `component` (if present) is ours
//! 4. no top-level key outside the allow-list
//! 5. `telemetry` is present and an object
//! 6. `fail_closed` / `constraints` have the right shape
//! 7. canonical telemetry fits the byte ceiling
//! 8. no non-finite number anywhere in telemetry
//!
//! Requests parsed by [`parse_lenient`](super::numeric::parse_lenient) may
//! carry non-finite markers. Each marker is sized as the literal it replaced.

use serde_json::{Map, Value};

use super::hash::canonical_json_bytes;
use super::numeric::{contains_non_finite, marker_count, LenientJson, MARKER_OVERHEAD};
use super::reason_codes::ReasonCode;
use super::types::{ContractError, SentinelV3Request};
use crate::constants::{COMPONENT, CONTRACT_VERSION, MAX_TELEMETRY_BYTES, UNKNOWN_REQUEST_ID};

pub const ALLOWED_TOP_LEVEL_KEYS: &[&str] = &[
    "contract_version",
    "component",
    "request_id",
    "telemetry",
    "constraints",
    "fail_closed",
];

/// Trace id to echo. Never used for any decision.
pub fn request_id_of(request: &Value) -> String {
    match request.get("request_id") {
        None | Some(Value::Null) => UNKNOWN_REQUEST_ID.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn reject(code: ReasonCode, message: &'static str) -> ContractError {
    ContractError::new(code, message)
}

/// Exactly the integer 3. Strings, floats and bools are refused.
fn is_pinned_version(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Number(n)) => n.as_i64() == Some(CONTRACT_VERSION),
        _ => false,
    }
}

impl SentinelV3Request {
    /// Validate an in-memory request. Marker-shaped objects are plain data here.
    pub fn from_value(request: &Value) -> Result<Self, ContractError> {
        Self::validate(request, false)
    }

    /// Validate a request parsed from wire text
    pub fn from_parsed(parsed: &LenientJson) -> Result<Self, ContractError> {
        Self::validate(&parsed.value, parsed.has_markers)
    }

    fn validate(request: &Value, markers: bool) -> Result<Self, ContractError> {
        let obj = request
            .as_object()
            .ok_or_else(|| reject(ReasonCode::InvalidRequest, "request must be a JSON object"))?;

        if !is_pinned_version(obj.get("contract_version")) {
            return Err(reject(ReasonCode::SchemaVersion, "unsupported contract_version"));
        }

        let component = match obj.get("component") {
            None => COMPONENT.to_string(),
            Some(Value::String(c)) if c == COMPONENT => c.clone(),
            Some(_) => return Err(reject(ReasonCode::InvalidRequest, "component mismatch")),
        };

        if obj.keys().any(|k| !ALLOWED_TOP_LEVEL_KEYS.contains(&k.as_str())) {
            return Err(reject(ReasonCode::UnknownTopLevelKey, "unknown top-level key"));
        }

        let telemetry = match obj.get("telemetry") {
            Some(Value::Object(t)) => t.clone(),
            _ => return Err(reject(ReasonCode::InvalidRequest, "telemetry must be an object")),
        };

        let fail_closed = match obj.get("fail_closed") {
            None => None,
            Some(Value::Bool(b)) => Some(*b),
            Some(_) => return Err(reject(ReasonCode::InvalidRequest, "fail_closed must be a boolean")),
        };

        let constraints = match obj.get("constraints") {
            None => None,
            Some(Value::Object(c)) => Some(c.clone()),
            Some(_) => return Err(reject(ReasonCode::InvalidRequest, "constraints must be an object")),
        };

        check_telemetry_content(&telemetry, markers)?;

        Ok(Self {
            contract_version: CONTRACT_VERSION,
            component,
            request_id: request_id_of(request),
            telemetry,
            fail_closed,
            constraints,
        })
    }
}

/// Size ceiling first, then numeric sanity
fn check_telemetry_content(telemetry: &Map<String, Value>, markers: bool) -> Result<(), ContractError> {
    let as_value = Value::Object(telemetry.clone());

    let mut size = canonical_json_bytes(&as_value)
        .map_err(|_| reject(ReasonCode::InvalidRequest, "telemetry is not serializable"))?
        .len();
    if markers {
        size -= marker_count(&as_value) * MARKER_OVERHEAD;
    }
    if size > MAX_TELEMETRY_BYTES {
        return Err(reject(ReasonCode::TelemetryTooLarge, "telemetry exceeds size limit"));
    }

    if contains_non_finite(&as_value, markers) {
        return Err(reject(ReasonCode::InvalidNumericValue, "telemetry contains NaN or Infinity"));
    }

    Ok(())
}
