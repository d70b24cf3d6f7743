//! Telemetry Snapshot
//!
//! One point-in-time bundle of node telemetry.
//! Constructed once per request, read-only afterwards.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Opaque key -> value data of one signal family
pub type SubMap = Map<String, Value>;

/// Fixed-shape snapshot. No sub-schema is enforced at this layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub entropy: Option<SubMap>,
    pub mempool: Option<SubMap>,
    pub reorg: Option<SubMap>,
    pub peers: Option<SubMap>,
    pub hashrate: Option<SubMap>,
    pub wallet_signals: Option<SubMap>,
    pub extra: Option<SubMap>,
    /// Families present with a non-mapping value: family -> JSON kind
    #[serde(skip)]
    pub malformed: BTreeMap<&'static str, &'static str>,
}

impl TelemetrySnapshot {
    /// True when no signal family was supplied
    pub fn is_empty(&self) -> bool {
        self.entropy.is_none()
            && self.mempool.is_none()
            && self.reorg.is_none()
            && self.peers.is_none()
            && self.hashrate.is_none()
            && self.wallet_signals.is_none()
            && self.extra.is_none()
            && self.malformed.is_empty()
    }
}

fn sub_map(
    raw: &Map<String, Value>,
    key: &'static str,
    malformed: &mut BTreeMap<&'static str, &'static str>,
) -> Option<SubMap> {
    match raw.get(key)? {
        Value::Object(map) => Some(map.clone()),
        Value::Null => None,
        other => {
            log::debug!("telemetry '{}' is not a mapping ({})", key, json_kind(other));
            malformed.insert(key, json_kind(other));
            None
        }
    }
}

/// JSON type name used in log and error text
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Map a raw string-keyed mapping into a snapshot.
///
/// Any other top-level key is ignored. A family that is present but not a
/// mapping is left unset and recorded in `malformed`; extraction decides
/// whether that matters.
pub fn normalize_raw_telemetry(raw: &Map<String, Value>) -> TelemetrySnapshot {
    let mut malformed = BTreeMap::new();
    TelemetrySnapshot {
        entropy: sub_map(raw, "entropy", &mut malformed),
        mempool: sub_map(raw, "mempool", &mut malformed),
        reorg: sub_map(raw, "reorg", &mut malformed),
        peers: sub_map(raw, "peers", &mut malformed),
        hashrate: sub_map(raw, "hashrate", &mut malformed),
        wallet_signals: sub_map(raw, "wallet_signals", &mut malformed),
        extra: sub_map(raw, "extra", &mut malformed),
        malformed,
    }
}

/// Same as [`normalize_raw_telemetry`] for an arbitrary JSON value.
/// Non-mapping input yields an empty snapshot.
pub fn normalize_value(raw: &Value) -> TelemetrySnapshot {
    match raw {
        Value::Object(map) => normalize_raw_telemetry(map),
        _ => TelemetrySnapshot::default(),
    }
}
