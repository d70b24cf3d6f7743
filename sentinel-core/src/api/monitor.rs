//! Sentinel Wrapper - client + last-result monitor
//!
//! Owned by the serving layer and shared behind an `Arc`.

use parking_lot::RwLock;
use serde_json::{Map, Value};

use super::client::{SentinelClient, SentinelResult};
use crate::logic::config::SentinelConfig;
use crate::logic::contract::SentinelV3Response;
use crate::logic::features::FeatureError;

/// Status reported before the first evaluation
pub const NO_DATA_STATUS: &str = "NO_DATA";

impl SentinelResult {
    pub fn no_data() -> Self {
        Self {
            status: NO_DATA_STATUS.to_string(),
            risk_score: 0.0,
            details: Vec::new(),
        }
    }
}

#[derive(Debug)]
pub struct SentinelWrapper {
    client: SentinelClient,
    last: RwLock<Option<SentinelResult>>,
}

impl SentinelWrapper {
    pub fn new(client: SentinelClient) -> Self {
        Self {
            client,
            last: RwLock::new(None),
        }
    }

    pub fn from_config(config: SentinelConfig) -> Self {
        Self::new(SentinelClient::new(config))
    }

    pub fn client(&self) -> &SentinelClient {
        &self.client
    }

    /// Evaluate and remember the result. A failed evaluation leaves the
    /// last result untouched.
    pub fn evaluate(&self, raw: &Map<String, Value>) -> Result<SentinelResult, FeatureError> {
        let result = self.client.evaluate(raw)?;
        *self.last.write() = Some(result.clone());
        Ok(result)
    }

    /// v3 responses are not cached: they belong to the caller
    pub fn evaluate_v3_json(&self, text: &str) -> SentinelV3Response {
        self.client.evaluate_v3_json(text)
    }

    pub fn evaluate_v3_bytes(&self, body: &[u8]) -> SentinelV3Response {
        self.client.evaluate_v3_bytes(body)
    }

    pub fn evaluate_v3(&self, request: &Value) -> SentinelV3Response {
        self.client.evaluate_v3(request)
    }

    pub fn last_status(&self) -> SentinelResult {
        self.last.read().clone().unwrap_or_else(SentinelResult::no_data)
    }
}
