//! Stream watcher - feed a sequence of snapshots through a client

use serde_json::{Map, Value};

use super::client::{SentinelClient, SentinelResult};
use crate::logic::features::FeatureError;

/// One-line summary of a result
pub fn summary_line(result: &SentinelResult) -> String {
    format!(
        "[SentinelAI v2] status={} score={:.3} details={}",
        result.status,
        result.risk_score,
        result.details.join(",")
    )
}

/// Default handler: log the summary line
pub fn log_summary(result: &SentinelResult) {
    log::info!("{}", summary_line(result));
}

/// Evaluate every snapshot in `source`, calling `handler` per result.
/// Returns the number of snapshots processed; stops at the first snapshot
/// that fails extraction.
pub fn watch_stream<I, F>(source: I, client: &SentinelClient, mut handler: F) -> Result<usize, FeatureError>
where
    I: IntoIterator<Item = Map<String, Value>>,
    F: FnMut(&SentinelResult),
{
    let mut processed = 0;
    for snapshot in source {
        let result = client.evaluate_snapshot(&snapshot)?;
        handler(&result);
        processed += 1;
    }
    Ok(processed)
}
