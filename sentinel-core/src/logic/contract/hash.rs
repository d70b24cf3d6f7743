//! Canonical Hasher (contract v3)
//!
//! sha256 over canonical JSON: keys sorted at every level, compact separators,
//! UTF-8, no ASCII escaping. Hashing is over exact codepoints, so NFC and NFD
//! spellings of the same text produce different digests.
//!
//! The algorithm is pinned. Upgrading it means a new contract version.

use serde_json::Value;
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::constants::HASH_ALGO_V3;

#[derive(Debug, Error)]
pub enum HashError {
    /// Deny by default when the pinned algorithm was changed
    #[error("v3 hash algo misconfigured: expected {expected}, found {found}")]
    AlgorithmMismatch {
        expected: &'static str,
        found: String,
    },

    #[error("canonical serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

// ============================================================================
// CANONICAL JSON
// ============================================================================

fn write_canonical(value: &Value, out: &mut Vec<u8>) -> Result<(), serde_json::Error> {
    match value {
        Value::Object(map) => {
            // Sort explicitly: Map ordering depends on serde_json features
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));

            out.push(b'{');
            for (i, (key, val)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                serde_json::to_writer(&mut *out, key)?;
                out.push(b':');
                write_canonical(val, out)?;
            }
            out.push(b'}');
        }
        Value::Array(items) => {
            out.push(b'[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                write_canonical(item, out)?;
            }
            out.push(b']');
        }
        scalar => serde_json::to_writer(&mut *out, scalar)?,
    }
    Ok(())
}

/// Canonical byte encoding of a JSON value
pub fn canonical_json_bytes(value: &Value) -> Result<Vec<u8>, HashError> {
    let mut out = Vec::with_capacity(128);
    write_canonical(value, &mut out)?;
    Ok(out)
}

/// Canonical SHA-256, lowercase hex (64 chars)
pub fn canonical_sha256(value: &Value) -> Result<String, HashError> {
    let bytes = canonical_json_bytes(value)?;
    Ok(hex::encode(Sha256::digest(&bytes)))
}

/// Hash with an explicitly named algorithm; anything but the pinned one is refused.
pub fn canonical_hash_with_algo(algo: &str, value: &Value) -> Result<String, HashError> {
    if algo != HASH_ALGO_V3 {
        return Err(HashError::AlgorithmMismatch {
            expected: HASH_ALGO_V3,
            found: algo.to_string(),
        });
    }
    canonical_sha256(value)
}

/// v3 hash entrypoint
pub fn canonical_hash_v3(value: &Value) -> Result<String, HashError> {
    canonical_hash_with_algo(HASH_ALGO_V3, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deterministic_and_order_independent() {
        let a: Value = serde_json::from_str(r#"{"b":2,"a":1}"#).unwrap();
        let b: Value = serde_json::from_str(r#"{"a":1,"b":2}"#).unwrap();

        let h1 = canonical_sha256(&a).unwrap();
        assert_eq!(h1.len(), 64);
        assert_eq!(h1, canonical_sha256(&a).unwrap());
        assert_eq!(h1, canonical_sha256(&b).unwrap());
    }

    #[test]
    fn test_canonical_form() {
        let v = json!({"z": {"y": [1, {"b": true, "a": null}], "x": "é"}, "a": 1.5});
        let bytes = canonical_json_bytes(&v).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            r#"{"a":1.5,"z":{"x":"é","y":[1,{"a":null,"b":true}]}}"#
        );
    }

    #[test]
    fn test_known_digest() {
        // sha256 of `{"a":1,"b":2}`
        let h = canonical_sha256(&json!({"b": 2, "a": 1})).unwrap();
        assert_eq!(h, hex::encode(Sha256::digest(br#"{"a":1,"b":2}"#)));
    }

    #[test]
    fn test_unicode_normalization_forms_differ() {
        let nfc = "caf\u{e9}";
        let nfd = "cafe\u{301}";
        assert_ne!(nfc, nfd);

        let h1 = canonical_hash_v3(&json!({"s": nfc})).unwrap();
        let h2 = canonical_hash_v3(&json!({"s": nfd})).unwrap();
        assert_ne!(h1, h2);
    }

    #[test]
    fn test_tampered_algorithm_refused() {
        let err = canonical_hash_with_algo("md5", &json!({})).unwrap_err();
        assert!(matches!(err, HashError::AlgorithmMismatch { .. }));
        assert!(canonical_hash_with_algo("sha256", &json!({})).is_ok());
    }
}
