//! Non-finite numbers on the wire
//!
//! Strict JSON cannot carry NaN / Infinity, but peers that speak the lenient
//! dialect do send `NaN`, `Infinity`, `-Infinity` and overflowing literals
//! such as `1e999`. They are rewritten into a marker object
//! `{"$sntl_non_finite": "<literal>"}` so the request still reaches
//! validation and is refused with a precise reason code instead of a generic
//! parse failure. Overflowing literals are recorded as `Infinity` /
//! `-Infinity`.
//!
//! Markers only mean something when the rewrite produced them: strict JSON
//! that happens to contain the marker key is ordinary data.

use serde_json::{Map, Value};

/// Key of the marker object standing in for a non-finite number
pub const NON_FINITE_MARKER: &str = "$sntl_non_finite";

const MARKER_OPEN: &str = "{\"$sntl_non_finite\":\"";
const MARKER_CLOSE: &str = "\"}";

/// Canonical bytes a marker adds on top of its literal
pub const MARKER_OVERHEAD: usize = MARKER_OPEN.len() + MARKER_CLOSE.len();

/// Longest first so `-Infinity` is not split
const NON_FINITE_LITERALS: &[&str] = &["-Infinity", "Infinity", "NaN"];

/// Parsed request text
#[derive(Debug, Clone, PartialEq)]
pub struct LenientJson {
    pub value: Value,
    /// At least one non-finite literal was rewritten into a marker
    pub has_markers: bool,
}

/// Parse JSON text, tolerating non-finite numeric literals
pub fn parse_lenient(text: &str) -> Result<LenientJson, serde_json::Error> {
    match serde_json::from_str(text) {
        Ok(value) => Ok(LenientJson {
            value,
            has_markers: false,
        }),
        Err(strict_err) => {
            let rewritten = rewrite_non_finite(text);
            if rewritten == text {
                return Err(strict_err);
            }
            Ok(LenientJson {
                value: serde_json::from_str(&rewritten)?,
                has_markers: true,
            })
        }
    }
}

fn push_marker(out: &mut String, literal: &str) {
    out.push_str(MARKER_OPEN);
    out.push_str(literal);
    out.push_str(MARKER_CLOSE);
}

/// Replace non-finite literals outside string literals with the marker
fn rewrite_non_finite(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut i = 0;
    let mut in_string = false;
    let mut escaped = false;

    while i < bytes.len() {
        let b = bytes[i];

        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            i += 1;
            continue;
        }

        if b == b'"' {
            in_string = true;
            i += 1;
            continue;
        }

        let keyword = NON_FINITE_LITERALS
            .iter()
            .find(|kw| bytes[i..].starts_with(kw.as_bytes()));

        if let Some(kw) = keyword {
            out.push_str(&text[copied..i]);
            push_marker(&mut out, kw);
            i += kw.len();
            copied = i;
            continue;
        }

        if b == b'-' || b.is_ascii_digit() {
            let start = i;
            i += 1;
            while i < bytes.len() && matches!(bytes[i], b'0'..=b'9' | b'.' | b'e' | b'E' | b'+' | b'-') {
                i += 1;
            }
            let overflow = text[start..i].parse::<f64>().ok().filter(|v| v.is_infinite());
            if let Some(v) = overflow {
                out.push_str(&text[copied..start]);
                push_marker(&mut out, if v < 0.0 { "-Infinity" } else { "Infinity" });
                copied = i;
            }
            continue;
        }

        i += 1;
    }

    out.push_str(&text[copied..]);
    out
}

/// Literal carried by a marker object, if `map` is one
fn marker_literal(map: &Map<String, Value>) -> Option<&str> {
    if map.len() != 1 {
        return None;
    }
    match map.get(NON_FINITE_MARKER)? {
        Value::String(lit) if NON_FINITE_LITERALS.contains(&lit.as_str()) => Some(lit.as_str()),
        _ => None,
    }
}

/// Number of marker objects at any depth
pub fn marker_count(value: &Value) -> usize {
    match value {
        Value::Array(items) => items.iter().map(marker_count).sum(),
        Value::Object(map) if marker_literal(map).is_some() => 1,
        Value::Object(map) => map.values().map(marker_count).sum(),
        _ => 0,
    }
}

/// True if any number at any depth is NaN / ±Infinity.
///
/// With `markers` set, marker objects left by [`parse_lenient`] count too.
pub fn contains_non_finite(value: &Value, markers: bool) -> bool {
    match value {
        Value::Number(n) => n.as_f64().map(|f| !f.is_finite()).unwrap_or(false),
        Value::Array(items) => items.iter().any(|v| contains_non_finite(v, markers)),
        Value::Object(map) => {
            (markers && marker_literal(map).is_some())
                || map.values().any(|v| contains_non_finite(v, markers))
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::contract::hash::canonical_json_bytes;
    use serde_json::json;

    #[test]
    fn test_strict_json_untouched() {
        let parsed = parse_lenient(r#"{"a": 1, "b": "NaN"}"#).unwrap();
        assert!(!parsed.has_markers);
        assert_eq!(parsed.value, json!({"a": 1, "b": "NaN"}));
        assert!(!contains_non_finite(&parsed.value, true));
    }

    #[test]
    fn test_nan_and_infinity_become_markers() {
        let parsed =
            parse_lenient(r#"{"e": {"score": NaN}, "l": [Infinity, -Infinity], "s": "x NaN"}"#).unwrap();
        let v = &parsed.value;
        assert!(parsed.has_markers);
        assert!(contains_non_finite(&v["e"], true));
        assert!(contains_non_finite(&v["l"], true));
        assert!(!contains_non_finite(&v["l"], false));
        assert_eq!(v["l"][1], json!({NON_FINITE_MARKER: "-Infinity"}));
        assert_eq!(v["s"], "x NaN");
        assert_eq!(marker_count(v), 3);
    }

    #[test]
    fn test_overflowing_literal() {
        let v = parse_lenient(r#"{"x": 1e999, "y": -2.5e3, "z": -1e999}"#).unwrap().value;
        assert_eq!(v["x"], json!({NON_FINITE_MARKER: "Infinity"}));
        assert_eq!(v["z"], json!({NON_FINITE_MARKER: "-Infinity"}));
        assert_eq!(v["y"], json!(-2500.0));
    }

    #[test]
    fn test_escaped_quotes_in_strings() {
        let v = parse_lenient(r#"{"s": "a \" NaN", "n": NaN}"#).unwrap().value;
        assert_eq!(v["s"], "a \" NaN");
        assert!(contains_non_finite(&v["n"], true));
    }

    #[test]
    fn test_garbage_still_fails() {
        assert!(parse_lenient("{bad json").is_err());
        assert!(parse_lenient("{\"a\": NaNa}").is_err());
    }

    #[test]
    fn test_marker_overhead_matches_canonical_form() {
        let marker = json!({NON_FINITE_MARKER: "NaN"});
        let len = canonical_json_bytes(&marker).unwrap().len();
        assert_eq!(len, "NaN".len() + MARKER_OVERHEAD);
    }

    #[test]
    fn test_marker_shape_is_exact() {
        for not_marker in [
            json!({NON_FINITE_MARKER: "hello"}),
            json!({NON_FINITE_MARKER: true}),
            json!({NON_FINITE_MARKER: "NaN", "other": 1}),
        ] {
            assert_eq!(marker_count(&not_marker), 0);
            assert!(!contains_non_finite(&not_marker, true));
        }
    }
}
