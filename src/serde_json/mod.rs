//! Bidirectional conversion between this crate's [`Value`] and
//! [`serde_json::Value`], for testing and interop with the rest of the
//! ecosystem. Gated behind the `serde_json` feature.
//!
//! If you find yourself reaching for this on every parse, you probably don't
//! need jxon's incremental, trie-backed value model — Serde JSON directly is
//! likely a better fit.

use serde_json::{Map, Number};

use crate::value::JsonString;
use crate::{JsonParser, ParseError, Value};

/// Converts this crate's [`Value`] into a [`serde_json::Value`].
///
/// `NaN` and infinite numbers (which cannot occur in a value produced by
/// parsing, but can be constructed directly) convert to `serde_json`'s
/// `Null`, since JSON has no representation for them.
pub fn to_serde_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Number(n) => {
            Number::from_f64(*n).map_or(serde_json::Value::Null, serde_json::Value::Number)
        }
        Value::String(s) => serde_json::Value::String(s.as_str().to_string()),
        Value::Array(items) => serde_json::Value::Array(items.iter().map(to_serde_json).collect()),
        Value::Object(trie) => {
            let mut map = Map::new();
            trie.iterate(|key, v| {
                map.insert(key.to_string(), to_serde_json(v));
            });
            serde_json::Value::Object(map)
        }
    }
}

/// Converts a [`serde_json::Value`] into this crate's [`Value`].
///
/// A `serde_json` number is always converted via
/// [`serde_json::Number::as_f64`], matching this crate's IEEE-754-double-only
/// number model (see `SPEC_FULL.md` §3.1); a number so large it has no exact
/// `f64` representation loses precision exactly the way reparsing the same
/// literal through this crate's own number sub-parser would.
pub fn from_serde_json(value: serde_json::Value) -> Value {
    match value {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
        serde_json::Value::String(s) => Value::String(JsonString::from_str(&s)),
        serde_json::Value::Array(items) => {
            Value::Array(items.into_iter().map(from_serde_json).collect())
        }
        serde_json::Value::Object(map) => {
            let mut trie = crate::Trie::new();
            for (k, v) in map {
                trie.put(&k, from_serde_json(v));
            }
            Value::Object(trie)
        }
    }
}

/// Parses a complete byte slice directly into a [`serde_json::Value`],
/// bypassing this crate's own `Value` tree for callers who only want
/// JSON-as-data.
///
/// ```
/// use jxon::serde_json::parse_to_serde_json;
///
/// let json = r#"{"name": "Elvis"}"#.as_bytes();
/// let value = parse_to_serde_json(json).unwrap();
///
/// assert!(value.is_object());
/// assert_eq!(value["name"], "Elvis");
/// ```
pub fn parse_to_serde_json(bytes: &[u8]) -> Result<serde_json::Value, ParseError> {
    let mut parser = JsonParser::new();
    parser.parse(bytes)?;
    let value = parser
        .get_result()
        .ok_or_else(|| parser.get_error().cloned().unwrap_or(ParseError::InvalidContext))?;
    Ok(to_serde_json(&value))
}
