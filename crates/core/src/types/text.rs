//! Lenient text fields.
//!
//! Older data files and clients put numbers, booleans or nothing at all where
//! text is expected. Such values are read as their JSON text, so one odd record
//! never makes a whole document unreadable.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::price::decimal_from_text;

/// The text form of a JSON value: strings as-is, `null` as `""`, anything
/// else as compact JSON (`9876543210`, `true`).
#[must_use]
pub fn json_text(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    }
}

/// Whether a submitted value counts as not provided: `null`, `false`, `""`
/// or the number zero. Whitespace and the string `"0"` are provided.
#[must_use]
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => decimal_from_text(&n.to_string()).is_some_and(|d| d.is_zero()),
        Value::Bool(true) | Value::Array(_) | Value::Object(_) => false,
    }
}

/// Deserialize any JSON value into its [`json_text`].
///
/// Use with `#[serde(default, deserialize_with = "deserialize_text")]` so a
/// missing key also reads as `""`.
///
/// # Errors
///
/// Returns the deserializer's error if the input is not valid JSON data.
pub fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(json_text)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Deserialize)]
    struct Profile {
        #[serde(default, deserialize_with = "deserialize_text")]
        number: String,
    }

    #[test]
    fn test_json_text() {
        assert_eq!(json_text(json!("555-0100")), "555-0100");
        assert_eq!(json_text(json!(9_876_543_210_u64)), "9876543210");
        assert_eq!(json_text(json!(null)), "");
        assert_eq!(json_text(json!(true)), "true");
    }

    #[test]
    fn test_is_falsy() {
        for falsy in [json!(null), json!(false), json!(""), json!(0), json!(-0.0)] {
            assert!(is_falsy(&falsy), "{falsy}");
        }
        for truthy in [json!("0"), json!(" "), json!(1), json!(true), json!([])] {
            assert!(!is_falsy(&truthy), "{truthy}");
        }
    }

    #[test]
    fn test_field_accepts_number_null_and_absence() {
        let parse = |v| serde_json::from_value::<Profile>(v).unwrap().number;
        assert_eq!(parse(json!({"number": 9_876_543_210_u64})), "9876543210");
        assert_eq!(parse(json!({"number": null})), "");
        assert_eq!(parse(json!({})), "");
    }
}
