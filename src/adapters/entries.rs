//! Shared extraction helpers for adapters.

use crate::model::{FieldValue, FindingSet, NOT_AVAILABLE};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Short JSON type name for error messages
pub(crate) const fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Fetch the array stored under `key` in a top-level object.
///
/// A missing key (or `null`) is an empty result. A value of the wrong type
/// is recorded as an error on `set` and also yields no entries.
pub(crate) fn array_field<'a>(json: &'a Value, key: &str, set: &mut FindingSet) -> &'a [Value] {
    let Value::Object(map) = json else {
        let error = format!(
            "unexpected {} report shape: expected a JSON object, found {}",
            set.tool_name,
            json_type(json)
        );
        tracing::warn!("{}", error);
        set.push_error(error);
        return &[];
    };

    match map.get(key) {
        None | Some(Value::Null) => {
            tracing::debug!("{} report has no '{}' key, treating as empty", set.tool_name, key);
            &[]
        }
        Some(Value::Array(items)) => items,
        Some(other) => {
            let error = format!(
                "unexpected {} report shape: expected '{}' to be an array, found {}",
                set.tool_name,
                key,
                json_type(other)
            );
            tracing::warn!("{}", error);
            set.push_error(error);
            &[]
        }
    }
}

/// Decode every entry, skipping (and recording) the ones that do not fit `T`.
///
/// Source order of the surviving entries is preserved.
pub(crate) fn decode_entries<T: DeserializeOwned>(entries: &[Value], set: &mut FindingSet) -> Vec<T> {
    let mut decoded = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        match T::deserialize(entry) {
            Ok(value) => decoded.push(value),
            Err(e) => {
                let error = format!("skipped malformed {} entry #{}: {}", set.tool_name, index, e);
                tracing::warn!("{}", error);
                set.push_error(error);
            }
        }
    }
    decoded
}

/// Text value of an optional field, or the given default.
pub(crate) fn text_or(value: Option<FieldValue>, default: &str) -> String {
    value.map_or_else(|| default.to_string(), FieldValue::into_text)
}

/// Text value of an optional field, or `N/A`.
pub(crate) fn text_or_na(value: Option<FieldValue>) -> String {
    text_or(value, NOT_AVAILABLE)
}

/// Optional field kept as-is, or `N/A`.
pub(crate) fn value_or_na(value: Option<FieldValue>) -> FieldValue {
    value.unwrap_or_else(FieldValue::not_available)
}

/// Diagnostic text for a tool-supplied error entry.
///
/// Strings are copied verbatim, objects contribute their `message` field,
/// and anything else falls back to compact JSON.
pub(crate) fn diagnostic_text(entry: &Value) -> String {
    match entry {
        Value::String(s) => s.clone(),
        Value::Object(map) => match map.get("message") {
            Some(Value::String(message)) => message.clone(),
            Some(other) if !other.is_null() => other.to_string(),
            _ => entry.to_string(),
        },
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ToolKind;
    use serde::Deserialize;
    use serde_json::json;

    fn set() -> FindingSet {
        FindingSet::new(ToolKind::Bandit, &[], &[])
    }

    #[test]
    fn test_array_field_missing_key_is_empty_without_error() {
        let mut s = set();
        let json = json!({});
        assert!(array_field(&json, "results", &mut s).is_empty());
        assert!(s.errors.is_empty());
    }

    #[test]
    fn test_array_field_wrong_type_records_error() {
        let mut s = set();
        let json = json!({"results": "nope"});
        assert!(array_field(&json, "results", &mut s).is_empty());
        assert_eq!(s.errors.len(), 1);
        assert!(s.errors[0].contains("found string"));
    }

    #[test]
    fn test_array_field_non_object_records_error() {
        let mut s = set();
        let json = json!([1, 2]);
        assert!(array_field(&json, "results", &mut s).is_empty());
        assert!(s.errors[0].contains("expected a JSON object"));
    }

    #[test]
    fn test_decode_entries_skips_bad_entries_in_order() {
        #[derive(Deserialize)]
        struct Entry {
            name: Option<FieldValue>,
        }

        let mut s = set();
        let entries = vec![json!({"name": "a"}), json!(42), json!({"name": "b"})];
        let decoded: Vec<Entry> = decode_entries(&entries, &mut s);
        let names: Vec<_> = decoded.into_iter().map(|e| text_or_na(e.name)).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(s.errors.len(), 1);
        assert!(s.errors[0].contains("#1"));
    }

    #[test]
    fn test_diagnostic_text() {
        assert_eq!(diagnostic_text(&json!({"message": "timeout"})), "timeout");
        assert_eq!(diagnostic_text(&json!("raw")), "raw");
        assert_eq!(diagnostic_text(&json!({"code": 3})), r#"{"code":3}"#);
    }
}
