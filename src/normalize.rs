use serde_json::Value;
use tracing::warn;

use crate::transcribe::{BODY_FIELDS, TITLE_FIELD};

/// Key assigned when the top-level object is itself a single record.
pub const SINGLE_ITEM_KEY: &str = "single_item";

/// Flatten a parsed JSON document of unknown shape into an ordered list of
/// (key, record) pairs.
///
/// A top-level object carrying both a `Title` and a recognized body field is
/// one record; any other object is a keyed mapping of records; an array is
/// indexed by position. Anything else yields no records, with a warning.
///
/// Entries whose value is not an object pass through unfiltered; the
/// transcriber rejects them so the skip stays attributable to the entry's key.
pub fn normalize(value: Value) -> Vec<(String, Value)> {
    match value {
        Value::Object(map) => {
            if map.contains_key(TITLE_FIELD) && BODY_FIELDS.iter().any(|f| map.contains_key(*f)) {
                return vec![(SINGLE_ITEM_KEY.to_string(), Value::Object(map))];
            }
            map.into_iter().collect()
        }
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, item)| (i.to_string(), item))
            .collect(),
        other => {
            warn!(
                got = kind_name(&other),
                "unsupported top-level JSON shape, expected an object or array"
            );
            Vec::new()
        }
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn single_item_shape() {
        let value = json!({"Title": "X", "Body__c": "<b>Y</b>"});
        let records = normalize(value.clone());
        assert_eq!(records, vec![(SINGLE_ITEM_KEY.to_string(), value)]);
    }

    #[test]
    fn single_item_needs_a_recognized_body_field() {
        // Title alone is a keyed mapping, not a single record.
        let records = normalize(json!({"Title": "X", "Summary": "no body"}));
        let keys: Vec<_> = records.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["Title", "Summary"]);
    }

    #[test]
    fn keyed_mapping_preserves_document_order() {
        let value = json!({
            "zebra": {"Title": "Z", "body": "z"},
            "apple": {"Title": "A", "body": "a"}
        });
        let keys: Vec<_> = normalize(value).into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["zebra", "apple"]);
    }

    #[test]
    fn array_keys_are_stringified_indices() {
        let records = normalize(json!([{"body": "a"}, {"body": "b"}]));
        let keys: Vec<_> = records.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["0", "1"]);
    }

    #[test]
    fn scalar_yields_no_records() {
        assert!(normalize(json!("just a string")).is_empty());
        assert!(normalize(json!(42)).is_empty());
        assert!(normalize(json!(null)).is_empty());
    }

    #[test]
    fn non_object_entries_pass_through() {
        let records = normalize(json!({"good": {"body": "x"}, "bad": 3}));
        assert_eq!(records.len(), 2);
        assert_eq!(records[1], ("bad".to_string(), json!(3)));
    }
}
