//! Response shaping.
//!
//! Providers wrap collections in `{items: [...]}` or nested
//! `{hits: {hits: [...]}}` envelopes; the shaper normalizes these to a flat
//! ordered sequence of records. Void operations (delete) get a synthetic
//! `{success: true}` record in place of an empty body.

use serde_json::{json, Value};

/// Unwraps a provider collection envelope into an ordered record sequence.
///
/// Recognized envelopes: an `items` array, a nested `hits.hits` array, or a
/// bare top-level array. Anything else passes through as a single-element
/// sequence.
pub fn unwrap_collection(value: Value) -> Vec<Value> {
    match value {
        Value::Object(map) => {
            if let Some(items) = map.get("items").and_then(Value::as_array) {
                return items.clone();
            }
            if let Some(hits) = map
                .get("hits")
                .and_then(|h| h.get("hits"))
                .and_then(Value::as_array)
            {
                return hits.clone();
            }
            vec![Value::Object(map)]
        }
        Value::Array(items) => items,
        other => vec![other],
    }
}

/// Synthesizes the success record emitted by void operations, optionally
/// echoing back the identifier the operation acted on.
pub fn success_record(id_field: Option<(&str, &str)>) -> Value {
    match id_field {
        Some((name, value)) => json!({"success": true, name: value}),
        None => json!({"success": true}),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unwrap_items_envelope() {
        let body = json!({"id": "datacenters", "items": [{"id": "a"}, {"id": "b"}]});
        let records = unwrap_collection(body);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], json!({"id": "a"}));
    }

    #[test]
    fn test_unwrap_empty_items() {
        let records = unwrap_collection(json!({"items": []}));
        assert!(records.is_empty());
    }

    #[test]
    fn test_unwrap_hits_envelope() {
        let body = json!({"hits": {"total": 2, "hits": [{"_source": {}}, {"_source": {}}]}});
        let records = unwrap_collection(body);
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_unwrap_plain_object_single_record() {
        let body = json!({"id": "dc-1", "properties": {"name": "main"}});
        let records = unwrap_collection(body.clone());
        assert_eq!(records, vec![body]);
    }

    #[test]
    fn test_unwrap_bare_array() {
        let records = unwrap_collection(json!([{"a": 1}, {"a": 2}, {"a": 3}]));
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn test_unwrap_non_items_key_untouched() {
        // `items` must be an array to count as an envelope.
        let body = json!({"items": "not-a-list"});
        let records = unwrap_collection(body.clone());
        assert_eq!(records, vec![body]);
    }

    #[test]
    fn test_success_record_plain() {
        assert_eq!(success_record(None), json!({"success": true}));
    }

    #[test]
    fn test_success_record_with_id() {
        assert_eq!(
            success_record(Some(("zoneId", "zone-1"))),
            json!({"success": true, "zoneId": "zone-1"})
        );
    }
}
