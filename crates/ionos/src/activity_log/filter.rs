//! Client-side filtering of activity log entries.
//!
//! The provider returns full log documents; the filters here narrow them
//! after the single fetch. All present filters must match (pure AND), so
//! the order they are applied in never changes the result. An entry whose
//! document lacks a filtered path simply does not match.

use super::config::LogFilters;
use serde_json::Value;

/// True when the entry satisfies every present filter.
pub fn entry_matches(entry: &Value, filters: &LogFilters) -> bool {
    let source = &entry["_source"];
    if let Some(action) = &filters.action {
        if !resource_field_matches(source, "action", action) {
            return false;
        }
    }
    if let Some(user) = &filters.user {
        if source["principal"]["identity"]["username"].as_str() != Some(user) {
            return false;
        }
    }
    if let Some(resource_type) = &filters.resource_type {
        if !resource_field_matches(source, "type", resource_type) {
            return false;
        }
    }
    if let Some(event_type) = &filters.event_type {
        if source["event"]["type"].as_str() != Some(event_type) {
            return false;
        }
    }
    true
}

/// True when any entry under `_source.event.resources[]` carries the
/// expected value in `field`.
fn resource_field_matches(source: &Value, field: &str, expected: &str) -> bool {
    source["event"]["resources"]
        .as_array()
        .map(|resources| {
            resources
                .iter()
                .any(|resource| resource[field].as_str() == Some(expected))
        })
        .unwrap_or(false)
}

/// Keeps only the entries matching every present filter, in input order.
pub fn apply(entries: Vec<Value>, filters: &LogFilters) -> Vec<Value> {
    if filters.is_empty() {
        return entries;
    }
    entries
        .into_iter()
        .filter(|entry| entry_matches(entry, filters))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(source: Value) -> Value {
        json!({"_id": "log-1", "_source": source})
    }

    fn filters(value: Value) -> LogFilters {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_action_matches_any_resource() {
        let e = entry(json!({
            "event": {"resources": [
                {"action": "DELETE", "type": "server"},
                {"action": "CREATE", "type": "volume"}
            ]}
        }));
        assert!(entry_matches(&e, &filters(json!({"action": "CREATE"}))));
        assert!(!entry_matches(&e, &filters(json!({"action": "UPDATE"}))));
    }

    #[test]
    fn test_user_filter() {
        let e = entry(json!({
            "principal": {"identity": {"username": "alice@example.com"}}
        }));
        assert!(entry_matches(&e, &filters(json!({"user": "alice@example.com"}))));
        assert!(!entry_matches(&e, &filters(json!({"user": "bob@example.com"}))));
    }

    #[test]
    fn test_all_filters_are_anded() {
        let e = entry(json!({
            "event": {
                "type": "API_CALL",
                "resources": [{"action": "CREATE", "type": "server"}]
            },
            "principal": {"identity": {"username": "alice@example.com"}}
        }));
        let all = filters(json!({
            "action": "CREATE",
            "user": "alice@example.com",
            "resourceType": "server",
            "eventType": "API_CALL"
        }));
        assert!(entry_matches(&e, &all));
        let one_off = filters(json!({
            "action": "CREATE",
            "user": "alice@example.com",
            "resourceType": "volume",
            "eventType": "API_CALL"
        }));
        assert!(!entry_matches(&e, &one_off));
    }

    #[test]
    fn test_missing_paths_never_match() {
        let e = entry(json!({}));
        assert!(!entry_matches(&e, &filters(json!({"action": "CREATE"}))));
        assert!(!entry_matches(&e, &filters(json!({"user": "alice@example.com"}))));
        assert!(!entry_matches(&e, &filters(json!({"eventType": "API_CALL"}))));
    }

    #[test]
    fn test_malformed_resources_never_match() {
        let e = entry(json!({"event": {"resources": "not-an-array"}}));
        assert!(!entry_matches(&e, &filters(json!({"resourceType": "server"}))));
    }

    #[test]
    fn test_apply_keeps_order() {
        let entries = vec![
            entry(json!({"event": {"type": "A"}})),
            entry(json!({"event": {"type": "B"}})),
            entry(json!({"event": {"type": "A"}})),
        ];
        let kept = apply(entries, &filters(json!({"eventType": "A"})));
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn test_apply_without_filters_passes_through() {
        let entries = vec![entry(json!({}))];
        let kept = apply(entries.clone(), &LogFilters::default());
        assert_eq!(kept, entries);
    }
}
