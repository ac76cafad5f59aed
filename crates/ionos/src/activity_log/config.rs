//! Activity log node configuration structures.

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    GetMany,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selector {
    pub operation: Operation,
}

/// Query window sent to the provider.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogWindow {
    #[serde(default, deserialize_with = "crate::serde::empty_as_none")]
    pub from: Option<String>,
    #[serde(default, deserialize_with = "crate::serde::empty_as_none")]
    pub to: Option<String>,
    #[serde(default, deserialize_with = "crate::serde::empty_as_none")]
    pub date_format: Option<String>,
}

/// Client-side filters applied after the fetch. All present filters must
/// match for an entry to survive.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogFilters {
    #[serde(default, deserialize_with = "crate::serde::empty_as_none")]
    pub action: Option<String>,
    #[serde(default, deserialize_with = "crate::serde::empty_as_none")]
    pub user: Option<String>,
    #[serde(default, deserialize_with = "crate::serde::empty_as_none")]
    pub resource_type: Option<String>,
    #[serde(default, deserialize_with = "crate::serde::empty_as_none")]
    pub event_type: Option<String>,
}

impl LogFilters {
    pub fn is_empty(&self) -> bool {
        self.action.is_none()
            && self.user.is_none()
            && self.resource_type.is_none()
            && self.event_type.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_filters_empty_strings_dropped() {
        let filters: LogFilters = serde_json::from_value(json!({
            "action": "CREATE",
            "user": "",
            "resourceType": "",
            "eventType": ""
        }))
        .unwrap();
        assert_eq!(filters.action, Some("CREATE".to_string()));
        assert!(!filters.is_empty());
    }

    #[test]
    fn test_filters_default_empty() {
        let filters: LogFilters = serde_json::from_value(json!({})).unwrap();
        assert!(filters.is_empty());
    }
}
