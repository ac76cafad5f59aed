//! DNS node configuration structures.
//!
//! Typed per-operation parameter structs, validated once at the node
//! boundary from the host-resolved parameter map.

use serde::Deserialize;

/// Object kinds the DNS node manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Resource {
    Zone,
    Record,
}

/// Actions available on a DNS resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    Create,
    Delete,
    Get,
    GetMany,
    Update,
}

/// The two-level selector branching the request builder.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selector {
    pub resource: Resource,
    pub operation: Operation,
}

/// Parameters for fetching a single zone.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneGet {
    pub zone_id: String,
    /// Optional record-name suffix filter.
    #[serde(default, deserialize_with = "crate::serde::empty_as_none")]
    pub suffix: Option<String>,
    #[serde(default, deserialize_with = "crate::serde::empty_as_none")]
    pub record_name: Option<String>,
    #[serde(default, deserialize_with = "crate::serde::empty_as_none")]
    pub record_type: Option<String>,
}

/// Parameters for creating a zone.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneCreate {
    pub name: String,
    #[serde(rename = "type", default = "default_zone_type")]
    pub zone_type: String,
}

fn default_zone_type() -> String {
    "NATIVE".to_string()
}

/// Parameters addressing one record inside a zone.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordRef {
    pub zone_id: String,
    pub record_id: String,
}

/// Record fields shared by create and update.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordFields {
    pub zone_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub content: String,
    #[serde(default = "default_ttl")]
    pub ttl: u64,
    /// Priority; only meaningful for MX and SRV records.
    #[serde(default)]
    pub prio: Option<u64>,
    #[serde(default)]
    pub disabled: bool,
}

fn default_ttl() -> u64 {
    3600
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_selector_from_params() {
        let selector: Selector =
            serde_json::from_value(json!({"resource": "zone", "operation": "getMany"})).unwrap();
        assert_eq!(selector.resource, Resource::Zone);
        assert_eq!(selector.operation, Operation::GetMany);
    }

    #[test]
    fn test_zone_create_default_type() {
        let config: ZoneCreate = serde_json::from_value(json!({"name": "example.com"})).unwrap();
        assert_eq!(config.zone_type, "NATIVE");
    }

    #[test]
    fn test_zone_create_explicit_type() {
        let config: ZoneCreate =
            serde_json::from_value(json!({"name": "example.com", "type": "SLAVE"})).unwrap();
        assert_eq!(config.zone_type, "SLAVE");
    }

    #[test]
    fn test_zone_get_empty_filters_dropped() {
        let config: ZoneGet =
            serde_json::from_value(json!({"zoneId": "zone-1", "suffix": "", "recordType": "A"}))
                .unwrap();
        assert_eq!(config.suffix, None);
        assert_eq!(config.record_type, Some("A".to_string()));
    }

    #[test]
    fn test_record_fields_defaults() {
        let config: RecordFields = serde_json::from_value(json!({
            "zoneId": "zone-1",
            "name": "www.example.com",
            "type": "A",
            "content": "192.0.2.1"
        }))
        .unwrap();
        assert_eq!(config.ttl, 3600);
        assert_eq!(config.prio, None);
        assert!(!config.disabled);
    }
}
