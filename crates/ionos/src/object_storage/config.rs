//! Object-storage management node configuration structures.

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Resource {
    Accesskey,
    Region,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    Create,
    Delete,
    Get,
    GetMany,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selector {
    pub resource: Resource,
    pub operation: Operation,
}

/// Parameters for provisioning an access key.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccesskeyCreate {
    #[serde(default, deserialize_with = "crate::serde::empty_as_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accesskey_description_optional() {
        let config: AccesskeyCreate = serde_json::from_value(json!({"description": ""})).unwrap();
        assert_eq!(config.description, None);
    }
}
