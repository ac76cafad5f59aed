//! Monitoring node configuration structures.

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Resource {
    Pipeline,
}

/// Actions available on a monitoring pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    Create,
    Delete,
    Get,
    GetMany,
    Update,
    RegenerateKey,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selector {
    pub resource: Resource,
    pub operation: Operation,
}

/// Parameters for creating or renaming a pipeline.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineFields {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_regenerate_key_operation_name() {
        let selector: Selector = serde_json::from_value(json!({
            "resource": "pipeline",
            "operation": "regenerateKey"
        }))
        .unwrap();
        assert_eq!(selector.operation, Operation::RegenerateKey);
    }
}
