//! NFS node configuration structures.

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Resource {
    Cluster,
    Share,
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

/// Parameters for creating a storage cluster.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterCreate {
    pub name: String,
    #[serde(default, deserialize_with = "crate::serde::empty_as_none")]
    pub location: Option<String>,
}

/// Parameters for exporting a share from a cluster.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareCreate {
    pub cluster_id: String,
    pub name: String,
    #[serde(default = "default_quota")]
    pub quota: u64,
    #[serde(default)]
    pub gid: u64,
    #[serde(default)]
    pub uid: u64,
}

fn default_quota() -> u64 {
    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_share_create_defaults() {
        let config: ShareCreate = serde_json::from_value(json!({
            "clusterId": "c-1",
            "name": "exports"
        }))
        .unwrap();
        assert_eq!(config.quota, 0);
        assert_eq!(config.gid, 0);
        assert_eq!(config.uid, 0);
    }

    #[test]
    fn test_cluster_create_location_optional() {
        let config: ClusterCreate =
            serde_json::from_value(json!({"name": "shared", "location": ""})).unwrap();
        assert_eq!(config.location, None);
    }
}
