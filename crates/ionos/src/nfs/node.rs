//! NFS node: storage clusters and exported shares.

use super::config::{ClusterCreate, Operation, Resource, Selector, ShareCreate};
use crate::credentials::CredentialKind;
use async_trait::async_trait;
use flowgrid_core::credential::CredentialRecord;
use flowgrid_core::descriptor::{NodeDescriptor, Property};
use flowgrid_core::item::Item;
use flowgrid_core::node::{Error, Node};
use flowgrid_core::parameter::ParameterMap;
use flowgrid_core::request::RequestDescriptor;
use flowgrid_core::response::{success_record, unwrap_collection};
use flowgrid_core::transport::Transport;
use serde_json::{json, Value};
use tracing::debug;

/// NFS API origin used by this node.
pub const BASE_URL: &str = "https://nfs.de-fra.ionos.com";

/// Manage network file storage clusters and shares.
#[derive(Debug, Clone, Copy, Default)]
pub struct NfsNode;

impl NfsNode {
    pub fn new() -> Self {
        NfsNode
    }
}

pub fn descriptor() -> NodeDescriptor {
    NodeDescriptor::new(
        "nfs",
        "IONOS Network File Storage",
        "Manage NFS clusters and shares",
        CredentialKind::CloudToken.name(),
    )
    .property(
        Property::options("resource", "Resource")
            .choice("Cluster", "cluster")
            .choice("Share", "share")
            .default_value(json!("cluster")),
    )
    .property(
        Property::options("operation", "Operation")
            .choice("Create", "create")
            .choice("Delete", "delete")
            .choice("Get", "get")
            .choice("Get Many", "getMany")
            .default_value(json!("getMany")),
    )
    .property(
        Property::string("clusterId", "Cluster ID")
            .required()
            .show_when("resource", &["cluster"])
            .show_when("operation", &["get", "delete"]),
    )
    .property(
        Property::string("clusterId", "Cluster ID")
            .required()
            .show_when("resource", &["share"]),
    )
    .property(
        Property::string("shareId", "Share ID")
            .required()
            .show_when("resource", &["share"])
            .show_when("operation", &["get", "delete"]),
    )
    .property(
        Property::string("name", "Name")
            .required()
            .show_when("operation", &["create"]),
    )
    .property(
        Property::string("location", "Location")
            .show_when("resource", &["cluster"])
            .show_when("operation", &["create"]),
    )
    .property(
        Property::number("quota", "Quota")
            .default_value(json!(0))
            .description("Share quota in MiB, 0 for unlimited")
            .show_when("resource", &["share"])
            .show_when("operation", &["create"]),
    )
    .property(
        Property::number("gid", "Group ID")
            .default_value(json!(0))
            .show_when("resource", &["share"])
            .show_when("operation", &["create"]),
    )
    .property(
        Property::number("uid", "User ID")
            .default_value(json!(0))
            .show_when("resource", &["share"])
            .show_when("operation", &["create"]),
    )
    .property(
        Property::boolean("returnAll", "Return All")
            .default_value(json!(false))
            .show_when("operation", &["getMany"]),
    )
    .property(
        Property::number("limit", "Limit")
            .default_value(json!(50))
            .range(1, 1000)
            .show_when("operation", &["getMany"])
            .show_when("returnAll", &["false"]),
    )
}

pub fn build_request(selector: &Selector, params: &ParameterMap) -> Result<RequestDescriptor, Error> {
    match (selector.resource, selector.operation) {
        (Resource::Cluster, Operation::GetMany) => {
            Ok(RequestDescriptor::get(format!("{BASE_URL}/clusters"))
                .query_opt("limit", params.page_limit()))
        }
        (Resource::Cluster, Operation::Get) => {
            let id = params.string("clusterId")?;
            Ok(RequestDescriptor::get(format!("{BASE_URL}/clusters/{id}")))
        }
        (Resource::Cluster, Operation::Create) => {
            let fields: ClusterCreate = params.typed()?;
            let mut properties = json!({"name": fields.name});
            if let Some(location) = &fields.location {
                properties["location"] = json!(location);
            }
            Ok(RequestDescriptor::post(format!("{BASE_URL}/clusters"))
                .body(json!({"properties": properties})))
        }
        (Resource::Cluster, Operation::Delete) => {
            let id = params.string("clusterId")?;
            Ok(RequestDescriptor::delete(format!("{BASE_URL}/clusters/{id}")))
        }
        (Resource::Share, Operation::GetMany) => {
            let cluster_id = params.string("clusterId")?;
            Ok(RequestDescriptor::get(format!(
                "{BASE_URL}/clusters/{cluster_id}/shares"
            ))
            .query_opt("limit", params.page_limit()))
        }
        (Resource::Share, Operation::Get) => {
            let cluster_id = params.string("clusterId")?;
            let id = params.string("shareId")?;
            Ok(RequestDescriptor::get(format!(
                "{BASE_URL}/clusters/{cluster_id}/shares/{id}"
            )))
        }
        (Resource::Share, Operation::Create) => {
            let fields: ShareCreate = params.typed()?;
            Ok(RequestDescriptor::post(format!(
                "{BASE_URL}/clusters/{}/shares",
                fields.cluster_id
            ))
            .body(json!({
                "properties": {
                    "name": fields.name,
                    "quota": fields.quota,
                    "gid": fields.gid,
                    "uid": fields.uid,
                }
            })))
        }
        (Resource::Share, Operation::Delete) => {
            let cluster_id = params.string("clusterId")?;
            let id = params.string("shareId")?;
            Ok(RequestDescriptor::delete(format!(
                "{BASE_URL}/clusters/{cluster_id}/shares/{id}"
            )))
        }
    }
}

fn shape(selector: &Selector, params: &ParameterMap, response: Value) -> Result<Vec<Value>, Error> {
    match (selector.resource, selector.operation) {
        (Resource::Cluster, Operation::Delete) => {
            let id = params.string("clusterId")?;
            Ok(vec![success_record(Some(("clusterId", &id)))])
        }
        (Resource::Share, Operation::Delete) => {
            let id = params.string("shareId")?;
            Ok(vec![success_record(Some(("shareId", &id)))])
        }
        _ => Ok(unwrap_collection(response)),
    }
}

#[async_trait]
impl Node for NfsNode {
    fn descriptor(&self) -> NodeDescriptor {
        descriptor()
    }

    async fn execute(
        &self,
        transport: &dyn Transport,
        credential: &CredentialRecord,
        item: &Item,
    ) -> Result<Vec<Value>, Error> {
        let selector: Selector = item.parameters.typed()?;
        let request = build_request(&selector, &item.parameters)?;
        debug!(method = request.method.as_str(), url = %request.url, "NFS request");
        let response = transport.execute(credential, request).await?;
        shape(&selector, &item.parameters, response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowgrid_core::request::Method;

    fn params(value: Value) -> ParameterMap {
        ParameterMap::from_value(value)
    }

    fn selector(resource: &str, operation: &str) -> Selector {
        serde_json::from_value(json!({"resource": resource, "operation": operation})).unwrap()
    }

    #[test]
    fn test_cluster_create_with_location() {
        let p = params(json!({"name": "shared", "location": "de/fra"}));
        let request = build_request(&selector("cluster", "create"), &p).unwrap();
        assert_eq!(request.method, Method::POST);
        assert_eq!(
            request.body.unwrap(),
            json!({"properties": {"name": "shared", "location": "de/fra"}})
        );
    }

    #[test]
    fn test_cluster_create_without_location() {
        let p = params(json!({"name": "shared"}));
        let request = build_request(&selector("cluster", "create"), &p).unwrap();
        let body = request.body.unwrap();
        assert!(body["properties"].get("location").is_none());
    }

    #[test]
    fn test_share_create_body() {
        let p = params(json!({
            "clusterId": "c-1",
            "name": "exports",
            "quota": 1024,
            "gid": 512,
            "uid": 512
        }));
        let request = build_request(&selector("share", "create"), &p).unwrap();
        assert_eq!(request.url, "https://nfs.de-fra.ionos.com/clusters/c-1/shares");
        let body = request.body.unwrap();
        assert_eq!(body["properties"]["quota"], 1024);
        assert_eq!(body["properties"]["gid"], 512);
    }

    #[test]
    fn test_share_delete_shapes_success() {
        let p = params(json!({"clusterId": "c-1", "shareId": "s-1"}));
        let records = shape(&selector("share", "delete"), &p, Value::Null).unwrap();
        assert_eq!(records, vec![json!({"success": true, "shareId": "s-1"})]);
    }

    #[test]
    fn test_share_list_requires_cluster() {
        let p = params(json!({}));
        let err = build_request(&selector("share", "getMany"), &p).unwrap_err();
        assert!(err.to_string().contains("clusterId"));
    }
}
