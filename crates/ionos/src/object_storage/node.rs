//! Object-storage management node: access keys and regions.

use super::config::{AccesskeyCreate, Operation, Resource, Selector};
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

/// Object-storage management API origin used by this node.
pub const BASE_URL: &str = "https://s3.ionos.com";

/// Manage object-storage access keys and inspect regions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectStorageNode;

impl ObjectStorageNode {
    pub fn new() -> Self {
        ObjectStorageNode
    }
}

pub fn descriptor() -> NodeDescriptor {
    NodeDescriptor::new(
        "objectStorage",
        "IONOS Object Storage",
        "Manage object-storage access keys and regions",
        CredentialKind::CloudToken.name(),
    )
    .property(
        Property::options("resource", "Resource")
            .choice("Access Key", "accesskey")
            .choice("Region", "region")
            .default_value(json!("accesskey")),
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
        Property::string("accesskeyId", "Access Key ID")
            .required()
            .show_when("resource", &["accesskey"])
            .show_when("operation", &["get", "delete"]),
    )
    .property(
        Property::string("accesskeyFilter", "Access Key Filter")
            .description("Only keys whose ID matches")
            .show_when("resource", &["accesskey"])
            .show_when("operation", &["getMany"]),
    )
    .property(
        Property::string("description", "Description")
            .show_when("resource", &["accesskey"])
            .show_when("operation", &["create"]),
    )
    .property(
        Property::string("region", "Region")
            .required()
            .show_when("resource", &["region"])
            .show_when("operation", &["get"]),
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
        (Resource::Accesskey, Operation::GetMany) => {
            Ok(RequestDescriptor::get(format!("{BASE_URL}/accesskeys"))
                .query_opt("filter.accesskeyId", params.opt_string("accesskeyFilter"))
                .query_opt("limit", params.page_limit()))
        }
        (Resource::Accesskey, Operation::Get) => {
            let id = params.string("accesskeyId")?;
            Ok(RequestDescriptor::get(format!("{BASE_URL}/accesskeys/{id}")))
        }
        (Resource::Accesskey, Operation::Create) => {
            let fields: AccesskeyCreate = params.typed()?;
            let mut properties = json!({});
            if let Some(description) = &fields.description {
                properties["description"] = json!(description);
            }
            Ok(RequestDescriptor::post(format!("{BASE_URL}/accesskeys"))
                .body(json!({"properties": properties})))
        }
        (Resource::Accesskey, Operation::Delete) => {
            let id = params.string("accesskeyId")?;
            Ok(RequestDescriptor::delete(format!("{BASE_URL}/accesskeys/{id}")))
        }
        (Resource::Region, Operation::GetMany) => {
            Ok(RequestDescriptor::get(format!("{BASE_URL}/regions"))
                .query_opt("limit", params.page_limit()))
        }
        (Resource::Region, Operation::Get) => {
            let region = params.string("region")?;
            Ok(RequestDescriptor::get(format!("{BASE_URL}/regions/{region}")))
        }
        _ => Err(Error::UnsupportedOperation {
            resource: format!("{:?}", selector.resource),
            operation: format!("{:?}", selector.operation),
        }),
    }
}

fn shape(selector: &Selector, params: &ParameterMap, response: Value) -> Result<Vec<Value>, Error> {
    match (selector.resource, selector.operation) {
        (Resource::Accesskey, Operation::Delete) => {
            let id = params.string("accesskeyId")?;
            Ok(vec![success_record(Some(("accesskeyId", &id)))])
        }
        _ => Ok(unwrap_collection(response)),
    }
}

#[async_trait]
impl Node for ObjectStorageNode {
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
        debug!(method = request.method.as_str(), url = %request.url, "object storage request");
        let response = transport.execute(credential, request).await?;
        shape(&selector, &item.parameters, response)
    }
}
