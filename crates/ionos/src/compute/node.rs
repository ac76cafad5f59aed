//! Compute node: datacenters, servers, and request status on the cloud API.

use super::config::{
    DatacenterCreate, DatacenterUpdate, Operation, RequestFilters, Resource, Selector,
    ServerCreate, ServerRef,
};
use crate::credentials::CredentialKind;
use crate::serde::provider_datetime;
use async_trait::async_trait;
use flowgrid_core::credential::CredentialRecord;
use flowgrid_core::descriptor::{NodeDescriptor, Property};
use flowgrid_core::item::Item;
use flowgrid_core::node::{Error, Node};
use flowgrid_core::parameter::ParameterMap;
use flowgrid_core::request::RequestDescriptor;
use flowgrid_core::response::{success_record, unwrap_collection};
use flowgrid_core::transport::Transport;
use serde_json::{json, Map, Value};
use tracing::debug;

/// Cloud API origin used by this node.
pub const BASE_URL: &str = "https://api.ionos.com/cloudapi/v6";

/// Default `depth` for cloud API reads.
pub const DEFAULT_DEPTH: u64 = 1;

/// Manage datacenters and servers.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComputeNode;

impl ComputeNode {
    pub fn new() -> Self {
        ComputeNode
    }
}

/// Builds the compute node's form schema.
pub fn descriptor() -> NodeDescriptor {
    NodeDescriptor::new(
        "compute",
        "IONOS Compute",
        "Manage datacenters, servers, and request status",
        CredentialKind::CloudToken.name(),
    )
    .property(
        Property::options("resource", "Resource")
            .choice("Datacenter", "datacenter")
            .choice("Server", "server")
            .choice("Request", "request")
            .default_value(json!("datacenter")),
    )
    .property(
        Property::options("operation", "Operation")
            .choice("Create", "create")
            .choice("Delete", "delete")
            .choice("Get", "get")
            .choice("Get Many", "getMany")
            .choice("Update", "update")
            .default_value(json!("getMany"))
            .show_when("resource", &["datacenter"]),
    )
    .property(
        Property::options("operation", "Operation")
            .choice("Create", "create")
            .choice("Delete", "delete")
            .choice("Get", "get")
            .choice("Get Many", "getMany")
            .choice("Start", "start")
            .choice("Stop", "stop")
            .choice("Reboot", "reboot")
            .default_value(json!("getMany"))
            .show_when("resource", &["server"]),
    )
    .property(
        Property::options("operation", "Operation")
            .choice("Get Many", "getMany")
            .default_value(json!("getMany"))
            .show_when("resource", &["request"]),
    )
    .property(
        Property::string("datacenterId", "Datacenter ID")
            .required()
            .show_when("resource", &["datacenter"])
            .show_when("operation", &["get", "update", "delete"]),
    )
    .property(
        Property::string("datacenterId", "Datacenter ID")
            .required()
            .show_when("resource", &["server"]),
    )
    .property(
        Property::string("serverId", "Server ID")
            .required()
            .show_when("resource", &["server"])
            .show_when("operation", &["get", "delete", "start", "stop", "reboot"]),
    )
    .property(
        Property::string("name", "Name")
            .required()
            .show_when("operation", &["create"]),
    )
    .property(
        Property::string("location", "Location")
            .required()
            .description("Provider location identifier, e.g. de/fra")
            .show_when("resource", &["datacenter"])
            .show_when("operation", &["create"]),
    )
    .property(
        Property::string("description", "Description")
            .show_when("resource", &["datacenter"])
            .show_when("operation", &["create", "update"]),
    )
    .property(
        Property::number("cores", "Cores")
            .required()
            .range(1, 64)
            .show_when("resource", &["server"])
            .show_when("operation", &["create"]),
    )
    .property(
        Property::number("ram", "RAM (MB)")
            .required()
            .range(256, 245760)
            .description("Amount of memory in MB, multiple of 256")
            .show_when("resource", &["server"])
            .show_when("operation", &["create"]),
    )
    .property(
        Property::string("status", "Status Filter")
            .description("Only requests with this status, e.g. QUEUED, DONE, FAILED")
            .show_when("resource", &["request"]),
    )
    .property(
        Property::string("createdAfter", "Created After")
            .show_when("resource", &["request"]),
    )
    .property(
        Property::string("createdBefore", "Created Before")
            .show_when("resource", &["request"]),
    )
    .property(
        Property::number("depth", "Depth")
            .default_value(json!(1))
            .range(0, 10)
            .description("Nesting depth of the returned objects")
            .show_when("operation", &["get", "getMany"]),
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

fn properties_body(fields: &[(&str, Option<Value>)]) -> Value {
    let mut properties = Map::new();
    for (name, value) in fields {
        if let Some(value) = value {
            properties.insert((*name).to_string(), value.clone());
        }
    }
    json!({ "properties": Value::Object(properties) })
}

fn list_request(url: String, params: &ParameterMap) -> RequestDescriptor {
    RequestDescriptor::get(url)
        .query("depth", params.u64_or("depth", DEFAULT_DEPTH))
        .query_opt("limit", params.page_limit())
}

/// Maps the selected operation to its cloud API request.
pub fn build_request(selector: &Selector, params: &ParameterMap) -> Result<RequestDescriptor, Error> {
    match (selector.resource, selector.operation) {
        (Resource::Datacenter, Operation::GetMany) => {
            Ok(list_request(format!("{BASE_URL}/datacenters"), params))
        }
        (Resource::Datacenter, Operation::Get) => {
            let id = params.string("datacenterId")?;
            Ok(RequestDescriptor::get(format!("{BASE_URL}/datacenters/{id}"))
                .query("depth", params.u64_or("depth", DEFAULT_DEPTH)))
        }
        (Resource::Datacenter, Operation::Create) => {
            let config: DatacenterCreate = params.typed()?;
            Ok(RequestDescriptor::post(format!("{BASE_URL}/datacenters")).body(properties_body(&[
                ("name", Some(json!(config.name))),
                ("location", Some(json!(config.location))),
                ("description", config.description.map(Value::String)),
            ])))
        }
        (Resource::Datacenter, Operation::Update) => {
            let config: DatacenterUpdate = params.typed()?;
            Ok(RequestDescriptor::patch(format!(
                "{BASE_URL}/datacenters/{}",
                config.datacenter_id
            ))
            .body(properties_body(&[
                ("name", config.name.map(Value::String)),
                ("description", config.description.map(Value::String)),
            ])))
        }
        (Resource::Datacenter, Operation::Delete) => {
            let id = params.string("datacenterId")?;
            Ok(RequestDescriptor::delete(format!("{BASE_URL}/datacenters/{id}")))
        }
        (Resource::Server, Operation::GetMany) => {
            let datacenter_id = params.string("datacenterId")?;
            Ok(list_request(
                format!("{BASE_URL}/datacenters/{datacenter_id}/servers"),
                params,
            ))
        }
        (Resource::Server, Operation::Get) => {
            let config: ServerRef = params.typed()?;
            Ok(RequestDescriptor::get(format!(
                "{BASE_URL}/datacenters/{}/servers/{}",
                config.datacenter_id, config.server_id
            ))
            .query("depth", params.u64_or("depth", DEFAULT_DEPTH)))
        }
        (Resource::Server, Operation::Create) => {
            let config: ServerCreate = params.typed()?;
            Ok(RequestDescriptor::post(format!(
                "{BASE_URL}/datacenters/{}/servers",
                config.datacenter_id
            ))
            .body(properties_body(&[
                ("name", Some(json!(config.name))),
                ("cores", Some(json!(config.cores))),
                ("ram", Some(json!(config.ram))),
            ])))
        }
        (Resource::Server, Operation::Delete) => {
            let config: ServerRef = params.typed()?;
            Ok(RequestDescriptor::delete(format!(
                "{BASE_URL}/datacenters/{}/servers/{}",
                config.datacenter_id, config.server_id
            )))
        }
        (Resource::Server, Operation::Start | Operation::Stop | Operation::Reboot) => {
            let config: ServerRef = params.typed()?;
            let action = match selector.operation {
                Operation::Start => "start",
                Operation::Stop => "stop",
                _ => "reboot",
            };
            Ok(RequestDescriptor::post(format!(
                "{BASE_URL}/datacenters/{}/servers/{}/{action}",
                config.datacenter_id, config.server_id
            )))
        }
        (Resource::Request, Operation::GetMany) => {
            let filters: RequestFilters = params.typed()?;
            Ok(list_request(format!("{BASE_URL}/requests"), params)
                .query_opt("filter.status", filters.status)
                .query_opt(
                    "filter.createdAfter",
                    filters.created_after.as_deref().map(provider_datetime),
                )
                .query_opt(
                    "filter.createdBefore",
                    filters.created_before.as_deref().map(provider_datetime),
                ))
        }
        (resource, operation) => Err(Error::UnsupportedOperation {
            resource: format!("{resource:?}"),
            operation: format!("{operation:?}"),
        }),
    }
}

/// Shapes the cloud API response into output records.
fn shape(selector: &Selector, params: &ParameterMap, response: Value) -> Result<Vec<Value>, Error> {
    match (selector.resource, selector.operation) {
        (Resource::Datacenter, Operation::Delete) => {
            let id = params.string("datacenterId")?;
            Ok(vec![success_record(Some(("datacenterId", &id)))])
        }
        (Resource::Server, Operation::Delete | Operation::Start | Operation::Stop | Operation::Reboot) => {
            let id = params.string("serverId")?;
            Ok(vec![success_record(Some(("serverId", &id)))])
        }
        _ => Ok(unwrap_collection(response)),
    }
}

#[async_trait]
impl Node for ComputeNode {
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
        debug!(method = request.method.as_str(), url = %request.url, "Compute request");
        let response = transport.execute(credential, request).await?;
        shape(&selector, &item.parameters, response)
    }
}
