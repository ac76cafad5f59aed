//! DNS node: zones and records on the legacy gateway API.

use super::config::{Operation, RecordFields, RecordRef, Resource, Selector, ZoneCreate, ZoneGet};
use crate::credentials::{CredentialKind, GATEWAY_ORIGIN};
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

/// DNS API base below the gateway origin.
pub const BASE_URL: &str = "https://api.hosting.ionos.com/dns/v1";

/// Manage DNS zones and records.
#[derive(Debug, Clone, Copy, Default)]
pub struct DnsNode;

impl DnsNode {
    pub fn new() -> Self {
        DnsNode
    }
}

/// Builds the DNS node's form schema.
pub fn descriptor() -> NodeDescriptor {
    NodeDescriptor::new(
        "dns",
        "IONOS DNS",
        "Manage DNS zones and records",
        CredentialKind::GatewayApiKey.name(),
    )
    .property(
        Property::options("resource", "Resource")
            .choice("Zone", "zone")
            .choice("Record", "record")
            .default_value(json!("zone")),
    )
    .property(
        Property::options("operation", "Operation")
            .choice("Create", "create")
            .choice("Delete", "delete")
            .choice("Get", "get")
            .choice("Get Many", "getMany")
            .default_value(json!("getMany"))
            .show_when("resource", &["zone"]),
    )
    .property(
        Property::options("operation", "Operation")
            .choice("Create", "create")
            .choice("Delete", "delete")
            .choice("Get", "get")
            .choice("Update", "update")
            .default_value(json!("get"))
            .show_when("resource", &["record"]),
    )
    .property(
        Property::string("zoneId", "Zone ID")
            .required()
            .description("Identifier of the zone")
            .show_when("resource", &["zone"])
            .show_when("operation", &["get", "delete"]),
    )
    .property(
        Property::string("zoneId", "Zone ID")
            .required()
            .description("Zone the record belongs to")
            .show_when("resource", &["record"]),
    )
    .property(
        Property::string("name", "Name")
            .required()
            .description("Zone or record name, e.g. example.com")
            .show_when("operation", &["create"]),
    )
    .property(
        Property::options("type", "Type")
            .choice("Native", "NATIVE")
            .choice("Slave", "SLAVE")
            .default_value(json!("NATIVE"))
            .show_when("resource", &["zone"])
            .show_when("operation", &["create"]),
    )
    .property(
        Property::string("suffix", "Suffix")
            .description("Filter returned records by name suffix")
            .show_when("resource", &["zone"])
            .show_when("operation", &["get"]),
    )
    .property(
        Property::string("recordName", "Record Name")
            .show_when("resource", &["zone"])
            .show_when("operation", &["get"]),
    )
    .property(
        Property::string("recordType", "Record Type")
            .show_when("resource", &["zone"])
            .show_when("operation", &["get"]),
    )
    .property(
        Property::string("recordId", "Record ID")
            .required()
            .show_when("resource", &["record"])
            .show_when("operation", &["get", "update", "delete"]),
    )
    .property(
        Property::string("type", "Record Type")
            .description("DNS record type, e.g. A, AAAA, CNAME, MX")
            .show_when("resource", &["record"])
            .show_when("operation", &["create", "update"]),
    )
    .property(
        Property::string("content", "Content")
            .show_when("resource", &["record"])
            .show_when("operation", &["create", "update"]),
    )
    .property(
        Property::number("ttl", "TTL")
            .default_value(json!(3600))
            .range(60, 86400)
            .show_when("resource", &["record"])
            .show_when("operation", &["create", "update"]),
    )
    .property(
        Property::number("prio", "Priority")
            .description("Record priority, used by MX and SRV records")
            .show_when("resource", &["record"])
            .show_when("operation", &["create", "update"]),
    )
    .property(
        Property::boolean("disabled", "Disabled")
            .default_value(json!(false))
            .show_when("resource", &["record"])
            .show_when("operation", &["create", "update"]),
    )
}

fn record_body(fields: &RecordFields) -> Value {
    let mut record = json!({
        "name": fields.name,
        "type": fields.record_type,
        "content": fields.content,
        "ttl": fields.ttl,
        "disabled": fields.disabled,
    });
    if let Some(prio) = fields.prio {
        record["prio"] = json!(prio);
    }
    record
}

/// Maps the selected operation to its gateway request.
pub fn build_request(selector: &Selector, params: &ParameterMap) -> Result<RequestDescriptor, Error> {
    match (selector.resource, selector.operation) {
        (Resource::Zone, Operation::GetMany) => {
            Ok(RequestDescriptor::get(format!("{BASE_URL}/zones")))
        }
        (Resource::Zone, Operation::Get) => {
            let config: ZoneGet = params.typed()?;
            Ok(
                RequestDescriptor::get(format!("{BASE_URL}/zones/{}", config.zone_id))
                    .query_opt("suffix", config.suffix)
                    .query_opt("recordName", config.record_name)
                    .query_opt("recordType", config.record_type),
            )
        }
        (Resource::Zone, Operation::Create) => {
            let config: ZoneCreate = params.typed()?;
            Ok(RequestDescriptor::post(format!("{BASE_URL}/zones"))
                .body(json!({"name": config.name, "type": config.zone_type})))
        }
        (Resource::Zone, Operation::Delete) => {
            let zone_id = params.string("zoneId")?;
            Ok(RequestDescriptor::delete(format!("{BASE_URL}/zones/{zone_id}")))
        }
        (Resource::Record, Operation::Create) => {
            let config: RecordFields = params.typed()?;
            // The gateway accepts a batch; the node always sends one record.
            Ok(
                RequestDescriptor::post(format!("{BASE_URL}/zones/{}/records", config.zone_id))
                    .body(json!([record_body(&config)])),
            )
        }
        (Resource::Record, Operation::Get) => {
            let config: RecordRef = params.typed()?;
            Ok(RequestDescriptor::get(format!(
                "{BASE_URL}/zones/{}/records/{}",
                config.zone_id, config.record_id
            )))
        }
        (Resource::Record, Operation::Update) => {
            let fields: RecordFields = params.typed()?;
            let record_id = params.string("recordId")?;
            Ok(RequestDescriptor::put(format!(
                "{BASE_URL}/zones/{}/records/{}",
                fields.zone_id, record_id
            ))
            .body(record_body(&fields)))
        }
        (Resource::Record, Operation::Delete) => {
            let config: RecordRef = params.typed()?;
            Ok(RequestDescriptor::delete(format!(
                "{BASE_URL}/zones/{}/records/{}",
                config.zone_id, config.record_id
            )))
        }
        (resource, operation) => Err(Error::UnsupportedOperation {
            resource: format!("{resource:?}"),
            operation: format!("{operation:?}"),
        }),
    }
}

/// Shapes the gateway response into output records.
fn shape(selector: &Selector, params: &ParameterMap, response: Value) -> Result<Vec<Value>, Error> {
    match (selector.resource, selector.operation) {
        (Resource::Zone, Operation::Delete) => {
            let zone_id = params.string("zoneId")?;
            Ok(vec![success_record(Some(("zoneId", &zone_id)))])
        }
        (Resource::Record, Operation::Delete) => {
            let record_id = params.string("recordId")?;
            Ok(vec![success_record(Some(("recordId", &record_id)))])
        }
        _ => Ok(unwrap_collection(response)),
    }
}

#[async_trait]
impl Node for DnsNode {
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
        debug!(method = request.method.as_str(), url = %request.url, "DNS request");
        let response = transport.execute(credential, request).await?;
        shape(&selector, &item.parameters, response)
    }
}
