//! CDN node: distributions with routing rules and geo restrictions.

use super::config::{DistributionFields, DistributionFilters, Operation, Resource, Selector};
use super::rules::routing_rules;
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

/// CDN API origin used by this node.
pub const BASE_URL: &str = "https://cdn.de-fra.ionos.com";

/// Manage CDN distributions.
#[derive(Debug, Clone, Copy, Default)]
pub struct CdnNode;

impl CdnNode {
    pub fn new() -> Self {
        CdnNode
    }
}

/// Builds the CDN node's form schema.
pub fn descriptor() -> NodeDescriptor {
    NodeDescriptor::new(
        "cdn",
        "IONOS CDN",
        "Manage CDN distributions",
        CredentialKind::CloudToken.name(),
    )
    .property(
        Property::options("resource", "Resource")
            .choice("Distribution", "distribution")
            .default_value(json!("distribution")),
    )
    .property(
        Property::options("operation", "Operation")
            .choice("Create", "create")
            .choice("Delete", "delete")
            .choice("Get", "get")
            .choice("Get Many", "getMany")
            .choice("Update", "update")
            .default_value(json!("getMany")),
    )
    .property(
        Property::string("distributionId", "Distribution ID")
            .required()
            .show_when("operation", &["get", "update", "delete"]),
    )
    .property(
        Property::string("domain", "Domain")
            .required()
            .description("Fully qualified domain served by the distribution")
            .show_when("operation", &["create", "update"]),
    )
    .property(
        Property::string("certificateId", "Certificate ID")
            .description("Certificate used for TLS termination")
            .show_when("operation", &["create", "update"]),
    )
    .property(
        Property::json("routingRules", "Routing Rules")
            .description(
                "Rules mapping path prefixes to upstreams; each rule may carry \
                 allowed or blocked country lists",
            )
            .show_when("operation", &["create", "update"]),
    )
    .property(
        Property::string("domain", "Domain Filter")
            .description("Only distributions serving this domain")
            .show_when("operation", &["getMany"]),
    )
    .property(
        Property::string("state", "State Filter")
            .description("Only distributions in this state, e.g. AVAILABLE, BUSY, FAILED")
            .show_when("operation", &["getMany"]),
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

fn distribution_body(fields: &DistributionFields) -> Value {
    let mut properties = json!({
        "domain": fields.domain,
        "routingRules": routing_rules(&fields.routing_rules),
    });
    if let Some(certificate_id) = &fields.certificate_id {
        properties["certificateId"] = json!(certificate_id);
    }
    json!({ "properties": properties })
}

/// Maps the selected operation to its CDN API request.
pub fn build_request(selector: &Selector, params: &ParameterMap) -> Result<RequestDescriptor, Error> {
    match (selector.resource, selector.operation) {
        (Resource::Distribution, Operation::GetMany) => {
            let filters: DistributionFilters = params.typed()?;
            Ok(RequestDescriptor::get(format!("{BASE_URL}/distributions"))
                .query_opt("filter.domain", filters.domain)
                .query_opt("filter.state", filters.state)
                .query_opt("limit", params.page_limit()))
        }
        (Resource::Distribution, Operation::Get) => {
            let id = params.string("distributionId")?;
            Ok(RequestDescriptor::get(format!("{BASE_URL}/distributions/{id}")))
        }
        (Resource::Distribution, Operation::Create) => {
            let fields: DistributionFields = params.typed()?;
            Ok(RequestDescriptor::post(format!("{BASE_URL}/distributions"))
                .body(distribution_body(&fields)))
        }
        (Resource::Distribution, Operation::Update) => {
            let id = params.string("distributionId")?;
            let fields: DistributionFields = params.typed()?;
            Ok(RequestDescriptor::put(format!("{BASE_URL}/distributions/{id}"))
                .body(distribution_body(&fields)))
        }
        (Resource::Distribution, Operation::Delete) => {
            let id = params.string("distributionId")?;
            Ok(RequestDescriptor::delete(format!("{BASE_URL}/distributions/{id}")))
        }
    }
}

/// Shapes the CDN response into output records.
fn shape(selector: &Selector, params: &ParameterMap, response: Value) -> Result<Vec<Value>, Error> {
    match selector.operation {
        Operation::Delete => {
            let id = params.string("distributionId")?;
            Ok(vec![success_record(Some(("distributionId", &id)))])
        }
        _ => Ok(unwrap_collection(response)),
    }
}

#[async_trait]
impl Node for CdnNode {
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
        debug!(method = request.method.as_str(), url = %request.url, "CDN request");
        let response = transport.execute(credential, request).await?;
        shape(&selector, &item.parameters, response)
    }
}
