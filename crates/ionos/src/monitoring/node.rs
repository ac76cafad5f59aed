//! Monitoring node: metrics pipelines and their ingest keys.

use super::config::{Operation, PipelineFields, Resource, Selector};
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

/// Monitoring API origin used by this node.
pub const BASE_URL: &str = "https://monitoring.de-fra.ionos.com";

/// Manage monitoring pipelines.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonitoringNode;

impl MonitoringNode {
    pub fn new() -> Self {
        MonitoringNode
    }
}

pub fn descriptor() -> NodeDescriptor {
    NodeDescriptor::new(
        "monitoring",
        "IONOS Monitoring",
        "Manage monitoring pipelines",
        CredentialKind::CloudToken.name(),
    )
    .property(
        Property::options("resource", "Resource")
            .choice("Pipeline", "pipeline")
            .default_value(json!("pipeline")),
    )
    .property(
        Property::options("operation", "Operation")
            .choice("Create", "create")
            .choice("Delete", "delete")
            .choice("Get", "get")
            .choice("Get Many", "getMany")
            .choice("Update", "update")
            .choice("Regenerate Key", "regenerateKey")
            .default_value(json!("getMany")),
    )
    .property(
        Property::string("pipelineId", "Pipeline ID")
            .required()
            .show_when("operation", &["get", "update", "delete", "regenerateKey"]),
    )
    .property(
        Property::string("name", "Name")
            .required()
            .show_when("operation", &["create", "update"]),
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
        (Resource::Pipeline, Operation::GetMany) => {
            Ok(RequestDescriptor::get(format!("{BASE_URL}/pipelines"))
                .query_opt("limit", params.page_limit()))
        }
        (Resource::Pipeline, Operation::Get) => {
            let id = params.string("pipelineId")?;
            Ok(RequestDescriptor::get(format!("{BASE_URL}/pipelines/{id}")))
        }
        (Resource::Pipeline, Operation::Create) => {
            let fields: PipelineFields = params.typed()?;
            Ok(RequestDescriptor::post(format!("{BASE_URL}/pipelines"))
                .body(json!({"properties": {"name": fields.name}})))
        }
        (Resource::Pipeline, Operation::Update) => {
            let id = params.string("pipelineId")?;
            let fields: PipelineFields = params.typed()?;
            Ok(RequestDescriptor::put(format!("{BASE_URL}/pipelines/{id}"))
                .body(json!({"properties": {"name": fields.name}})))
        }
        (Resource::Pipeline, Operation::Delete) => {
            let id = params.string("pipelineId")?;
            Ok(RequestDescriptor::delete(format!("{BASE_URL}/pipelines/{id}")))
        }
        (Resource::Pipeline, Operation::RegenerateKey) => {
            let id = params.string("pipelineId")?;
            Ok(RequestDescriptor::post(format!("{BASE_URL}/pipelines/{id}/key")))
        }
    }
}

fn shape(selector: &Selector, params: &ParameterMap, response: Value) -> Result<Vec<Value>, Error> {
    match selector.operation {
        Operation::Delete => {
            let id = params.string("pipelineId")?;
            Ok(vec![success_record(Some(("pipelineId", &id)))])
        }
        _ => Ok(unwrap_collection(response)),
    }
}

#[async_trait]
impl Node for MonitoringNode {
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
        debug!(method = request.method.as_str(), url = %request.url, "monitoring request");
        let response = transport.execute(credential, request).await?;
        shape(&selector, &item.parameters, response)
    }
}
