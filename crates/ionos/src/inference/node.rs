//! Chat-model adapter node.
//!
//! Unlike the REST nodes this one issues no provider call per item; it maps
//! the resolved options to a configured gateway client record and hands it
//! back to the host.

use super::client::adapter_record;
use super::config::AdapterOptions;
use crate::credentials::CredentialKind;
use async_trait::async_trait;
use flowgrid_core::credential::CredentialRecord;
use flowgrid_core::descriptor::{NodeDescriptor, Property};
use flowgrid_core::item::Item;
use flowgrid_core::node::{Error, Node};
use flowgrid_core::transport::Transport;
use serde_json::{json, Value};
use tracing::debug;

/// Hand out configured chat-model clients.
#[derive(Debug, Clone, Copy, Default)]
pub struct InferenceNode;

impl InferenceNode {
    pub fn new() -> Self {
        InferenceNode
    }
}

pub fn descriptor() -> NodeDescriptor {
    NodeDescriptor::new(
        "inference",
        "IONOS AI Model Hub",
        "Configure an OpenAI-compatible chat model client",
        CredentialKind::CloudToken.name(),
    )
    .property(
        Property::options("model", "Model")
            .required()
            .description("Chat model served by the inference gateway"),
    )
    .property(
        Property::string("region", "Region")
            .default_value(json!("de-txl"))
            .description("Gateway region the base URL is templated with"),
    )
    .property(
        Property::number("temperature", "Temperature")
            .default_value(json!(0.7))
            .range(0, 2),
    )
    .property(
        Property::number("maxTokens", "Max Tokens")
            .default_value(json!(1024))
            .range(1, 32768),
    )
    .property(
        Property::number("topP", "Top P")
            .default_value(json!(1.0))
            .range(0, 1),
    )
    .property(
        Property::number("frequencyPenalty", "Frequency Penalty").default_value(json!(0.0)),
    )
    .property(
        Property::number("presencePenalty", "Presence Penalty").default_value(json!(0.0)),
    )
    .property(
        Property::number("timeoutMs", "Timeout (ms)")
            .default_value(json!(60000))
            .description("Request timeout for chat calls made with the client"),
    )
}

#[async_trait]
impl Node for InferenceNode {
    fn descriptor(&self) -> NodeDescriptor {
        descriptor()
    }

    async fn execute(
        &self,
        _transport: &dyn Transport,
        _credential: &CredentialRecord,
        item: &Item,
    ) -> Result<Vec<Value>, Error> {
        let options: AdapterOptions = item.parameters.typed()?;
        debug!(model = %options.model, region = %options.region, "configured chat adapter");
        Ok(vec![adapter_record(&options)])
    }
}
