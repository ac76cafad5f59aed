//! The node contract.
//!
//! A node exposes a static descriptor and one execution entry point that
//! turns a single item into that item's output records. Batch iteration and
//! the continue-on-fail policy live in [`crate::execution`].

use crate::credential::CredentialRecord;
use crate::descriptor::NodeDescriptor;
use crate::item::Item;
use crate::transport::Transport;
use async_trait::async_trait;
use serde_json::Value;

/// Errors a node can surface while processing one item.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Parameter resolution or typed-config validation failed.
    #[error(transparent)]
    Parameter(#[from] crate::parameter::Error),
    /// The authenticated transport call failed.
    #[error(transparent)]
    Transport(#[from] crate::transport::Error),
    /// The selected resource/operation pair is not part of this node.
    #[error("Unsupported operation {operation} for resource {resource}")]
    UnsupportedOperation { resource: String, operation: String },
    /// JSON serialization failed while assembling a request body.
    #[error("JSON serialization failed: {source}")]
    SerdeJson {
        #[source]
        source: serde_json::Error,
    },
}

/// A plugin node: declared form schema plus per-item execution.
#[async_trait]
pub trait Node: Send + Sync {
    /// The node's immutable form schema.
    fn descriptor(&self) -> NodeDescriptor;

    /// Processes one item: read parameters, issue the provider call through
    /// the transport, shape the response into output records.
    async fn execute(
        &self,
        transport: &dyn Transport,
        credential: &CredentialRecord,
        item: &Item,
    ) -> Result<Vec<Value>, Error>;
}
