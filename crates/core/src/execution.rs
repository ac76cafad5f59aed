//! Per-item batch execution and the continue-on-fail policy.
//!
//! Items are processed strictly sequentially: item N's request is issued
//! only after item N−1 has been fully shaped or failed. Failures either
//! become inline `{error: ...}` records (continue-on-fail) or abort the
//! batch with the failing item's index attached (fail-fast, the default).

use crate::credential::CredentialRecord;
use crate::item::{Item, OutputItem};
use crate::node::Node;
use crate::transport::Transport;
use serde_json::json;
use tracing::{error, info};

/// Errors that can abort a batch run.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// An item failed with continue-on-fail disabled.
    #[error("Item {index} failed: {source}")]
    ItemFailed {
        index: usize,
        #[source]
        source: crate::node::Error,
    },
}

/// Batch-level execution options supplied by the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOptions {
    /// Capture per-item failures as `{error}` records instead of aborting.
    pub continue_on_fail: bool,
}

/// Runs a node over an input batch.
///
/// Output records preserve item order; under continue-on-fail, failure
/// records appear interleaved with successes at their item's position.
pub async fn run_batch(
    node: &dyn Node,
    transport: &dyn Transport,
    credential: &CredentialRecord,
    items: &[Item],
    options: BatchOptions,
) -> Result<Vec<OutputItem>, Error> {
    let node_name = node.descriptor().name;
    let mut output = Vec::new();

    for item in items {
        match node.execute(transport, credential, item).await {
            Ok(records) => {
                for record in records {
                    output.push(OutputItem::new(record, item.index));
                }
            }
            Err(e) if options.continue_on_fail => {
                error!(node = %node_name, index = item.index, "Item failed: {e}");
                output.push(OutputItem::new(json!({"error": e.to_string()}), item.index));
            }
            Err(e) => {
                return Err(Error::ItemFailed {
                    index: item.index,
                    source: e,
                });
            }
        }
    }

    info!(
        node = %node_name,
        items = items.len(),
        records = output.len(),
        "Batch processed"
    );
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::NodeDescriptor;
    use crate::parameter::ParameterMap;
    use crate::request::RequestDescriptor;
    use async_trait::async_trait;
    use serde_json::Value;

    /// Node double: succeeds unless the item payload contains `"fail"`.
    struct FlakyNode;

    #[async_trait]
    impl Node for FlakyNode {
        fn descriptor(&self) -> NodeDescriptor {
            NodeDescriptor::new("flaky", "Flaky", "Test node", "cloudToken")
        }

        async fn execute(
            &self,
            transport: &dyn Transport,
            credential: &CredentialRecord,
            item: &Item,
        ) -> Result<Vec<Value>, crate::node::Error> {
            if item.payload.get("fail").is_some() {
                let request = RequestDescriptor::get("https://unreachable.invalid");
                // Force a transport error through the normal path.
                transport.execute(credential, request).await?;
            }
            Ok(vec![json!({"ok": item.index}), json!({"extra": item.index})])
        }
    }

    /// Transport double that always refuses.
    struct RefusingTransport;

    #[async_trait]
    impl Transport for RefusingTransport {
        async fn execute(
            &self,
            _credential: &CredentialRecord,
            _request: RequestDescriptor,
        ) -> Result<Value, crate::transport::Error> {
            Err(crate::transport::Error::Status {
                status: 503,
                body: "unavailable".to_string(),
            })
        }
    }

    fn items(payloads: Vec<Value>) -> Vec<Item> {
        payloads
            .into_iter()
            .enumerate()
            .map(|(i, payload)| Item::new(i, payload, ParameterMap::default()))
            .collect()
    }

    fn bearer() -> CredentialRecord {
        CredentialRecord::BearerToken {
            token: "t".to_string(),
        }
    }

    #[tokio::test]
    async fn test_all_items_succeed() {
        let batch = items(vec![json!({}), json!({})]);
        let output = run_batch(
            &FlakyNode,
            &RefusingTransport,
            &bearer(),
            &batch,
            BatchOptions::default(),
        )
        .await
        .unwrap();

        assert_eq!(output.len(), 4);
        assert_eq!(output[0].source_index, 0);
        assert_eq!(output[2].source_index, 1);
        assert_eq!(output[3].json, json!({"extra": 1}));
    }

    #[tokio::test]
    async fn test_fail_fast_aborts_with_index() {
        let batch = items(vec![json!({}), json!({"fail": true}), json!({})]);
        let err = run_batch(
            &FlakyNode,
            &RefusingTransport,
            &bearer(),
            &batch,
            BatchOptions::default(),
        )
        .await
        .unwrap_err();

        match err {
            Error::ItemFailed { index, .. } => assert_eq!(index, 1),
        }
    }

    #[tokio::test]
    async fn test_continue_on_fail_interleaves_error_records() {
        let batch = items(vec![json!({"fail": true}), json!({}), json!({"fail": true})]);
        let output = run_batch(
            &FlakyNode,
            &RefusingTransport,
            &bearer(),
            &batch,
            BatchOptions {
                continue_on_fail: true,
            },
        )
        .await
        .unwrap();

        // One error record per failing item, successes in between, order kept.
        assert_eq!(output.len(), 4);
        assert_eq!(output[0].source_index, 0);
        assert!(output[0].json.get("error").is_some());
        assert_eq!(output[1].json, json!({"ok": 1}));
        assert_eq!(output[3].source_index, 2);
        assert!(output[3].json.get("error").is_some());
    }

    #[tokio::test]
    async fn test_error_record_carries_message() {
        let batch = items(vec![json!({"fail": true})]);
        let output = run_batch(
            &FlakyNode,
            &RefusingTransport,
            &bearer(),
            &batch,
            BatchOptions {
                continue_on_fail: true,
            },
        )
        .await
        .unwrap();

        let message = output[0].json["error"].as_str().unwrap();
        assert!(message.contains("503"));
    }
}
