//! Node registry: one entry per provider node, dispatched by kind.

use crate::activity_log::node::ActivityLogNode;
use crate::billing::node::BillingNode;
use crate::cdn::node::CdnNode;
use crate::certificate::node::CertificateNode;
use crate::compute::node::ComputeNode;
use crate::dns::node::DnsNode;
use crate::iam::node::IamNode;
use crate::inference::node::InferenceNode;
use crate::monitoring::node::MonitoringNode;
use crate::nfs::node::NfsNode;
use crate::object_storage::node::ObjectStorageNode;
use flowgrid_core::descriptor::NodeDescriptor;
use flowgrid_core::node::Node;
use serde::Deserialize;

/// Every node this package ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeKind {
    ActivityLog,
    Billing,
    Cdn,
    Certificate,
    Compute,
    Dns,
    Iam,
    Inference,
    Monitoring,
    Nfs,
    ObjectStorage,
}

impl NodeKind {
    pub const ALL: [NodeKind; 11] = [
        NodeKind::ActivityLog,
        NodeKind::Billing,
        NodeKind::Cdn,
        NodeKind::Certificate,
        NodeKind::Compute,
        NodeKind::Dns,
        NodeKind::Iam,
        NodeKind::Inference,
        NodeKind::Monitoring,
        NodeKind::Nfs,
        NodeKind::ObjectStorage,
    ];
}

/// Constructs the node implementing `kind`.
pub fn node(kind: NodeKind) -> Box<dyn Node> {
    match kind {
        NodeKind::ActivityLog => Box::new(ActivityLogNode::new()),
        NodeKind::Billing => Box::new(BillingNode::new()),
        NodeKind::Cdn => Box::new(CdnNode::new()),
        NodeKind::Certificate => Box::new(CertificateNode::new()),
        NodeKind::Compute => Box::new(ComputeNode::new()),
        NodeKind::Dns => Box::new(DnsNode::new()),
        NodeKind::Iam => Box::new(IamNode::new()),
        NodeKind::Inference => Box::new(InferenceNode::new()),
        NodeKind::Monitoring => Box::new(MonitoringNode::new()),
        NodeKind::Nfs => Box::new(NfsNode::new()),
        NodeKind::ObjectStorage => Box::new(ObjectStorageNode::new()),
    }
}

/// The full descriptor table, in registry order.
pub fn descriptors() -> Vec<NodeDescriptor> {
    NodeKind::ALL
        .iter()
        .map(|kind| node(*kind).descriptor())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_kind_constructs() {
        for kind in NodeKind::ALL {
            let built = node(kind);
            assert!(!built.descriptor().name.is_empty());
        }
    }

    #[test]
    fn test_descriptor_names_unique() {
        let names: HashSet<String> = descriptors().into_iter().map(|d| d.name).collect();
        assert_eq!(names.len(), NodeKind::ALL.len());
    }

    #[test]
    fn test_descriptors_declare_known_credentials() {
        for descriptor in descriptors() {
            assert!(
                descriptor.credential == "gatewayApiKey" || descriptor.credential == "cloudToken",
                "unknown credential {} on {}",
                descriptor.credential,
                descriptor.name
            );
        }
    }

    #[test]
    fn test_kind_parses_from_camel_case() {
        let kind: NodeKind = serde_json::from_value(serde_json::json!("objectStorage")).unwrap();
        assert_eq!(kind, NodeKind::ObjectStorage);
    }
}
