//! Billing node: contract profile, invoices and utilization reports.

use super::config::{Operation, Resource, Selector, UtilizationWindow};
use crate::credentials::CredentialKind;
use crate::serde::provider_date;
use async_trait::async_trait;
use flowgrid_core::credential::CredentialRecord;
use flowgrid_core::descriptor::{NodeDescriptor, Property};
use flowgrid_core::item::Item;
use flowgrid_core::node::{Error, Node};
use flowgrid_core::parameter::ParameterMap;
use flowgrid_core::request::RequestDescriptor;
use flowgrid_core::response::unwrap_collection;
use flowgrid_core::transport::Transport;
use serde_json::{json, Value};
use tracing::debug;

/// Billing API origin used by this node.
pub const BASE_URL: &str = "https://billing.ionos.com";

/// Read-only access to contract billing data.
#[derive(Debug, Clone, Copy, Default)]
pub struct BillingNode;

impl BillingNode {
    pub fn new() -> Self {
        BillingNode
    }
}

pub fn descriptor() -> NodeDescriptor {
    NodeDescriptor::new(
        "billing",
        "IONOS Billing",
        "Read contract profile, invoices and utilization",
        CredentialKind::CloudToken.name(),
    )
    .property(
        Property::options("resource", "Resource")
            .choice("Profile", "profile")
            .choice("Invoice", "invoice")
            .choice("Utilization", "utilization")
            .default_value(json!("invoice")),
    )
    .property(
        Property::options("operation", "Operation")
            .choice("Get", "get")
            .choice("Get Many", "getMany")
            .default_value(json!("get")),
    )
    .property(Property::string("contractId", "Contract ID").required())
    .property(
        Property::string("invoiceId", "Invoice ID")
            .required()
            .show_when("resource", &["invoice"])
            .show_when("operation", &["get"]),
    )
    .property(
        Property::string("from", "From")
            .description("Start of the utilization window")
            .show_when("resource", &["utilization"]),
    )
    .property(
        Property::string("to", "To")
            .description("End of the utilization window")
            .show_when("resource", &["utilization"]),
    )
}

pub fn build_request(selector: &Selector, params: &ParameterMap) -> Result<RequestDescriptor, Error> {
    let contract_id = params.string("contractId")?;
    match (selector.resource, selector.operation) {
        (Resource::Profile, Operation::Get) => {
            Ok(RequestDescriptor::get(format!("{BASE_URL}/{contract_id}/profile")))
        }
        (Resource::Invoice, Operation::GetMany) => {
            Ok(RequestDescriptor::get(format!("{BASE_URL}/{contract_id}/invoices")))
        }
        (Resource::Invoice, Operation::Get) => {
            let invoice_id = params.string("invoiceId")?;
            Ok(RequestDescriptor::get(format!(
                "{BASE_URL}/{contract_id}/invoices/{invoice_id}"
            )))
        }
        (Resource::Utilization, Operation::Get) => {
            let window: UtilizationWindow = params.typed()?;
            Ok(RequestDescriptor::get(format!("{BASE_URL}/{contract_id}/utilization"))
                .query_opt("from", window.from.as_deref().map(provider_date))
                .query_opt("to", window.to.as_deref().map(provider_date)))
        }
        _ => Err(Error::UnsupportedOperation {
            resource: format!("{:?}", selector.resource),
            operation: format!("{:?}", selector.operation),
        }),
    }
}

#[async_trait]
impl Node for BillingNode {
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
        debug!(method = request.method.as_str(), url = %request.url, "billing request");
        let response = transport.execute(credential, request).await?;
        Ok(unwrap_collection(response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(value: Value) -> ParameterMap {
        ParameterMap::from_value(value)
    }

    fn selector(resource: &str, operation: &str) -> Selector {
        serde_json::from_value(json!({"resource": resource, "operation": operation})).unwrap()
    }

    #[test]
    fn test_profile_url() {
        let p = params(json!({"contractId": "12345"}));
        let request = build_request(&selector("profile", "get"), &p).unwrap();
        assert_eq!(request.url, "https://billing.ionos.com/12345/profile");
    }

    #[test]
    fn test_invoice_get() {
        let p = params(json!({"contractId": "12345", "invoiceId": "INV-9"}));
        let request = build_request(&selector("invoice", "get"), &p).unwrap();
        assert_eq!(request.url, "https://billing.ionos.com/12345/invoices/INV-9");
    }

    #[test]
    fn test_utilization_window_formatted() {
        let p = params(json!({
            "contractId": "12345",
            "from": "2024-01-01T00:00:00Z",
            "to": "2024-02-01T00:00:00Z"
        }));
        let request = build_request(&selector("utilization", "get"), &p).unwrap();
        assert_eq!(request.query_value("from"), Some("2024-01-01"));
        assert_eq!(request.query_value("to"), Some("2024-02-01"));
    }

    #[test]
    fn test_utilization_window_optional() {
        let p = params(json!({"contractId": "12345"}));
        let request = build_request(&selector("utilization", "get"), &p).unwrap();
        assert!(request.query.is_empty());
    }

    #[test]
    fn test_profile_get_many_unsupported() {
        let p = params(json!({"contractId": "12345"}));
        let err = build_request(&selector("profile", "getMany"), &p).unwrap_err();
        assert!(matches!(err, Error::UnsupportedOperation { .. }));
    }
}
