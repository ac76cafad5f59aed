//! Certificate manager node.

use super::config::{
    AutoCertificateCreate, CertificateCreate, Operation, Resource, Selector,
};
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

/// Certificate manager API origin used by this node.
pub const BASE_URL: &str = "https://certificate-manager.de-fra.ionos.com";

/// Manage uploaded and automatically provisioned certificates.
#[derive(Debug, Clone, Copy, Default)]
pub struct CertificateNode;

impl CertificateNode {
    pub fn new() -> Self {
        CertificateNode
    }
}

pub fn descriptor() -> NodeDescriptor {
    NodeDescriptor::new(
        "certificate",
        "IONOS Certificate Manager",
        "Manage TLS certificates",
        CredentialKind::CloudToken.name(),
    )
    .property(
        Property::options("resource", "Resource")
            .choice("Certificate", "certificate")
            .choice("Auto Certificate", "autoCertificate")
            .default_value(json!("certificate")),
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
        Property::string("certificateId", "Certificate ID")
            .required()
            .show_when("resource", &["certificate"])
            .show_when("operation", &["get", "delete"]),
    )
    .property(
        Property::string("autoCertificateId", "Auto Certificate ID")
            .required()
            .show_when("resource", &["autoCertificate"])
            .show_when("operation", &["get", "delete"]),
    )
    .property(
        Property::string("name", "Name")
            .required()
            .show_when("operation", &["create"]),
    )
    .property(
        Property::string("certificate", "Certificate")
            .required()
            .description("PEM-encoded certificate")
            .show_when("resource", &["certificate"])
            .show_when("operation", &["create"]),
    )
    .property(
        Property::string("certificateChain", "Certificate Chain")
            .required()
            .description("PEM-encoded chain up to the root")
            .show_when("resource", &["certificate"])
            .show_when("operation", &["create"]),
    )
    .property(
        Property::string("privateKey", "Private Key")
            .required()
            .description("PEM-encoded private key")
            .show_when("resource", &["certificate"])
            .show_when("operation", &["create"]),
    )
    .property(
        Property::string("commonName", "Common Name")
            .required()
            .show_when("resource", &["autoCertificate"])
            .show_when("operation", &["create"]),
    )
    .property(
        Property::string("keyAlgorithm", "Key Algorithm")
            .default_value(json!("rsa4096"))
            .show_when("resource", &["autoCertificate"])
            .show_when("operation", &["create"]),
    )
    .property(
        Property::json("subjectAlternativeNames", "Subject Alternative Names")
            .default_value(json!([]))
            .show_when("resource", &["autoCertificate"])
            .show_when("operation", &["create"]),
    )
    .property(
        Property::string("commonNameFilter", "Common Name Filter")
            .show_when("resource", &["autoCertificate"])
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

pub fn build_request(selector: &Selector, params: &ParameterMap) -> Result<RequestDescriptor, Error> {
    match (selector.resource, selector.operation) {
        (Resource::Certificate, Operation::GetMany) => {
            Ok(RequestDescriptor::get(format!("{BASE_URL}/certificates"))
                .query_opt("limit", params.page_limit()))
        }
        (Resource::Certificate, Operation::Get) => {
            let id = params.string("certificateId")?;
            Ok(RequestDescriptor::get(format!("{BASE_URL}/certificates/{id}")))
        }
        (Resource::Certificate, Operation::Create) => {
            let fields: CertificateCreate = params.typed()?;
            Ok(RequestDescriptor::post(format!("{BASE_URL}/certificates")).body(json!({
                "properties": {
                    "name": fields.name,
                    "certificate": fields.certificate,
                    "certificateChain": fields.certificate_chain,
                    "privateKey": fields.private_key,
                }
            })))
        }
        (Resource::Certificate, Operation::Delete) => {
            let id = params.string("certificateId")?;
            Ok(RequestDescriptor::delete(format!("{BASE_URL}/certificates/{id}")))
        }
        (Resource::AutoCertificate, Operation::GetMany) => {
            Ok(RequestDescriptor::get(format!("{BASE_URL}/auto-certificates"))
                .query_opt("filter.commonName", params.opt_string("commonNameFilter"))
                .query_opt("limit", params.page_limit()))
        }
        (Resource::AutoCertificate, Operation::Get) => {
            let id = params.string("autoCertificateId")?;
            Ok(RequestDescriptor::get(format!("{BASE_URL}/auto-certificates/{id}")))
        }
        (Resource::AutoCertificate, Operation::Create) => {
            let fields: AutoCertificateCreate = params.typed()?;
            Ok(RequestDescriptor::post(format!("{BASE_URL}/auto-certificates")).body(json!({
                "properties": {
                    "name": fields.name,
                    "commonName": fields.common_name,
                    "keyAlgorithm": fields.key_algorithm,
                    "subjectAlternativeNames": fields.subject_alternative_names,
                }
            })))
        }
        (Resource::AutoCertificate, Operation::Delete) => {
            let id = params.string("autoCertificateId")?;
            Ok(RequestDescriptor::delete(format!(
                "{BASE_URL}/auto-certificates/{id}"
            )))
        }
    }
}

fn shape(selector: &Selector, params: &ParameterMap, response: Value) -> Result<Vec<Value>, Error> {
    match (selector.resource, selector.operation) {
        (Resource::Certificate, Operation::Delete) => {
            let id = params.string("certificateId")?;
            Ok(vec![success_record(Some(("certificateId", &id)))])
        }
        (Resource::AutoCertificate, Operation::Delete) => {
            let id = params.string("autoCertificateId")?;
            Ok(vec![success_record(Some(("autoCertificateId", &id)))])
        }
        _ => Ok(unwrap_collection(response)),
    }
}

#[async_trait]
impl Node for CertificateNode {
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
        debug!(method = request.method.as_str(), url = %request.url, "certificate request");
        let response = transport.execute(credential, request).await?;
        shape(&selector, &item.parameters, response)
    }
}
