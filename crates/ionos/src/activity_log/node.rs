//! Activity log node: one fetch, then client-side filtering.

use super::config::{LogFilters, LogWindow, Selector};
use super::filter;
use crate::credentials::CredentialKind;
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

/// Activity log API origin used by this node.
pub const BASE_URL: &str = "https://api.ionos.com/activitylog/v1";

/// Query the account activity log.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActivityLogNode;

impl ActivityLogNode {
    pub fn new() -> Self {
        ActivityLogNode
    }
}

pub fn descriptor() -> NodeDescriptor {
    NodeDescriptor::new(
        "activityLog",
        "IONOS Activity Log",
        "Query account activity log entries",
        CredentialKind::CloudToken.name(),
    )
    .property(
        Property::options("operation", "Operation")
            .choice("Get Many", "getMany")
            .default_value(json!("getMany")),
    )
    .property(Property::string("from", "From").description("Start of the query window"))
    .property(Property::string("to", "To").description("End of the query window"))
    .property(
        Property::string("dateFormat", "Date Format")
            .description("Format the provider should apply to the window bounds"),
    )
    .property(
        Property::string("action", "Action")
            .description("Keep only entries where any touched resource saw this action"),
    )
    .property(
        Property::string("user", "User")
            .description("Keep only entries initiated by this username"),
    )
    .property(Property::string("resourceType", "Resource Type"))
    .property(Property::string("eventType", "Event Type"))
    .property(Property::boolean("returnAll", "Return All").default_value(json!(false)))
    .property(
        Property::number("limit", "Limit")
            .default_value(json!(50))
            .range(1, 1000)
            .show_when("returnAll", &["false"]),
    )
}

pub fn build_request(params: &ParameterMap) -> Result<RequestDescriptor, Error> {
    let window: LogWindow = params.typed()?;
    Ok(RequestDescriptor::get(format!("{BASE_URL}/logs"))
        .query_opt("from", window.from)
        .query_opt("to", window.to)
        .query_opt("dateFormat", window.date_format)
        .query_opt("limit", params.page_limit()))
}

#[async_trait]
impl Node for ActivityLogNode {
    fn descriptor(&self) -> NodeDescriptor {
        descriptor()
    }

    async fn execute(
        &self,
        transport: &dyn Transport,
        credential: &CredentialRecord,
        item: &Item,
    ) -> Result<Vec<Value>, Error> {
        let _selector: Selector = item.parameters.typed()?;
        let filters: LogFilters = item.parameters.typed()?;
        let request = build_request(&item.parameters)?;
        debug!(url = %request.url, "activity log request");
        let response = transport.execute(credential, request).await?;
        let entries = unwrap_collection(response);
        let kept = filter::apply(entries, &filters);
        debug!(count = kept.len(), "activity log entries after filtering");
        Ok(kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(value: Value) -> ParameterMap {
        ParameterMap::from_value(value)
    }

    #[test]
    fn test_request_with_window() {
        let p = params(json!({
            "from": "2024-01-01",
            "to": "2024-02-01",
            "dateFormat": "yyyy-MM-dd"
        }));
        let request = build_request(&p).unwrap();
        assert_eq!(request.url, "https://api.ionos.com/activitylog/v1/logs");
        assert_eq!(request.query_value("from"), Some("2024-01-01"));
        assert_eq!(request.query_value("dateFormat"), Some("yyyy-MM-dd"));
        assert_eq!(request.query_value("limit"), Some("50"));
    }

    #[test]
    fn test_request_return_all() {
        let p = params(json!({"returnAll": true}));
        let request = build_request(&p).unwrap();
        assert_eq!(request.query_value("limit"), None);
        assert_eq!(request.query_value("from"), None);
    }
}
