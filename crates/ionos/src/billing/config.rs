//! Billing node configuration structures.

use serde::Deserialize;

/// Object kinds the billing node reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Resource {
    Profile,
    Invoice,
    Utilization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    Get,
    GetMany,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selector {
    pub resource: Resource,
    pub operation: Operation,
}

/// Date window for the utilization report, as entered in the host form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UtilizationWindow {
    #[serde(default, deserialize_with = "crate::serde::empty_as_none")]
    pub from: Option<String>,
    #[serde(default, deserialize_with = "crate::serde::empty_as_none")]
    pub to: Option<String>,
}
