//! Compute node configuration structures.

use serde::Deserialize;

/// Object kinds the compute node manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Resource {
    Datacenter,
    Server,
    /// Cloud API request-status entries.
    Request,
}

/// Actions available on a compute resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    Create,
    Delete,
    Get,
    GetMany,
    Update,
    Start,
    Stop,
    Reboot,
}

/// The two-level selector branching the request builder.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selector {
    pub resource: Resource,
    pub operation: Operation,
}

/// Parameters for creating a datacenter.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatacenterCreate {
    pub name: String,
    /// Provider location identifier, e.g. `de/fra`.
    pub location: String,
    #[serde(default, deserialize_with = "crate::serde::empty_as_none")]
    pub description: Option<String>,
}

/// Parameters for updating datacenter properties.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatacenterUpdate {
    pub datacenter_id: String,
    #[serde(default, deserialize_with = "crate::serde::empty_as_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "crate::serde::empty_as_none")]
    pub description: Option<String>,
}

/// Parameters for creating a server inside a datacenter.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerCreate {
    pub datacenter_id: String,
    pub name: String,
    pub cores: u64,
    /// RAM in megabytes; must be a multiple of 256.
    pub ram: u64,
}

/// Parameters addressing one server.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerRef {
    pub datacenter_id: String,
    pub server_id: String,
}

/// Client-supplied filters for the request-status listing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestFilters {
    #[serde(default, deserialize_with = "crate::serde::empty_as_none")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "crate::serde::empty_as_none")]
    pub created_after: Option<String>,
    #[serde(default, deserialize_with = "crate::serde::empty_as_none")]
    pub created_before: Option<String>,
}
