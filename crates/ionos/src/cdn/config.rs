//! CDN node configuration structures.

use serde::Deserialize;

/// Object kinds the CDN node manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Resource {
    Distribution,
}

/// Actions available on a CDN distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    Create,
    Delete,
    Get,
    GetMany,
    Update,
}

/// The two-level selector branching the request builder.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selector {
    pub resource: Resource,
    pub operation: Operation,
}

/// Filters for the distribution listing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionFilters {
    #[serde(default, deserialize_with = "crate::serde::empty_as_none")]
    pub domain: Option<String>,
    #[serde(default, deserialize_with = "crate::serde::empty_as_none")]
    pub state: Option<String>,
}

/// One user-declared routing rule, as entered in the host form.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutingRuleInput {
    #[serde(default = "default_scheme")]
    pub scheme: String,
    pub prefix: String,
    pub upstream_host: String,
    #[serde(default)]
    pub caching: bool,
    #[serde(default)]
    pub waf: bool,
    #[serde(default = "default_rate_limit_class")]
    pub rate_limit_class: String,
    /// Comma-separated ISO country codes allowed to access the upstream.
    #[serde(default, deserialize_with = "crate::serde::empty_as_none")]
    pub allowed_countries: Option<String>,
    /// Comma-separated ISO country codes denied access. Ignored whenever an
    /// allow-list is present.
    #[serde(default, deserialize_with = "crate::serde::empty_as_none")]
    pub blocked_countries: Option<String>,
}

fn default_scheme() -> String {
    "http/https".to_string()
}

fn default_rate_limit_class() -> String {
    "R100".to_string()
}

/// Parameters for creating or updating a distribution.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionFields {
    pub domain: String,
    #[serde(default, deserialize_with = "crate::serde::empty_as_none")]
    pub certificate_id: Option<String>,
    #[serde(default)]
    pub routing_rules: Vec<RoutingRuleInput>,
}
