//! Routing-rule body assembly.
//!
//! Turns form-level routing rules into the provider's `routingRules` array.
//! Geo restrictions follow a strict mutual exclusion: a non-empty allow-list
//! wins and any block-list is ignored; a block-list applies only when the
//! allow-list is empty; when both are empty the `geoRestrictions` key is
//! absent altogether.

use super::config::RoutingRuleInput;
use serde_json::{json, Value};

/// Splits a comma-separated country-code list, trimming entries and
/// discarding empty tokens.
pub fn split_country_codes(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_string)
        .collect()
}

/// Builds the `geoRestrictions` object for one rule, or `None` when neither
/// list has entries.
pub fn geo_restrictions(
    allowed: Option<&str>,
    blocked: Option<&str>,
) -> Option<Value> {
    let allow_list = allowed.map(split_country_codes).unwrap_or_default();
    if !allow_list.is_empty() {
        return Some(json!({ "allowList": allow_list }));
    }
    let block_list = blocked.map(split_country_codes).unwrap_or_default();
    if !block_list.is_empty() {
        return Some(json!({ "blockList": block_list }));
    }
    None
}

/// Converts one form-level rule into the provider shape.
pub fn routing_rule(input: &RoutingRuleInput) -> Value {
    let mut upstream = json!({
        "host": input.upstream_host,
        "caching": input.caching,
        "waf": input.waf,
        "rateLimitClass": input.rate_limit_class,
    });
    if let Some(geo) = geo_restrictions(
        input.allowed_countries.as_deref(),
        input.blocked_countries.as_deref(),
    ) {
        upstream["geoRestrictions"] = geo;
    }
    json!({
        "scheme": input.scheme,
        "prefix": input.prefix,
        "upstream": upstream,
    })
}

/// Converts the whole rule list.
pub fn routing_rules(inputs: &[RoutingRuleInput]) -> Vec<Value> {
    inputs.iter().map(routing_rule).collect()
}
