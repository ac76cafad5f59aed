//! Host-resolved parameter access.
//!
//! Parameters arrive from the host as a JSON object per item, with any
//! embedded expressions already evaluated. Nodes read individual values
//! through the typed accessors or deserialize the whole map into a
//! per-operation config struct at the node boundary.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Default page size for "get many" operations without return-all.
pub const DEFAULT_PAGE_LIMIT: u64 = 50;

/// Errors that can occur while reading node parameters.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A required parameter was not supplied by the host.
    #[error("Missing required parameter: {}", _0)]
    MissingRequiredParameter(String),
    /// The parameter map could not be deserialized into the operation config.
    #[error("Parameter deserialization failed: {source}")]
    Deserialize {
        #[source]
        source: serde_json::Error,
    },
}

/// Resolved parameter values for one item, keyed by declared property name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterMap(Map<String, Value>);

impl From<Map<String, Value>> for ParameterMap {
    fn from(map: Map<String, Value>) -> Self {
        ParameterMap(map)
    }
}

impl ParameterMap {
    /// Builds a parameter map from a JSON object value. Non-object values
    /// yield an empty map.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => ParameterMap(map),
            _ => ParameterMap::default(),
        }
    }

    /// Returns the raw value for a parameter, if present.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Returns a required string parameter.
    pub fn string(&self, name: &str) -> Result<String, Error> {
        self.opt_string(name)
            .ok_or_else(|| Error::MissingRequiredParameter(name.to_string()))
    }

    /// Returns a string parameter, falling back to the declared default.
    pub fn string_or(&self, name: &str, default: &str) -> String {
        self.opt_string(name).unwrap_or_else(|| default.to_string())
    }

    /// Returns a string parameter, treating absent, null, and empty values
    /// as not supplied. Optional query parameters built from this accessor
    /// are omitted rather than sent as empty strings.
    pub fn opt_string(&self, name: &str) -> Option<String> {
        match self.0.get(name) {
            Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Returns a boolean parameter with a default.
    pub fn bool_or(&self, name: &str, default: bool) -> bool {
        match self.0.get(name) {
            Some(Value::Bool(b)) => *b,
            _ => default,
        }
    }

    /// Returns an unsigned integer parameter with a default.
    pub fn u64_or(&self, name: &str, default: u64) -> u64 {
        match self.0.get(name) {
            Some(Value::Number(n)) => n.as_u64().unwrap_or(default),
            _ => default,
        }
    }

    /// Effective page-size limit for "get many" operations.
    ///
    /// With `returnAll` set the limit is omitted entirely and the server
    /// default applies; otherwise the user limit (or the declared default)
    /// is sent.
    pub fn page_limit(&self) -> Option<u64> {
        if self.bool_or("returnAll", false) {
            None
        } else {
            Some(self.u64_or("limit", DEFAULT_PAGE_LIMIT))
        }
    }

    /// Deserializes the whole map into a typed per-operation config,
    /// validating it once at the node boundary.
    pub fn typed<T: DeserializeOwned>(&self) -> Result<T, Error> {
        serde_json::from_value(Value::Object(self.0.clone()))
            .map_err(|e| Error::Deserialize { source: e })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(value: Value) -> ParameterMap {
        ParameterMap::from_value(value)
    }

    #[test]
    fn test_string_present() {
        let p = params(json!({"zoneId": "zone-1"}));
        assert_eq!(p.string("zoneId").unwrap(), "zone-1");
    }

    #[test]
    fn test_string_missing() {
        let p = params(json!({}));
        let err = p.string("zoneId").unwrap_err();
        assert_eq!(err.to_string(), "Missing required parameter: zoneId");
    }

    #[test]
    fn test_opt_string_empty_is_none() {
        let p = params(json!({"suffix": ""}));
        assert_eq!(p.opt_string("suffix"), None);
    }

    #[test]
    fn test_opt_string_number_stringified() {
        let p = params(json!({"ttl": 3600}));
        assert_eq!(p.opt_string("ttl"), Some("3600".to_string()));
    }

    #[test]
    fn test_string_or_default() {
        let p = params(json!({}));
        assert_eq!(p.string_or("type", "NATIVE"), "NATIVE");
    }

    #[test]
    fn test_bool_or() {
        let p = params(json!({"returnAll": true}));
        assert!(p.bool_or("returnAll", false));
        assert!(!p.bool_or("absent", false));
    }

    #[test]
    fn test_page_limit_return_all_omits_limit() {
        let p = params(json!({"returnAll": true, "limit": 100}));
        assert_eq!(p.page_limit(), None);
    }

    #[test]
    fn test_page_limit_explicit() {
        let p = params(json!({"returnAll": false, "limit": 100}));
        assert_eq!(p.page_limit(), Some(100));
    }

    #[test]
    fn test_page_limit_default() {
        let p = params(json!({}));
        assert_eq!(p.page_limit(), Some(DEFAULT_PAGE_LIMIT));
    }

    #[test]
    fn test_typed_config() {
        #[derive(serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct ZoneCreate {
            name: String,
            #[serde(default)]
            zone_type: Option<String>,
        }

        let p = params(json!({"name": "example.com"}));
        let config: ZoneCreate = p.typed().unwrap();
        assert_eq!(config.name, "example.com");
        assert_eq!(config.zone_type, None);
    }

    #[test]
    fn test_typed_config_missing_required() {
        #[derive(serde::Deserialize)]
        struct NeedsName {
            #[allow(dead_code)]
            name: String,
        }

        let p = params(json!({}));
        let result: Result<NeedsName, Error> = p.typed();
        assert!(matches!(result, Err(Error::Deserialize { .. })));
    }

    #[test]
    fn test_from_value_non_object() {
        let p = ParameterMap::from_value(json!([1, 2, 3]));
        assert_eq!(p, ParameterMap::default());
    }
}
