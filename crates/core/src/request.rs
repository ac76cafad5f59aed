//! Transient request descriptors.
//!
//! A node maps (resource, operation, parameters) to exactly one request
//! descriptor per item: method, fully templated URL, ordered query pairs,
//! optional JSON body, extra headers, and an optional per-call timeout.
//! Descriptors are constructed fresh per item and discarded after the call.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

/// HTTP methods used by the provider operations.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default, Deserialize, Serialize)]
pub enum Method {
    /// HTTP GET method (default).
    #[default]
    GET,
    /// HTTP POST method.
    POST,
    /// HTTP PUT method.
    PUT,
    /// HTTP PATCH method.
    PATCH,
    /// HTTP DELETE method.
    DELETE,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::PATCH => "PATCH",
            Method::DELETE => "DELETE",
        }
    }
}

/// One provider HTTP call, fully described.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub method: Method,
    pub url: String,
    /// Query pairs in insertion order, values already stringified.
    pub query: Vec<(String, String)>,
    /// Optional JSON body.
    pub body: Option<Value>,
    /// Extra headers beyond what the transport injects for credentials.
    pub headers: Vec<(String, String)>,
    /// Per-call timeout; only the chat-model adapter sets this.
    pub timeout: Option<Duration>,
}

impl RequestDescriptor {
    fn new(method: Method, url: impl Into<String>) -> Self {
        RequestDescriptor {
            method,
            url: url.into(),
            query: Vec::new(),
            body: None,
            headers: Vec::new(),
            timeout: None,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        RequestDescriptor::new(Method::GET, url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        RequestDescriptor::new(Method::POST, url)
    }

    pub fn put(url: impl Into<String>) -> Self {
        RequestDescriptor::new(Method::PUT, url)
    }

    pub fn patch(url: impl Into<String>) -> Self {
        RequestDescriptor::new(Method::PATCH, url)
    }

    pub fn delete(url: impl Into<String>) -> Self {
        RequestDescriptor::new(Method::DELETE, url)
    }

    /// Appends a query pair.
    pub fn query(mut self, name: &str, value: impl ToString) -> Self {
        self.query.push((name.to_string(), value.to_string()));
        self
    }

    /// Appends a query pair only when a value is present. Empty and absent
    /// values are omitted entirely, never sent as empty strings.
    pub fn query_opt(mut self, name: &str, value: Option<impl ToString>) -> Self {
        if let Some(value) = value {
            let value = value.to_string();
            if !value.is_empty() {
                self.query.push((name.to_string(), value));
            }
        }
        self
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Returns the value of a query parameter, if present.
    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_method_as_str() {
        assert_eq!(Method::GET.as_str(), "GET");
        assert_eq!(Method::PATCH.as_str(), "PATCH");
        assert_eq!(Method::default(), Method::GET);
    }

    #[test]
    fn test_query_order_preserved() {
        let request = RequestDescriptor::get("https://example.com/v1/things")
            .query("depth", 1)
            .query("limit", 100)
            .query("offset", 0);
        let names: Vec<&str> = request.query.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["depth", "limit", "offset"]);
        assert_eq!(request.query_value("limit"), Some("100"));
    }

    #[test]
    fn test_query_opt_skips_absent_and_empty() {
        let request = RequestDescriptor::get("https://example.com")
            .query_opt("filter.status", None::<String>)
            .query_opt("filter.state", Some(""))
            .query_opt("filter.domain", Some("example.com"));
        assert_eq!(request.query.len(), 1);
        assert_eq!(request.query_value("filter.domain"), Some("example.com"));
    }

    #[test]
    fn test_body_and_headers() {
        let request = RequestDescriptor::post("https://example.com/zones")
            .header("Accept", "application/json")
            .body(json!({"name": "example.com", "type": "NATIVE"}));
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.body, Some(json!({"name": "example.com", "type": "NATIVE"})));
        assert_eq!(request.headers[0].0, "Accept");
    }

    #[test]
    fn test_timeout_unset_by_default() {
        let request = RequestDescriptor::get("https://example.com");
        assert_eq!(request.timeout, None);
    }
}
