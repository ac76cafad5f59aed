//! Authenticated HTTP transport.
//!
//! Executes a [`RequestDescriptor`] with the credential header injected and
//! returns the parsed JSON body. Non-2xx responses become errors carrying
//! the status and body text. No retries, no caching; transient-failure
//! handling belongs to the caller's environment.

use crate::credential::CredentialRecord;
use crate::request::{Method, RequestDescriptor};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;
use tracing::debug;

/// Errors that can occur while executing a provider request.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Request URL could not be parsed.
    #[error("Invalid request URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    /// HTTP request failed at the network level.
    #[error("HTTP request failed: {source}")]
    Reqwest {
        #[source]
        source: reqwest::Error,
    },
    /// Invalid HTTP header name.
    #[error("Invalid HTTP header name: {source}")]
    InvalidHeaderName {
        #[source]
        source: reqwest::header::InvalidHeaderName,
    },
    /// Invalid HTTP header value.
    #[error("Invalid HTTP header value: {source}")]
    InvalidHeaderValue {
        #[source]
        source: reqwest::header::InvalidHeaderValue,
    },
    /// Provider returned a non-success status.
    #[error("Provider returned status {status}: {body}")]
    Status { status: u16, body: String },
}

/// Authenticated request execution boundary.
///
/// The production implementation is [`HttpTransport`]; tests substitute
/// doubles that replay canned provider responses.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Executes one provider call and returns the parsed JSON body.
    /// An empty response body yields `Value::Null`.
    async fn execute(
        &self,
        credential: &CredentialRecord,
        request: RequestDescriptor,
    ) -> Result<Value, Error>;
}

/// reqwest-backed transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Builds the transport with an HTTPS-only client.
    pub fn new() -> Result<Self, Error> {
        let client = reqwest::ClientBuilder::new()
            .https_only(true)
            .build()
            .map_err(|e| Error::Reqwest { source: e })?;
        Ok(HttpTransport { client })
    }

    /// Builds the transport around an existing client. Used by tests to
    /// allow plain-HTTP mock servers.
    pub fn with_client(client: reqwest::Client) -> Self {
        HttpTransport { client }
    }
}

fn to_reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::GET => reqwest::Method::GET,
        Method::POST => reqwest::Method::POST,
        Method::PUT => reqwest::Method::PUT,
        Method::PATCH => reqwest::Method::PATCH,
        Method::DELETE => reqwest::Method::DELETE,
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(
        &self,
        credential: &CredentialRecord,
        request: RequestDescriptor,
    ) -> Result<Value, Error> {
        let url = url::Url::parse(&request.url).map_err(|e| Error::InvalidUrl {
            url: request.url.clone(),
            source: e,
        })?;

        debug!(
            method = request.method.as_str(),
            url = %url,
            "Executing provider request"
        );

        let mut builder = self.client.request(to_reqwest_method(request.method), url);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        let mut headers = HeaderMap::new();
        for (name, value) in &request.headers {
            let name = HeaderName::try_from(name.as_str())
                .map_err(|e| Error::InvalidHeaderName { source: e })?;
            let value = HeaderValue::try_from(value.as_str())
                .map_err(|e| Error::InvalidHeaderValue { source: e })?;
            headers.insert(name, value);
        }
        let (auth_name, auth_value) = credential.authorization_header();
        let auth_value = HeaderValue::try_from(auth_value.as_str())
            .map_err(|e| Error::InvalidHeaderValue { source: e })?;
        let auth_name = HeaderName::try_from(auth_name)
            .map_err(|e| Error::InvalidHeaderName { source: e })?;
        headers.insert(auth_name, auth_value);
        builder = builder.headers(headers);

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| Error::Reqwest { source: e })?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::Reqwest { source: e })?;

        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        if text.is_empty() {
            return Ok(Value::Null);
        }
        // Non-JSON success bodies pass through as a string record.
        Ok(serde_json::from_str(&text).unwrap_or(Value::String(text)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn transport() -> HttpTransport {
        // Mock servers speak plain HTTP.
        HttpTransport::with_client(reqwest::Client::new())
    }

    fn bearer() -> CredentialRecord {
        CredentialRecord::BearerToken {
            token: "test-token".to_string(),
        }
    }

    #[tokio::test]
    async fn test_bearer_header_injected() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/datacenters"))
            .and(header("Authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
            .expect(1)
            .mount(&server)
            .await;

        let request = RequestDescriptor::get(format!("{}/datacenters", server.uri()));
        let body = transport().execute(&bearer(), request).await.unwrap();
        assert_eq!(body, json!({"items": []}));
    }

    #[tokio::test]
    async fn test_api_key_header_injected() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/dns/v1/zones"))
            .and(header("X-API-Key", "key-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let credential = CredentialRecord::ApiKey {
            key: "key-1".to_string(),
        };
        let request = RequestDescriptor::get(format!("{}/dns/v1/zones", server.uri()));
        let body = transport().execute(&credential, request).await.unwrap();
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_query_pairs_sent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/datacenters"))
            .and(query_param("depth", "1"))
            .and(query_param("limit", "100"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": [{}]})))
            .expect(1)
            .mount(&server)
            .await;

        let request = RequestDescriptor::get(format!("{}/datacenters", server.uri()))
            .query("depth", 1)
            .query("limit", 100);
        let body = transport().execute(&bearer(), request).await.unwrap();
        assert_eq!(body["items"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string("zone not found"))
            .mount(&server)
            .await;

        let request = RequestDescriptor::get(format!("{}/dns/v1/zones/missing", server.uri()));
        let err = transport().execute(&bearer(), request).await.unwrap_err();
        match err {
            Error::Status { status, body } => {
                assert_eq!(status, 404);
                assert_eq!(body, "zone not found");
            }
            other => panic!("Expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_body_is_null() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(202))
            .mount(&server)
            .await;

        let request = RequestDescriptor::delete(format!("{}/zones/zone-1", server.uri()));
        let body = transport().execute(&bearer(), request).await.unwrap();
        assert_eq!(body, Value::Null);
    }

    #[tokio::test]
    async fn test_json_body_posted() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/dns/v1/zones"))
            .and(wiremock::matchers::body_json(
                json!({"name": "example.com", "type": "NATIVE"}),
            ))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(json!({"id": "zone-1"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let request = RequestDescriptor::post(format!("{}/dns/v1/zones", server.uri()))
            .body(json!({"name": "example.com", "type": "NATIVE"}));
        let body = transport().execute(&bearer(), request).await.unwrap();
        assert_eq!(body, json!({"id": "zone-1"}));
    }

    #[tokio::test]
    async fn test_invalid_url() {
        let request = RequestDescriptor::get("not a url");
        let err = transport().execute(&bearer(), request).await.unwrap_err();
        assert!(matches!(err, Error::InvalidUrl { .. }));
    }
}
