//! Configured OpenAI-protocol client handed back to the host.
//!
//! The adapter never performs a chat call itself; it only assembles a
//! ready-to-use client value. This is the one place a request timeout is
//! configured.

use super::config::AdapterOptions;
use super::models::inference_origin;
use flowgrid_core::credential::CredentialRecord;
use serde::Serialize;
use serde_json::{json, Value};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("failed to build HTTP client")]
    Reqwest {
        #[from]
        source: reqwest::Error,
    },
    #[error("invalid bearer token")]
    InvalidHeaderValue {
        #[from]
        source: reqwest::header::InvalidHeaderValue,
    },
}

/// Sampling parameters forwarded with every chat request the host makes.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SamplingOptions {
    pub temperature: f64,
    pub max_tokens: u64,
    pub top_p: f64,
    pub frequency_penalty: f64,
    pub presence_penalty: f64,
}

/// A chat client bound to one gateway region, model and token.
pub struct ChatClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    sampling: SamplingOptions,
    timeout: Duration,
}

impl ChatClient {
    /// Builds the client from the resolved adapter options and credential.
    pub fn configure(options: &AdapterOptions, credential: &CredentialRecord) -> Result<Self, Error> {
        let (_, auth_value) = credential.authorization_header();
        let mut auth = reqwest::header::HeaderValue::from_str(&auth_value)?;
        auth.set_sensitive(true);
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::HeaderName::from_static("authorization"),
            auth,
        );
        let timeout = Duration::from_millis(options.timeout_ms);
        let http = reqwest::Client::builder()
            .https_only(true)
            .default_headers(headers)
            .timeout(timeout)
            .build()?;
        Ok(ChatClient {
            http,
            base_url: inference_origin(&options.region),
            model: options.model.clone(),
            sampling: SamplingOptions {
                temperature: options.temperature,
                max_tokens: options.max_tokens,
                top_p: options.top_p,
                frequency_penalty: options.frequency_penalty,
                presence_penalty: options.presence_penalty,
            },
            timeout,
        })
    }

    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn sampling(&self) -> &SamplingOptions {
        &self.sampling
    }

    /// Non-secret summary of the configuration, suitable as an output record.
    pub fn summary(&self) -> Value {
        json!({
            "baseUrl": self.base_url,
            "model": self.model,
            "temperature": self.sampling.temperature,
            "maxTokens": self.sampling.max_tokens,
            "topP": self.sampling.top_p,
            "frequencyPenalty": self.sampling.frequency_penalty,
            "presencePenalty": self.sampling.presence_penalty,
            "timeoutMs": self.timeout.as_millis() as u64,
        })
    }
}

/// The same non-secret record, computed straight from the options.
pub fn adapter_record(options: &AdapterOptions) -> Value {
    json!({
        "baseUrl": inference_origin(&options.region),
        "model": options.model,
        "temperature": options.temperature,
        "maxTokens": options.max_tokens,
        "topP": options.top_p,
        "frequencyPenalty": options.frequency_penalty,
        "presencePenalty": options.presence_penalty,
        "timeoutMs": options.timeout_ms,
    })
}
