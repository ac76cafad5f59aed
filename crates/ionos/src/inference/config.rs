//! Chat-model adapter configuration structures.

use serde::Deserialize;

pub const DEFAULT_REGION: &str = "de-txl";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_MAX_TOKENS: u64 = 1024;
pub const DEFAULT_TOP_P: f64 = 1.0;
pub const DEFAULT_FREQUENCY_PENALTY: f64 = 0.0;
pub const DEFAULT_PRESENCE_PENALTY: f64 = 0.0;
pub const DEFAULT_TIMEOUT_MS: u64 = 60_000;

/// User-facing adapter options; every sampling knob has a fixed default.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdapterOptions {
    pub model: String,
    #[serde(default = "default_region")]
    pub region: String,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u64,
    #[serde(default = "default_top_p")]
    pub top_p: f64,
    #[serde(default = "default_frequency_penalty")]
    pub frequency_penalty: f64,
    #[serde(default = "default_presence_penalty")]
    pub presence_penalty: f64,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

fn default_temperature() -> f64 {
    DEFAULT_TEMPERATURE
}

fn default_max_tokens() -> u64 {
    DEFAULT_MAX_TOKENS
}

fn default_top_p() -> f64 {
    DEFAULT_TOP_P
}

fn default_frequency_penalty() -> f64 {
    DEFAULT_FREQUENCY_PENALTY
}

fn default_presence_penalty() -> f64 {
    DEFAULT_PRESENCE_PENALTY
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}
