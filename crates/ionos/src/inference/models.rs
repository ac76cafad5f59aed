//! Chat-model options loader.
//!
//! Lists the gateway's models, drops embedding models and alphabetizes the
//! remainder for display. Any failure falls back to the static catalogue so
//! the form stays usable while the gateway is unreachable.

use flowgrid_core::credential::CredentialRecord;
use flowgrid_core::request::RequestDescriptor;
use flowgrid_core::transport::Transport;
use serde_json::Value;
use tracing::warn;

/// Known chat models, served when the listing call fails.
const STATIC_MODELS: &[&str] = &[
    "meta-llama/Llama-3.3-70B-Instruct",
    "meta-llama/Meta-Llama-3.1-8B-Instruct",
    "mistralai/Mistral-Nemo-Instruct-2407",
    "openGPT-X/Teuken-7B-instruct-commercial",
];

/// Substrings marking an identifier as an embedding model.
const EMBEDDING_MARKERS: &[&str] = &["e5", "embed"];

pub fn inference_origin(region: &str) -> String {
    format!("https://openai.inference.{region}.ionos.com/v1")
}

fn is_embedding_id(id: &str) -> bool {
    let lower = id.to_lowercase();
    EMBEDDING_MARKERS.iter().any(|marker| lower.contains(marker))
}

fn static_models() -> Vec<String> {
    let mut models: Vec<String> = STATIC_MODELS.iter().map(|m| m.to_string()).collect();
    models.sort();
    models
}

/// Extracts chat-model ids from a `/models` listing response.
fn chat_model_ids(response: &Value) -> Option<Vec<String>> {
    let data = response.get("data")?.as_array()?;
    let mut models: Vec<String> = data
        .iter()
        .filter_map(|entry| entry.get("id").and_then(Value::as_str))
        .filter(|id| !is_embedding_id(id))
        .map(str::to_string)
        .collect();
    models.sort();
    Some(models)
}

/// Fetches the selectable chat models for the form dropdown.
pub async fn load_model_options(
    transport: &dyn Transport,
    credential: &CredentialRecord,
    region: &str,
) -> Vec<String> {
    let request = RequestDescriptor::get(format!("{}/models", inference_origin(region)));
    match transport.execute(credential, request).await {
        Ok(response) => chat_model_ids(&response).unwrap_or_else(|| {
            warn!("model listing had no data array, using static catalogue");
            static_models()
        }),
        Err(error) => {
            warn!(%error, "model listing failed, using static catalogue");
            static_models()
        }
    }
}
