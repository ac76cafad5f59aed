//! Credential records.
//!
//! Credentials are opaque to nodes: a node's descriptor names a credential
//! type, the host stores the secret material, and the transport injects the
//! matching header before sending. `Debug` output redacts secrets.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

/// Stored provider credential material.
#[derive(Clone, PartialEq, Eq)]
pub enum CredentialRecord {
    /// Plain API key sent as an `X-API-Key` header.
    ApiKey { key: String },
    /// Key prefix + secret sent as HTTP Basic authorization.
    PrefixSecret { prefix: String, secret: String },
    /// Bearer token for the cloud-platform API family.
    BearerToken { token: String },
}

impl CredentialRecord {
    /// Header the transport injects for this credential.
    pub fn authorization_header(&self) -> (&'static str, String) {
        match self {
            CredentialRecord::ApiKey { key } => ("X-API-Key", key.clone()),
            CredentialRecord::PrefixSecret { prefix, secret } => {
                let encoded = BASE64.encode(format!("{prefix}:{secret}"));
                ("Authorization", format!("Basic {encoded}"))
            }
            CredentialRecord::BearerToken { token } => {
                ("Authorization", format!("Bearer {token}"))
            }
        }
    }
}

impl std::fmt::Debug for CredentialRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CredentialRecord::ApiKey { .. } => f.write_str("ApiKey(<redacted>)"),
            CredentialRecord::PrefixSecret { prefix, .. } => f
                .debug_struct("PrefixSecret")
                .field("prefix", prefix)
                .field("secret", &"<redacted>")
                .finish(),
            CredentialRecord::BearerToken { .. } => f.write_str("BearerToken(<redacted>)"),
        }
    }
}
