//! IONOS credential kinds.
//!
//! Two credential families cover the whole pack: the legacy DNS/SSL gateway
//! (API key, or key prefix + secret as Basic auth) and the cloud-platform
//! APIs (bearer token). Each kind defines a cheap verification request the
//! host uses to validate stored secrets before first use.

use flowgrid_core::request::RequestDescriptor;

/// Origin of the legacy DNS/SSL gateway.
pub const GATEWAY_ORIGIN: &str = "https://api.hosting.ionos.com";

/// Origin of the cloud API family.
pub const CLOUD_ORIGIN: &str = "https://api.ionos.com/cloudapi/v6";

/// Credential types the nodes reference by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialKind {
    /// Legacy gateway key (`X-API-Key`, or prefix+secret Basic).
    GatewayApiKey,
    /// Cloud-platform bearer token.
    CloudToken,
}

impl CredentialKind {
    /// Name a node descriptor references.
    pub fn name(&self) -> &'static str {
        match self {
            CredentialKind::GatewayApiKey => "gatewayApiKey",
            CredentialKind::CloudToken => "cloudToken",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CredentialKind::GatewayApiKey => "IONOS Gateway API Key",
            CredentialKind::CloudToken => "IONOS Cloud Token",
        }
    }

    /// Lightweight GET the host issues to verify stored secrets.
    pub fn test_request(&self) -> RequestDescriptor {
        match self {
            CredentialKind::GatewayApiKey => {
                RequestDescriptor::get(format!("{GATEWAY_ORIGIN}/dns/v1/zones"))
            }
            CredentialKind::CloudToken => {
                RequestDescriptor::get(format!("{CLOUD_ORIGIN}/datacenters")).query("depth", 0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowgrid_core::request::Method;

    #[test]
    fn test_names_are_distinct() {
        assert_ne!(
            CredentialKind::GatewayApiKey.name(),
            CredentialKind::CloudToken.name()
        );
    }

    #[test]
    fn test_gateway_self_test_request() {
        let request = CredentialKind::GatewayApiKey.test_request();
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.url, "https://api.hosting.ionos.com/dns/v1/zones");
        assert!(request.query.is_empty());
    }

    #[test]
    fn test_cloud_self_test_request() {
        let request = CredentialKind::CloudToken.test_request();
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.url, "https://api.ionos.com/cloudapi/v6/datacenters");
        assert_eq!(request.query_value("depth"), Some("0"));
    }
}
