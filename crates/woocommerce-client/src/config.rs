//! Client configuration.

/// Options controlling API flavor, transport security, and authentication.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Route requests through the modern `wp-json` prefix instead of the
    /// legacy `wc-api` prefix.
    pub wp_api: bool,
    /// API version segment, for example `"v3"`.
    pub version: String,
    /// Verify TLS certificates. Disable only against development stores
    /// with self-signed certificates.
    pub verify_ssl: bool,
    /// Signature method used when signing URLs for plain-HTTP stores.
    pub signature_method: String,
    /// On TLS connections, send credentials as query parameters instead of
    /// a basic-auth header. Some hosts strip the `Authorization` header.
    pub query_string_auth: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            wp_api: false,
            version: "v3".to_owned(),
            verify_ssl: true,
            signature_method: "HMAC-SHA256".to_owned(),
            query_string_auth: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_create_default_config() {
        let config = ClientConfig::default();
        assert!(!config.wp_api);
        assert_eq!(config.version, "v3");
        assert!(config.verify_ssl);
        assert_eq!(config.signature_method, "HMAC-SHA256");
        assert!(!config.query_string_auth);
    }
}
