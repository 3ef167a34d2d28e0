//! API credentials for request signing.
//!
//! The consumer secret is wrapped in a [`secrecy::SecretString`] so it never
//! leaks through `Debug` or `Display` formatting and its memory is zeroed on
//! drop.

use secrecy::{ExposeSecret, SecretString};

/// Consumer credentials plus the configured signature method.
///
/// The signature method is carried as the configured string and validated
/// when a signing operation runs, so a misconfigured method surfaces as a
/// typed error from the signing call rather than at construction time.
#[derive(Clone)]
pub struct Credentials {
    consumer_key: String,
    consumer_secret: SecretString,
    signature_method: String,
}

impl Credentials {
    /// Create credentials from a consumer key, consumer secret, and
    /// signature method name (`"HMAC-SHA256"` or `"HMAC-SHA1"`).
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        signature_method: impl Into<String>,
    ) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: SecretString::from(consumer_secret.into()),
            signature_method: signature_method.into(),
        }
    }

    /// The consumer key.
    #[must_use]
    pub fn consumer_key(&self) -> &str {
        &self.consumer_key
    }

    /// Expose the consumer secret for key derivation.
    ///
    /// Only use the returned value as HMAC key material. Never log it or
    /// embed it in diagnostics.
    #[must_use]
    pub fn expose_secret(&self) -> &str {
        self.consumer_secret.expose_secret()
    }

    /// The configured signature method name.
    #[must_use]
    pub fn signature_method(&self) -> &str {
        &self.signature_method
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"[REDACTED]")
            .field("signature_method", &self.signature_method)
            .finish()
    }
}
