//! Error types for OAuth URL signing.
//!
//! All signing failures are represented by [`OAuthError`]. Signing is a pure
//! computation over the request URL and credentials, so the failure modes are
//! limited to malformed inputs.

/// Errors that can occur while signing a request URL.
#[derive(Debug, thiserror::Error)]
pub enum OAuthError {
    /// The configured signature method names an algorithm this crate does not
    /// implement. Only `HMAC-SHA1` and `HMAC-SHA256` are accepted.
    #[error("invalid signature method: {0}")]
    InvalidSignatureMethod(String),

    /// The request URL could not be parsed as an absolute URL.
    #[error("malformed request URL: {0}")]
    MalformedUrl(String),
}

/// Convenience result type for signing operations.
pub type OAuthResult<T> = Result<T, OAuthError>;
