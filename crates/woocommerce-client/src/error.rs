//! Error types for the REST client.

use woocommerce_oauth::OAuthError;

/// Errors that can occur while issuing an API request.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// URL signing failed; the request never left the process.
    #[error(transparent)]
    Sign(#[from] OAuthError),

    /// The HTTP transport failed.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Convenience result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
