//! OAuth 1.0a one-legged URL signing for the WooCommerce legacy REST API.
//!
//! This crate produces signed request URLs for WooCommerce stores served over
//! plain HTTP, where the legacy `wc-api` endpoints authenticate through query
//! parameters instead of an `Authorization` header. It implements the exact
//! variant the server verifies: double-escaped base-string parameters,
//! percent-encoded `%3D`/`%26` separators, and a version-dependent HMAC key.
//!
//! # Overview
//!
//! Given a request URL, consumer credentials, and an HTTP method, signing
//! merges the generated `oauth_*` parameters into the URL's query, computes
//! the HMAC signature over a canonical base string, and returns the full URL
//! with `oauth_signature` embedded. There is no token handshake and no
//! network I/O; every call is an independent, thread-safe computation.
//!
//! # Usage
//!
//! ```rust
//! use woocommerce_oauth::{Credentials, SigningRequest, SystemNonce, sign_url};
//!
//! let credentials = Credentials::new("ck_user", "cs_pass", "HMAC-SHA256");
//! let request = SigningRequest::new("http://shop.test/wc-api/v3/orders", "GET", "v3");
//!
//! let signed = sign_url(&request, &credentials, &SystemNonce).unwrap();
//! assert!(signed.contains("oauth_signature="));
//! ```
//!
//! # Modules
//!
//! - [`canonical`] - Percent-encoding rules and signature base string assembly
//! - [`credentials`] - Consumer credentials with a redacting `Debug`
//! - [`error`] - Signing error types
//! - [`nonce`] - Nonce and timestamp providers
//! - [`signed_url`] - The one-shot URL signing entry point
//! - [`signer`] - Signature methods, key derivation, and HMAC computation

pub mod canonical;
pub mod credentials;
pub mod error;
pub mod nonce;
pub mod signed_url;
pub mod signer;

pub use credentials::Credentials;
pub use error::{OAuthError, OAuthResult};
pub use nonce::{FixedNonce, NONCE_WINDOW_SECS, NonceProvider, SystemNonce};
pub use signed_url::{SigningRequest, sign_url};
pub use signer::{SignatureMethod, compute_signature, signing_key};
