//! Async REST client for the WooCommerce API.
//!
//! Wraps a `reqwest` client with WooCommerce's two authentication schemes:
//! TLS stores authenticate the transport (HTTP basic auth, or query string
//! credentials for hosts that strip the `Authorization` header), while
//! plain-HTTP stores get every request URL signed through the
//! [`woocommerce_oauth`] crate.
//!
//! # Usage
//!
//! ```rust
//! use woocommerce_client::{Client, ClientConfig};
//!
//! let client = Client::new("https://shop.example", "ck_user", "cs_pass").unwrap();
//!
//! // Inside an async runtime:
//! //     let response = client.get("orders", None).await?;
//! //     let orders: serde_json::Value = response.json().await?;
//! ```
//!
//! # Modules
//!
//! - [`client`] - The async client and its HTTP operations
//! - [`config`] - Client configuration
//! - [`error`] - Client error types
//! - [`query`] - Query parameter flattening

pub mod client;
pub mod config;
pub mod error;
pub mod query;

pub use client::Client;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
