//! Nonce and timestamp generation.
//!
//! This module defines the [`NonceProvider`] trait for supplying the
//! `oauth_nonce` / `oauth_timestamp` pair, along with the production
//! [`SystemNonce`] implementation and a [`FixedNonce`] for deterministic
//! tests.

use std::time::{SystemTime, UNIX_EPOCH};

use sha1::{Digest, Sha1};

/// How long the server remembers used nonces, in seconds.
///
/// A nonce only has to be unique within this window; after it the server has
/// forgotten the old value and a repeat is accepted again.
pub const NONCE_WINDOW_SECS: u64 = 15 * 60;

/// Trait for supplying the nonce and timestamp of a signing operation.
///
/// The signing entry point takes a provider reference so tests can pin
/// deterministic values while production code uses the system clock.
pub trait NonceProvider: Send + Sync {
    /// Produce a nonce for one signing operation.
    fn nonce(&self) -> String;

    /// Current Unix timestamp in seconds.
    fn timestamp(&self) -> u64;
}

/// System-clock nonce provider.
///
/// The nonce is the SHA-1 hex digest of a value combining the time elapsed
/// inside the current retention window (at nanosecond resolution, so the
/// value rotates continuously) with a process-id offset that keeps separate
/// processes in disjoint value ranges. This is best-effort uniqueness, not a
/// guarantee: two processes whose ids collide after pid reuse, or two calls
/// landing on the same clock reading, can still produce the same nonce.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemNonce;

impl NonceProvider for SystemNonce {
    fn nonce(&self) -> String {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock before UNIX epoch");

        let window_nanos = u128::from(NONCE_WINDOW_SECS) * 1_000_000_000;
        let offset = now.as_nanos() % window_nanos;
        let salt = u128::from(std::process::id()) * window_nanos;

        hex::encode(Sha1::digest((offset + salt).to_string().as_bytes()))
    }

    fn timestamp(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock before UNIX epoch")
            .as_secs()
    }
}

/// Fixed nonce provider for tests and offline signature verification.
#[derive(Debug, Clone)]
pub struct FixedNonce {
    nonce: String,
    timestamp: u64,
}

impl FixedNonce {
    /// Create a provider that always returns the given nonce and timestamp.
    pub fn new(nonce: impl Into<String>, timestamp: u64) -> Self {
        Self {
            nonce: nonce.into(),
            timestamp,
        }
    }
}

impl NonceProvider for FixedNonce {
    fn nonce(&self) -> String {
        self.nonce.clone()
    }

    fn timestamp(&self) -> u64 {
        self.timestamp
    }
}
