//! One-shot signed URL assembly.
//!
//! Signing happens in a single pass over the request URL:
//!
//! ```text
//! request URL ──▶ base URL + decoded params
//!                 merge oauth_consumer_key / oauth_nonce /
//!                       oauth_signature_method / oauth_timestamp
//!                 build base string ──▶ HMAC ──▶ oauth_signature
//!                 render sorted params ──▶ base URL ? query
//! ```
//!
//! The signature travels inside the query string; no `Authorization` header
//! is involved. Every call is an independent computation, so signing is safe
//! from any number of threads at once.

use tracing::debug;

use crate::canonical::{
    build_query_string, build_signature_base_string, encode_component, split_signing_url,
};
use crate::credentials::Credentials;
use crate::error::OAuthResult;
use crate::nonce::NonceProvider;
use crate::signer::{SignatureMethod, compute_signature, signing_key};

/// One request to be signed.
#[derive(Debug, Clone)]
pub struct SigningRequest {
    /// Full request URL, including any caller query parameters.
    pub url: String,
    /// HTTP method; normalized to upper case during signing.
    pub http_method: String,
    /// API version segment (for example `"v3"`). Selects the key derivation
    /// rule.
    pub api_version: String,
}

impl SigningRequest {
    /// Create a signing request.
    pub fn new(
        url: impl Into<String>,
        http_method: impl Into<String>,
        api_version: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            http_method: http_method.into(),
            api_version: api_version.into(),
        }
    }
}

/// Sign a request URL for the legacy WooCommerce API.
///
/// Returns the full URL with the four generated oauth parameters and the
/// computed `oauth_signature` embedded in the query string, all keys in
/// ascending byte-wise order.
///
/// # Errors
///
/// Returns [`OAuthError::InvalidSignatureMethod`] when the credentials carry
/// an unknown method name and [`OAuthError::MalformedUrl`] when the request
/// URL cannot be parsed. Both abort before any signature work.
///
/// [`OAuthError::InvalidSignatureMethod`]: crate::OAuthError::InvalidSignatureMethod
/// [`OAuthError::MalformedUrl`]: crate::OAuthError::MalformedUrl
///
/// # Examples
///
/// ```
/// use woocommerce_oauth::{Credentials, FixedNonce, SigningRequest, sign_url};
///
/// let request = SigningRequest::new("http://dev.test/wc-api/v3/customers", "get", "v3");
/// let credentials = Credentials::new("user", "pass", "HMAC-SHA256");
/// let nonce = FixedNonce::new("deadbeef", 1_470_000_000);
///
/// let signed = sign_url(&request, &credentials, &nonce).unwrap();
/// assert!(signed.starts_with("http://dev.test/wc-api/v3/customers?oauth_consumer_key=user"));
/// ```
pub fn sign_url(
    request: &SigningRequest,
    credentials: &Credentials,
    nonce_provider: &dyn NonceProvider,
) -> OAuthResult<String> {
    let method = SignatureMethod::from_name(credentials.signature_method())?;
    let http_method = request.http_method.to_uppercase();

    let (base_url, mut params) = split_signing_url(&request.url)?;

    params.insert(
        "oauth_consumer_key".to_owned(),
        credentials.consumer_key().to_owned(),
    );
    params.insert("oauth_nonce".to_owned(), nonce_provider.nonce());
    params.insert(
        "oauth_signature_method".to_owned(),
        method.as_str().to_owned(),
    );
    params.insert(
        "oauth_timestamp".to_owned(),
        nonce_provider.timestamp().to_string(),
    );

    let base_string = build_signature_base_string(&http_method, &base_url, &params);
    debug!(base_string, "Built signature base string");

    let key = signing_key(credentials.expose_secret(), &request.api_version);
    let signature = compute_signature(method, &key, &base_string);

    params.insert("oauth_signature".to_owned(), encode_component(&signature));

    let signed_url = format!("{base_url}?{}", build_query_string(&params));
    debug!(signed_url, "Assembled signed URL");

    Ok(signed_url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OAuthError;
    use crate::nonce::FixedNonce;

    fn fixed() -> FixedNonce {
        FixedNonce::new("deadbeef", 1_470_000_000)
    }

    fn credentials() -> Credentials {
        Credentials::new("user", "pass", "HMAC-SHA256")
    }

    fn query_keys(signed: &str) -> Vec<&str> {
        let (_, query) = signed.split_once('?').unwrap();
        query
            .split('&')
            .map(|pair| pair.split_once('=').unwrap().0)
            .collect()
    }

    #[test]
    fn test_should_sign_plain_get_matching_reference() {
        let request = SigningRequest::new("http://dev.test/wc-api/v3/customers", "GET", "v3");

        let signed = sign_url(&request, &credentials(), &fixed()).unwrap();

        assert_eq!(
            signed,
            "http://dev.test/wc-api/v3/customers\
             ?oauth_consumer_key=user\
             &oauth_nonce=deadbeef\
             &oauth_signature=hUrRUFZsHizh3Muje3zqRE8%2F1HTtjgbEaGGNT8hubuc%3D\
             &oauth_signature_method=HMAC-SHA256\
             &oauth_timestamp=1470000000"
        );
    }

    #[test]
    fn test_should_sign_sha1_matching_reference() {
        let request = SigningRequest::new("http://dev.test/wc-api/v3/customers", "GET", "v3");
        let credentials = Credentials::new("user", "pass", "HMAC-SHA1");

        let signed = sign_url(&request, &credentials, &fixed()).unwrap();

        assert_eq!(
            signed,
            "http://dev.test/wc-api/v3/customers\
             ?oauth_consumer_key=user\
             &oauth_nonce=deadbeef\
             &oauth_signature=5mXNE0iw%2BmQ7C7iFYszXRz916Uw%3D\
             &oauth_signature_method=HMAC-SHA1\
             &oauth_timestamp=1470000000"
        );
    }

    #[test]
    fn test_should_embed_existing_query_matching_reference() {
        let request = SigningRequest::new(
            "http://dev.test/wc-api/v3/products?filter%5Bsku%5D=12%203&order=created_at",
            "GET",
            "v3",
        );

        let signed = sign_url(&request, &credentials(), &fixed()).unwrap();

        assert_eq!(
            signed,
            "http://dev.test/wc-api/v3/products\
             ?filter%5Bsku%5D=12%203\
             &oauth_consumer_key=user\
             &oauth_nonce=deadbeef\
             &oauth_signature=hF0Nx%2FT4028Ll46DPelGTIHSG7QXokd9hXhrcIBiUfs%3D\
             &oauth_signature_method=HMAC-SHA256\
             &oauth_timestamp=1470000000\
             &order=created_at"
        );
    }

    #[test]
    fn test_should_interleave_caller_and_oauth_keys() {
        let request = SigningRequest::new(
            "http://dev.test/wc-api/v3/customers?abc=123&oauth_d=456&xyz=789",
            "GET",
            "v3",
        );

        let signed = sign_url(&request, &credentials(), &fixed()).unwrap();

        assert_eq!(
            query_keys(&signed),
            vec![
                "abc",
                "oauth_consumer_key",
                "oauth_d",
                "oauth_nonce",
                "oauth_signature",
                "oauth_signature_method",
                "oauth_timestamp",
                "xyz",
            ]
        );
        assert_eq!(
            signed,
            "http://dev.test/wc-api/v3/customers\
             ?abc=123\
             &oauth_consumer_key=user\
             &oauth_d=456\
             &oauth_nonce=deadbeef\
             &oauth_signature=NJZ54p0RusVIpDrth9dY8tkIo4r6a3DxdcSoMru0afI%3D\
             &oauth_signature_method=HMAC-SHA256\
             &oauth_timestamp=1470000000\
             &xyz=789"
        );
    }

    #[test]
    fn test_should_treat_bare_question_mark_as_no_params() {
        let plain = SigningRequest::new("http://dev.test/wc-api/v3/customers", "GET", "v3");
        let trailing = SigningRequest::new("http://dev.test/wc-api/v3/customers?", "GET", "v3");

        assert_eq!(
            sign_url(&plain, &credentials(), &fixed()).unwrap(),
            sign_url(&trailing, &credentials(), &fixed()).unwrap()
        );
    }

    #[test]
    fn test_should_normalize_http_method_to_uppercase() {
        let lower = SigningRequest::new("http://dev.test/wc-api/v3/customers", "get", "v3");
        let upper = SigningRequest::new("http://dev.test/wc-api/v3/customers", "GET", "v3");

        assert_eq!(
            sign_url(&lower, &credentials(), &fixed()).unwrap(),
            sign_url(&upper, &credentials(), &fixed()).unwrap()
        );
    }

    #[test]
    fn test_should_be_deterministic_for_fixed_nonce() {
        let request = SigningRequest::new(
            "http://dev.test/wc-api/v3/products?order=created_at",
            "GET",
            "v3",
        );

        let first = sign_url(&request, &credentials(), &fixed()).unwrap();
        let second = sign_url(&request, &credentials(), &fixed()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_should_derive_raw_key_for_v1_requests() {
        // Key derivation follows the configured version, not the URL path.
        let request = SigningRequest::new("http://dev.test/wc-api/v3/customers", "GET", "v1");

        let signed = sign_url(&request, &credentials(), &fixed()).unwrap();

        assert!(signed.contains(
            "oauth_signature=xqqF3ptuuS%2BPjK4%2F2yJhjVgKEqaw3vtOJTQ27ENG%2FHs%3D"
        ));
    }

    #[test]
    fn test_should_fail_on_unknown_signature_method() {
        let request = SigningRequest::new("http://dev.test/wc-api/v3/customers", "GET", "v3");
        let credentials = Credentials::new("user", "pass", "GARBAGE");

        let result = sign_url(&request, &credentials, &fixed());
        assert!(
            matches!(result, Err(OAuthError::InvalidSignatureMethod(name)) if name == "GARBAGE")
        );
    }

    #[test]
    fn test_should_fail_on_malformed_url() {
        let request = SigningRequest::new("not a url", "GET", "v3");

        let result = sign_url(&request, &credentials(), &fixed());
        assert!(matches!(result, Err(OAuthError::MalformedUrl(_))));
    }
}
