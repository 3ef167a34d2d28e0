//! Canonical parameter handling and percent-encoding for URL signing.
//!
//! The legacy WooCommerce API signs a base string in which the separators
//! themselves travel percent-encoded:
//!
//! ```text
//! METHOD&encoded(base_url)&key1%3Dvalue1%26key2%3Dvalue2
//! ```
//!
//! Keys and values inside the parameter block are escaped twice: once with
//! the form-encoding unreserved set, then a second time by rewriting every
//! `%` as `%25`. The base URL is escaped once. The server rebuilds the exact
//! same bytes before recomputing the signature, so none of these rules are
//! negotiable.

use std::collections::BTreeMap;

use percent_encoding::{AsciiSet, CONTROLS, NON_ALPHANUMERIC, utf8_percent_encode};
use url::{Position, Url};

use crate::error::{OAuthError, OAuthResult};

/// The set of characters that must be percent-encoded in parameter keys,
/// parameter values, and the base request URL.
///
/// All characters except unreserved characters (A-Z, a-z, 0-9, `-`, `_`,
/// `.`, `~`) are encoded. Space becomes `%20`, never `+`.
const PARAM_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// The set of characters escaped by the final whole-URL encoding pass.
///
/// Only characters that are invalid in a URL query are escaped: controls,
/// space, and the printable characters RFC 3986 excludes from queries.
/// Reserved characters and `%` pass through untouched so already-encoded
/// octets are not encoded a second time.
const QUERY_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Double-escape a parameter key or value for the signature base string.
///
/// The text is percent-encoded with the form-encoding unreserved set and
/// every `%` in the result is then rewritten as `%25`. A space therefore
/// becomes `%2520`, a literal `%` becomes `%2525`, and unreserved characters
/// pass through unchanged.
///
/// # Examples
///
/// ```
/// use woocommerce_oauth::canonical::encode_param;
///
/// assert_eq!(encode_param("abc-123_~."), "abc-123_~.");
/// assert_eq!(encode_param("a b"), "a%2520b");
/// assert_eq!(encode_param("100%"), "100%2525");
/// ```
#[must_use]
pub fn encode_param(text: &str) -> String {
    utf8_percent_encode(text, PARAM_ENCODE_SET)
        .to_string()
        .replace('%', "%25")
}

/// Percent-encode text once with the form-encoding unreserved set.
///
/// Used for the base request URL inside the signature base string and for
/// the URL-embedded form of the computed signature.
///
/// # Examples
///
/// ```
/// use woocommerce_oauth::canonical::encode_component;
///
/// assert_eq!(
///     encode_component("http://dev.test/x"),
///     "http%3A%2F%2Fdev.test%2Fx"
/// );
/// assert_eq!(encode_component("Ab+/="), "Ab%2B%2F%3D");
/// ```
#[must_use]
pub fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, PARAM_ENCODE_SET).to_string()
}

/// Escape a joined query string for use in the final URL.
///
/// Applies one whole-string pass that escapes only characters invalid in a
/// URL query. Percent signs survive, so octets that are already encoded stay
/// exactly as they are.
///
/// # Examples
///
/// ```
/// use woocommerce_oauth::canonical::encode_query;
///
/// assert_eq!(encode_query("a=1&b=two words"), "a=1&b=two%20words");
/// assert_eq!(encode_query("x=%2B"), "x=%2B");
/// ```
#[must_use]
pub fn encode_query(query: &str) -> String {
    utf8_percent_encode(query, QUERY_ENCODE_SET).to_string()
}

/// Split a request URL into its base URL and decoded query parameters.
///
/// The base URL is everything up to the `?`. Query parameters are decoded as
/// form-encoded pairs; when a key appears more than once, the first value
/// wins. A trailing `?` with nothing after it yields an empty map.
///
/// # Errors
///
/// Returns [`OAuthError::MalformedUrl`] if the URL cannot be parsed as an
/// absolute URL.
///
/// # Examples
///
/// ```
/// use woocommerce_oauth::canonical::split_signing_url;
///
/// let (base, params) =
///     split_signing_url("http://dev.test/wc-api/v3/orders?page=2").unwrap();
/// assert_eq!(base, "http://dev.test/wc-api/v3/orders");
/// assert_eq!(params["page"], "2");
/// ```
pub fn split_signing_url(url: &str) -> OAuthResult<(String, BTreeMap<String, String>)> {
    let parsed = Url::parse(url).map_err(|e| OAuthError::MalformedUrl(format!("{url}: {e}")))?;

    let mut params = BTreeMap::new();
    if let Some(query) = parsed.query() {
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            params
                .entry(key.into_owned())
                .or_insert_with(|| value.into_owned());
        }
    }

    Ok((parsed[..Position::AfterPath].to_owned(), params))
}

/// Assemble the signature base string for a request.
///
/// The parameter block renders each pair as `key%3Dvalue` (both sides
/// double-escaped via [`encode_param`]) and joins pairs with the literal
/// three-character sequence `%26`. Map iteration supplies ascending byte-wise
/// key order.
#[must_use]
pub fn build_signature_base_string(
    method: &str,
    base_url: &str,
    params: &BTreeMap<String, String>,
) -> String {
    let param_block = params
        .iter()
        .map(|(key, value)| format!("{}%3D{}", encode_param(key), encode_param(value)))
        .collect::<Vec<_>>()
        .join("%26");

    format!("{method}&{}&{param_block}", encode_component(base_url))
}

/// Render the final URL query from the sorted parameter set.
///
/// Pairs are joined with ordinary `=` and `&` separators (values are
/// expected to already carry any percent-encoding they need), then the
/// joined string gets one pass through [`encode_query`].
#[must_use]
pub fn build_query_string(params: &BTreeMap<String, String>) -> String {
    let joined = params
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");

    encode_query(&joined)
}
