//! Query parameter flattening.
//!
//! Caller data arrives as JSON objects and is rendered into query fragments
//! the API understands: scalars as `key=value`, nested objects as
//! `key[inner]=value`, arrays as `key[]=a&key[]=b`. Flattening is one level
//! deep.

use serde_json::{Map, Value};
use woocommerce_oauth::canonical::encode_query;

/// Render a JSON object into flat `key=value` fragments, one per pair.
#[must_use]
pub fn flatten_query(data: &Map<String, Value>) -> Vec<String> {
    data.iter()
        .flat_map(|(key, value)| match value {
            Value::Object(inner) => inner
                .iter()
                .map(|(inner_key, inner_value)| {
                    format!("{key}[{inner_key}]={}", scalar_text(inner_value))
                })
                .collect::<Vec<_>>(),
            Value::Array(items) => items
                .iter()
                .map(|item| format!("{key}[]={}", scalar_text(item)))
                .collect(),
            other => vec![format!("{key}={}", scalar_text(other))],
        })
        .collect()
}

/// Append flattened query data to an endpoint.
///
/// Joins the fragments with `&` and escapes the joined fragment once for URL
/// use; the existing endpoint text is left as-is. An endpoint that already
/// carries a query gets `&` instead of `?`.
#[must_use]
pub fn append_query(endpoint: &str, data: &Map<String, Value>) -> String {
    if data.is_empty() {
        return endpoint.to_owned();
    }

    let mut endpoint = endpoint.to_owned();
    if !endpoint.contains('?') {
        endpoint.push('?');
    }
    if !endpoint.ends_with('?') {
        endpoint.push('&');
    }

    endpoint + &encode_query(&flatten_query(data).join("&"))
}

/// Text form of a scalar JSON value, without the quotes `Value::to_string`
/// would add around strings.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
