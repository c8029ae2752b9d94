//! Form encoding of nested parameters in bracket notation, e.g. `customer[first_name]=Dan`.

use crate::Error;
use serde::Serialize;
use serde_json::Value;
use urlencoding::{decode, encode};

/// Encodes `params` as a query string. Nested objects use `parent[child]` keys, arrays
/// use repeated `parent[]` keys and `null` values are omitted.
pub(crate) fn to_query_string<T: Serialize + ?Sized>(params: &T) -> Result<String, Error> {
    let mut pairs = Vec::new();
    if let Value::Object(fields) = serde_json::to_value(params)? {
        for (key, value) in fields {
            flatten(key, value, &mut pairs);
        }
    }

    Ok(pairs
        .iter()
        .map(|(key, value)| format!("{}={}", encode(key), encode(value)))
        .collect::<Vec<_>>()
        .join("&"))
}

fn flatten(key: String, value: Value, pairs: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::Bool(b) => pairs.push((key, b.to_string())),
        Value::Number(n) => pairs.push((key, n.to_string())),
        Value::String(s) => pairs.push((key, s)),
        Value::Array(items) => {
            for item in items {
                flatten(format!("{}[]", key), item, pairs);
            }
        }
        Value::Object(fields) => {
            for (child, value) in fields {
                flatten(format!("{}[{}]", key, child), value, pairs);
            }
        }
    }
}

/// Splits a query string into decoded key/value pairs, preserving their order.
pub(crate) fn parse_query_string(query: &str) -> Result<Vec<(String, String)>, Error> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            Ok((decode_component(key)?, decode_component(value)?))
        })
        .collect()
}

fn decode_component(component: &str) -> Result<String, Error> {
    decode(&component.replace('+', " "))
        .map(|decoded| decoded.into_owned())
        .map_err(|e| Error::InvalidArgument(format!("Malformed query string: {}", e)))
}
