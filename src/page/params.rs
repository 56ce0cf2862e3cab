//! Query-string decoding.

use std::collections::HashMap;

/// Decode a URL query string into a parameter map.
///
/// Accepts an optional leading `?`. `+` decodes to a space, percent escapes
/// are decoded as UTF-8 (falling back to the raw text when they are not
/// valid UTF-8), a key without `=` maps to the empty string, and a later
/// duplicate key replaces an earlier one.
#[must_use]
pub fn deparam(query: &str) -> HashMap<String, String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key), decode_component(value))
        })
        .collect()
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}
