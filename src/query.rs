//! URL query-string helpers.
//!
//! These helpers work on URL text directly: the query is everything between
//! the first `?` and the fragment marker `#`.

use std::collections::BTreeMap;

/// Splits `url` into (before query, query, fragment including `#`).
fn split_url(url: &str) -> (&str, Option<&str>, &str) {
    let (rest, fragment) = match url.find('#') {
        Some(index) => url.split_at(index),
        None => (url, ""),
    };
    match rest.split_once('?') {
        Some((base, query)) => (base, Some(query), fragment),
        None => (rest, None, fragment),
    }
}

fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        _ => digit - b'A' + 10,
    }
}

fn percent_decode(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut index = 0;
    while index < bytes.len() {
        if bytes[index] == b'%' && index + 2 < bytes.len() {
            let (high, low) = (bytes[index + 1], bytes[index + 2]);
            if high.is_ascii_hexdigit() && low.is_ascii_hexdigit() {
                decoded.push((hex_value(high) << 4) | hex_value(low));
                index += 3;
                continue;
            }
        }
        decoded.push(bytes[index]);
        index += 1;
    }
    String::from_utf8_lossy(&decoded).into_owned()
}

fn percent_encode(text: &str) -> String {
    let mut encoded = String::with_capacity(text.len());
    for byte in text.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' => encoded.push(byte as char),
            b'-' | b'.' | b'_' | b'~' | b'/' | b'?' | b':' | b'@' | b'!' | b'$' | b'\'' => {
                encoded.push(byte as char)
            }
            b'(' | b')' | b'*' | b',' | b';' => encoded.push(byte as char),
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}

/// Returns the decoded query items of `url` as a map.
///
/// Returns `None` when the URL has no `?`. A later item overwrites an earlier
/// one with the same name, and an item without `=` removes its name.
///
/// # Example
///
/// ```rust
/// use garnish::query::query_parameters;
///
/// let params = query_parameters("https://example.com/cb?code=a%20b&state=xyz").unwrap();
/// assert_eq!(params["code"], "a b");
/// assert_eq!(params["state"], "xyz");
///
/// assert!(query_parameters("https://example.com/").is_none());
/// ```
pub fn query_parameters(url: &str) -> Option<BTreeMap<String, String>> {
    let (_, query, _) = split_url(url);
    let query = query?;

    let mut params = BTreeMap::new();
    for item in query.split('&').filter(|item| !item.is_empty()) {
        match item.split_once('=') {
            Some((name, value)) => {
                params.insert(percent_decode(name), percent_decode(value));
            }
            None => {
                params.remove(&percent_decode(item));
            }
        }
    }
    Some(params)
}

/// Appends `name` (and `=value` when given) to the query of `url`.
///
/// Existing items and any fragment are kept. Characters that would end the
/// item or the query (`&`, `=`, `+`, `#`, spaces, non-ASCII) are
/// percent-encoded.
///
/// # Example
///
/// ```rust
/// use garnish::query::append_query_item;
///
/// assert_eq!(
///     append_query_item("https://example.com/search?q=rust#top", "page", Some("2")),
///     "https://example.com/search?q=rust&page=2#top"
/// );
/// assert_eq!(
///     append_query_item("https://example.com/", "debug", None),
///     "https://example.com/?debug"
/// );
/// ```
pub fn append_query_item(url: &str, name: &str, value: Option<&str>) -> String {
    let (base, query, fragment) = split_url(url);

    let mut item = percent_encode(name);
    if let Some(value) = value {
        item.push('=');
        item.push_str(&percent_encode(value));
    }

    match query {
        Some(query) if !query.is_empty() => format!("{}?{}&{}{}", base, query, item, fragment),
        _ => format!("{}?{}{}", base, item, fragment),
    }
}
