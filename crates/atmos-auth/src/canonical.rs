//! Canonical string-to-sign construction.
//!
//! Atmos signs a newline-joined canonical rendering of the request:
//!
//! ```text
//! HTTP-Verb + "\n" +
//! Content-Type + "\n" +
//! Range + "\n" +
//! Date + "\n" +
//! lowercase(Path) + "\n" +
//! CanonicalizedEmcHeaders
//! ```
//!
//! where `CanonicalizedEmcHeaders` is one `name:value` line per `x-emc-*`
//! header, sorted by name, with multi-line values flattened. The canonical
//! string never ends with a newline. Every rule here must match the server
//! bit-for-bit; a one-byte deviation produces a signature mismatch with no
//! further diagnostics.

use std::collections::BTreeMap;

use http::HeaderMap;
use http::header::{CONTENT_TYPE, DATE};
use http::request::Parts;

use crate::error::AuthError;
use crate::headers::{ECHOED, META_PREFIX};

/// Build the canonical string to sign from the request parts.
///
/// The `date` header must already be set (the filter stamps it before
/// canonicalizing) and its first value is used verbatim. The resource path
/// and echoed header values are lower-cased; the method and date are not.
///
/// # Errors
///
/// Returns [`AuthError::MissingDateHeader`] if the `date` header is absent,
/// or [`AuthError::InvalidHeaderEncoding`] if a participating header value
/// is not valid text.
///
/// # Examples
///
/// ```
/// let (parts, ()) = http::Request::builder()
///     .method("GET")
///     .uri("https://accesspoint.atmosonline.com/rest/objects/123")
///     .header("date", "Tue, 01 Jan 2030 00:00:00 GMT")
///     .header("x-emc-meta", "foo=bar")
///     .body(())
///     .unwrap()
///     .into_parts();
///
/// let to_sign = atmos_auth::string_to_sign(&parts).unwrap();
/// assert_eq!(
///     to_sign,
///     "GET\n\n\nTue, 01 Jan 2030 00:00:00 GMT\n/rest/objects/123\nx-emc-meta:foo=bar"
/// );
/// ```
pub fn string_to_sign(parts: &Parts) -> Result<String, AuthError> {
    let headers = &parts.headers;
    let mut buffer = String::new();

    buffer.push_str(parts.method.as_str());
    buffer.push('\n');

    // Payload metadata: the content type, or an empty line without one.
    buffer.push_str(first_value(headers, CONTENT_TYPE.as_str())?.unwrap_or(""));
    buffer.push('\n');

    // Echoed headers contribute only their value, lower-cased, or an empty
    // line when absent.
    for name in ECHOED {
        let value = first_value(headers, name)?.unwrap_or("");
        buffer.push_str(&value.to_lowercase());
        buffer.push('\n');
    }

    let date = first_value(headers, DATE.as_str())?.ok_or(AuthError::MissingDateHeader)?;
    buffer.push_str(date);
    buffer.push('\n');

    buffer.push_str(&parts.uri.path().to_lowercase());
    buffer.push('\n');

    buffer.push_str(&canonicalized_headers(headers)?);

    // No terminating newline after the last line. With metadata headers
    // present this strips the block's final separator; without any, it
    // strips the newline after the path.
    if buffer.ends_with('\n') {
        buffer.pop();
    }

    Ok(buffer)
}

/// Build the sorted `x-emc-*` header block, one `name:value` line per
/// header name, each line newline-terminated.
///
/// Values spanning multiple lines are flattened, and the values of a
/// repeated header are joined with single spaces in their original order.
/// A name with a single empty value still contributes `name:`.
fn canonicalized_headers(headers: &HeaderMap) -> Result<String, AuthError> {
    // The `http` crate stores names lower-cased, so a BTreeMap keyed by the
    // name gives the required lexicographic order directly.
    let mut grouped: BTreeMap<&str, Vec<String>> = BTreeMap::new();
    for name in headers.keys() {
        if !name.as_str().starts_with(META_PREFIX) {
            continue;
        }
        let mut values = Vec::new();
        for value in headers.get_all(name) {
            values.push(flatten_value(value.to_str()?));
        }
        grouped.insert(name.as_str(), values);
    }

    let mut block = String::new();
    for (name, values) in &grouped {
        block.push_str(name);
        block.push(':');
        block.push_str(&values.join(" "));
        block.push('\n');
    }
    Ok(block)
}

/// Collapse a header value onto one line: each run of two consecutive
/// spaces becomes a single space, then every newline is deleted outright.
fn flatten_value(value: &str) -> String {
    value.replace("  ", " ").replace('\n', "")
}

/// First value of a header as text, or `None` when the header is absent.
fn first_value<'a>(headers: &'a HeaderMap, name: &str) -> Result<Option<&'a str>, AuthError> {
    headers
        .get(name)
        .map(http::HeaderValue::to_str)
        .transpose()
        .map_err(AuthError::from)
}
