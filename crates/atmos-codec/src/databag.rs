//! Opaque, identifier-keyed JSON documents ("data bag items").
//!
//! Data bag items are user-owned JSON: the client probes the document only
//! far enough to pull out its `id` field and otherwise treats the text as
//! an opaque blob. Encoding emits the stored text verbatim, so unknown
//! fields, ordering, and formatting all survive a decode/encode round trip
//! byte-for-byte.

use std::fmt;

use serde::Deserialize;

use crate::error::CodecError;

/// An identifier-keyed JSON document, kept as raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataBagItem {
    id: String,
    raw: String,
}

/// Probe for only the `id` field; everything else stays opaque.
#[derive(Deserialize)]
struct IdHolder {
    id: String,
}

impl DataBagItem {
    /// Build an item from an already-known identifier and raw JSON text.
    ///
    /// The text is trusted to contain a matching `id` field; use
    /// [`DataBagItem::decode`] when parsing untrusted input.
    #[must_use]
    pub fn new(id: impl Into<String>, raw: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            raw: raw.into(),
        }
    }

    /// Decode raw JSON text, extracting the `id` field.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Json`] if the text is not valid JSON or lacks
    /// an `id` field.
    ///
    /// # Examples
    ///
    /// ```
    /// use atmos_codec::DataBagItem;
    ///
    /// let item = DataBagItem::decode(r#"{"id":"users","admins":["root"]}"#).unwrap();
    /// assert_eq!(item.id(), "users");
    /// assert_eq!(item.encode(), r#"{"id":"users","admins":["root"]}"#);
    /// ```
    pub fn decode(text: &str) -> Result<Self, CodecError> {
        let holder: IdHolder = serde_json::from_str(text)?;
        Ok(Self {
            id: holder.id,
            raw: text.to_owned(),
        })
    }

    /// Encode the item back to its raw textual form, unmodified.
    #[must_use]
    pub fn encode(&self) -> String {
        self.raw.clone()
    }

    /// The document identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The raw JSON text.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for DataBagItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_extract_id_and_keep_raw_text() {
        let text = r#"{"id":"item1","description":"pizza","price":7}"#;
        let item = DataBagItem::decode(text).unwrap();
        assert_eq!(item.id(), "item1");
        assert_eq!(item.raw(), text);
    }

    #[test]
    fn test_should_round_trip_unknown_fields_byte_for_byte() {
        // Field order and formatting survive because the raw text is
        // never re-serialized.
        let text = r#"{ "zebra": [1, 2],  "id": "odd-format" }"#;
        let item = DataBagItem::decode(text).unwrap();
        assert_eq!(item.encode(), text);
    }

    #[test]
    fn test_should_reject_document_without_id() {
        let result = DataBagItem::decode(r#"{"name":"no id here"}"#);
        assert!(matches!(result, Err(CodecError::Json(_))));
    }

    #[test]
    fn test_should_reject_invalid_json() {
        let result = DataBagItem::decode("{not json");
        assert!(matches!(result, Err(CodecError::Json(_))));
    }

    #[test]
    fn test_should_display_raw_text() {
        let item = DataBagItem::new("item1", r#"{"id":"item1"}"#);
        assert_eq!(item.to_string(), r#"{"id":"item1"}"#);
    }
}
