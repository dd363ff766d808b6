//! The document-kind dispatch table.
//!
//! Serialization support for client documents is dispatched through an
//! explicit table: each [`DocumentKind`] maps to a [`Codec`] of plain
//! function pointers. The table is built once at process start
//! ([`CodecRegistry::with_defaults`]) and passed to whatever layer needs
//! it; nothing here is global or reflective, and [`CodecRegistry::kinds`]
//! makes the mapping inspectable.

use std::collections::HashMap;

use tracing::debug;

use crate::databag::DataBagItem;
use crate::error::CodecError;
use crate::keys::{KeyMaterial, certificate_from_pem, private_key_from_pem, public_key_from_pem};

/// The document kinds the client exchanges with the configuration API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DocumentKind {
    /// PEM-encoded private key material.
    PrivateKey,
    /// PEM-encoded public key material.
    PublicKey,
    /// PEM-encoded X.509 certificate.
    Certificate,
    /// Opaque identifier-keyed JSON document.
    DataBag,
}

/// A decoded document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Document {
    /// Key material of any kind.
    Key(KeyMaterial),
    /// A data bag item.
    Item(DataBagItem),
}

/// Decode raw text into a [`Document`].
pub type DecodeFn = fn(&str) -> Result<Document, CodecError>;

/// Encode a [`Document`] back to raw text.
pub type EncodeFn = fn(&Document) -> Result<String, CodecError>;

/// Paired encode/decode functions for one document kind.
#[derive(Debug, Clone, Copy)]
pub struct Codec {
    /// Decoder for this kind.
    pub decode: DecodeFn,
    /// Encoder for this kind.
    pub encode: EncodeFn,
}

/// An explicit table mapping document kinds to their codecs.
#[derive(Debug, Clone)]
pub struct CodecRegistry {
    table: HashMap<DocumentKind, Codec>,
}

impl CodecRegistry {
    /// Build the default table: the three key-material kinds (decode-only)
    /// and the data bag item (both directions).
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self {
            table: HashMap::new(),
        };
        registry.register(
            DocumentKind::PrivateKey,
            Codec {
                decode: decode_private_key,
                encode: encode_key_unsupported,
            },
        );
        registry.register(
            DocumentKind::PublicKey,
            Codec {
                decode: decode_public_key,
                encode: encode_key_unsupported,
            },
        );
        registry.register(
            DocumentKind::Certificate,
            Codec {
                decode: decode_certificate,
                encode: encode_key_unsupported,
            },
        );
        registry.register(
            DocumentKind::DataBag,
            Codec {
                decode: decode_data_bag,
                encode: encode_data_bag,
            },
        );
        registry
    }

    /// Register (or replace) the codec for a kind.
    pub fn register(&mut self, kind: DocumentKind, codec: Codec) {
        self.table.insert(kind, codec);
    }

    /// Decode raw text under the codec registered for `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnknownKind`] if no codec is registered, or
    /// whatever the codec's decoder reports.
    pub fn decode(&self, kind: DocumentKind, text: &str) -> Result<Document, CodecError> {
        debug!(?kind, "decoding document");
        let codec = self.table.get(&kind).ok_or(CodecError::UnknownKind(kind))?;
        (codec.decode)(text)
    }

    /// Encode a document under the codec registered for `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnknownKind`] if no codec is registered, or
    /// whatever the codec's encoder reports.
    pub fn encode(&self, kind: DocumentKind, document: &Document) -> Result<String, CodecError> {
        let codec = self.table.get(&kind).ok_or(CodecError::UnknownKind(kind))?;
        (codec.encode)(document)
    }

    /// The registered kinds, sorted.
    #[must_use]
    pub fn kinds(&self) -> Vec<DocumentKind> {
        let mut kinds: Vec<DocumentKind> = self.table.keys().copied().collect();
        kinds.sort_unstable();
        kinds
    }
}

fn decode_private_key(text: &str) -> Result<Document, CodecError> {
    private_key_from_pem(text).map(Document::Key)
}

fn decode_public_key(text: &str) -> Result<Document, CodecError> {
    public_key_from_pem(text).map(Document::Key)
}

fn decode_certificate(text: &str) -> Result<Document, CodecError> {
    certificate_from_pem(text).map(Document::Key)
}

// Key material flows one way: the configuration API serves it, the client
// never writes it back.
fn encode_key_unsupported(document: &Document) -> Result<String, CodecError> {
    match document {
        Document::Key(key) => Err(CodecError::UnsupportedOperation(match key {
            KeyMaterial::PrivateKey(_) => DocumentKind::PrivateKey,
            KeyMaterial::PublicKey(_) => DocumentKind::PublicKey,
            KeyMaterial::Certificate(_) => DocumentKind::Certificate,
        })),
        Document::Item(_) => Err(CodecError::KindMismatch(DocumentKind::DataBag)),
    }
}

fn decode_data_bag(text: &str) -> Result<Document, CodecError> {
    DataBagItem::decode(text).map(Document::Item)
}

fn encode_data_bag(document: &Document) -> Result<String, CodecError> {
    match document {
        Document::Item(item) => Ok(item.encode()),
        Document::Key(_) => Err(CodecError::KindMismatch(DocumentKind::DataBag)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUBLIC_KEY_PEM: &str = "-----BEGIN PUBLIC KEY-----\n\
        MFkwEwYHKoZIzj0CAQYIKoZIzj0DAQcDQgAEejYl7UiN+8QPzPGIiriNf2K46raq\n\
        VhluPU/BFGH7sAMFKNGMEUf7Y5+xQD32/FHOMzAmHJAeXtCgnf3cQ4THhQ==\n\
        -----END PUBLIC KEY-----\n";

    #[test]
    fn test_should_register_all_default_kinds() {
        let registry = CodecRegistry::with_defaults();
        assert_eq!(
            registry.kinds(),
            vec![
                DocumentKind::PrivateKey,
                DocumentKind::PublicKey,
                DocumentKind::Certificate,
                DocumentKind::DataBag,
            ]
        );
    }

    #[test]
    fn test_should_dispatch_decode_by_kind() {
        let registry = CodecRegistry::with_defaults();

        let key = registry
            .decode(DocumentKind::PublicKey, PUBLIC_KEY_PEM)
            .unwrap();
        assert!(matches!(key, Document::Key(KeyMaterial::PublicKey(_))));

        let item = registry
            .decode(DocumentKind::DataBag, r#"{"id":"users"}"#)
            .unwrap();
        assert!(matches!(item, Document::Item(_)));
    }

    #[test]
    fn test_should_round_trip_data_bag_through_registry() {
        let registry = CodecRegistry::with_defaults();
        let text = r#"{"id":"users","admins":["root"]}"#;
        let document = registry.decode(DocumentKind::DataBag, text).unwrap();
        let encoded = registry.encode(DocumentKind::DataBag, &document).unwrap();
        assert_eq!(encoded, text);
    }

    #[test]
    fn test_should_refuse_to_encode_key_material() {
        let registry = CodecRegistry::with_defaults();
        let key = registry
            .decode(DocumentKind::PublicKey, PUBLIC_KEY_PEM)
            .unwrap();
        let result = registry.encode(DocumentKind::PublicKey, &key);
        assert!(matches!(
            result,
            Err(CodecError::UnsupportedOperation(DocumentKind::PublicKey))
        ));
    }

    #[test]
    fn test_should_reject_document_of_wrong_kind() {
        let registry = CodecRegistry::with_defaults();
        let item = registry
            .decode(DocumentKind::DataBag, r#"{"id":"users"}"#)
            .unwrap();
        let result = registry.encode(DocumentKind::PrivateKey, &item);
        assert!(matches!(
            result,
            Err(CodecError::KindMismatch(DocumentKind::DataBag))
        ));
    }
}
