//! Codec error types.

use crate::registry::DocumentKind;

/// Errors raised while decoding or encoding client documents.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The input is not parseable PEM, or contains no usable block.
    /// No partial key material is ever returned.
    #[error("malformed PEM input: {0}")]
    Pem(String),

    /// The PEM parsed, but the block is not the requested kind of
    /// key material.
    #[error("expected a {expected}, found a {found}")]
    WrongKeyKind {
        /// The kind of key material the caller asked for.
        expected: &'static str,
        /// The kind actually present in the PEM text.
        found: &'static str,
    },

    /// The data bag item is not valid JSON or has no `id` field.
    #[error("data bag item could not be decoded: {0}")]
    Json(#[from] serde_json::Error),

    /// The document kind only supports decoding.
    #[error("{0:?} documents cannot be encoded")]
    UnsupportedOperation(DocumentKind),

    /// The document handed to a codec does not match the codec's kind.
    #[error("document does not match codec kind {0:?}")]
    KindMismatch(DocumentKind),

    /// No codec is registered for the requested kind.
    #[error("no codec registered for {0:?}")]
    UnknownKind(DocumentKind),
}
