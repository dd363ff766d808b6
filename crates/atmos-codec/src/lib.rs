//! PEM key-material and data-bag document codecs for the Atmos client.
//!
//! The configuration-management API that accompanies the storage client
//! ships two kinds of JSON payloads that need special handling:
//!
//! - cryptographic key material (private keys, public keys, X.509
//!   certificates) delivered as PEM text with literal `\n` escape
//!   sequences in place of real newlines;
//! - "data bag" items, opaque JSON documents that are passed through
//!   verbatim apart from extracting their `id` field.
//!
//! Each supported document kind exposes plain `decode`/`encode` functions,
//! and [`CodecRegistry`] maps kinds to codecs through an explicit,
//! inspectable table built once at startup — there is no global registry.
//!
//! # Modules
//!
//! - [`databag`] - Opaque, identifier-keyed JSON documents
//! - [`error`] - Codec error types
//! - [`keys`] - PEM key-material loading
//! - [`registry`] - The document-kind dispatch table

pub mod databag;
pub mod error;
pub mod keys;
pub mod registry;

pub use databag::DataBagItem;
pub use error::CodecError;
pub use keys::{
    KeyMaterial, certificate_from_pem, private_key_from_pem, public_key_from_pem,
    unescape_newlines,
};
pub use registry::{Codec, CodecRegistry, Document, DocumentKind};
