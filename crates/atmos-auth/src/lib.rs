//! Shared-secret HMAC request signing for the EMC Atmos object storage API.
//!
//! Atmos authenticates each HTTP request with a signature header computed
//! over a canonical string representation of that request. This crate
//! implements the client side: it rebuilds the canonical string from the
//! request (method, payload content type, echoed headers, date, resource
//! path, and sorted `x-emc-*` metadata headers), computes
//! `Base64(HMAC-SHA1(secret, string_to_sign))`, and stamps the identity,
//! date, and signature headers onto the request before it reaches the
//! transport.
//!
//! The canonicalization rules are textual and must match the server
//! bit-for-bit: header names are lower-cased and sorted, multi-line values
//! are flattened, the resource path is lower-cased, and the canonical
//! string never carries a trailing newline. Any deviation silently breaks
//! authentication, so every rule is pinned down by a test vector.
//!
//! # Usage
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use atmos_auth::clock::FixedClock;
//! use atmos_auth::{Credentials, RequestSigner};
//!
//! let credentials = Credentials::new(
//!     "6039ac182f194e15b9261d73ce044939/user1",
//!     "LJLuryj6zs8ste6Y3jTGQp71xq0=",
//! )
//! .unwrap();
//!
//! // Production code uses the default `SystemClock`; a fixed clock makes
//! // the signature reproducible here.
//! let signer = RequestSigner::new(credentials)
//!     .with_clock(Arc::new(FixedClock::new("Tue, 01 Jan 2030 00:00:00 GMT")));
//!
//! let request = http::Request::builder()
//!     .method("GET")
//!     .uri("https://accesspoint.atmosonline.com/rest/objects/123")
//!     .body(())
//!     .unwrap();
//!
//! let signed = signer.sign(request).unwrap();
//! assert!(signed.headers().contains_key("x-emc-signature"));
//! assert!(signed.headers().contains_key("x-emc-uid"));
//! ```
//!
//! # Modules
//!
//! - [`canonical`] - Canonical string-to-sign construction
//! - [`clock`] - Time source for the `date` header
//! - [`credentials`] - Account identity and decoded shared secret
//! - [`error`] - Signing error types
//! - [`filter`] - The request signing filter
//! - [`headers`] - Atmos wire header names
//! - [`signer`] - HMAC-SHA1 signature computation
//! - [`wire`] - Optional diagnostic sink for canonical strings and signatures

pub mod canonical;
pub mod clock;
pub mod credentials;
pub mod error;
pub mod filter;
pub mod headers;
pub mod signer;
pub mod wire;

pub use canonical::string_to_sign;
pub use clock::{Clock, SystemClock};
pub use credentials::Credentials;
pub use error::AuthError;
pub use filter::RequestSigner;
pub use signer::compute_signature;
pub use wire::{SignatureWire, TracingWire};
