//! Atmos wire header names.
//!
//! All names are lower-case because the `http` crate stores header names
//! lower-cased; comparisons against these constants are therefore exact.

/// Identity header carrying the account identifier (`uid`).
pub const UID: &str = "x-emc-uid";

/// Signature header carrying the base64-encoded HMAC-SHA1 digest.
pub const SIGNATURE: &str = "x-emc-signature";

/// Name prefix identifying user metadata headers included in the signature.
pub const META_PREFIX: &str = "x-emc-";

/// Headers whose value (or absence) is echoed into the canonical string
/// verbatim, lower-cased, one line per header, in this order.
pub const ECHOED: &[&str] = &["range"];
