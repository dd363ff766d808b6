//! HMAC-SHA1 signature computation.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use hmac::{Hmac, KeyInit, Mac};
use sha1::Sha1;

use crate::error::AuthError;

type HmacSha1 = Hmac<Sha1>;

/// Compute `Base64(HMAC-SHA1(key, string_to_sign))`.
///
/// Pure function of its two inputs; calling it twice with the same key and
/// text yields byte-identical signatures.
///
/// # Errors
///
/// Returns [`AuthError::Signing`] if the HMAC primitive rejects the key.
/// The caller must not transmit the request in that case.
///
/// # Examples
///
/// ```
/// let signature = atmos_auth::compute_signature(b"secret", "data").unwrap();
/// assert_eq!(signature, "mBjjMGulrCZ7XyZ5/kq9N+bNe1Q=");
/// ```
pub fn compute_signature(key: &[u8], string_to_sign: &str) -> Result<String, AuthError> {
    let mut mac =
        HmacSha1::new_from_slice(key).map_err(|e| AuthError::Signing(e.to_string()))?;
    mac.update(string_to_sign.as_bytes());
    let digest = mac.finalize().into_bytes();
    Ok(BASE64.encode(digest))
}
