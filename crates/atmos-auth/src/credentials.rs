//! Account identity and decoded shared secret.

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::error::AuthError;

/// Immutable signing credentials: the account identifier stamped into the
/// `x-emc-uid` header and the shared secret used to key the HMAC.
///
/// The secret arrives as a long-lived base64 string and is decoded exactly
/// once, here; a malformed secret fails construction rather than every
/// signing call. The value is cheap to clone and safe to share read-only
/// across concurrent signing operations.
#[derive(Clone)]
pub struct Credentials {
    uid: String,
    key: Vec<u8>,
}

impl Credentials {
    /// Build credentials from an account identifier and a base64-encoded
    /// shared secret.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredential`] if the secret is not valid
    /// base64.
    pub fn new(uid: impl Into<String>, encoded_key: &str) -> Result<Self, AuthError> {
        let key = BASE64.decode(encoded_key)?;
        Ok(Self {
            uid: uid.into(),
            key,
        })
    }

    /// The account identifier.
    #[must_use]
    pub fn uid(&self) -> &str {
        &self.uid
    }

    /// The decoded secret key bytes.
    pub(crate) fn key(&self) -> &[u8] {
        &self.key
    }
}

// The secret never appears in logs or debug output.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("uid", &self.uid)
            .field("key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_decode_base64_secret_at_construction() {
        let credentials = Credentials::new("uid/user", "LJLuryj6zs8ste6Y3jTGQp71xq0=").unwrap();
        assert_eq!(credentials.uid(), "uid/user");
        assert_eq!(credentials.key().len(), 20);
    }

    #[test]
    fn test_should_reject_malformed_secret() {
        let result = Credentials::new("uid/user", "not base64!");
        assert!(matches!(result, Err(AuthError::InvalidCredential(_))));
    }

    #[test]
    fn test_should_redact_secret_in_debug_output() {
        let credentials = Credentials::new("uid/user", "LJLuryj6zs8ste6Y3jTGQp71xq0=").unwrap();
        let debug = format!("{credentials:?}");
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("LJLuryj6"));
    }
}
