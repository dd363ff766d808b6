//! The request signing filter.
//!
//! [`RequestSigner`] is the end-to-end orchestration: it strips any stale
//! signature, stamps the identity and date headers, canonicalizes, signs,
//! and writes the signature header. It consumes the request and returns the
//! fully signed one; on failure the request value never escapes, so a
//! partially signed request cannot reach the transport.

use std::fmt;
use std::sync::Arc;

use http::{HeaderValue, Request};
use tracing::debug;

use crate::canonical;
use crate::clock::{Clock, SystemClock};
use crate::credentials::Credentials;
use crate::error::AuthError;
use crate::headers;
use crate::signer;
use crate::wire::SignatureWire;

/// Signs outgoing Atmos requests with a shared-secret HMAC.
///
/// The signer is immutable after construction (credentials, clock, and the
/// optional diagnostic wire are all set once), so one instance can be shared
/// freely across concurrent request-issuing call sites.
///
/// Signing the same request twice is idempotent: each pass removes the
/// previous signature and date before computing fresh ones, leaving exactly
/// one value in each stamped header.
pub struct RequestSigner {
    credentials: Credentials,
    clock: Arc<dyn Clock>,
    wire: Option<Arc<dyn SignatureWire>>,
}

impl RequestSigner {
    /// Create a signer using the system clock and no diagnostic wire.
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            clock: Arc::new(SystemClock),
            wire: None,
        }
    }

    /// Replace the time source used for the `date` header.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Attach a diagnostic sink receiving the canonical string and the
    /// computed signature.
    #[must_use]
    pub fn with_wire(mut self, wire: Arc<dyn SignatureWire>) -> Self {
        self.wire = Some(wire);
        self
    }

    /// Sign a request, returning it with the `x-emc-uid`, `date`, and
    /// `x-emc-signature` headers set to exactly one value each.
    ///
    /// The date is generated before canonicalization because the canonical
    /// string echoes it back. Other headers, the method, the path, and the
    /// body pass through untouched.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] if a signed header value is not valid text
    /// or the HMAC computation fails. The request is dropped in that case;
    /// it must not be transmitted unsigned or stale-signed.
    pub fn sign<B>(&self, request: Request<B>) -> Result<Request<B>, AuthError> {
        let (mut parts, body) = request.into_parts();

        parts.headers.remove(headers::SIGNATURE);
        parts.headers.insert(
            headers::UID,
            HeaderValue::from_str(self.credentials.uid())?,
        );
        let date = self.clock.timestamp();
        parts
            .headers
            .insert(http::header::DATE, HeaderValue::from_str(&date)?);

        let to_sign = canonical::string_to_sign(&parts)?;
        if let Some(wire) = &self.wire {
            wire.string_to_sign(&to_sign);
        }

        let signature = signer::compute_signature(self.credentials.key(), &to_sign)?;
        if let Some(wire) = &self.wire {
            wire.signature(&signature);
        }
        debug!(
            uid = %self.credentials.uid(),
            method = %parts.method,
            path = %parts.uri.path(),
            signature = %signature,
            "signed request"
        );

        parts
            .headers
            .insert(headers::SIGNATURE, HeaderValue::from_str(&signature)?);

        Ok(Request::from_parts(parts, body))
    }
}

impl fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestSigner")
            .field("credentials", &self.credentials)
            .field("wire", &self.wire.is_some())
            .finish_non_exhaustive()
    }
}
