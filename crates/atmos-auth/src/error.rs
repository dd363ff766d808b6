//! Signing error types.

/// Errors raised while constructing credentials or signing a request.
///
/// None of these are retried: signing is deterministic, so retrying with
/// the same inputs reproduces the same failure. A request that fails to
/// sign must not be transmitted.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The shared secret is not valid base64. Surfaced once, at
    /// [`Credentials`](crate::Credentials) construction, never per request.
    #[error("shared secret is not valid base64: {0}")]
    InvalidCredential(#[from] base64::DecodeError),

    /// The `date` header was absent when canonicalization ran. The filter
    /// always stamps the date before canonicalizing, so hitting this means
    /// the caller invoked the canonicalizer outside the filter ordering.
    #[error("date header is missing at signing time")]
    MissingDateHeader,

    /// A value produced during signing (identity, date, or signature) is
    /// not a legal HTTP header value.
    #[error("computed header value is not a legal HTTP header value: {0}")]
    InvalidHeaderValue(#[from] http::header::InvalidHeaderValue),

    /// A header participating in the signature carries bytes outside
    /// visible ASCII, so it cannot be canonicalized as text.
    #[error("signed header value is not valid text: {0}")]
    InvalidHeaderEncoding(#[from] http::header::ToStrError),

    /// The HMAC primitive rejected its inputs mid-computation.
    #[error("request signing failed: {0}")]
    Signing(String),
}
