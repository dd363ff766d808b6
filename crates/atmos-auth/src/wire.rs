//! Optional diagnostic sink for canonical strings and signatures.
//!
//! Signature mismatches against a live server are painful to debug because
//! the server only reports that the signature was wrong. A [`SignatureWire`]
//! receives the exact canonical string and the signature the client
//! computed, so they can be diffed against the server's expectation.
//!
//! Implementations must not block: they are invoked synchronously on the
//! signing path. Buffer or drop rather than stall.

use tracing::debug;

/// Sink receiving signing diagnostics as opaque text.
pub trait SignatureWire: Send + Sync {
    /// Called with the canonical string, before the signature is computed.
    fn string_to_sign(&self, text: &str);

    /// Called with the base64 signature, after it is computed.
    fn signature(&self, signature: &str);
}

/// [`SignatureWire`] that forwards both values to `tracing` at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingWire;

impl SignatureWire for TracingWire {
    fn string_to_sign(&self, text: &str) {
        debug!(string_to_sign = %text, "canonical string built");
    }

    fn signature(&self, signature: &str) {
        debug!(signature = %signature, "signature computed");
    }
}
