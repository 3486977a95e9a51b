//! Webhook signature verification.
//!
//! FetcherPay signs every delivery with HMAC-SHA256 over the raw request
//! body, keyed by the endpoint's secret, and sends the lowercase hex digest
//! in the [`SIGNATURE_HEADER`] header.
//!
//! # Security
//!
//! - The digest is computed over the exact bytes received. Parse JSON only
//!   after verification; re-serialized JSON rarely matches byte-for-byte.
//! - Comparison uses [`subtle::ConstantTimeEq`], so its duration does not
//!   depend on where the first mismatching byte is.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::error::Error;
use crate::types::WebhookEvent;

#[cfg(test)]
#[path = "signature_tests.rs"]
mod tests;

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the delivery signature.
pub const SIGNATURE_HEADER: &str = "X-FetcherPay-Signature";

/// Computes the lowercase hex HMAC-SHA256 of `payload` under `secret`.
#[must_use]
pub fn compute_signature(payload: &[u8], secret: &str) -> String {
    // Empty only if the key is refused, and an empty string never verifies
    digest(payload, secret).unwrap_or_default()
}

/// HMAC takes keys of any length; longer ones are hashed first.
fn digest(payload: &[u8], secret: &str) -> Option<String> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).ok()?;
    mac.update(payload);
    Some(hex::encode(mac.finalize().into_bytes()))
}

/// Returns true only if `signature` is exactly the expected hex digest.
///
/// Never fails: a signature of the wrong length, with uppercase or non-hex
/// characters, or otherwise malformed, is simply not verified.
///
/// # Example
///
/// ```
/// use fetcherpay::signature::{compute_signature, verify_signature};
///
/// let body = br#"{"id":"evt_123","type":"payment.settled"}"#;
/// let signature = compute_signature(body, "whsec_test");
///
/// assert!(verify_signature(body, &signature, "whsec_test"));
/// assert!(!verify_signature(body, &signature, "whsec_other"));
/// ```
#[must_use]
pub fn verify_signature(payload: &[u8], signature: &str, secret: &str) -> bool {
    let Some(expected) = digest(payload, secret) else {
        return false;
    };
    // ct_eq yields false for unequal lengths without inspecting contents
    let verified: bool = expected.as_bytes().ct_eq(signature.as_bytes()).into();

    if !verified {
        tracing::debug!("Webhook signature mismatch");
    }
    verified
}

/// Verifies a delivery and then decodes it as a [`WebhookEvent`].
///
/// # Errors
///
/// - [`Error::InvalidSignature`] if the signature does not verify
/// - [`Error::Decode`] if the verified payload is not an event
pub fn construct_event(
    payload: &[u8],
    signature: &str,
    secret: &str,
) -> Result<WebhookEvent, Error> {
    if !verify_signature(payload, signature, secret) {
        return Err(Error::InvalidSignature);
    }

    serde_json::from_slice(payload).map_err(Error::Decode)
}
