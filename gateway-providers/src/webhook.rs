//! Webhook signature verification.
//!
//! Both verifiers are pure functions: they return `Ok(true)` or a
//! `GatewayError::WebhookVerification`, never `Ok(false)`.

use gateway_types::{GatewayError, Provider};
use hmac::{Hmac, Mac};
use md5::Md5;
use sha2::{Digest, Sha512};
use subtle::ConstantTimeEq;
use tracing::warn;

type HmacSha512 = Hmac<Sha512>;

const MISMATCH_CODE: &str = "INVALID_SIGNATURE";

/// Hex HMAC-SHA512 of `body`, keyed by `secret`, as Paystack sends in `x-paystack-signature`.
pub fn sign_paystack_webhook(body: &[u8], secret: &str) -> Result<String, GatewayError> {
    let mut mac = HmacSha512::new_from_slice(secret.as_bytes())
        .map_err(|e| hashing_failed(Provider::Paystack, e))?;
    mac.update(body);
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Hex MD5 of the secret, as expected in Flutterwave's `verif-hash` header.
pub fn flutterwave_secret_hash(secret: &str) -> String {
    hex::encode(Md5::digest(secret.as_bytes()))
}

/// Verifies a Paystack signature against the exact bytes Paystack posted.
pub fn verify_paystack_webhook_signature_raw(
    signature: &str,
    body: &[u8],
    secret: &str,
) -> Result<bool, GatewayError> {
    let expected = sign_paystack_webhook(body, secret)?;
    check(Provider::Paystack, &expected, signature)
}

/// Verifies a Paystack signature against a parsed payload.
///
/// The payload is re-serialized as compact JSON with its keys in the order
/// they were parsed, which is the byte sequence Paystack signs. A payload
/// whose fields were reordered or reformatted will not verify.
pub fn verify_paystack_webhook_signature(
    signature: &str,
    payload: &serde_json::Value,
    secret: &str,
) -> Result<bool, GatewayError> {
    let body = serde_json::to_vec(payload).map_err(|e| hashing_failed(Provider::Paystack, e))?;
    verify_paystack_webhook_signature_raw(signature, &body, secret)
}

/// Verifies a Flutterwave `verif-hash` value.
///
/// Only the secret is hashed; the payload does not take part in the check.
/// This authenticates the sender's knowledge of the secret but does not
/// protect the payload from tampering.
pub fn verify_flutterwave_webhook_signature(
    signature: &str,
    _payload: &serde_json::Value,
    secret: &str,
) -> Result<bool, GatewayError> {
    let expected = flutterwave_secret_hash(secret);
    check(Provider::Flutterwave, &expected, signature)
}

fn check(provider: Provider, expected: &str, signature: &str) -> Result<bool, GatewayError> {
    let supplied = signature.trim().to_ascii_lowercase();
    if bool::from(expected.as_bytes().ct_eq(supplied.as_bytes())) {
        return Ok(true);
    }
    warn!(%provider, "Webhook signature mismatch");
    Err(GatewayError::webhook(
        format!("{} webhook signature mismatch", provider),
        Some(MISMATCH_CODE.into()),
    ))
}

fn hashing_failed(provider: Provider, err: impl std::fmt::Display) -> GatewayError {
    GatewayError::webhook(
        format!("{} webhook verification failed: {}", provider, err),
        None,
    )
}
