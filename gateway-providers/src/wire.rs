//! Helpers shared by the provider adapters at the wire boundary.

use gateway_types::domain::decimal_from_json;
use gateway_types::validation::AMOUNT_NOT_POSITIVE;
use gateway_types::{
    DomainError, ErrorKind, GatewayError, Headers, Money, Provider, TransactionRequest,
};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use rust_decimal::Decimal;
use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer};

/// Bearer authorization plus JSON content type.
pub(crate) fn auth_headers(secret_key: &str) -> Headers {
    let mut headers = Headers::new();
    headers.insert("Authorization".into(), format!("Bearer {}", secret_key));
    headers.insert("Content-Type".into(), "application/json".into());
    headers
}

pub(crate) fn normalize_base_url(base_url: impl Into<String>) -> String {
    base_url.into().trim_end_matches('/').to_string()
}

/// Characters escaped in a single URL path segment (WHATWG path-segment set).
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

/// Percent-encodes a caller value so it stays one path segment.
///
/// URL parsers resolve `.` and `..` (escaped or not), so those are refused.
pub(crate) fn path_segment(kind: ErrorKind, value: &str) -> Result<String, GatewayError> {
    if matches!(value, "." | "..") {
        return Err(GatewayError::new(
            kind,
            format!("Reference cannot be a dot segment: {}", value),
            Some("VALIDATION_ERROR".into()),
        ));
    }
    Ok(utf8_percent_encode(value, PATH_SEGMENT).to_string())
}

/// Canonical request amount as Money; non-positive amounts never reach a provider.
pub(crate) fn request_money(request: &TransactionRequest) -> Result<Money, GatewayError> {
    if request.amount.is_sign_negative() || request.amount.is_zero() {
        return Err(GatewayError::Gateway {
            message: AMOUNT_NOT_POSITIVE.into(),
            code: Some("VALIDATION_ERROR".into()),
        });
    }
    Ok(Money::new(request.amount, &request.currency)?)
}

/// Decodes a provider JSON value into a raw record.
pub(crate) fn decode<D: DeserializeOwned>(
    provider: Provider,
    kind: ErrorKind,
    value: &serde_json::Value,
) -> Result<D, GatewayError> {
    <D as Deserialize>::deserialize(value).map_err(|e| {
        GatewayError::new(
            kind,
            format!("Malformed {} response: {}", provider, e),
            Some("MALFORMED_RESPONSE".into()),
        )
    })
}

/// Error for a response the provider itself marked as failed.
///
/// The HTTP status of that response becomes the code.
pub(crate) fn provider_failure(
    kind: ErrorKind,
    status: u16,
    message: Option<String>,
) -> GatewayError {
    let message = message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| GatewayError::UNKNOWN_ERROR.to_string());
    GatewayError::new(kind, message, Some(status.to_string()))
}

/// Re-tags a domain error as a verification failure.
pub(crate) fn verification_domain_error(err: DomainError) -> GatewayError {
    GatewayError::verification(err.to_string(), Some("DOMAIN_ERROR".into()))
}

/// `deserialize_with` for amounts sent as JSON numbers or numeric strings.
pub(crate) fn decimal_amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    decimal_from_json(&value)
        .ok_or_else(|| de::Error::custom(format!("invalid amount: {}", value)))
}
