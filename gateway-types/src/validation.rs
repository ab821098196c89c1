//! Pre-call input validation.
//!
//! Rules are declared with `validator` on the request types. Every rule is
//! checked and the messages are reported together, in field order.

use std::borrow::Cow;

use rust_decimal::Decimal;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::dto::TransactionRequest;
use crate::error::GatewayError;

pub const AMOUNT_NOT_POSITIVE: &str = "Amount must be a positive number";
pub const CURRENCY_NOT_ISO: &str = "Currency must be a 3-letter ISO code";
pub const INVALID_EMAIL: &str = "Invalid customer email address";
pub const EMPTY_REFERENCE: &str = "Reference cannot be empty";

const VALIDATION_CODE: &str = "VALIDATION_ERROR";

/// Field order used when reporting, matching the request layout.
const INITIATE_FIELDS: [&str; 4] = ["amount", "currency", "customer_email", "reference"];

/// Reference handed to `verify_transaction`.
#[derive(Debug, Validate)]
struct VerifyRequest {
    #[validate(length(min = 1, message = "Reference cannot be empty"))]
    reference: String,
}

/// Rejects zero and negative amounts.
pub fn positive_amount(amount: &Decimal) -> Result<(), ValidationError> {
    if amount.is_sign_negative() || amount.is_zero() {
        return Err(
            ValidationError::new("positive").with_message(Cow::Borrowed(AMOUNT_NOT_POSITIVE))
        );
    }
    Ok(())
}

/// Requires a dotted domain ending in a label of two or more letters.
///
/// `validator`'s `email` rule accepts `user@localhost` and single-letter
/// TLDs. Addresses without an `@` are left to that rule.
pub fn customer_email_domain(email: &str) -> Result<(), ValidationError> {
    let Some((_, domain)) = email.rsplit_once('@') else {
        return Ok(());
    };
    let tld_ok = domain.rsplit_once('.').is_some_and(|(_, tld)| {
        tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
    });
    if tld_ok {
        Ok(())
    } else {
        Err(ValidationError::new("email_domain").with_message(Cow::Borrowed(INVALID_EMAIL)))
    }
}

/// Returns the messages of every rule the request violates.
pub fn initiate_violations(req: &TransactionRequest) -> Vec<String> {
    match req.validate() {
        Ok(()) => Vec::new(),
        Err(errors) => messages(&errors, &INITIATE_FIELDS),
    }
}

pub fn verify_violations(reference: &str) -> Vec<String> {
    let request = VerifyRequest {
        reference: reference.to_string(),
    };
    match request.validate() {
        Ok(()) => Vec::new(),
        Err(errors) => messages(&errors, &["reference"]),
    }
}

/// Validates an initiation request.
pub fn validate_initiate(req: &TransactionRequest) -> Result<(), GatewayError> {
    into_result(
        "Invalid transaction initiation data",
        initiate_violations(req),
    )
}

/// Validates a verification reference.
pub fn validate_verify(reference: &str) -> Result<(), GatewayError> {
    into_result(
        "Invalid transaction verification data",
        verify_violations(reference),
    )
}

/// Flattens `ValidationErrors` in `fields` order, one message per field.
fn messages(errors: &ValidationErrors, fields: &[&str]) -> Vec<String> {
    let by_field = errors.field_errors();
    fields
        .iter()
        .filter_map(|field| by_field.get(*field))
        .filter_map(|errs| errs.first())
        .map(|err| match &err.message {
            Some(message) => message.to_string(),
            None => err.code.to_string(),
        })
        .collect()
}

fn into_result(prefix: &str, violations: Vec<String>) -> Result<(), GatewayError> {
    if violations.is_empty() {
        return Ok(());
    }
    Err(GatewayError::Gateway {
        message: format!("{}: {}", prefix, violations.join(", ")),
        code: Some(VALIDATION_CODE.into()),
    })
}
