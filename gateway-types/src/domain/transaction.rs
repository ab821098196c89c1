//! Canonical transaction results shared by every gateway.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// Provider-agnostic transaction status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Success,
    Pending,
    Failed,
}

impl TransactionStatus {
    /// Maps a provider's status vocabulary onto the canonical one.
    ///
    /// Anything that is neither a known success nor a known terminal failure
    /// is treated as still pending.
    pub fn from_provider(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "success" | "successful" | "completed" | "paid" => TransactionStatus::Success,
            "failed" | "abandoned" | "cancelled" | "canceled" | "reversed" | "error" => {
                TransactionStatus::Failed
            }
            _ => TransactionStatus::Pending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Success => "success",
            TransactionStatus::Pending => "pending",
            TransactionStatus::Failed => "failed",
        }
    }
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Customer details normalized from the provider payload.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl Customer {
    /// Builds a customer, falling back to splitting a full name when the
    /// provider did not send separate first and last names.
    pub fn from_parts(
        email: impl Into<String>,
        first_name: Option<String>,
        last_name: Option<String>,
        full_name: Option<String>,
    ) -> Self {
        let first_name = non_blank(first_name);
        let last_name = non_blank(last_name);

        let (first_name, last_name) = match (first_name, last_name, non_blank(full_name)) {
            (None, None, Some(full)) => {
                let mut parts = full.splitn(2, char::is_whitespace);
                let first = parts.next().map(str::to_string);
                let last = parts.next().map(|s| s.trim().to_string());
                (non_blank(first), non_blank(last))
            }
            (first, last, _) => (first, last),
        };

        Self {
            email: email.into(),
            first_name,
            last_name,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Result of starting a transaction with a provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitiateResult {
    pub message: String,
    pub reference: String,
    pub status: TransactionStatus,
    /// Hosted payment page the customer must be redirected to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_url: Option<String>,
    /// Paystack only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_code: Option<String>,
}

/// Normalized transaction details returned by a verification call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyData {
    /// Amount in major units.
    pub amount: Money,
    pub currency: String,
    pub reference: String,
    /// Status string exactly as the provider reported it.
    pub status: String,
    /// The provider's `data` object, untouched.
    pub gateway_response: serde_json::Value,
    pub customer: Customer,
}

impl VerifyData {
    pub fn payment_status(&self) -> TransactionStatus {
        TransactionStatus::from_provider(&self.status)
    }
}

/// Result of a verification call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyResult {
    pub status: TransactionStatus,
    pub message: String,
    pub data: VerifyData,
}
