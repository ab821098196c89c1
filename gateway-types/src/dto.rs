//! Data Transfer Objects for canonical requests.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::{customer_email_domain, positive_amount};

/// Title used when the caller does not customize the payment page.
pub const DEFAULT_TITLE: &str = "Payment for Order";
/// Description used when the caller does not customize the payment page.
pub const DEFAULT_DESCRIPTION: &str = "Payment for items purchased";
/// Redirect target used by providers that require one.
pub const DEFAULT_REDIRECT_URL: &str = "https://example.com/callback";

// ─────────────────────────────────────────────────────────────────────────────
// Transaction DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to start a transaction with the bound provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    /// Amount in major units (e.g. naira, not kobo)
    #[validate(custom(function = "positive_amount"))]
    pub amount: Decimal,
    /// Three-letter currency code
    #[validate(length(equal = 3, message = "Currency must be a 3-letter ISO code"))]
    pub currency: String,
    #[validate(
        email(message = "Invalid customer email address"),
        custom(function = "customer_email_domain")
    )]
    pub customer_email: String,
    /// Caller-generated, unique per attempt
    #[validate(length(min = 1, message = "Reference cannot be empty"))]
    pub reference: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<TransactionConfig>,
}

impl TransactionRequest {
    pub fn new(
        amount: Decimal,
        currency: impl Into<String>,
        customer_email: impl Into<String>,
        reference: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            currency: currency.into(),
            customer_email: customer_email.into(),
            reference: reference.into(),
            config: None,
        }
    }

    pub fn with_config(mut self, config: TransactionConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Redirect URL supplied by the caller, if any.
    pub fn redirect_url(&self) -> Option<&str> {
        self.config
            .as_ref()
            .and_then(|c| c.redirect_url.as_deref())
    }

    /// Page customizations with defaults filled in.
    pub fn customizations(&self) -> ResolvedCustomizations {
        let custom = self.config.as_ref().and_then(|c| c.customizations.as_ref());
        ResolvedCustomizations {
            title: custom
                .and_then(|c| c.title.clone())
                .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            description: custom
                .and_then(|c| c.description.clone())
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            logo: custom.and_then(|c| c.logo.clone()),
        }
    }
}

/// Optional per-transaction settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customizations: Option<Customizations>,
}

/// Hosted payment page customizations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customizations {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

/// Customizations after defaults are applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedCustomizations {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_customization_defaults() {
        let req = TransactionRequest::new(dec!(10), "NGN", "a@example.com", "ref");
        let resolved = req.customizations();
        assert_eq!(resolved.title, "Payment for Order");
        assert_eq!(resolved.description, "Payment for items purchased");
        assert_eq!(resolved.logo, None);
        assert_eq!(req.redirect_url(), None);
    }

    #[test]
    fn test_partial_customizations_keep_defaults() {
        let req = TransactionRequest::new(dec!(10), "NGN", "a@example.com", "ref").with_config(
            TransactionConfig {
                redirect_url: Some("https://shop.example/done".into()),
                customizations: Some(Customizations {
                    title: Some("Order #42".into()),
                    description: None,
                    logo: Some("https://shop.example/logo.png".into()),
                }),
            },
        );
        let resolved = req.customizations();
        assert_eq!(resolved.title, "Order #42");
        assert_eq!(resolved.description, DEFAULT_DESCRIPTION);
        assert_eq!(resolved.logo.as_deref(), Some("https://shop.example/logo.png"));
        assert_eq!(req.redirect_url(), Some("https://shop.example/done"));
    }
}
