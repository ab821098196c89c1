//! Error types for the payment gateway layer.

use crate::ports::TransportError;

/// Domain-level errors (money and currency rule violations).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("Amount cannot be negative")]
    NegativeAmount,

    #[error("Currency must be a 3-letter ISO code, got '{0}'")]
    InvalidCurrency(String),

    #[error("Minor unit factor must be positive")]
    InvalidFactor,

    #[error("Amount overflow while converting {amount} by a factor of {factor}")]
    Overflow { amount: String, factor: u32 },

    #[error("Amount {0} does not convert to a whole number of minor units")]
    FractionalMinorUnits(String),

    #[error("Amount {0} cannot be represented as a JSON number")]
    UnrepresentableAmount(String),
}

/// Discriminant of a [`GatewayError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Gateway,
    TransactionVerification,
    WebhookVerification,
}

/// Errors surfaced by gateways, the facade and the webhook verifiers.
///
/// `Gateway` is the base failure. The two other variants specialize it for
/// verification calls and webhook authentication; all three carry a message
/// and an optional machine-readable code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    #[error("{message}")]
    Gateway {
        message: String,
        code: Option<String>,
    },

    #[error("{message}")]
    TransactionVerification {
        message: String,
        code: Option<String>,
    },

    #[error("{message}")]
    WebhookVerification {
        message: String,
        code: Option<String>,
    },
}

impl GatewayError {
    /// Fallback message when neither the provider nor the transport said anything useful.
    pub const UNKNOWN_ERROR: &'static str = "Unknown error";

    pub fn new(kind: ErrorKind, message: impl Into<String>, code: Option<String>) -> Self {
        let message = message.into();
        match kind {
            ErrorKind::Gateway => GatewayError::Gateway { message, code },
            ErrorKind::TransactionVerification => {
                GatewayError::TransactionVerification { message, code }
            }
            ErrorKind::WebhookVerification => GatewayError::WebhookVerification { message, code },
        }
    }

    /// Base gateway error without a code.
    pub fn gateway(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Gateway, message, None)
    }

    pub fn verification(message: impl Into<String>, code: Option<String>) -> Self {
        Self::new(ErrorKind::TransactionVerification, message, code)
    }

    pub fn webhook(message: impl Into<String>, code: Option<String>) -> Self {
        Self::new(ErrorKind::WebhookVerification, message, code)
    }

    /// Builds an error of the given kind from a transport failure.
    ///
    /// Message chain: provider message, then transport message, then
    /// [`Self::UNKNOWN_ERROR`]. The HTTP status becomes the code when known.
    pub fn from_transport(kind: ErrorKind, err: TransportError) -> Self {
        let code = err.status.map(|s| s.to_string());
        let message = err
            .response_message
            .filter(|m| !m.trim().is_empty())
            .or_else(|| Some(err.message).filter(|m| !m.trim().is_empty()))
            .unwrap_or_else(|| Self::UNKNOWN_ERROR.to_string());
        Self::new(kind, message, code)
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            GatewayError::Gateway { .. } => ErrorKind::Gateway,
            GatewayError::TransactionVerification { .. } => ErrorKind::TransactionVerification,
            GatewayError::WebhookVerification { .. } => ErrorKind::WebhookVerification,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            GatewayError::Gateway { message, .. }
            | GatewayError::TransactionVerification { message, .. }
            | GatewayError::WebhookVerification { message, .. } => message,
        }
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            GatewayError::Gateway { code, .. }
            | GatewayError::TransactionVerification { code, .. }
            | GatewayError::WebhookVerification { code, .. } => code.as_deref(),
        }
    }

    /// Every variant specializes the base gateway error.
    pub fn is_gateway_error(&self) -> bool {
        true
    }
}

impl From<DomainError> for GatewayError {
    fn from(err: DomainError) -> Self {
        GatewayError::Gateway {
            message: err.to_string(),
            code: Some("DOMAIN_ERROR".into()),
        }
    }
}
