//! Provider identity and per-provider credentials.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GatewayError;

/// Message returned for an unknown provider identity.
pub const INVALID_GATEWAY_TYPE: &str = "Invalid gateway type provided.";

/// Payment providers supported by this layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Paystack,
    Flutterwave,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Paystack => "paystack",
            Provider::Flutterwave => "flutterwave",
        }
    }

    /// Human-facing name, as used in error messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            Provider::Paystack => "Paystack",
            Provider::Flutterwave => "Flutterwave",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Provider {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "paystack" => Ok(Provider::Paystack),
            "flutterwave" => Ok(Provider::Flutterwave),
            _ => Err(GatewayError::gateway(INVALID_GATEWAY_TYPE)),
        }
    }
}

/// Loosely-shaped credential fields, as read from configuration.
#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialFields {
    pub public_key: Option<String>,
    pub secret_key: Option<String>,
}

impl fmt::Debug for CredentialFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialFields")
            .field("public_key", &self.public_key.as_ref().map(|_| "<redacted>"))
            .field("secret_key", &self.secret_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Credentials bound to exactly one provider.
///
/// The variant doubles as the provider identity, so a Paystack key pair can
/// never be handed to the Flutterwave adapter.
#[derive(Clone, PartialEq, Eq)]
pub enum GatewayCredentials {
    Paystack {
        secret_key: String,
    },
    Flutterwave {
        public_key: String,
        secret_key: String,
    },
}

impl GatewayCredentials {
    pub fn paystack(secret_key: impl Into<String>) -> Self {
        GatewayCredentials::Paystack {
            secret_key: secret_key.into(),
        }
    }

    pub fn flutterwave(public_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        GatewayCredentials::Flutterwave {
            public_key: public_key.into(),
            secret_key: secret_key.into(),
        }
    }

    /// Builds credentials from a provider identity string and loose fields.
    pub fn from_parts(identity: &str, fields: CredentialFields) -> Result<Self, GatewayError> {
        let provider: Provider = identity.parse()?;
        let secret_key = required(provider, "secretKey", fields.secret_key)?;
        match provider {
            Provider::Paystack => Ok(GatewayCredentials::Paystack { secret_key }),
            Provider::Flutterwave => Ok(GatewayCredentials::Flutterwave {
                public_key: required(provider, "publicKey", fields.public_key)?,
                secret_key,
            }),
        }
    }

    pub fn provider(&self) -> Provider {
        match self {
            GatewayCredentials::Paystack { .. } => Provider::Paystack,
            GatewayCredentials::Flutterwave { .. } => Provider::Flutterwave,
        }
    }

    pub fn secret_key(&self) -> &str {
        match self {
            GatewayCredentials::Paystack { secret_key }
            | GatewayCredentials::Flutterwave { secret_key, .. } => secret_key,
        }
    }
}

impl fmt::Debug for GatewayCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayCredentials")
            .field("provider", &self.provider())
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

fn required(provider: Provider, name: &str, value: Option<String>) -> Result<String, GatewayError> {
    value.filter(|v| !v.trim().is_empty()).ok_or_else(|| GatewayError::Gateway {
        message: format!("Missing {} credential: {}", provider, name),
        code: Some("MISSING_CREDENTIALS".into()),
    })
}
