//! Configuration loading from environment.

use std::env;
use std::time::Duration;

use gateway_types::{CredentialFields, GatewayCredentials, Provider};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub credentials: GatewayCredentials,
    /// Override for the provider's API host.
    pub base_url: Option<String>,
    pub timeout: Duration,
}

impl GatewayConfig {
    /// Loads `.env` if present, then reads the process environment.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let identity = lookup("PAYMENT_GATEWAY")
            .ok_or_else(|| anyhow::anyhow!("PAYMENT_GATEWAY environment variable is required"))?;
        let provider: Provider = identity.parse()?;

        let fields = match provider {
            Provider::Paystack => CredentialFields {
                public_key: None,
                secret_key: lookup("PAYSTACK_SECRET_KEY"),
            },
            Provider::Flutterwave => CredentialFields {
                public_key: lookup("FLUTTERWAVE_PUBLIC_KEY"),
                secret_key: lookup("FLUTTERWAVE_SECRET_KEY"),
            },
        };
        let credentials = GatewayCredentials::from_parts(provider.as_str(), fields)?;

        let base_url = match provider {
            Provider::Paystack => lookup("PAYSTACK_BASE_URL"),
            Provider::Flutterwave => lookup("FLUTTERWAVE_BASE_URL"),
        };

        let timeout = lookup("GATEWAY_HTTP_TIMEOUT_SECS")
            .map(|v| v.parse::<u64>())
            .transpose()
            .map_err(|e| {
                anyhow::anyhow!("GATEWAY_HTTP_TIMEOUT_SECS must be a whole number: {}", e)
            })?
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            credentials,
            base_url,
            timeout: Duration::from_secs(timeout),
        })
    }
}
