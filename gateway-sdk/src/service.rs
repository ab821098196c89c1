//! Payment Gateway Facade
//!
//! Binds exactly one provider adapter at construction, validates input
//! before any network call, and forwards everything else unchanged.

use gateway_client::ReqwestTransport;
use gateway_providers::build_gateway;
use gateway_types::{
    CredentialFields, ErrorKind, GatewayCredentials, GatewayError, InitiateResult,
    PaymentGateway, Provider, TransactionRequest, Transport, VerifyResult, validation,
};
use tracing::{instrument, warn};

use crate::config::GatewayConfig;

/// Single entry point for initiating and verifying transactions.
///
/// Holds only the bound adapter; safe to share behind an `Arc` across tasks.
pub struct PaymentGatewaySdk {
    gateway: Box<dyn PaymentGateway>,
}

impl PaymentGatewaySdk {
    /// Binds the adapter matching the credentials.
    pub fn new<T: Transport + 'static>(credentials: GatewayCredentials, transport: T) -> Self {
        Self {
            gateway: build_gateway(credentials, transport, None),
        }
    }

    /// Binds an adapter from a provider identity string and loose credentials.
    ///
    /// Fails with "Invalid gateway type provided." for an unknown identity.
    pub fn with_gateway_type<T: Transport + 'static>(
        identity: &str,
        fields: CredentialFields,
        transport: T,
    ) -> Result<Self, GatewayError> {
        let credentials = GatewayCredentials::from_parts(identity, fields)?;
        Ok(Self::new(credentials, transport))
    }

    /// Binds a custom adapter.
    pub fn with_gateway(gateway: impl PaymentGateway + 'static) -> Self {
        Self {
            gateway: Box::new(gateway),
        }
    }

    /// Builds a reqwest-backed facade from configuration.
    pub fn from_config(config: &GatewayConfig) -> Result<Self, GatewayError> {
        let transport = ReqwestTransport::with_timeout(config.timeout)
            .map_err(|e| GatewayError::from_transport(ErrorKind::Gateway, e))?;
        Ok(Self {
            gateway: build_gateway(
                config.credentials.clone(),
                transport,
                config.base_url.clone(),
            ),
        })
    }

    /// Returns the bound provider.
    pub fn provider(&self) -> Provider {
        self.gateway.provider()
    }

    /// Starts a transaction with the bound provider.
    #[instrument(
        skip(self, request),
        fields(provider = %self.provider(), reference = %request.reference)
    )]
    pub async fn initiate_transaction(
        &self,
        request: &TransactionRequest,
    ) -> Result<InitiateResult, GatewayError> {
        if let Err(err) = validation::validate_initiate(request) {
            warn!("Rejected transaction initiation: {}", err);
            return Err(err);
        }

        self.gateway.initiate_transaction(request).await
    }

    /// Verifies a transaction by reference with the bound provider.
    #[instrument(skip(self), fields(provider = %self.provider()))]
    pub async fn verify_transaction(&self, reference: &str) -> Result<VerifyResult, GatewayError> {
        if let Err(err) = validation::validate_verify(reference) {
            warn!("Rejected transaction verification: {}", err);
            return Err(err);
        }

        self.gateway.verify_transaction(reference).await
    }
}
