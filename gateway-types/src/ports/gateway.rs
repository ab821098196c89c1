//! Payment gateway port trait.
//!
//! Each provider adapter implements this trait. The facade depends on it,
//! not on concrete adapters, so a new provider only needs a new impl.

use crate::domain::{InitiateResult, Provider, VerifyResult};
use crate::dto::TransactionRequest;
use crate::error::GatewayError;

#[async_trait::async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Which provider this adapter talks to.
    fn provider(&self) -> Provider;

    /// Starts a transaction and returns where to send the customer.
    ///
    /// Failures, including transport failures, are `GatewayError::Gateway`.
    async fn initiate_transaction(
        &self,
        request: &TransactionRequest,
    ) -> Result<InitiateResult, GatewayError>;

    /// Fetches and normalizes the state of a transaction.
    ///
    /// Failures are `GatewayError::TransactionVerification`.
    async fn verify_transaction(&self, reference: &str) -> Result<VerifyResult, GatewayError>;
}
