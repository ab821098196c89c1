//! Canonical domain model shared by every provider.

pub mod money;
pub mod provider;
pub mod transaction;

pub use money::{CurrencyCode, MinorUnitFactor, Money, decimal_from_json, decimal_to_json};
pub use provider::{CredentialFields, GatewayCredentials, INVALID_GATEWAY_TYPE, Provider};
pub use transaction::{Customer, InitiateResult, TransactionStatus, VerifyData, VerifyResult};
