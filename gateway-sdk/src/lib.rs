//! # Gateway SDK
//!
//! One interface over Paystack and Flutterwave.
//!
//! ## Architecture
//!
//! - `service/` - `PaymentGatewaySdk`, the facade binding one adapter
//! - `config/` - environment-driven configuration
//!
//! Webhook verification is stateless and re-exported directly; it does not
//! go through the facade.

pub mod config;
pub mod service;


pub use config::GatewayConfig;
pub use gateway_providers::{
    verify_flutterwave_webhook_signature, verify_paystack_webhook_signature,
    verify_paystack_webhook_signature_raw,
};
pub use gateway_types::{
    CredentialFields, Customer, Customizations, ErrorKind, GatewayCredentials, GatewayError,
    InitiateResult, Money, Provider, TransactionConfig, TransactionRequest, TransactionStatus,
    VerifyData, VerifyResult,
};
pub use service::PaymentGatewaySdk;
