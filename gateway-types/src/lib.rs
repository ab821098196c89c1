//! # Gateway Types
//!
//! Canonical domain types and port traits for the payment gateway layer.
//! This crate has ZERO I/O - only data structures, conversion rules,
//! validation and trait definitions.
//!
//! ## Architecture
//!
//! - `domain/` - Money, provider identity, canonical results
//! - `dto/` - Canonical transaction request
//! - `ports/` - `Transport` (consumed by adapters) and `PaymentGateway` (provided by them)
//! - `validation/` - Pre-call input rules
//! - `error/` - Gateway and domain error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;
pub mod validation;

// Re-export commonly used types
pub use domain::{
    CredentialFields, CurrencyCode, Customer, GatewayCredentials, InitiateResult,
    MinorUnitFactor, Money, Provider, TransactionStatus, VerifyData, VerifyResult,
};
pub use dto::*;
pub use error::{DomainError, ErrorKind, GatewayError};
pub use ports::{Headers, PaymentGateway, Transport, TransportError, TransportResponse};
