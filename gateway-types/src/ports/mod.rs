//! Port traits (interfaces for adapters).
//!
//! `Transport` is what adapters consume; `PaymentGateway` is what they provide.

mod gateway;
mod transport;

pub use gateway::PaymentGateway;
pub use transport::{Headers, Transport, TransportError, TransportResponse};
