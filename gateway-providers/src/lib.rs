//! # Gateway Providers
//!
//! Concrete gateway implementations (adapters) for the payment gateway layer.
//! Each adapter implements the `PaymentGateway` port over any `Transport`,
//! owns its wire shapes and unit conventions, and converts provider
//! responses into canonical types before returning.

use gateway_types::{GatewayCredentials, PaymentGateway, Transport};

pub mod flutterwave;
pub mod paystack;
pub mod webhook;

mod wire;

#[cfg(test)]
mod test_support;

pub use flutterwave::{FLUTTERWAVE_BASE_URL, FlutterwaveGateway};
pub use paystack::{PAYSTACK_BASE_URL, PaystackGateway};
pub use webhook::{
    flutterwave_secret_hash, sign_paystack_webhook, verify_flutterwave_webhook_signature,
    verify_paystack_webhook_signature, verify_paystack_webhook_signature_raw,
};

/// Build the adapter matching the credentials.
///
/// The match over credential variants is exhaustive, so every provider
/// identity the type system allows has an adapter.
///
/// # Examples
///
/// ```ignore
/// let gateway = build_gateway(GatewayCredentials::paystack("sk_test_..."), transport, None);
/// assert_eq!(gateway.provider(), Provider::Paystack);
/// ```
pub fn build_gateway<T: Transport + 'static>(
    credentials: GatewayCredentials,
    transport: T,
    base_url: Option<String>,
) -> Box<dyn PaymentGateway> {
    match credentials {
        GatewayCredentials::Paystack { secret_key } => {
            let gateway = PaystackGateway::new(secret_key, transport);
            match base_url {
                Some(url) => Box::new(gateway.with_base_url(url)),
                None => Box::new(gateway),
            }
        }
        GatewayCredentials::Flutterwave {
            public_key,
            secret_key,
        } => {
            let gateway = FlutterwaveGateway::new(public_key, secret_key, transport);
            match base_url {
                Some(url) => Box::new(gateway.with_base_url(url)),
                None => Box::new(gateway),
            }
        }
    }
}
