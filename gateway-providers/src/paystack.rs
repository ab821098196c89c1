//! Paystack adapter.
//!
//! Paystack bills in kobo, so amounts are scaled by 100 on the way out and
//! divided by 100 on the way back.

use async_trait::async_trait;
use gateway_types::{
    Customer, ErrorKind, GatewayError, InitiateResult, MinorUnitFactor, Money, PaymentGateway,
    Provider, TransactionRequest, TransactionStatus, Transport, VerifyData, VerifyResult,
    domain::decimal_to_json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::wire;

pub const PAYSTACK_BASE_URL: &str = "https://api.paystack.co";

/// Kobo per naira.
pub const PAYSTACK_FACTOR: MinorUnitFactor = MinorUnitFactor::HUNDREDTHS;

pub struct PaystackGateway<T: Transport> {
    secret_key: String,
    base_url: String,
    transport: T,
}

// ─────────────────────────────────────────────────────────────────────────────
// Wire records
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct InitializeBody<'a> {
    amount: serde_json::Value,
    email: &'a str,
    currency: &'a str,
    reference: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    callback_url: Option<&'a str>,
}

/// `{ status: bool, message, data }`, shared by every Paystack endpoint.
#[derive(Deserialize)]
struct PaystackEnvelope {
    #[serde(default)]
    status: bool,
    message: Option<String>,
    #[serde(default)]
    data: serde_json::Value,
}

#[derive(Deserialize)]
struct InitializeData {
    authorization_url: Option<String>,
    access_code: Option<String>,
    reference: Option<String>,
}

#[derive(Deserialize)]
struct VerifyRecord {
    #[serde(deserialize_with = "wire::decimal_amount")]
    amount: Decimal,
    currency: String,
    reference: Option<String>,
    status: String,
    #[serde(default)]
    customer: Option<CustomerRecord>,
}

#[derive(Deserialize)]
struct CustomerRecord {
    email: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
}

impl<T: Transport> PaystackGateway<T> {
    pub fn new(secret_key: impl Into<String>, transport: T) -> Self {
        Self {
            secret_key: secret_key.into(),
            base_url: PAYSTACK_BASE_URL.to_string(),
            transport,
        }
    }

    /// Points the adapter at another host (mock server, proxy).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = wire::normalize_base_url(base_url);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn envelope(
        &self,
        kind: ErrorKind,
        data: &serde_json::Value,
    ) -> Result<PaystackEnvelope, GatewayError> {
        wire::decode(Provider::Paystack, kind, data)
    }
}

#[async_trait]
impl<T: Transport> PaymentGateway for PaystackGateway<T> {
    fn provider(&self) -> Provider {
        Provider::Paystack
    }

    #[instrument(
        skip(self, request),
        fields(provider = "paystack", reference = %request.reference)
    )]
    async fn initiate_transaction(
        &self,
        request: &TransactionRequest,
    ) -> Result<InitiateResult, GatewayError> {
        let money = wire::request_money(request)?;
        let amount = decimal_to_json(money.to_whole_minor_units(PAYSTACK_FACTOR)?)?;

        let body = InitializeBody {
            amount,
            email: &request.customer_email,
            currency: money.currency().as_str(),
            reference: &request.reference,
            callback_url: request.redirect_url(),
        };
        let body = serde_json::to_value(&body).map_err(|e| {
            GatewayError::gateway(format!("Failed to encode Paystack request: {}", e))
        })?;

        let url = format!("{}/transaction/initialize", self.base_url);
        debug!(%url, "Initializing Paystack transaction");

        let response = self
            .transport
            .post(&url, &body, &wire::auth_headers(&self.secret_key))
            .await
            .map_err(|e| {
                warn!(status = ?e.status, "Paystack initialize request failed: {}", e);
                GatewayError::from_transport(ErrorKind::Gateway, e)
            })?;

        let envelope = self.envelope(ErrorKind::Gateway, &response.data)?;
        if !envelope.status {
            warn!("Paystack rejected transaction: {:?}", envelope.message);
            return Err(wire::provider_failure(
                ErrorKind::Gateway,
                response.status,
                envelope.message,
            ));
        }

        let data: InitializeData =
            wire::decode(Provider::Paystack, ErrorKind::Gateway, &envelope.data)?;
        info!("Paystack transaction initialized");

        Ok(InitiateResult {
            message: envelope.message.unwrap_or_default(),
            reference: data.reference.unwrap_or_else(|| request.reference.clone()),
            status: TransactionStatus::Success,
            authorization_url: data.authorization_url,
            access_code: data.access_code,
        })
    }

    #[instrument(skip(self), fields(provider = "paystack"))]
    async fn verify_transaction(&self, reference: &str) -> Result<VerifyResult, GatewayError> {
        let url = format!(
            "{}/transaction/verify/{}",
            self.base_url,
            wire::path_segment(ErrorKind::TransactionVerification, reference)?
        );
        debug!(%url, "Verifying Paystack transaction");

        let response = self
            .transport
            .get(&url, &wire::auth_headers(&self.secret_key))
            .await
            .map_err(|e| {
                warn!(status = ?e.status, "Paystack verify request failed: {}", e);
                GatewayError::from_transport(ErrorKind::TransactionVerification, e)
            })?;

        let envelope = self.envelope(ErrorKind::TransactionVerification, &response.data)?;
        if !envelope.status {
            warn!("Paystack verification failed: {:?}", envelope.message);
            return Err(wire::provider_failure(
                ErrorKind::TransactionVerification,
                response.status,
                envelope.message,
            ));
        }

        let record: VerifyRecord = wire::decode(
            Provider::Paystack,
            ErrorKind::TransactionVerification,
            &envelope.data,
        )?;
        let amount = Money::from_minor_units(record.amount, PAYSTACK_FACTOR, &record.currency)
            .map_err(wire::verification_domain_error)?;

        let customer = match record.customer {
            Some(c) => {
                Customer::from_parts(c.email.unwrap_or_default(), c.first_name, c.last_name, None)
            }
            None => Customer::default(),
        };

        info!(status = %record.status, "Paystack transaction verified");

        Ok(VerifyResult {
            status: TransactionStatus::Success,
            message: envelope.message.unwrap_or_default(),
            data: VerifyData {
                amount,
                currency: record.currency,
                reference: record.reference.unwrap_or_else(|| reference.to_string()),
                status: record.status,
                gateway_response: envelope.data,
                customer,
            },
        })
    }
}
