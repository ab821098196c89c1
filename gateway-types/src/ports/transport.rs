//! HTTP transport port.
//!
//! Adapters talk to providers only through this trait. The concrete
//! implementation lives in `gateway-client`; tests substitute a recorder.

use std::collections::BTreeMap;
use std::sync::Arc;

/// Request headers, name to value.
pub type Headers = BTreeMap<String, String>;

/// A successful (2xx) response.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    pub status: u16,
    pub data: serde_json::Value,
}

/// A failed exchange: network error, timeout or non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct TransportError {
    /// HTTP status, when a response was received.
    pub status: Option<u16>,
    /// The provider's `message` field from the error body, if any.
    pub response_message: Option<String>,
    pub message: String,
}

impl TransportError {
    /// A failure with no HTTP response at all.
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            status: None,
            response_message: None,
            message: message.into(),
        }
    }

    /// A non-2xx response, pulling the provider message out of the body.
    pub fn from_status(status: u16, body: &serde_json::Value) -> Self {
        Self {
            status: Some(status),
            response_message: body
                .get("message")
                .and_then(|m| m.as_str())
                .map(String::from),
            message: format!("Request failed with status code {}", status),
        }
    }
}

/// Port trait for the outbound HTTP exchange.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Sends `body` as JSON and returns the decoded JSON response.
    async fn post(
        &self,
        url: &str,
        body: &serde_json::Value,
        headers: &Headers,
    ) -> Result<TransportResponse, TransportError>;

    async fn get(&self, url: &str, headers: &Headers)
    -> Result<TransportResponse, TransportError>;
}

#[async_trait::async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn post(
        &self,
        url: &str,
        body: &serde_json::Value,
        headers: &Headers,
    ) -> Result<TransportResponse, TransportError> {
        (**self).post(url, body, headers).await
    }

    async fn get(
        &self,
        url: &str,
        headers: &Headers,
    ) -> Result<TransportResponse, TransportError> {
        (**self).get(url, headers).await
    }
}
