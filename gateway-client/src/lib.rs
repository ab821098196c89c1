//! # Gateway Client
//!
//! `reqwest` implementation of the `Transport` port.

use std::time::Duration;

use async_trait::async_trait;
use gateway_types::{Headers, Transport, TransportError, TransportResponse};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, RequestBuilder};
use tracing::debug;

/// HTTP transport backed by a shared `reqwest::Client`.
#[derive(Clone)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    /// Creates a transport with reqwest's defaults (no request timeout).
    pub fn new() -> Self {
        Self {
            http: Client::new(),
        }
    }

    /// Creates a transport whose requests give up after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::network(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { http })
    }

    /// Wraps an already configured client.
    pub fn from_client(http: Client) -> Self {
        Self { http }
    }

    async fn send(
        &self,
        req: RequestBuilder,
        headers: &Headers,
    ) -> Result<TransportResponse, TransportError> {
        let resp = req
            .headers(header_map(headers)?)
            .send().await.map_err(network_error)?;
        let status = resp.status();
        let body = resp.text().await.map_err(network_error)?;
        debug!(status = status.as_u16(), "Provider responded");

        // Error pages are not always JSON; keep the raw text around in that case.
        let data = if body.trim().is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_str(&body).unwrap_or(serde_json::Value::String(body))
        };

        if status.is_success() {
            Ok(TransportResponse {
                status: status.as_u16(),
                data,
            })
        } else {
            Err(TransportError::from_status(status.as_u16(), &data))
        }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

/// Port headers as a `HeaderMap`.
///
/// Applied with `RequestBuilder::headers`, which replaces rather than appends,
/// so a caller's `Content-Type` does not duplicate the one set by `.json()`.
fn header_map(headers: &Headers) -> Result<HeaderMap, TransportError> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| TransportError::network(format!("Invalid header name {}: {}", name, e)))?;
        let mut value = HeaderValue::from_str(value)
            .map_err(|e| TransportError::network(format!("Invalid value for {}: {}", name, e)))?;
        if name == AUTHORIZATION {
            value.set_sensitive(true);
        }
        map.insert(name, value);
    }
    Ok(map)
}

fn network_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        return TransportError::network(format!("Request timed out: {}", err));
    }
    TransportError::network(err.to_string())
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn post(
        &self,
        url: &str,
        body: &serde_json::Value,
        headers: &Headers,
    ) -> Result<TransportResponse, TransportError> {
        self.send(self.http.post(url).json(body), headers).await
    }

    async fn get(&self, url: &str, headers: &Headers) -> Result<TransportResponse, TransportError> {
        self.send(self.http.get(url), headers).await
    }
}
