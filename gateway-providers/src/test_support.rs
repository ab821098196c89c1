//! In-memory transport for adapter tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use gateway_types::{Headers, Transport, TransportError, TransportResponse};

#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    Post {
        url: String,
        body: serde_json::Value,
        headers: Headers,
    },
    Get {
        url: String,
        headers: Headers,
    },
}

/// Replays canned responses in order and records every call.
#[derive(Default)]
pub struct RecordingTransport {
    responses: Mutex<VecDeque<Result<serde_json::Value, TransportError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingTransport {
    pub fn with_responses(responses: Vec<Result<serde_json::Value, TransportError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn next(&self) -> Result<TransportResponse, TransportError> {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::network("no canned response")))
            .map(|data| TransportResponse { status: 200, data })
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn post(
        &self,
        url: &str,
        body: &serde_json::Value,
        headers: &Headers,
    ) -> Result<TransportResponse, TransportError> {
        self.calls.lock().unwrap().push(RecordedCall::Post {
            url: url.to_string(),
            body: body.clone(),
            headers: headers.clone(),
        });
        self.next()
    }

    async fn get(&self, url: &str, headers: &Headers) -> Result<TransportResponse, TransportError> {
        self.calls.lock().unwrap().push(RecordedCall::Get {
            url: url.to_string(),
            headers: headers.clone(),
        });
        self.next()
    }
}
