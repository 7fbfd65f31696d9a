//! Inventory endpoint client
//!
//! One POST per query, raced against a cancellation token. No timeout and
//! no retries: the user resubmits by hand.

use tokio_util::sync::CancellationToken;

use super::types::{BackendError, QueryAnswer, QueryRequest};

#[derive(Debug, Clone)]
pub struct InventoryClient {
    http: reqwest::Client,
    endpoint: String,
}

impl InventoryClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send `query` (untrimmed) and decode the answer
    ///
    /// Returns `BackendError::Cancelled` as soon as `cancel_token` fires,
    /// dropping the in-flight request.
    pub async fn query(
        &self,
        query: &str,
        cancel_token: &CancellationToken,
    ) -> Result<QueryAnswer, BackendError> {
        tokio::select! {
            biased;
            _ = cancel_token.cancelled() => Err(BackendError::Cancelled),
            result = self.send(query) => result,
        }
    }

    async fn send(&self, query: &str) -> Result<QueryAnswer, BackendError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&QueryRequest { query })
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        parse_answer(&body)
    }
}

/// Decode a response body, requiring string `mode` and `ai_response` fields
pub fn parse_answer(body: &[u8]) -> Result<QueryAnswer, BackendError> {
    serde_json::from_slice(body).map_err(|e| BackendError::Parse(e.to_string()))
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
