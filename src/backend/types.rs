//! Request, response and error types for the inventory endpoint

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio_util::sync::CancellationToken;

/// JSON body sent to the endpoint: `{"query": "..."}`
#[derive(Debug, Serialize)]
pub struct QueryRequest<'a> {
    pub query: &'a str,
}

/// Successful answer from the endpoint
///
/// Both fields are required; anything else in the body is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QueryAnswer {
    pub mode: String,
    pub ai_response: String,
}

/// Errors that can occur while querying the endpoint
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// The request could not be completed
    #[error("Network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-2xx status
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// The body was not JSON or lacked `mode`/`ai_response`
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Request cancelled")]
    Cancelled,
}

/// Work item handed to the worker thread
#[derive(Debug)]
pub struct BackendRequest {
    pub query: String,
    pub request_id: u64,
    pub cancel_token: CancellationToken,
}

/// Outcome reported back to the UI thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendResponse {
    Answer { request_id: u64, answer: QueryAnswer },
    Failed { request_id: u64, error: BackendError },
    Cancelled { request_id: u64 },
}

impl BackendResponse {
    pub fn request_id(&self) -> u64 {
        match self {
            BackendResponse::Answer { request_id, .. }
            | BackendResponse::Failed { request_id, .. }
            | BackendResponse::Cancelled { request_id } => *request_id,
        }
    }
}
