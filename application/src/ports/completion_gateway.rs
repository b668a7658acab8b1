//! Completion Gateway port
//!
//! The tutor's only way to reach a language model. Adapters either call the
//! gateway's `POST /api/chat` endpoint or run the relay in-process; neither
//! exposes the upstream credential to the caller.

use async_trait::async_trait;
use thiserror::Error;
use tutor_domain::CompletionRequest;

/// Errors that can occur during gateway operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Gateway returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Invalid gateway response: {0}")]
    InvalidResponse(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),
}

/// Gateway for completion requests
///
/// Returns the reply text exactly as the gateway produced it; shaping that
/// text (trimming, JSON parsing) is the caller's concern.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError>;
}
