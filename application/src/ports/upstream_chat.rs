//! Upstream chat-completion port
//!
//! Used only by the relay. Implementations perform a single blocking round
//! trip: no retries, no streaming, transport-default timeouts.

use async_trait::async_trait;
use thiserror::Error;
use tutor_domain::{ChatCompletionRequest, ChatCompletionResponse};

/// Errors from the upstream completion API
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UpstreamError {
    /// Non-success HTTP status. `body` is for operator logs only.
    #[error("Upstream returned status {status}")]
    Status { status: u16, body: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid upstream response: {0}")]
    Decode(String),
}

#[async_trait]
pub trait UpstreamChatApi: Send + Sync {
    async fn create_chat_completion(
        &self,
        api_key: &str,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, UpstreamError>;
}
