//! Completion service
//!
//! Wraps a [`CompletionGateway`] with the two reply shapes the tutor uses.
//! Plain text and structured JSON are separate calls so a reply that fails
//! to parse is its own error, not a silently different value.

use crate::ports::completion_gateway::{CompletionGateway, GatewayError};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};
use tutor_domain::CompletionRequest;

/// Errors that can occur while obtaining a completion
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompletionError {
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Empty completion")]
    Empty,

    #[error("Malformed JSON reply: {0}")]
    MalformedJson(String),
}

#[derive(Clone)]
pub struct CompletionService {
    gateway: Arc<dyn CompletionGateway>,
}

impl CompletionService {
    pub fn new(gateway: Arc<dyn CompletionGateway>) -> Self {
        Self { gateway }
    }

    /// Free-text reply, trimmed
    pub async fn plain_text(&self, prompt: impl Into<String>) -> Result<String, CompletionError> {
        let request = CompletionRequest::plain_text(prompt);
        let text = self.gateway.complete(&request).await?;
        let text = text.trim();
        if text.is_empty() {
            return Err(CompletionError::Empty);
        }
        Ok(text.to_string())
    }

    /// JSON-object reply deserialized into `T`. Never retried.
    pub async fn structured_json<T: DeserializeOwned>(
        &self,
        prompt: impl Into<String>,
    ) -> Result<T, CompletionError> {
        let request = CompletionRequest::structured_json(prompt);
        let text = self.gateway.complete(&request).await?;
        debug!(bytes = text.len(), "Parsing structured reply");
        serde_json::from_str(text.trim()).map_err(|e| {
            warn!(error = %e, "Structured reply is not valid JSON for the expected shape");
            CompletionError::MalformedJson(e.to_string())
        })
    }
}
