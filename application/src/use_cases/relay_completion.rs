//! Relay Completion use case
//!
//! The gateway's whole job: validate the prompt, attach the server-held
//! credential, make one upstream call and hand back the reply text.
//! Upstream error bodies are logged here and never returned.

use crate::config::RelayParams;
use crate::ports::completion_gateway::{CompletionGateway, GatewayError};
use crate::ports::upstream_chat::{UpstreamChatApi, UpstreamError};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info};
use tutor_domain::{ChatCompletionRequest, CompletionReply, CompletionRequest};

/// Errors returned to gateway callers.
///
/// The display strings are the exact client-facing messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("Missing prompt")]
    MissingPrompt,

    #[error("API key not configured")]
    MissingCredential,

    #[error("OpenAI API request failed")]
    UpstreamStatus { status: u16 },

    #[error("Empty response from OpenAI")]
    EmptyResponse,

    /// Transport or decoding failure; the detail is logged, not shown
    #[error("Failed to fetch from OpenAI")]
    Transport(String),
}

impl RelayError {
    /// HTTP status for the error reply
    pub fn status_code(&self) -> u16 {
        match self {
            RelayError::MissingPrompt => 400,
            RelayError::UpstreamStatus { status } => *status,
            RelayError::MissingCredential | RelayError::EmptyResponse | RelayError::Transport(_) => {
                500
            }
        }
    }
}

/// Use case for relaying one prompt upstream
pub struct RelayCompletionUseCase {
    upstream: Arc<dyn UpstreamChatApi>,
    api_key: Option<String>,
    params: RelayParams,
}

impl RelayCompletionUseCase {
    pub fn new(upstream: Arc<dyn UpstreamChatApi>, api_key: Option<String>) -> Self {
        Self {
            upstream,
            api_key,
            params: RelayParams::default(),
        }
    }

    pub fn with_params(mut self, params: RelayParams) -> Self {
        self.params = params;
        self
    }

    pub fn params(&self) -> &RelayParams {
        &self.params
    }

    pub fn has_credential(&self) -> bool {
        self.credential().is_some()
    }

    fn credential(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.trim().is_empty())
    }

    pub async fn execute(&self, request: CompletionRequest) -> Result<CompletionReply, RelayError> {
        if request.validate().is_err() {
            debug!("Rejecting request without prompt");
            return Err(RelayError::MissingPrompt);
        }

        let Some(api_key) = self.credential() else {
            error!("Upstream API key is not configured");
            return Err(RelayError::MissingCredential);
        };

        let body = ChatCompletionRequest::single_prompt(
            &self.params.model,
            request.prompt,
            self.params.temperature,
            request.is_json,
        );

        info!(
            model = %self.params.model,
            json = request.is_json,
            "Relaying completion request"
        );

        let response = match self.upstream.create_chat_completion(api_key, &body).await {
            Ok(response) => response,
            Err(UpstreamError::Status { status, body }) => {
                error!(status, body = %body, "OpenAI API error");
                return Err(RelayError::UpstreamStatus { status });
            }
            Err(e) => {
                error!(error = %e, "Proxy error");
                return Err(RelayError::Transport(e.to_string()));
            }
        };

        let text = response.first_text().ok_or(RelayError::EmptyResponse)?;
        debug!(chars = text.chars().count(), "Upstream replied");

        Ok(CompletionReply { text })
    }
}

/// Lets the relay serve as the tutor's gateway in a single process.
#[async_trait]
impl CompletionGateway for RelayCompletionUseCase {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError> {
        self.execute(request.clone())
            .await
            .map(|reply| reply.text)
            .map_err(|e| GatewayError::Status {
                status: e.status_code(),
                message: e.to_string(),
            })
    }
}
