use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};
use tutor_application::ports::upstream_chat::{UpstreamChatApi, UpstreamError};
use tutor_domain::{ChatCompletionRequest, ChatCompletionResponse};

const COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// Upstream adapter for an OpenAI-compatible chat-completion endpoint
pub struct OpenAiChatApi {
    client: reqwest::Client,
    endpoint: String,
}

impl OpenAiChatApi {
    /// `base_url` is the API root, e.g. `https://api.openai.com`
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Build with a request timeout applied to every call
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, UpstreamError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), COMPLETIONS_PATH),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl UpstreamChatApi for OpenAiChatApi {
    async fn create_chat_completion(
        &self,
        api_key: &str,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, UpstreamError> {
        debug!(endpoint = %self.endpoint, model = %request.model, "Calling upstream");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Upstream returned an error status");
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<ChatCompletionResponse>()
            .await
            .map_err(|e| UpstreamError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Json, Router, http::HeaderMap, http::StatusCode, routing::post};
    use serde_json::{Value, json};

    async fn spawn(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    /// Echoes the prompt back, after checking the bearer token
    async fn echo(headers: HeaderMap, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
        if headers.get("authorization").and_then(|v| v.to_str().ok()) != Some("Bearer sk-test") {
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({"error": {"message": "Incorrect API key"}})),
            );
        }
        let content = format!(
            "{}|{}|{}",
            body["model"].as_str().unwrap_or_default(),
            body["messages"][0]["content"].as_str().unwrap_or_default(),
            body["response_format"]["type"].as_str().unwrap_or("text"),
        );
        (
            StatusCode::OK,
            Json(json!({"choices": [{"index": 0, "message": {"role": "assistant", "content": content}}]})),
        )
    }

    #[test]
    fn test_endpoint_joins_base_url() {
        let api = OpenAiChatApi::new("https://api.openai.com/");
        assert_eq!(api.endpoint(), "https://api.openai.com/v1/chat/completions");
    }

    #[tokio::test]
    async fn test_sends_bearer_and_body() {
        let base = spawn(Router::new().route(COMPLETIONS_PATH, post(echo))).await;
        let api = OpenAiChatApi::new(&base);

        let request = ChatCompletionRequest::single_prompt("gpt-4o", "hello", 0.7, true);
        let response = api.create_chat_completion("sk-test", &request).await.unwrap();

        assert_eq!(response.first_text().as_deref(), Some("gpt-4o|hello|json_object"));
    }

    #[tokio::test]
    async fn test_error_status_carries_body() {
        let base = spawn(Router::new().route(COMPLETIONS_PATH, post(echo))).await;
        let api = OpenAiChatApi::new(&base);

        let request = ChatCompletionRequest::single_prompt("gpt-4o", "hello", 0.7, false);
        let err = api
            .create_chat_completion("sk-wrong", &request)
            .await
            .unwrap_err();

        match err {
            UpstreamError::Status { status, body } => {
                assert_eq!(status, 401);
                assert!(body.contains("Incorrect API key"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_json_success_is_decode_error() {
        let router = Router::new().route(COMPLETIONS_PATH, post(|| async { "not json" }));
        let base = spawn(router).await;
        let api = OpenAiChatApi::new(&base);

        let request = ChatCompletionRequest::single_prompt("gpt-4o", "hello", 0.7, false);
        let err = api.create_chat_completion("sk-test", &request).await.unwrap_err();
        assert!(matches!(err, UpstreamError::Decode(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let api = OpenAiChatApi::new(&format!("http://{addr}"));
        let request = ChatCompletionRequest::single_prompt("gpt-4o", "hello", 0.7, false);
        let err = api.create_chat_completion("sk-test", &request).await.unwrap_err();
        assert!(matches!(err, UpstreamError::Transport(_)));
    }
}
