//! HTTP client for the completion gateway
//!
//! The tutor's default [`CompletionGateway`]: posts `{prompt, isJson}` to
//! `<gateway_url>/api/chat` and reads back `{text}` or `{error}`.

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;
use tutor_application::ports::completion_gateway::{CompletionGateway, GatewayError};
use tutor_domain::{CompletionReply, CompletionRequest, ErrorBody};

const CHAT_PATH: &str = "/api/chat";

pub struct HttpCompletionGateway {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpCompletionGateway {
    /// `gateway_url` is the server root, e.g. `http://localhost:3001`
    pub fn new(gateway_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), gateway_url)
    }

    pub fn with_timeout(gateway_url: &str, timeout: Duration) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;
        Ok(Self::with_client(client, gateway_url))
    }

    pub fn with_client(client: reqwest::Client, gateway_url: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}{}", gateway_url.trim_end_matches('/'), CHAT_PATH),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CompletionGateway for HttpCompletionGateway {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError> {
        debug!(endpoint = %self.endpoint, json = request.is_json, "Posting completion request");

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    GatewayError::ConnectionError(e.to_string())
                } else {
                    GatewayError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or_else(|_| {
                    status
                        .canonical_reason()
                        .unwrap_or("Unknown error")
                        .to_string()
                });
            return Err(GatewayError::Status {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<CompletionReply>()
            .await
            .map(|reply| reply.text)
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Json, Router, http::StatusCode, routing::post};
    use serde_json::{Value, json};

    async fn spawn(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    async fn echo(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
        let prompt = body["prompt"].as_str().unwrap_or_default();
        if prompt.is_empty() {
            return (StatusCode::BAD_REQUEST, Json(json!({"error": "Missing prompt"})));
        }
        let text = format!("{prompt}|{}", body["isJson"].as_bool().unwrap_or(false));
        (StatusCode::OK, Json(json!({ "text": text })))
    }

    #[test]
    fn test_endpoint_joins_base_url() {
        let gateway = HttpCompletionGateway::new("http://localhost:3001/");
        assert_eq!(gateway.endpoint(), "http://localhost:3001/api/chat");
    }

    #[tokio::test]
    async fn test_posts_prompt_and_flag() {
        let base = spawn(Router::new().route(CHAT_PATH, post(echo))).await;
        let gateway = HttpCompletionGateway::new(&base);

        let plain = gateway
            .complete(&CompletionRequest::plain_text("hi"))
            .await
            .unwrap();
        assert_eq!(plain, "hi|false");

        let json = gateway
            .complete(&CompletionRequest::structured_json("grade"))
            .await
            .unwrap();
        assert_eq!(json, "grade|true");
    }

    #[tokio::test]
    async fn test_error_body_becomes_status_error() {
        let base = spawn(Router::new().route(CHAT_PATH, post(echo))).await;
        let gateway = HttpCompletionGateway::new(&base);

        let err = gateway
            .complete(&CompletionRequest::plain_text(""))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            GatewayError::Status {
                status: 400,
                message: "Missing prompt".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_error_without_body_uses_reason() {
        let router = Router::new().route(CHAT_PATH, post(|| async { StatusCode::BAD_GATEWAY }));
        let base = spawn(router).await;
        let gateway = HttpCompletionGateway::new(&base);

        let err = gateway
            .complete(&CompletionRequest::plain_text("hi"))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            GatewayError::Status {
                status: 502,
                message: "Bad Gateway".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_success_without_text_is_invalid() {
        let router = Router::new().route(CHAT_PATH, post(|| async { Json(json!({"reply": "x"})) }));
        let base = spawn(router).await;
        let gateway = HttpCompletionGateway::new(&base);

        let err = gateway
            .complete(&CompletionRequest::plain_text("hi"))
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_gateway_down_is_connection_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let gateway = HttpCompletionGateway::new(&format!("http://{addr}"));
        let err = gateway
            .complete(&CompletionRequest::plain_text("hi"))
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::ConnectionError(_)));
    }
}
