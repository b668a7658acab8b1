//! HTTP surface of the completion gateway
//!
//! A single route, `POST /api/chat`, in front of
//! [`RelayCompletionUseCase`]. Success replies are `{"text": ..}` with 200;
//! failures are `{"error": ..}` with the relay's status code.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, info, warn};
use tutor_application::RelayCompletionUseCase;
use tutor_domain::{CompletionRequest, ErrorBody};

pub const CHAT_ROUTE: &str = "/api/chat";

/// Body-level message for requests that are not a JSON object
const INVALID_BODY: &str = "Invalid request body";

/// Build the gateway router. Any origin, method and header is allowed.
pub fn router(relay: Arc<RelayCompletionUseCase>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(CHAT_ROUTE, post(chat))
        .layer(cors)
        .with_state(relay)
}

/// Serve the gateway on `listener` until Ctrl-C
pub async fn serve(listener: TcpListener, relay: Arc<RelayCompletionUseCase>) -> std::io::Result<()> {
    let addr = listener.local_addr()?;
    if !relay.has_credential() {
        warn!("No upstream API key configured; requests will fail until one is set");
    }
    info!(
        %addr,
        model = %relay.params().model,
        "Completion gateway listening"
    );

    axum::serve(listener, router(relay))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutting down gateway"),
        Err(e) => {
            warn!(error = %e, "Could not install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    }
}

async fn chat(
    State(relay): State<Arc<RelayCompletionUseCase>>,
    payload: Result<Json<CompletionRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            debug!(reason = %rejection.body_text(), "Rejecting unreadable body");
            return error_reply(StatusCode::BAD_REQUEST, INVALID_BODY);
        }
    };

    match relay.execute(request).await {
        Ok(reply) => (StatusCode::OK, Json(reply)).into_response(),
        Err(e) => {
            let status =
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            error_reply(status, &e.to_string())
        }
    }
}

fn error_reply(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.to_string(),
        }),
    )
        .into_response()
}
