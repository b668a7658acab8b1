//! Scripted port doubles shared by the use-case tests.

use crate::ports::completion_gateway::{CompletionGateway, GatewayError};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tutor_domain::CompletionRequest;

/// Gateway that replays queued replies and records every request
#[derive(Default)]
pub struct ScriptedGateway {
    replies: Mutex<VecDeque<Result<String, GatewayError>>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedGateway {
    pub fn new(replies: Vec<Result<String, GatewayError>>) -> Self {
        Self {
            replies: Mutex::new(VecDeque::from(replies)),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn text(reply: &str) -> Self {
        Self::new(vec![Ok(reply.to_string())])
    }

    pub fn failing() -> Self {
        Self::new(vec![Err(GatewayError::Status {
            status: 500,
            message: "OpenAI API request failed".to_string(),
        })])
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionGateway for ScriptedGateway {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError> {
        self.requests.lock().unwrap().push(request.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::RequestFailed("No more replies".to_string())))
    }
}

/// Gateway that holds every call until the test opens the gate
pub struct GatedGateway {
    inner: ScriptedGateway,
    gate: tokio::sync::Semaphore,
    arrived: AtomicUsize,
    observed: AtomicUsize,
}

impl GatedGateway {
    pub fn new(replies: Vec<Result<String, GatewayError>>) -> Self {
        Self {
            inner: ScriptedGateway::new(replies),
            gate: tokio::sync::Semaphore::new(0),
            arrived: AtomicUsize::new(0),
            observed: AtomicUsize::new(0),
        }
    }

    /// Resolves once a call not yet observed has reached the gate
    pub async fn entered(&self) {
        loop {
            let observed = self.observed.load(Ordering::SeqCst);
            if self.arrived.load(Ordering::SeqCst) > observed {
                self.observed.store(observed + 1, Ordering::SeqCst);
                return;
            }
            tokio::task::yield_now().await;
        }
    }

    /// Let `calls` waiting calls through
    pub fn open(&self, calls: usize) {
        self.gate.add_permits(calls);
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.inner.requests()
    }
}

#[async_trait]
impl CompletionGateway for GatedGateway {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError> {
        self.arrived.fetch_add(1, Ordering::SeqCst);
        self.gate
            .acquire()
            .await
            .map_err(|_| GatewayError::RequestFailed("Gate closed".to_string()))?
            .forget();
        self.inner.complete(request).await
    }
}
