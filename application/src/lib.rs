//! Application layer for smart-tutor
//!
//! This crate contains use cases, port definitions, the tutor state machine
//! and application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod tutor;
pub mod use_cases;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use config::RelayParams;
pub use ports::{
    completion_gateway::{CompletionGateway, GatewayError},
    progress::{ActionNotifier, NoProgress},
    upstream_chat::{UpstreamChatApi, UpstreamError},
};
pub use tutor::{ActionKind, ActionOutcome, TutorApp, TutorSnapshot};
pub use use_cases::completion::{CompletionError, CompletionService};
pub use use_cases::relay_completion::{RelayCompletionUseCase, RelayError};
