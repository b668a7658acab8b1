//! Domain layer for smart-tutor
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Subject**: one of the four fixed 11+ exam domains
//! - **Question**: a generated practice question and its derived
//!   multiple-choice view ([`parse_options`])
//! - **Evaluation**: the result of grading a learner's answer
//! - **ChatLog**: the append-only tutor conversation
//! - **Completion contracts**: the gateway body and the upstream
//!   chat-completion schema

pub mod chat;
pub mod completion;
pub mod core;
pub mod evaluation;
pub mod prompt;
pub mod question;
pub mod subject;

// Re-export commonly used types
pub use chat::{CHAT_FAILURE_TEXT, CHAT_GREETING, ChatLog, ChatMessage, Sender};
pub use completion::{
    request::{CompletionReply, CompletionRequest, ErrorBody, ResponseFormat},
    upstream::{ChatCompletionRequest, ChatCompletionResponse, UpstreamMessage},
};
pub use core::error::DomainError;
pub use evaluation::{Evaluation, GRADING_FAILED_FEEDBACK};
pub use prompt::{PromptTemplate, TUTOR_PERSONA};
pub use question::{
    entities::Question,
    options::{ChoiceOption, OptionLabel, ParsedQuestion, parse_options},
};
pub use subject::{Subject, SubjectTheme};
