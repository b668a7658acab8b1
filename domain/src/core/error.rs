//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown subject: {0}")]
    UnknownSubject(String),

    #[error("Prompt cannot be empty")]
    EmptyPrompt,
}
