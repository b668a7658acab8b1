//! Tutor chat panel: messages and the append-only log.

pub mod entities;

pub use entities::{CHAT_FAILURE_TEXT, CHAT_GREETING, ChatLog, ChatMessage, Sender};
