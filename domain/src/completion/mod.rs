//! Completion contracts.
//!
//! - [`request`] — the gateway's own `POST /api/chat` body and replies
//! - [`upstream`] — the third-party chat-completion schema, reproduced verbatim

pub mod request;
pub mod upstream;
