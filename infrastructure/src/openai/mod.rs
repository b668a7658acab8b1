//! OpenAI chat-completion adapter
//!
//! Implements [`UpstreamChatApi`](tutor_application::UpstreamChatApi) over
//! HTTPS with bearer-token authentication.

mod chat_api;

pub use chat_api::OpenAiChatApi;
