//! Infrastructure layer for smart-tutor
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod gateway_client;
pub mod openai;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigLoader, FileClientConfig, FileConfig, FileServerConfig, FileUpstreamConfig,
};
pub use gateway_client::HttpCompletionGateway;
pub use openai::OpenAiChatApi;
