//! Configuration file loading for smart-tutor
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `PORT` environment variable (server port only)
//! 2. `--config <path>` specified file
//! 3. Project root: `./tutor.toml` or `./.tutor.toml`
//! 4. Global: `~/.config/smart-tutor/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigError, FileClientConfig, FileConfig, FileServerConfig, FileUpstreamConfig,
};
pub use loader::ConfigLoader;
