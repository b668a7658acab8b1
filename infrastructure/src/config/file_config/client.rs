//! Tutor client configuration from TOML (`[client]` section)

use serde::{Deserialize, Serialize};

/// Raw client configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileClientConfig {
    /// Base URL of the completion gateway
    pub gateway_url: String,
    /// Show spinners while actions are in flight
    pub show_progress: bool,
    /// Path to the REPL history file
    pub history_file: Option<String>,
}

impl Default for FileClientConfig {
    fn default() -> Self {
        Self {
            gateway_url: "http://localhost:3001".to_string(),
            show_progress: true,
            history_file: None,
        }
    }
}
