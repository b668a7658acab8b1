//! Upstream completion API configuration from TOML (`[upstream]` section)

use serde::{Deserialize, Serialize};
use tutor_application::RelayParams;
use tutor_application::config::relay_params::{DEFAULT_MODEL, DEFAULT_TEMPERATURE};

/// OpenAI-compatible upstream settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileUpstreamConfig {
    /// Environment variable holding the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended, use the env var instead).
    pub api_key: Option<String>,
    /// Base URL of the chat-completion API.
    pub base_url: String,
    pub model: String,
    pub temperature: f64,
    /// Request timeout in seconds; no timeout when unset.
    pub timeout_seconds: Option<u64>,
}

impl Default for FileUpstreamConfig {
    fn default() -> Self {
        Self {
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.openai.com".to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            timeout_seconds: None,
        }
    }
}

impl FileUpstreamConfig {
    /// The credential: the inline key if set, otherwise the environment
    /// variable named by `api_key_env`. Blank values count as absent.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| {
                std::env::var(&self.api_key_env)
                    .ok()
                    .filter(|key| !key.trim().is_empty())
            })
    }

    pub fn relay_params(&self) -> RelayParams {
        RelayParams::default()
            .with_model(self.model.clone())
            .with_temperature(self.temperature)
    }
}
