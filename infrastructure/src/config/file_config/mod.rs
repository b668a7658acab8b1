//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly; every section has defaults so a partial
//! file (or none at all) is valid.

mod client;
mod server;
mod upstream;

pub use client::FileClientConfig;
pub use server::FileServerConfig;
pub use upstream::FileUpstreamConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("upstream.model cannot be empty")]
    EmptyModelName,

    #[error("upstream.temperature must be between 0 and 2, got {0}")]
    InvalidTemperature(f64),

    #[error("{field} must be an http(s) URL, got '{value}'")]
    InvalidUrl { field: &'static str, value: String },
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Gateway listener
    pub server: FileServerConfig,
    /// Upstream completion API
    pub upstream: FileUpstreamConfig,
    /// Tutor front-end
    pub client: FileClientConfig,
}

impl FileConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.upstream.model.trim().is_empty() {
            return Err(ConfigError::EmptyModelName);
        }
        if !(0.0..=2.0).contains(&self.upstream.temperature) {
            return Err(ConfigError::InvalidTemperature(self.upstream.temperature));
        }
        check_url("upstream.base_url", &self.upstream.base_url)?;
        check_url("client.gateway_url", &self.client.gateway_url)?;
        Ok(())
    }
}

fn check_url(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidUrl {
            field,
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[server]
host = "127.0.0.1"
port = 8080

[upstream]
api_key_env = "TUTOR_OPENAI_KEY"
base_url = "https://example.openai.azure.com"
model = "gpt-4o-mini"
temperature = 0.2
timeout_seconds = 30

[client]
gateway_url = "http://tutor.local:8080"
show_progress = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.upstream.api_key_env, "TUTOR_OPENAI_KEY");
        assert_eq!(config.upstream.model, "gpt-4o-mini");
        assert_eq!(config.upstream.temperature, 0.2);
        assert_eq!(config.upstream.timeout_seconds, Some(30));
        assert_eq!(config.client.gateway_url, "http://tutor.local:8080");
        assert!(!config.client.show_progress);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[server]
port = 4000
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.port, 4000);
        // Defaults should apply
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.upstream, FileUpstreamConfig::default());
        assert_eq!(config.client, FileClientConfig::default());
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.upstream.api_key_env, "OPENAI_API_KEY");
        assert_eq!(config.upstream.base_url, "https://api.openai.com");
        assert_eq!(config.upstream.model, "gpt-4o");
        assert_eq!(config.upstream.temperature, 0.7);
        assert_eq!(config.client.gateway_url, "http://localhost:3001");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = FileConfig::default();
        config.upstream.temperature = 3.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTemperature(_))
        ));

        let mut config = FileConfig::default();
        config.upstream.model = " ".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::EmptyModelName)));

        let mut config = FileConfig::default();
        config.client.gateway_url = "localhost:3001".to_string();
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "client.gateway_url must be an http(s) URL, got 'localhost:3001'"
        );
    }

    #[test]
    fn test_inline_api_key_wins() {
        let upstream = FileUpstreamConfig {
            api_key: Some("sk-inline".to_string()),
            api_key_env: "SMART_TUTOR_TEST_UNSET_KEY".to_string(),
            ..Default::default()
        };
        assert_eq!(upstream.resolve_api_key().as_deref(), Some("sk-inline"));
    }

    #[test]
    fn test_missing_api_key_is_none() {
        let upstream = FileUpstreamConfig {
            api_key: Some("   ".to_string()),
            api_key_env: "SMART_TUTOR_TEST_UNSET_KEY".to_string(),
            ..Default::default()
        };
        assert_eq!(upstream.resolve_api_key(), None);
    }

    #[test]
    fn test_relay_params_follow_upstream() {
        let upstream = FileUpstreamConfig {
            model: "gpt-4o-mini".to_string(),
            temperature: 0.1,
            ..Default::default()
        };
        let params = upstream.relay_params();
        assert_eq!(params.model, "gpt-4o-mini");
        assert_eq!(params.temperature, 0.1);
    }
}
