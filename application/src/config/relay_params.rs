//! Relay parameters — what the gateway sends upstream besides the prompt.

use serde::{Deserialize, Serialize};

pub const DEFAULT_MODEL: &str = "gpt-4o";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Upstream call parameters.
///
/// Every relayed prompt uses the same model and sampling temperature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelayParams {
    /// Upstream model identifier.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f64,
}

impl Default for RelayParams {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl RelayParams {
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = RelayParams::default();
        assert_eq!(params.model, "gpt-4o");
        assert_eq!(params.temperature, 0.7);
    }

    #[test]
    fn test_builders() {
        let params = RelayParams::default()
            .with_model("gpt-4o-mini")
            .with_temperature(0.2);
        assert_eq!(params.model, "gpt-4o-mini");
        assert_eq!(params.temperature, 0.2);
    }
}
