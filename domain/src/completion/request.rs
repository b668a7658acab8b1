//! Gateway request / reply bodies

use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize};

/// How the reply to a prompt must be shaped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    /// Free text, used verbatim after trimming
    #[default]
    PlainText,
    /// A JSON object, enforced upstream and parsed by the caller
    StructuredJson,
}

impl ResponseFormat {
    pub fn is_json(&self) -> bool {
        matches!(self, ResponseFormat::StructuredJson)
    }
}

/// Body of `POST /api/chat`: `{"prompt": string, "isJson"?: bool}`
///
/// Both fields default, and `null` reads as absent, so a missing prompt
/// reaches validation instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompletionRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub prompt: String,
    #[serde(
        rename = "isJson",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "std::ops::Not::not"
    )]
    pub is_json: bool,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl CompletionRequest {
    pub fn new(prompt: impl Into<String>, format: ResponseFormat) -> Self {
        Self {
            prompt: prompt.into(),
            is_json: format.is_json(),
        }
    }

    pub fn plain_text(prompt: impl Into<String>) -> Self {
        Self::new(prompt, ResponseFormat::PlainText)
    }

    pub fn structured_json(prompt: impl Into<String>) -> Self {
        Self::new(prompt, ResponseFormat::StructuredJson)
    }

    pub fn format(&self) -> ResponseFormat {
        if self.is_json {
            ResponseFormat::StructuredJson
        } else {
            ResponseFormat::PlainText
        }
    }

    /// Reject blank prompts
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.prompt.trim().is_empty() {
            return Err(DomainError::EmptyPrompt);
        }
        Ok(())
    }
}

/// Success body: `{"text": string}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionReply {
    pub text: String,
}

/// Error body: `{"error": string}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let req: CompletionRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.prompt, "");
        assert!(!req.is_json);
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_request_is_json_key() {
        let req: CompletionRequest =
            serde_json::from_str(r#"{"prompt":"hi","isJson":true}"#).unwrap();
        assert_eq!(req.format(), ResponseFormat::StructuredJson);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_null_fields_read_as_absent() {
        let req: CompletionRequest =
            serde_json::from_str(r#"{"prompt":"hi","isJson":null}"#).unwrap();
        assert_eq!(req.format(), ResponseFormat::PlainText);

        let req: CompletionRequest = serde_json::from_str(r#"{"prompt":null}"#).unwrap();
        assert_eq!(req.validate(), Err(DomainError::EmptyPrompt));
    }

    #[test]
    fn test_plain_request_omits_flag() {
        let json = serde_json::to_string(&CompletionRequest::plain_text("hi")).unwrap();
        assert_eq!(json, r#"{"prompt":"hi"}"#);
        let json = serde_json::to_string(&CompletionRequest::structured_json("hi")).unwrap();
        assert_eq!(json, r#"{"prompt":"hi","isJson":true}"#);
    }

    #[test]
    fn test_whitespace_prompt_is_rejected() {
        let req = CompletionRequest::plain_text("   \n");
        assert_eq!(req.validate(), Err(DomainError::EmptyPrompt));
    }
}
