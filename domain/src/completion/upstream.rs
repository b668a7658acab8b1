//! Chat-completion wire schema of the upstream provider.
//!
//! Field names are a third-party contract; do not rename.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpstreamMessage {
    pub role: String,
    pub content: String,
}

impl UpstreamMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// `{"type": "json_object"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseFormatSpec {
    #[serde(rename = "type")]
    pub kind: String,
}

impl ResponseFormatSpec {
    pub fn json_object() -> Self {
        Self {
            kind: "json_object".to_string(),
        }
    }
}

/// `POST /v1/chat/completions` request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<UpstreamMessage>,
    pub temperature: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub response_format: Option<ResponseFormatSpec>,
}

impl ChatCompletionRequest {
    /// A single user-role message, optionally constrained to a JSON object
    pub fn single_prompt(
        model: impl Into<String>,
        prompt: impl Into<String>,
        temperature: f64,
        json_object: bool,
    ) -> Self {
        Self {
            model: model.into(),
            messages: vec![UpstreamMessage::user(prompt)],
            temperature,
            response_format: json_object.then(ResponseFormatSpec::json_object),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: Option<ChoiceMessage>,
}

/// The subset of the response body the gateway reads
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

impl ChatCompletionResponse {
    /// `choices[0].message.content`, trimmed; `None` when absent or blank
    pub fn first_text(&self) -> Option<String> {
        self.choices
            .first()
            .and_then(|c| c.message.as_ref())
            .and_then(|m| m.content.as_deref())
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_request_shape() {
        let req = ChatCompletionRequest::single_prompt("gpt-4o", "Hello", 0.7, false);
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "model": "gpt-4o",
                "messages": [{"role": "user", "content": "Hello"}],
                "temperature": 0.7
            })
        );
    }

    #[test]
    fn test_json_request_shape() {
        let req = ChatCompletionRequest::single_prompt("gpt-4o", "Hello", 0.7, true);
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["response_format"], json!({"type": "json_object"}));
    }

    #[test]
    fn test_first_text_trims() {
        let resp: ChatCompletionResponse = serde_json::from_value(json!({
            "id": "chatcmpl-1",
            "choices": [{"index": 0, "message": {"role": "assistant", "content": "  hi there \n"}}]
        }))
        .unwrap();
        assert_eq!(resp.first_text().as_deref(), Some("hi there"));
    }

    #[test]
    fn test_first_text_missing_or_blank() {
        let empty: ChatCompletionResponse = serde_json::from_value(json!({})).unwrap();
        assert!(empty.first_text().is_none());

        let null_content: ChatCompletionResponse =
            serde_json::from_value(json!({"choices": [{"message": {"content": null}}]})).unwrap();
        assert!(null_content.first_text().is_none());

        let blank: ChatCompletionResponse =
            serde_json::from_value(json!({"choices": [{"message": {"content": "   "}}]})).unwrap();
        assert!(blank.first_text().is_none());
    }
}
