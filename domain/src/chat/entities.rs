//! Chat domain entities

use serde::{Deserialize, Serialize};

/// First message of every chat log
pub const CHAT_GREETING: &str =
    "안녕하세요! 현재 문제나 다른 11+ 관련 질문이 있다면 무엇이든 물어보세요.";

/// Assistant reply appended when a chat turn fails
pub const CHAT_FAILURE_TEXT: &str =
    "죄송해요, 답변을 가져오는 데 문제가 생겼어요. 잠시 후 다시 시도해주세요.";

/// Who wrote a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

/// A message in the tutor chat (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Assistant,
            text: text.into(),
        }
    }
}

/// Ordered chat history for the lifetime of the panel.
///
/// Append-only: there is no way to remove or edit a message once pushed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
}

impl ChatLog {
    /// A log seeded with the greeting
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::assistant(CHAT_GREETING)],
        }
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage::user(text));
    }

    pub fn push_assistant(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage::assistant(text));
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for ChatLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_starts_with_greeting() {
        let log = ChatLog::new();
        assert_eq!(log.len(), 1);
        assert_eq!(log.messages()[0], ChatMessage::assistant(CHAT_GREETING));
    }

    #[test]
    fn test_log_keeps_insertion_order() {
        let mut log = ChatLog::new();
        log.push_user("분수가 뭐예요?");
        log.push_assistant("전체를 나눈 부분이에요.");
        assert_eq!(log.len(), 3);
        assert_eq!(log.messages()[1].sender, Sender::User);
        assert_eq!(log.last().unwrap().text, "전체를 나눈 부분이에요.");
    }

    #[test]
    fn test_sender_serializes_lowercase() {
        let json = serde_json::to_string(&ChatMessage::user("hi")).unwrap();
        assert_eq!(json, r#"{"sender":"user","text":"hi"}"#);
    }
}
