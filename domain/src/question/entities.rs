//! Question entity

use crate::question::options::{ParsedQuestion, parse_options};
use crate::subject::Subject;
use serde::{Deserialize, Serialize};

/// Passages at or below this many characters are treated as filler and hidden.
const MIN_VISIBLE_PASSAGE_CHARS: usize = 10;

/// A generated practice question (Entity)
///
/// The JSON shape is the one the generation prompt mandates:
/// `{"type": .., "passage": .., "question": .., "answer": ..}`.
/// A question is replaced wholesale, never edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "type", default)]
    pub question_type: String,
    #[serde(default)]
    pub passage: String,
    pub question: String,
    pub answer: String,
}

impl Question {
    pub fn new(
        question_type: impl Into<String>,
        passage: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            question_type: question_type.into(),
            passage: passage.into(),
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Card heading: the question type, or the subject label when the type is blank
    pub fn heading(&self, subject: Option<Subject>) -> &str {
        if !self.question_type.trim().is_empty() {
            return &self.question_type;
        }
        subject.map(|s| s.label()).unwrap_or_default()
    }

    /// The passage, if it is long enough to be worth showing
    pub fn visible_passage(&self) -> Option<&str> {
        if self.passage.chars().count() > MIN_VISIBLE_PASSAGE_CHARS {
            Some(&self.passage)
        } else {
            None
        }
    }

    /// Derive the stem / options view. Computed on every call, never cached.
    pub fn parsed(&self) -> ParsedQuestion {
        parse_options(&self.question)
    }
}
