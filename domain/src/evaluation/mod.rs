//! Grading result value object

use serde::{Deserialize, Serialize};

/// Feedback shown when an answer could not be graded
pub const GRADING_FAILED_FEEDBACK: &str = "채점에 실패했습니다.";

/// Outcome of grading one submitted answer (Value Object)
///
/// Deserialized straight from the grading reply, whose JSON uses
/// `{"isCorrect": bool, "feedback": string}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub is_correct: bool,
    pub feedback: String,
}

impl Evaluation {
    pub fn new(is_correct: bool, feedback: impl Into<String>) -> Self {
        Self {
            is_correct,
            feedback: feedback.into(),
        }
    }

    /// The fixed "could not grade" evaluation
    pub fn grading_failed() -> Self {
        Self::new(false, GRADING_FAILED_FEEDBACK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case() {
        let e: Evaluation =
            serde_json::from_str(r#"{"isCorrect":true,"feedback":"잘했어요!"}"#).unwrap();
        assert!(e.is_correct);
        assert_eq!(e.feedback, "잘했어요!");
    }

    #[test]
    fn test_missing_field_is_an_error() {
        assert!(serde_json::from_str::<Evaluation>(r#"{"feedback":"?"}"#).is_err());
    }

    #[test]
    fn test_grading_failed_fallback() {
        let e = Evaluation::grading_failed();
        assert!(!e.is_correct);
        assert_eq!(e.feedback, GRADING_FAILED_FEEDBACK);
    }
}
