//! Grade Answer use case
//!
//! Grading never fails from the caller's point of view: any completion or
//! parsing error becomes [`Evaluation::grading_failed`].

use crate::use_cases::completion::CompletionService;
use tracing::{info, warn};
use tutor_domain::{Evaluation, PromptTemplate, Question};

/// A grading result and whether it came from the grader
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grading {
    pub evaluation: Evaluation,
    /// True when the reply could not be obtained or parsed
    pub fallback: bool,
}

#[derive(Clone)]
pub struct GradeAnswerUseCase {
    completions: CompletionService,
}

impl GradeAnswerUseCase {
    pub fn new(completions: CompletionService) -> Self {
        Self { completions }
    }

    pub async fn execute(&self, question: &Question, user_answer: &str) -> Grading {
        info!("Grading answer");
        let prompt = PromptTemplate::grade_answer(&question.question, &question.answer, user_answer);

        match self.completions.structured_json::<Evaluation>(prompt).await {
            Ok(evaluation) => Grading {
                evaluation,
                fallback: false,
            },
            Err(e) => {
                warn!(error = %e, "Grading failed, using fallback evaluation");
                Grading {
                    evaluation: Evaluation::grading_failed(),
                    fallback: true,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedGateway;
    use std::sync::Arc;

    fn question() -> Question {
        Question::new("Word Problem", "", "3 x 4? (A) 7 (B) 12", "B. 3 x 4 = 12")
    }

    #[tokio::test]
    async fn test_grading_parses_evaluation() {
        let gateway = Arc::new(ScriptedGateway::text(
            r#"{"isCorrect":true,"feedback":"정답이에요!"}"#,
        ));
        let use_case = GradeAnswerUseCase::new(CompletionService::new(gateway.clone()));

        let grading = use_case.execute(&question(), "B").await;
        assert_eq!(grading.evaluation, Evaluation::new(true, "정답이에요!"));
        assert!(!grading.fallback);

        let request = &gateway.requests()[0];
        assert!(request.is_json);
        assert!(request.prompt.contains(r#"Student answer: "B""#));
        assert!(request.prompt.contains("B. 3 x 4 = 12"));
    }

    #[tokio::test]
    async fn test_gateway_failure_yields_fallback() {
        let use_case =
            GradeAnswerUseCase::new(CompletionService::new(Arc::new(ScriptedGateway::failing())));
        let grading = use_case.execute(&question(), "A").await;
        assert_eq!(grading.evaluation, Evaluation::grading_failed());
        assert!(grading.fallback);
    }

    #[tokio::test]
    async fn test_unparseable_reply_yields_fallback() {
        let use_case = GradeAnswerUseCase::new(CompletionService::new(Arc::new(
            ScriptedGateway::text("정답입니다"),
        )));
        assert!(use_case.execute(&question(), "A").await.fallback);
    }

    #[tokio::test]
    async fn test_reply_matching_fallback_text_is_not_a_fallback() {
        let use_case = GradeAnswerUseCase::new(CompletionService::new(Arc::new(
            ScriptedGateway::text(r#"{"isCorrect":false,"feedback":"채점에 실패했습니다."}"#),
        )));
        let grading = use_case.execute(&question(), "A").await;
        assert_eq!(grading.evaluation, Evaluation::grading_failed());
        assert!(!grading.fallback);
    }
}
