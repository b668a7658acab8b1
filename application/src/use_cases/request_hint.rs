//! Request Hint use case

use crate::use_cases::completion::{CompletionError, CompletionService};
use tracing::info;
use tutor_domain::{PromptTemplate, Question, Subject};

/// Use case for a one-sentence hint that does not give the answer away
#[derive(Clone)]
pub struct RequestHintUseCase {
    completions: CompletionService,
}

impl RequestHintUseCase {
    pub fn new(completions: CompletionService) -> Self {
        Self { completions }
    }

    pub async fn execute(
        &self,
        subject: Option<Subject>,
        question: &Question,
    ) -> Result<String, CompletionError> {
        info!("Requesting hint");
        let prompt = PromptTemplate::hint(subject, &question.question);
        self.completions.plain_text(prompt).await
    }
}
