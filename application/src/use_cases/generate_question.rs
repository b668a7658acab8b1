//! Generate Question use case

use crate::use_cases::completion::{CompletionError, CompletionService};
use thiserror::Error;
use tracing::{info, warn};
use tutor_domain::{PromptTemplate, Question, Subject};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateQuestionError {
    #[error("Completion failed: {0}")]
    Completion(#[from] CompletionError),

    #[error("Generated question has no question text")]
    MissingQuestionText,
}

/// Use case for generating a fresh question for a subject
#[derive(Clone)]
pub struct GenerateQuestionUseCase {
    completions: CompletionService,
}

impl GenerateQuestionUseCase {
    pub fn new(completions: CompletionService) -> Self {
        Self { completions }
    }

    pub async fn execute(&self, subject: Subject) -> Result<Question, GenerateQuestionError> {
        info!(subject = %subject, "Generating question");
        let prompt = PromptTemplate::generate_question(subject);
        let question: Question = self.completions.structured_json(prompt).await?;

        if question.question.trim().is_empty() {
            warn!(subject = %subject, "Generated question is blank");
            return Err(GenerateQuestionError::MissingQuestionText);
        }

        Ok(question)
    }
}
