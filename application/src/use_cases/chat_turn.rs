//! Chat Turn use case

use crate::use_cases::completion::{CompletionError, CompletionService};
use tracing::info;
use tutor_domain::{PromptTemplate, Question};

/// Answers one learner message, optionally with the current question as context
#[derive(Clone)]
pub struct ChatTurnUseCase {
    completions: CompletionService,
}

impl ChatTurnUseCase {
    pub fn new(completions: CompletionService) -> Self {
        Self { completions }
    }

    pub async fn execute(
        &self,
        current: Option<&Question>,
        message: &str,
    ) -> Result<String, CompletionError> {
        info!(with_context = current.is_some(), "Sending chat turn");
        let prompt = PromptTemplate::chat(current, message);
        self.completions.plain_text(prompt).await
    }
}
