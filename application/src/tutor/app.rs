//! Tutor application
//!
//! Drives the view state from explicit user actions. Every action that calls
//! the gateway follows the same shape:
//!
//! 1. Under the lock: check the in-flight guard and preconditions, mark the
//!    action in flight, record the context (subject or question epoch).
//! 2. Without the lock: await the use case.
//! 3. Settle: apply the result only if its context is still current, and
//!    clear the in-flight flag in the same critical section.
//!
//! The lock is never held across an `.await`, so actions of different kinds
//! may run concurrently.

use super::in_flight::{InFlight, lock};
use super::messages::HINT_FAILED_TEXT;
use super::state::{ActionKind, ActionOutcome, TutorSnapshot, TutorState};
use crate::ports::completion_gateway::CompletionGateway;
use crate::ports::progress::{ActionNotifier, NoProgress};
use crate::use_cases::chat_turn::ChatTurnUseCase;
use crate::use_cases::completion::CompletionService;
use crate::use_cases::generate_question::GenerateQuestionUseCase;
use crate::use_cases::grade_answer::GradeAnswerUseCase;
use crate::use_cases::request_hint::RequestHintUseCase;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};
use tutor_domain::{CHAT_FAILURE_TEXT, Subject};

pub struct TutorApp {
    state: Mutex<TutorState>,
    generate: GenerateQuestionUseCase,
    hint: RequestHintUseCase,
    grade: GradeAnswerUseCase,
    chat: ChatTurnUseCase,
    notifier: Arc<dyn ActionNotifier>,
}

impl TutorApp {
    pub fn new(gateway: Arc<dyn CompletionGateway>) -> Self {
        let completions = CompletionService::new(gateway);
        Self {
            state: Mutex::new(TutorState::default()),
            generate: GenerateQuestionUseCase::new(completions.clone()),
            hint: RequestHintUseCase::new(completions.clone()),
            grade: GradeAnswerUseCase::new(completions.clone()),
            chat: ChatTurnUseCase::new(completions),
            notifier: Arc::new(NoProgress),
        }
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn ActionNotifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn snapshot(&self) -> TutorSnapshot {
        lock(&self.state).snapshot()
    }

    /// Make `subject` active and clear the question, its hint, evaluation and
    /// any generation error.
    pub fn select_subject(&self, subject: Subject) {
        debug!(subject = %subject, "Selecting subject");
        lock(&self.state).select_subject(subject);
    }

    /// Show or hide the reference answer. Returns the new visibility; stays
    /// hidden when no question is displayed.
    pub fn toggle_answer(&self) -> bool {
        let mut state = lock(&self.state);
        if state.question.is_none() {
            return false;
        }
        state.answer_revealed = !state.answer_revealed;
        state.answer_revealed
    }

    /// Open or close the chat panel. Returns the new visibility.
    pub fn toggle_chat(&self) -> bool {
        let mut state = lock(&self.state);
        state.chat_visible = !state.chat_visible;
        state.chat_visible
    }

    /// Generate a new question for `subject`.
    ///
    /// The displayed question is cleared immediately. A result whose subject
    /// is no longer active when it arrives is discarded.
    pub async fn generate_question(&self, subject: Subject) -> ActionOutcome {
        let in_flight = {
            let mut state = lock(&self.state);
            if state.is_in_flight(ActionKind::Generate) {
                debug!("Generation already in flight");
                return ActionOutcome::Busy;
            }
            state.begin_generation(subject);
            InFlight::new(&self.state, ActionKind::Generate)
        };

        self.notifier.on_action_start(ActionKind::Generate);
        let result = self.generate.execute(subject).await;
        self.notifier
            .on_action_finish(ActionKind::Generate, result.is_ok());

        in_flight.settle(|state| {
            if state.active_subject != Some(subject) {
                info!(subject = %subject, "Discarding question for inactive subject");
                return ActionOutcome::Stale;
            }
            match result {
                Ok(question) => {
                    state.replace_question(Some(question));
                    ActionOutcome::Completed
                }
                Err(e) => {
                    warn!(subject = %subject, error = %e, "Question generation failed");
                    state.fail_generation(subject);
                    ActionOutcome::Failed
                }
            }
        })
    }

    /// Ask for a hint on the displayed question
    pub async fn request_hint(&self) -> ActionOutcome {
        let (epoch, subject, question, in_flight) = {
            let mut state = lock(&self.state);
            if state.hint_in_flight {
                return ActionOutcome::Busy;
            }
            let Some(question) = state.question.clone() else {
                return ActionOutcome::Rejected;
            };
            state.hint = None;
            state.hint_error = None;
            state.hint_in_flight = true;
            (
                state.question_epoch,
                state.active_subject,
                question,
                InFlight::new(&self.state, ActionKind::Hint),
            )
        };

        self.notifier.on_action_start(ActionKind::Hint);
        let result = self.hint.execute(subject, &question).await;
        self.notifier.on_action_finish(ActionKind::Hint, result.is_ok());

        in_flight.settle(|state| {
            if state.question_epoch != epoch {
                debug!("Discarding hint for a replaced question");
                return ActionOutcome::Stale;
            }
            match result {
                Ok(hint) => {
                    state.hint = Some(hint);
                    ActionOutcome::Completed
                }
                Err(e) => {
                    warn!(error = %e, "Hint request failed");
                    state.hint_error = Some(HINT_FAILED_TEXT.to_string());
                    ActionOutcome::Failed
                }
            }
        })
    }

    /// Submit an answer for grading. For multiple-choice questions the answer
    /// is the chosen option label.
    pub async fn submit_answer(&self, answer: &str) -> ActionOutcome {
        let answer = answer.trim();
        if answer.is_empty() {
            return ActionOutcome::Rejected;
        }

        let (epoch, question, in_flight) = {
            let mut state = lock(&self.state);
            if state.check_in_flight {
                return ActionOutcome::Busy;
            }
            let Some(question) = state.question.clone() else {
                return ActionOutcome::Rejected;
            };
            state.clear_evaluation();
            state.check_in_flight = true;
            (
                state.question_epoch,
                question,
                InFlight::new(&self.state, ActionKind::Check),
            )
        };

        self.notifier.on_action_start(ActionKind::Check);
        let grading = self.grade.execute(&question, answer).await;
        self.notifier.on_action_finish(ActionKind::Check, !grading.fallback);

        in_flight.settle(|state| {
            if state.question_epoch != epoch {
                debug!("Discarding evaluation for a replaced question");
                return ActionOutcome::Stale;
            }
            state.evaluation = Some(grading.evaluation);
            state.grading_failed = grading.fallback;
            if grading.fallback {
                ActionOutcome::Failed
            } else {
                ActionOutcome::Completed
            }
        })
    }

    /// Send a chat message.
    ///
    /// The message is appended before the call; exactly one assistant reply
    /// (the answer or the fixed failure text) follows it, on every path.
    pub async fn send_chat(&self, message: &str) -> ActionOutcome {
        if message.trim().is_empty() {
            return ActionOutcome::Rejected;
        }

        let (context, in_flight) = {
            let mut state = lock(&self.state);
            if state.chat_in_flight {
                return ActionOutcome::Busy;
            }
            state.chat_log.push_user(message);
            state.chat_in_flight = true;
            (
                state.question.clone(),
                InFlight::new(&self.state, ActionKind::Chat),
            )
        };

        self.notifier.on_action_start(ActionKind::Chat);
        let result = self.chat.execute(context.as_ref(), message).await;
        self.notifier.on_action_finish(ActionKind::Chat, result.is_ok());

        in_flight.settle(|state| match result {
            Ok(reply) => {
                state.chat_log.push_assistant(reply);
                ActionOutcome::Completed
            }
            Err(e) => {
                warn!(error = %e, "Chat turn failed");
                state.chat_log.push_assistant(CHAT_FAILURE_TEXT);
                ActionOutcome::Failed
            }
        })
    }
}
