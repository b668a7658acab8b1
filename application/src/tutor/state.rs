//! Tutor state and its read-only snapshot

use super::messages;
use serde::Serialize;
use tutor_domain::{
    CHAT_FAILURE_TEXT, ChatLog, ChatMessage, Evaluation, ParsedQuestion, Question, Subject,
};

/// The four user actions that call the gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ActionKind {
    Generate,
    Hint,
    Check,
    Chat,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Generate => "generate",
            ActionKind::Hint => "hint",
            ActionKind::Check => "check",
            ActionKind::Chat => "chat",
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What happened to a triggered action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ActionOutcome {
    /// The call succeeded and its result was stored
    Completed,
    /// The call failed and the failure message or fallback was stored
    Failed,
    /// The same action was already in flight; nothing was sent
    Busy,
    /// The result arrived after its context changed and was discarded
    Stale,
    /// Preconditions not met (blank input, no question); nothing was sent
    Rejected,
}

impl ActionOutcome {
    pub fn was_applied(&self) -> bool {
        matches!(self, ActionOutcome::Completed | ActionOutcome::Failed)
    }
}

/// Mutable tutor state. Only reachable through [`TutorApp`](super::TutorApp).
#[derive(Debug, Default)]
pub struct TutorState {
    pub(crate) active_subject: Option<Subject>,
    pub(crate) question: Option<Question>,
    /// Bumped on every question change; hint and grading results carry the
    /// epoch they were requested under.
    pub(crate) question_epoch: u64,
    pub(crate) generating: Option<Subject>,
    pub(crate) generation_error: Option<String>,
    pub(crate) hint: Option<String>,
    pub(crate) hint_error: Option<String>,
    pub(crate) hint_in_flight: bool,
    pub(crate) evaluation: Option<Evaluation>,
    /// The stored evaluation is the fallback, not a grader reply
    pub(crate) grading_failed: bool,
    pub(crate) check_in_flight: bool,
    pub(crate) answer_revealed: bool,
    pub(crate) chat_log: ChatLog,
    pub(crate) chat_in_flight: bool,
    pub(crate) chat_visible: bool,
}

impl TutorState {
    pub(crate) fn is_in_flight(&self, kind: ActionKind) -> bool {
        match kind {
            ActionKind::Generate => self.generating.is_some(),
            ActionKind::Hint => self.hint_in_flight,
            ActionKind::Check => self.check_in_flight,
            ActionKind::Chat => self.chat_in_flight,
        }
    }

    pub(crate) fn clear_in_flight(&mut self, kind: ActionKind) {
        match kind {
            ActionKind::Generate => self.generating = None,
            ActionKind::Hint => self.hint_in_flight = false,
            ActionKind::Check => self.check_in_flight = false,
            ActionKind::Chat => self.chat_in_flight = false,
        }
    }

    /// Release an action whose call never resolved
    pub(crate) fn abandon(&mut self, kind: ActionKind) {
        if kind == ActionKind::Chat && self.chat_in_flight {
            self.chat_log.push_assistant(CHAT_FAILURE_TEXT);
        }
        self.clear_in_flight(kind);
    }

    /// Swap the displayed question and reset everything tied to it
    pub(crate) fn replace_question(&mut self, question: Option<Question>) {
        self.question = question;
        self.question_epoch += 1;
        self.hint = None;
        self.hint_error = None;
        self.clear_evaluation();
        self.answer_revealed = false;
    }

    pub(crate) fn clear_evaluation(&mut self) {
        self.evaluation = None;
        self.grading_failed = false;
    }

    pub(crate) fn select_subject(&mut self, subject: Subject) {
        self.active_subject = Some(subject);
        self.generation_error = None;
        self.replace_question(None);
    }

    pub(crate) fn begin_generation(&mut self, subject: Subject) {
        self.generating = Some(subject);
        self.select_subject(subject);
    }

    pub(crate) fn fail_generation(&mut self, subject: Subject) {
        self.generation_error = Some(messages::generation_failed(subject));
    }

    pub(crate) fn snapshot(&self) -> TutorSnapshot {
        TutorSnapshot {
            active_subject: self.active_subject,
            question: self.question.clone(),
            parsed: self.question.as_ref().map(Question::parsed),
            generating: self.generating,
            generation_error: self.generation_error.clone(),
            hint: self.hint.clone(),
            hint_error: self.hint_error.clone(),
            hint_loading: self.hint_in_flight,
            evaluation: self.evaluation.clone(),
            grading_failed: self.grading_failed,
            checking: self.check_in_flight,
            answer_revealed: self.answer_revealed,
            chat_messages: self.chat_log.messages().to_vec(),
            chat_loading: self.chat_in_flight,
            chat_visible: self.chat_visible,
        }
    }
}

/// Everything a front-end needs to render one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TutorSnapshot {
    pub active_subject: Option<Subject>,
    pub question: Option<Question>,
    pub parsed: Option<ParsedQuestion>,
    pub generating: Option<Subject>,
    pub generation_error: Option<String>,
    pub hint: Option<String>,
    pub hint_error: Option<String>,
    pub hint_loading: bool,
    pub evaluation: Option<Evaluation>,
    /// The evaluation is the "could not grade" fallback
    pub grading_failed: bool,
    pub checking: bool,
    pub answer_revealed: bool,
    pub chat_messages: Vec<ChatMessage>,
    pub chat_loading: bool,
    pub chat_visible: bool,
}

impl TutorSnapshot {
    /// The card heading: question type, falling back to the subject label
    pub fn heading(&self) -> Option<&str> {
        self.question
            .as_ref()
            .map(|q| q.heading(self.active_subject))
    }
}
