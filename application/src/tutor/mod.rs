//! Tutor view-state machine.
//!
//! Four independent concerns (question generation, hint, grading, chat),
//! each allowing at most one outstanding call. Results that arrive after
//! their triggering context changed are discarded.

pub mod app;
mod in_flight;
pub mod messages;
pub mod state;

pub use app::TutorApp;
pub use state::{ActionKind, ActionOutcome, TutorSnapshot};
