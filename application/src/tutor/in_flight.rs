//! Drop guard for in-flight actions.
//!
//! Settling applies the result and clears the flag in one critical section.
//! A guard dropped without settling (the action future was cancelled or
//! panicked) still clears the flag, and for chat appends the failure reply so
//! the log and the loading indicator never disagree.

use super::state::{ActionKind, TutorState};
use std::sync::{Mutex, MutexGuard, PoisonError};

pub(crate) fn lock(state: &Mutex<TutorState>) -> MutexGuard<'_, TutorState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

pub(crate) struct InFlight<'a> {
    state: &'a Mutex<TutorState>,
    kind: ActionKind,
    settled: bool,
}

impl<'a> InFlight<'a> {
    /// `kind` must already be marked in flight on `state`.
    pub(crate) fn new(state: &'a Mutex<TutorState>, kind: ActionKind) -> Self {
        Self {
            state,
            kind,
            settled: false,
        }
    }

    pub(crate) fn settle<R>(mut self, apply: impl FnOnce(&mut TutorState) -> R) -> R {
        let mut state = lock(self.state);
        let outcome = apply(&mut state);
        state.clear_in_flight(self.kind);
        self.settled = true;
        outcome
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled {
            lock(self.state).abandon(self.kind);
        }
    }
}
