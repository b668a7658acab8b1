//! Progress notification port
//!
//! Lets a front-end show a loading indicator while a tutor action is in flight.

use crate::tutor::state::ActionKind;

/// Callback for tutor action progress
///
/// Implementations live in the presentation layer.
pub trait ActionNotifier: Send + Sync {
    /// Called after the in-flight flag is set, before the network call
    fn on_action_start(&self, kind: ActionKind);

    /// Called once the call resolved, before the result is applied
    fn on_action_finish(&self, kind: ActionKind, success: bool);
}

/// No-op notifier for when progress reporting is not needed
pub struct NoProgress;

impl ActionNotifier for NoProgress {
    fn on_action_start(&self, _kind: ActionKind) {}
    fn on_action_finish(&self, _kind: ActionKind, _success: bool) {}
}
