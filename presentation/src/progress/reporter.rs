//! Progress reporting for tutor actions

use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tutor_application::{ActionKind, ActionNotifier};

/// One spinner per in-flight action
pub struct ProgressReporter {
    multi: MultiProgress,
    spinners: Mutex<HashMap<ActionKind, ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            spinners: Mutex::new(HashMap::new()),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn spinners(&self) -> MutexGuard<'_, HashMap<ActionKind, ProgressBar>> {
        self.spinners.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn action_label(kind: ActionKind) -> &'static str {
        match kind {
            ActionKind::Generate => "문제 생성",
            ActionKind::Hint => "힌트",
            ActionKind::Check => "채점",
            ActionKind::Chat => "튜터 답변",
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionNotifier for ProgressReporter {
    fn on_action_start(&self, kind: ActionKind) {
        let pb = self.multi.add(ProgressBar::new_spinner());
        pb.set_style(Self::spinner_style());
        pb.set_message(format!("{} 중...", Self::action_label(kind)));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Some(previous) = self.spinners().insert(kind, pb) {
            previous.finish_and_clear();
        }
    }

    fn on_action_finish(&self, kind: ActionKind, success: bool) {
        if let Some(pb) = self.spinners().remove(&kind) {
            let status = if success { "v".green() } else { "x".red() };
            pb.finish_with_message(format!("{} {}", status, Self::action_label(kind)));
        }
    }
}

/// Line-per-event progress for output that is not a terminal
pub struct SimpleProgress;

impl SimpleProgress {
    fn start_line(kind: ActionKind) -> String {
        format!("{} {} 중...", "->".cyan(), ProgressReporter::action_label(kind))
    }

    fn finish_line(kind: ActionKind, success: bool) -> Option<String> {
        (!success).then(|| format!("  {} {} 실패", "x".red(), ProgressReporter::action_label(kind)))
    }
}

impl ActionNotifier for SimpleProgress {
    fn on_action_start(&self, kind: ActionKind) {
        println!("{}", Self::start_line(kind));
    }

    fn on_action_finish(&self, kind: ActionKind, success: bool) {
        if let Some(line) = Self::finish_line(kind, success) {
            println!("{}", line);
        }
    }
}
