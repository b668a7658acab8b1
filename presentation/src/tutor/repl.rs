//! REPL (Read-Eval-Print Loop) for the terminal tutor

use super::command::{ReplCommand, resolve_answer};
use crate::ConsoleFormatter;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;
use tutor_application::{ActionOutcome, TutorApp};
use tutor_domain::Subject;

/// Interactive tutor REPL
pub struct TutorRepl {
    app: Arc<TutorApp>,
    history_file: Option<PathBuf>,
    initial_subject: Option<Subject>,
}

impl TutorRepl {
    pub fn new(app: Arc<TutorApp>) -> Self {
        Self {
            app,
            history_file: dirs::data_dir().map(|p| p.join("smart-tutor").join("history.txt")),
            initial_subject: None,
        }
    }

    /// Override the history file location
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.history_file = path;
        }
        self
    }

    /// Select `subject` before the first prompt
    pub fn with_subject(mut self, subject: Option<Subject>) -> Self {
        self.initial_subject = subject;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        if let Some(ref path) = self.history_file {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        if let Some(subject) = self.initial_subject {
            self.app.select_subject(subject);
            print!("{}", ConsoleFormatter::question_card(&self.app.snapshot()));
        }

        loop {
            let readline = rl.readline(&self.prompt());

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    // Skip empty lines
                    if line.is_empty() {
                        continue;
                    }

                    let _ = rl.add_history_entry(line);

                    if self.dispatch(ReplCommand::parse(line)).await {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        // Save history
        if let Some(ref path) = self.history_file {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn prompt(&self) -> String {
        match self.app.snapshot().active_subject {
            Some(subject) => format!("{}> ", subject.label()),
            None => "> ".to_string(),
        }
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│          Smart Tutor - 11+ Practice         │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        Self::print_help();
    }

    fn print_help() {
        println!("Commands:");
        println!("  /subjects              - List subjects");
        println!("  /subject <name|1-4>    - Select a subject");
        println!("  /new [subject]         - Generate a new question");
        println!("  /hint                  - Ask for a hint");
        println!("  /answer <text|A-D>     - Submit an answer for grading");
        println!("  /reveal                - Show or hide the answer");
        println!("  /show                  - Show the current question");
        println!("  /chat                  - Open or close the tutor chat");
        println!("  /help, /h, /?          - Show this help");
        println!("  /quit, /exit, /q       - Exit");
        println!();
        println!("With the chat open, any other line is sent to the tutor.");
        println!();
    }

    /// Handle one parsed line. Returns true if should exit.
    async fn dispatch(&self, command: ReplCommand) -> bool {
        debug!(?command, "REPL command");

        match command {
            ReplCommand::Quit => {
                println!("Bye!");
                return true;
            }
            ReplCommand::Help => Self::print_help(),
            ReplCommand::Subjects => {
                print!(
                    "{}",
                    ConsoleFormatter::subject_menu(self.app.snapshot().active_subject)
                );
            }
            ReplCommand::Select(subject) => {
                self.app.select_subject(subject);
                self.print_card();
            }
            ReplCommand::Generate(subject) => self.generate(subject).await,
            ReplCommand::Hint => {
                let outcome = self.app.request_hint().await;
                if Self::report_unapplied(outcome, "먼저 문제를 만들어 주세요.") {
                    println!("{}", ConsoleFormatter::hint(&self.app.snapshot()));
                }
            }
            ReplCommand::Answer(input) => self.answer(&input).await,
            ReplCommand::Reveal => {
                if self.app.toggle_answer() {
                    self.print_card();
                } else if self.app.snapshot().question.is_some() {
                    println!("{}", "정답을 숨겼어요.".dimmed());
                } else {
                    println!("먼저 문제를 만들어 주세요.");
                }
            }
            ReplCommand::Show => self.print_card(),
            ReplCommand::ToggleChat => {
                if self.app.toggle_chat() {
                    print!("{}", ConsoleFormatter::chat_log(&self.app.snapshot().chat_messages));
                } else {
                    println!("{}", "채팅 창을 닫았어요.".dimmed());
                }
            }
            ReplCommand::Chat(message) => self.chat(&message).await,
            ReplCommand::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
            }
            ReplCommand::Invalid(reason) => println!("{}", reason.red()),
        }

        false
    }

    async fn generate(&self, subject: Option<Subject>) {
        let Some(subject) = subject.or(self.app.snapshot().active_subject) else {
            println!("먼저 과목을 골라 주세요. (/subjects)");
            return;
        };

        match self.app.generate_question(subject).await {
            ActionOutcome::Busy => println!("{}", "이미 문제를 만들고 있어요.".yellow()),
            ActionOutcome::Stale => debug!("Generated question was discarded"),
            _ => self.print_card(),
        }
    }

    async fn answer(&self, input: &str) {
        let snapshot = self.app.snapshot();
        if snapshot.question.is_none() {
            println!("먼저 문제를 만들어 주세요.");
            return;
        }
        let answer = match resolve_answer(snapshot.parsed.as_ref(), input) {
            Ok(answer) => answer,
            Err(reason) => {
                println!("{}", reason.red());
                return;
            }
        };

        let outcome = self.app.submit_answer(&answer).await;
        if !Self::report_unapplied(outcome, "답을 입력해 주세요.") {
            return;
        }
        let snapshot = self.app.snapshot();
        if let Some(evaluation) = &snapshot.evaluation {
            print!(
                "{}",
                ConsoleFormatter::evaluation(evaluation, snapshot.grading_failed)
            );
        }
    }

    async fn chat(&self, message: &str) {
        if !self.app.snapshot().chat_visible {
            println!("채팅 창이 닫혀 있어요. /chat 으로 열어 주세요.");
            return;
        }

        let outcome = self.app.send_chat(message).await;
        if Self::report_unapplied(outcome, "메시지를 입력해 주세요.") {
            if let Some(reply) = self.app.snapshot().chat_messages.last() {
                print!("{}", ConsoleFormatter::chat_message(reply));
            }
        }
    }

    fn print_card(&self) {
        print!("{}", ConsoleFormatter::question_card(&self.app.snapshot()));
    }

    /// Print why an action did nothing. Returns true if its result was applied.
    fn report_unapplied(outcome: ActionOutcome, rejected: &str) -> bool {
        if outcome.was_applied() {
            return true;
        }
        match outcome {
            ActionOutcome::Busy => println!("{}", "아직 이전 요청을 처리하고 있어요.".yellow()),
            ActionOutcome::Stale => println!("{}", "문제가 바뀌어서 결과를 버렸어요.".dimmed()),
            _ => println!("{}", rejected),
        }
        false
    }
}
