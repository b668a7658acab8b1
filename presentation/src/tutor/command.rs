//! Parsing of REPL input lines

use tutor_domain::{OptionLabel, ParsedQuestion, Subject};

/// One line of REPL input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    Quit,
    Subjects,
    Select(Subject),
    /// Generate for the given subject, or the active one
    Generate(Option<Subject>),
    Hint,
    Answer(String),
    Reveal,
    ToggleChat,
    Show,
    /// Anything that is not a command is a chat message
    Chat(String),
    Unknown(String),
    /// A known command with a bad argument
    Invalid(String),
}

impl ReplCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if !line.starts_with('/') {
            return ReplCommand::Chat(line.to_string());
        }

        let (command, argument) = match line.split_once(char::is_whitespace) {
            Some((command, argument)) => (command, argument.trim()),
            None => (line, ""),
        };

        match command {
            "/quit" | "/exit" | "/q" => ReplCommand::Quit,
            "/help" | "/h" | "/?" => ReplCommand::Help,
            "/subjects" => ReplCommand::Subjects,
            "/subject" | "/s" => {
                if argument.is_empty() {
                    return ReplCommand::Invalid("Usage: /subject <name|1-4>".to_string());
                }
                Self::subject(argument, ReplCommand::Select)
            }
            "/new" | "/n" => {
                if argument.is_empty() {
                    ReplCommand::Generate(None)
                } else {
                    Self::subject(argument, |s| ReplCommand::Generate(Some(s)))
                }
            }
            "/hint" => ReplCommand::Hint,
            "/answer" | "/a" => ReplCommand::Answer(argument.to_string()),
            "/reveal" => ReplCommand::Reveal,
            "/chat" => ReplCommand::ToggleChat,
            "/show" => ReplCommand::Show,
            other => ReplCommand::Unknown(other.to_string()),
        }
    }

    fn subject(argument: &str, build: impl FnOnce(Subject) -> ReplCommand) -> ReplCommand {
        match argument.parse::<Subject>() {
            Ok(subject) => build(subject),
            Err(e) => ReplCommand::Invalid(e.to_string()),
        }
    }
}

/// Turn typed input into the answer to submit.
///
/// For a multiple-choice question the answer is the chosen option label
/// (`b`, `B` or `(B)` all select B) and must name one of its options. For
/// free-text questions the input is submitted as typed.
pub fn resolve_answer(parsed: Option<&ParsedQuestion>, input: &str) -> Result<String, String> {
    let input = input.trim();
    let Some(parsed) = parsed.filter(|p| p.is_multiple_choice()) else {
        return Ok(input.to_string());
    };

    let label: OptionLabel = input
        .trim_start_matches('(')
        .trim_end_matches(')')
        .parse()?;

    parsed
        .option(label)
        .map(|option| option.label.to_string())
        .ok_or_else(|| format!("This question has no option ({})", label))
}
