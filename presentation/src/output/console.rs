//! Console output formatter for the tutor

use colored::{Color, ColoredString, Colorize};
use tutor_application::TutorSnapshot;
use tutor_domain::{ChatMessage, Evaluation, Sender, Subject};

/// Formats tutor state for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Numbered subject list for `/subjects`
    pub fn subject_menu(active: Option<Subject>) -> String {
        let mut output = Self::section_header("Subjects");
        for (index, subject) in Subject::all().into_iter().enumerate() {
            let marker = if Some(subject) == active { "*" } else { " " };
            output.push_str(&format!(
                "{} {}. {} {}\n",
                marker,
                index + 1,
                Self::subject_badge(subject),
                subject.english_name().dimmed()
            ));
        }
        output
    }

    /// The question card: heading, passage, stem, options, reveal, hint and
    /// evaluation, as far as the snapshot has them
    pub fn question_card(snapshot: &TutorSnapshot) -> String {
        let mut output = String::new();

        if let Some(subject) = snapshot
            .generating
            .filter(|subject| Some(*subject) == snapshot.active_subject)
        {
            output.push_str(&format!(
                "{} {}\n",
                "...".dimmed(),
                format!("{} 문제를 만드는 중", subject.label()).dimmed()
            ));
            return output;
        }

        if let Some(error) = &snapshot.generation_error {
            output.push_str(&format!("{}\n", error.red()));
            return output;
        }

        let (Some(question), Some(parsed)) = (&snapshot.question, &snapshot.parsed) else {
            return match snapshot.active_subject {
                Some(subject) => format!(
                    "{} 선택됨. {} 로 문제를 만들어 보세요.\n",
                    Self::subject_badge(subject),
                    "/new".bold()
                ),
                None => format!("{} 로 과목을 골라 주세요.\n", "/subjects".bold()),
            };
        };

        let heading = question.heading(snapshot.active_subject);
        let heading = match snapshot.active_subject {
            Some(subject) => heading.color(Self::theme_color(subject)).bold(),
            None => heading.bold(),
        };
        output.push_str(&Self::header(heading));
        output.push('\n');

        if let Some(passage) = question.visible_passage() {
            output.push_str(&format!("{}\n\n", passage.italic()));
        }

        output.push_str(&format!("{}\n", parsed.prompt_text));
        if let Some(options) = &parsed.options {
            output.push('\n');
            for option in options {
                output.push_str(&format!(
                    "  {} {}\n",
                    format!("({})", option.label).cyan().bold(),
                    option.text
                ));
            }
        }

        if snapshot.answer_revealed {
            output.push_str(&format!(
                "\n{}\n{}\n",
                "정답 및 해설".green().bold(),
                question.answer
            ));
        }

        output.push_str(&Self::hint_line(snapshot));

        if snapshot.checking {
            output.push_str(&format!("\n{}\n", "채점 중...".dimmed()));
        } else if let Some(evaluation) = &snapshot.evaluation {
            output.push('\n');
            output.push_str(&Self::evaluation(evaluation, snapshot.grading_failed));
        }

        output
    }

    fn hint_line(snapshot: &TutorSnapshot) -> String {
        if snapshot.hint_loading {
            format!("\n{}\n", "힌트를 가져오는 중...".dimmed())
        } else if let Some(hint) = &snapshot.hint {
            format!("\n{} {}\n", "힌트:".yellow().bold(), hint)
        } else if let Some(error) = &snapshot.hint_error {
            format!("\n{}\n", error.red())
        } else {
            String::new()
        }
    }

    /// Hint (or hint failure) on its own
    pub fn hint(snapshot: &TutorSnapshot) -> String {
        Self::hint_line(snapshot).trim_start().to_string()
    }

    /// Verdict and feedback; `grading_failed` marks the fallback evaluation
    pub fn evaluation(evaluation: &Evaluation, grading_failed: bool) -> String {
        let verdict = if grading_failed {
            "?".yellow().bold()
        } else if evaluation.is_correct {
            "정답!".green().bold()
        } else {
            "오답".red().bold()
        };
        format!("{} {}\n", verdict, evaluation.feedback)
    }

    /// The whole chat log, oldest first
    pub fn chat_log(messages: &[ChatMessage]) -> String {
        let mut output = Self::section_header("Tutor chat");
        for message in messages {
            output.push_str(&Self::chat_message(message));
        }
        output
    }

    pub fn chat_message(message: &ChatMessage) -> String {
        match message.sender {
            Sender::User => format!("{} {}\n", "you >".bold(), message.text),
            Sender::Assistant => format!("{} {}\n", "tutor >".cyan().bold(), message.text),
        }
    }

    pub fn subject_badge(subject: Subject) -> ColoredString {
        subject.label().color(Self::theme_color(subject)).bold()
    }

    /// ANSI colour for a subject's theme token
    fn theme_color(subject: Subject) -> Color {
        match subject.theme().color {
            "blue" => Color::Blue,
            "red" => Color::Red,
            "green" => Color::Green,
            "purple" => Color::Magenta,
            _ => Color::White,
        }
    }

    fn header(title: ColoredString) -> String {
        let line = "=".repeat(60);
        format!("{}\n{}\n{}", line.cyan(), title, line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }
}
