//! Subject value object representing an 11+ exam domain

use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Visual theme attached to a subject.
///
/// Tokens are presentation-agnostic names; the terminal front-end maps
/// `color` onto an ANSI colour and web front-ends onto CSS classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubjectTheme {
    pub icon: &'static str,
    pub color: &'static str,
    pub background: &'static str,
}

/// Exam subjects offered by the tutor (Value Object)
///
/// The set is fixed; each variant carries static display data and the
/// subject-specific guidance used when generating a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subject {
    English,
    Math,
    VerbalReasoning,
    NonVerbalReasoning,
}

impl Subject {
    /// All subjects in display order
    pub const fn all() -> [Subject; 4] {
        [
            Subject::English,
            Subject::Math,
            Subject::VerbalReasoning,
            Subject::NonVerbalReasoning,
        ]
    }

    /// Korean display label
    pub fn label(&self) -> &'static str {
        match self {
            Subject::English => "영어",
            Subject::Math => "수학",
            Subject::VerbalReasoning => "언어추론",
            Subject::NonVerbalReasoning => "비언어추론",
        }
    }

    /// English name, used inside prompts next to the Korean label
    pub fn english_name(&self) -> &'static str {
        match self {
            Subject::English => "English",
            Subject::Math => "Math",
            Subject::VerbalReasoning => "Verbal Reasoning",
            Subject::NonVerbalReasoning => "Non-verbal Reasoning",
        }
    }

    pub fn theme(&self) -> SubjectTheme {
        match self {
            Subject::English => SubjectTheme {
                icon: "book-open",
                color: "blue",
                background: "blue-100",
            },
            Subject::Math => SubjectTheme {
                icon: "sigma",
                color: "red",
                background: "red-100",
            },
            Subject::VerbalReasoning => SubjectTheme {
                icon: "brain-circuit",
                color: "green",
                background: "green-100",
            },
            Subject::NonVerbalReasoning => SubjectTheme {
                icon: "puzzle",
                color: "purple",
                background: "purple-100",
            },
        }
    }

    /// What kind of question the model should write for this subject
    pub fn guidance(&self) -> &'static str {
        match self {
            Subject::English => {
                "it could be a reading comprehension, grammar, or vocabulary question. Include a passage if necessary."
            }
            Subject::Math => "it should be a word problem testing logic and mathematical skills.",
            Subject::VerbalReasoning => {
                "it could involve sequences, analogies, or code-breaking."
            }
            Subject::NonVerbalReasoning => "describe a visual pattern puzzle.",
        }
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Subject {
    type Err = DomainError;

    /// Accepts the Korean label, the English name (case-insensitive, spaces
    /// or dashes optional) or a 1-based index into [`Subject::all`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if let Ok(index) = trimmed.parse::<usize>() {
            return index
                .checked_sub(1)
                .and_then(|i| Subject::all().get(i).copied())
                .ok_or_else(|| DomainError::UnknownSubject(trimmed.to_string()));
        }

        let normalized: String = trimmed
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();

        Subject::all()
            .into_iter()
            .find(|subject| {
                subject.label() == trimmed
                    || subject.english_name().replace([' ', '-'], "").to_lowercase() == normalized
            })
            .ok_or_else(|| DomainError::UnknownSubject(trimmed.to_string()))
    }
}

impl Serialize for Subject {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Subject {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
