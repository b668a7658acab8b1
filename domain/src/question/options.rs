//! Multiple-choice option detection
//!
//! Generated questions embed their choices inline, e.g.
//! `"How many? (A) 5 (B) 6 (C) 7 (D) 8"`. A question only counts as
//! multiple choice when at least two distinct labelled segments are found.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// `(LETTER) text` where text runs up to the next parenthesis or newline.
static OPTION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(([A-D])\)\s*([^()\n]+)").expect("option pattern is a valid regex")
});

const MIN_OPTIONS: usize = 2;

/// Label of a multiple-choice option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OptionLabel {
    A,
    B,
    C,
    D,
}

impl OptionLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionLabel::A => "A",
            OptionLabel::B => "B",
            OptionLabel::C => "C",
            OptionLabel::D => "D",
        }
    }

    fn from_letter(letter: &str) -> Option<Self> {
        match letter {
            "A" => Some(OptionLabel::A),
            "B" => Some(OptionLabel::B),
            "C" => Some(OptionLabel::C),
            "D" => Some(OptionLabel::D),
            _ => None,
        }
    }
}

impl std::fmt::Display for OptionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for OptionLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_letter(&s.trim().to_uppercase())
            .ok_or_else(|| format!("Not an option label: {}", s.trim()))
    }
}

/// One choice of a multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub label: OptionLabel,
    pub text: String,
}

/// Render-time view of a question (derived, never stored)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedQuestion {
    pub prompt_text: String,
    pub options: Option<Vec<ChoiceOption>>,
}

impl ParsedQuestion {
    pub fn is_multiple_choice(&self) -> bool {
        self.options.is_some()
    }

    /// Find the option with the given label
    pub fn option(&self, label: OptionLabel) -> Option<&ChoiceOption> {
        self.options
            .as_deref()
            .and_then(|opts| opts.iter().find(|o| o.label == label))
    }
}

/// Split question text into a stem and its inline options.
///
/// With two or more distinct labels the stem is the (trimmed) text before the
/// first match and options follow source order; a repeated label keeps its
/// first occurrence. Otherwise the full text is the stem and there are no
/// options.
pub fn parse_options(text: &str) -> ParsedQuestion {
    let mut options: Vec<ChoiceOption> = Vec::new();
    let mut first_index = None;

    for captures in OPTION_PATTERN.captures_iter(text) {
        let (Some(whole), Some(letter), Some(body)) = (captures.get(0), captures.get(1), captures.get(2))
        else {
            continue;
        };
        let Some(label) = OptionLabel::from_letter(letter.as_str()) else {
            continue;
        };
        if options.iter().any(|o| o.label == label) {
            continue;
        }

        first_index.get_or_insert(whole.start());
        options.push(ChoiceOption {
            label,
            text: body.as_str().trim().to_string(),
        });
    }

    match first_index {
        Some(start) if options.len() >= MIN_OPTIONS => ParsedQuestion {
            prompt_text: text[..start].trim().to_string(),
            options: Some(options),
        },
        _ => ParsedQuestion {
            prompt_text: text.to_string(),
            options: None,
        },
    }
}
