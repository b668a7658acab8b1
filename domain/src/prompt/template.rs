//! Prompt templates for the tutor actions

use crate::question::entities::Question;
use crate::subject::Subject;

/// Fixed persona prefixed to every chat turn
pub const TUTOR_PERSONA: &str = "You are a friendly and encouraging 11+ tutor AI. Your answers must be in Korean and easy for an 11-year-old to understand.";

/// Templates for generating prompts for each action
pub struct PromptTemplate;

impl PromptTemplate {
    /// Question generation (reply must be a JSON object)
    pub fn generate_question(subject: Subject) -> String {
        format!(
            r#"Create a new, high-quality 11+ exam style question for an 11-year-old student. The subject is "{label}" ({english}). The question must be in English.
- For {english}, {guidance}

Provide a detailed answer and explanation in Korean.

Return the response ONLY in the following JSON format:
{{"type": "Generated {label} Question", "passage": "...", "question": "...", "answer": "..."}}
Ensure the 'passage' key is included, but its value can be an empty string if not needed."#,
            label = subject.label(),
            english = subject.english_name(),
            guidance = subject.guidance(),
        )
    }

    /// One-sentence Korean hint that must not reveal the answer
    pub fn hint(subject: Option<Subject>, question: &str) -> String {
        let subject = subject
            .map(|s| format!("{} ({})", s.label(), s.english_name()))
            .unwrap_or_else(|| "11+".to_string());
        format!(
            r#"You are a helpful 11+ tutor. Provide a single, simple hint for the following {} question, but do not give away the answer. The hint should be a clue to guide an 11-year-old student. Keep it to one sentence in Korean.

Question: "{}""#,
            subject, question
        )
    }

    /// Grading (reply must be a JSON object `{isCorrect, feedback}`)
    pub fn grade_answer(question: &str, correct_answer: &str, user_answer: &str) -> String {
        format!(
            r#"You are grading an 11+ practice question.
Question: "{}"
Correct answer: "{}"
Student answer: "{}"
Respond in Korean as JSON {{"isCorrect":true|false,"feedback":"short feedback"}}"#,
            question, correct_answer, user_answer
        )
    }

    /// One chat turn, optionally grounded in the question on screen
    pub fn chat(current: Option<&Question>, message: &str) -> String {
        let mut prompt = TUTOR_PERSONA.to_string();

        match current {
            Some(question) => prompt.push_str(&format!(
                r#"

The student is currently looking at this question:
Type: {}
Question: "{}"

Considering this context, answer the student's following query concisely: "{}""#,
                question.question_type, question.question, message
            )),
            None => prompt.push_str(&format!(
                r#"

Answer the student's following query concisely: "{}""#,
                message
            )),
        }

        prompt
    }
}
