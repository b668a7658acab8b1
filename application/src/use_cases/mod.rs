//! Use cases (application services)

pub mod chat_turn;
pub mod completion;
pub mod generate_question;
pub mod grade_answer;
pub mod relay_completion;
pub mod request_hint;
