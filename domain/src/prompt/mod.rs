//! Prompt domain
//!
//! Natural-language prompts for each tutor action.

mod template;

pub use template::{PromptTemplate, TUTOR_PERSONA};
