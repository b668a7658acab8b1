//! Generated practice questions and their multiple-choice view.
//!
//! - [`entities::Question`] — a question exactly as produced by generation
//! - [`options::parse_options`] — derives the stem / options view on demand

pub mod entities;
pub mod options;
