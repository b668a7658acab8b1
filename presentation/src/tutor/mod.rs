//! Interactive terminal tutor
//!
//! Provides a readline-based front-end over [`TutorApp`](tutor_application::TutorApp).

mod command;
mod repl;

pub use command::{ReplCommand, resolve_answer};
pub use repl::TutorRepl;
