//! Presentation layer for smart-tutor
//!
//! This crate contains the HTTP gateway surface, CLI definitions, output
//! formatters, progress reporters, and the interactive terminal tutor.

pub mod cli;
pub mod output;
pub mod progress;
pub mod server;
pub mod tutor;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, ServeArgs, TutorArgs};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use server::{router, serve};
pub use tutor::TutorRepl;
