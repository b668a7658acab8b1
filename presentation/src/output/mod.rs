//! Terminal rendering of the tutor state

pub mod console;
