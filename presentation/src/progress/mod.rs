//! Loading indicators for in-flight tutor actions

pub mod reporter;
