//! Shared terminal utilities

pub mod progress;
pub mod styling;
