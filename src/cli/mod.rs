//! CLI module - argument parsing, timed prompts, and pagination

pub mod args;
pub mod pager;
pub mod prompt;

pub use args::Args;
pub use prompt::PromptOutcome;
