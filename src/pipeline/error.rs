//! Session-level failure taxonomy.
//!
//! Component functions report failures as values and never exit the process
//! themselves; only `main` turns a `SessionError` into an exit code.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    /// The user aborted a blocking read (Ctrl+C or end of input).
    #[error("operation cancelled by user")]
    Cancelled,

    /// The user pointed the session at a directory that does not exist.
    #[error("the specified path does not exist: {0}")]
    PathNotFound(PathBuf),

    /// The user declined the working directory but supplied no alternative.
    #[error("no path provided")]
    NoPathProvided,

    /// The directory contained nothing to convert.
    #[error("no Jupyter notebooks found in {0}")]
    NoNotebooksFound(PathBuf),

    /// Both the chosen output name and the fallback name failed to write.
    #[error("failed to write merged PDF: {0}")]
    MergeFailed(String),
}
