//! Notebook-to-PDF conversion via `jupyter nbconvert`.
//!
//! The converter is a thin subprocess wrapper: its output is never parsed,
//! the session only assumes the sibling PDF exists afterwards.

use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use anyhow::{Context, Result};

/// Convert a single notebook; nbconvert writes `<stem>.pdf` next to it.
///
/// A failure to spawn (e.g. jupyter not installed) is an error; a non-zero
/// exit status is returned for the caller to report.
pub fn convert_notebook(notebook: &Path) -> Result<ExitStatus> {
    Command::new("jupyter")
        .args(["nbconvert", "--to", "pdf"])
        .arg(notebook)
        .status()
        .with_context(|| {
            format!(
                "Failed to run 'jupyter nbconvert' for {}",
                notebook.display()
            )
        })
}

/// Path of the PDF that nbconvert produces for `notebook`.
pub fn pdf_sibling(notebook: &Path) -> PathBuf {
    notebook.with_extension("pdf")
}
