//! Notebook discovery and size reporting

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// One discovered notebook. Immutable after listing; the listing order is
/// fixed for the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    pub size_bytes: u64,
}

impl FileEntry {
    pub fn size_mb(&self) -> f64 {
        self.size_bytes as f64 / BYTES_PER_MB
    }
}

/// List the `.ipynb` files directly inside `dir`.
pub fn list_notebooks(dir: &Path) -> Result<Vec<FileEntry>> {
    let read_dir = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?;

    let mut entries = Vec::new();
    for entry in read_dir {
        let entry =
            entry.with_context(|| format!("Failed to read directory: {}", dir.display()))?;
        let path = entry.path();
        if !is_notebook(&path) {
            continue;
        }
        let metadata = entry
            .metadata()
            .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;
        if !metadata.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        entries.push(FileEntry {
            name,
            size_bytes: metadata.len(),
        });
    }

    Ok(entries)
}

/// Total size of a listing in megabytes.
pub fn total_size_mb(entries: &[FileEntry]) -> f64 {
    entries.iter().map(FileEntry::size_mb).sum()
}

fn is_notebook(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("ipynb"))
        .unwrap_or(false)
}
