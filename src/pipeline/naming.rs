//! Output-file naming: sanitization and collision-safe path resolution

use std::path::{Path, PathBuf};

/// Fallback name used when the user provides nothing usable, and for the
/// single merge retry after a write failure.
pub const DEFAULT_MERGED_NAME: &str = "merged-notebook.pdf";

/// Characters that are illegal in file names on at least one supported
/// platform. Stripped rather than escaped.
const ILLEGAL_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Sanitize a user-supplied merge file name.
///
/// Strips illegal characters, guarantees a `.pdf` extension, and falls back
/// to [`DEFAULT_MERGED_NAME`] when nothing usable remains.
pub fn sanitize(user_text: &str) -> String {
    let stripped: String = user_text
        .chars()
        .filter(|c| !ILLEGAL_CHARS.contains(c))
        .collect();
    let stripped = stripped.trim();

    if stripped.is_empty() || stripped.eq_ignore_ascii_case(".pdf") {
        return DEFAULT_MERGED_NAME.to_string();
    }

    if stripped.to_lowercase().ends_with(".pdf") {
        stripped.to_string()
    } else {
        format!("{}.pdf", stripped)
    }
}

/// Resolve `path` to one that does not collide with an existing file.
///
/// Returns `path` unchanged when it is free; otherwise appends `_1`, `_2`, …
/// to the stem until an unused path is found. Idempotent on its own output
/// as long as no new colliding file appears in between.
pub fn resolve_unique(path: &Path) -> PathBuf {
    if !path.exists() {
        return path.to_path_buf();
    }

    let directory = path.parent().unwrap_or_else(|| Path::new(""));
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("merged");
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("pdf");

    let mut counter = 1u32;
    loop {
        let candidate = directory.join(format!("{}_{}.{}", stem, counter, extension));
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}
