//! Unit tests for output-name sanitization and collision handling

use std::fs::File;

use nb2pdf::pipeline::naming::{resolve_unique, sanitize, DEFAULT_MERGED_NAME};
use tempfile::TempDir;

#[test]
fn test_sanitize_strips_and_appends_extension() {
    assert_eq!(sanitize("bad:name"), "badname.pdf");
    assert_eq!(sanitize("report"), "report.pdf");
    assert_eq!(sanitize("report.pdf"), "report.pdf");
}

#[test]
fn test_sanitize_all_illegal_falls_back_to_default() {
    assert_eq!(sanitize("<>:\"/\\|?*"), DEFAULT_MERGED_NAME);
    assert_eq!(sanitize(""), DEFAULT_MERGED_NAME);
}

#[test]
fn test_resolve_unique_keeps_free_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("merged.pdf");

    assert_eq!(resolve_unique(&path), path);
}

#[test]
fn test_resolve_unique_appends_counter() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("merged.pdf");
    File::create(&path).unwrap();

    let resolved = resolve_unique(&path);
    assert_eq!(resolved, temp_dir.path().join("merged_1.pdf"));
}

#[test]
fn test_resolve_unique_skips_taken_suffixes() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("merged.pdf");
    File::create(&path).unwrap();
    File::create(temp_dir.path().join("merged_1.pdf")).unwrap();
    File::create(temp_dir.path().join("merged_2.pdf")).unwrap();

    assert_eq!(resolve_unique(&path), temp_dir.path().join("merged_3.pdf"));
}

#[test]
fn test_resolve_unique_idempotent_on_own_output() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("merged.pdf");
    File::create(&path).unwrap();

    let first = resolve_unique(&path);
    // No new colliding file was created, so resolving again is a no-op
    assert_eq!(resolve_unique(&first), first);
}
