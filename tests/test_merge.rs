//! Merge tests over generated single-page PDF fixtures

use std::path::Path;

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use nb2pdf::pipeline::merge::merge_pdfs;
use tempfile::TempDir;

/// Write a minimal one-page PDF containing `text`.
fn write_single_page_pdf(path: &Path, text: &str) {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let content = Content {
        operations: vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 24.into()]),
            Operation::new("Td", vec![100.into(), 600.into()]),
            Operation::new("Tj", vec![Object::string_literal(text)]),
            Operation::new("ET", vec![]),
        ],
    };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    });

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();
    doc.save(path).unwrap();
}

#[test]
fn test_merge_combines_pages_in_order() {
    let temp_dir = TempDir::new().unwrap();
    let first = temp_dir.path().join("first.pdf");
    let second = temp_dir.path().join("second.pdf");
    let output = temp_dir.path().join("merged.pdf");

    write_single_page_pdf(&first, "first");
    write_single_page_pdf(&second, "second");

    merge_pdfs(&[first, second], &output).unwrap();

    let merged = Document::load(&output).unwrap();
    assert_eq!(merged.get_pages().len(), 2);
}

#[test]
fn test_merge_empty_input_fails() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("merged.pdf");

    assert!(merge_pdfs(&[], &output).is_err());
    assert!(!output.exists());
}

#[test]
fn test_merge_missing_input_fails() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope.pdf");
    let output = temp_dir.path().join("merged.pdf");

    assert!(merge_pdfs(&[missing], &output).is_err());
}
