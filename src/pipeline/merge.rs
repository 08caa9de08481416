//! PDF merging built on lopdf's object model.
//!
//! Loads each input, renumbers its objects into a shared id space, then
//! rebuilds a single page tree and catalog over the combined pages.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use lopdf::{dictionary, Document, Object, ObjectId};

/// Merge `inputs` in order into a single PDF at `output`.
pub fn merge_pdfs(inputs: &[PathBuf], output: &Path) -> Result<()> {
    if inputs.is_empty() {
        bail!("no PDF files to merge");
    }

    let mut max_id = 1;
    let mut pages: Vec<(ObjectId, Object)> = Vec::new();
    let mut objects: BTreeMap<ObjectId, Object> = BTreeMap::new();

    for path in inputs {
        let mut doc = Document::load(path)
            .with_context(|| format!("Failed to load PDF: {}", path.display()))?;
        doc.renumber_objects_with(max_id);
        max_id = doc.max_id + 1;

        for (_page_number, object_id) in doc.get_pages() {
            let page = doc
                .get_object(object_id)
                .with_context(|| format!("Malformed page tree in {}", path.display()))?
                .to_owned();
            pages.push((object_id, page));
        }
        objects.extend(doc.objects);
    }

    let mut merged = Document::with_version("1.5");

    // Carry everything except the per-document structural objects, which
    // are rebuilt below over the combined page set.
    for (object_id, object) in objects {
        let structural = matches!(
            structural_type(&object),
            Some(b"Catalog") | Some(b"Pages") | Some(b"Page") | Some(b"Outlines")
                | Some(b"Outline")
        );
        if !structural {
            merged.objects.insert(object_id, object);
        }
    }

    // Fresh ids must not collide with the carried, already-renumbered objects
    merged.max_id = max_id;

    let pages_id = merged.new_object_id();
    for (object_id, object) in &pages {
        let mut dict = object
            .as_dict()
            .with_context(|| "page object is not a dictionary".to_string())?
            .clone();
        dict.set("Parent", Object::Reference(pages_id));
        merged
            .objects
            .insert(*object_id, Object::Dictionary(dict));
    }

    let kids: Vec<Object> = pages
        .iter()
        .map(|(object_id, _)| Object::Reference(*object_id))
        .collect();
    merged.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Count" => pages.len() as i64,
            "Kids" => kids,
        }),
    );

    let catalog_id = merged.new_object_id();
    merged.objects.insert(
        catalog_id,
        Object::Dictionary(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        }),
    );
    merged.trailer.set("Root", catalog_id);

    merged.renumber_objects();
    merged.compress();
    merged
        .save(output)
        .with_context(|| format!("Failed to write merged PDF: {}", output.display()))?;
    Ok(())
}

fn structural_type(object: &Object) -> Option<&[u8]> {
    object
        .as_dict()
        .ok()
        .and_then(|dict| dict.get(b"Type").ok())
        .and_then(|name| name.as_name().ok())
}
