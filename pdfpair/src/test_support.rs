//! Small in-memory documents for unit tests.
//!
//! Each page is tagged by the width of its media box so tests can check
//! page order after a merge.

use lopdf::{Document, Object, ObjectId, Stream, dictionary};
use std::path::{Path, PathBuf};

fn media_box(width: i64) -> Object {
    vec![0.into(), 0.into(), width.into(), 792.into()].into()
}

fn add_page(doc: &mut Document, parent: ObjectId, width: Option<i64>) -> ObjectId {
    let content_id = doc.add_object(Stream::new(dictionary! {}, Vec::new()));
    let mut page = dictionary! {
        "Type" => "Page",
        "Parent" => parent,
        "Contents" => content_id,
    };
    if let Some(width) = width {
        page.set("MediaBox", media_box(width));
    }
    doc.add_object(page)
}

fn finish(doc: &mut Document, pages_id: ObjectId) {
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
}

/// Flat document with one page per entry of `widths`.
pub(crate) fn build_test_document(widths: &[i64]) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let kids: Vec<Object> = widths
        .iter()
        .map(|&width| add_page(&mut doc, pages_id, Some(width)).into())
        .collect();

    doc.objects.insert(
        pages_id,
        dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => widths.len() as i64,
        }
        .into(),
    );
    finish(&mut doc, pages_id);
    doc
}

/// Document whose `count` pages sit under an intermediate `Pages` node and
/// inherit their media box from it.
pub(crate) fn build_nested_document(width: i64, count: usize) -> Document {
    let mut doc = Document::with_version("1.5");
    let root_id = doc.new_object_id();
    let node_id = doc.new_object_id();

    let kids: Vec<Object> = (0..count)
        .map(|_| add_page(&mut doc, node_id, None).into())
        .collect();

    doc.objects.insert(
        node_id,
        dictionary! {
            "Type" => "Pages",
            "Parent" => root_id,
            "Kids" => kids,
            "Count" => count as i64,
            "MediaBox" => media_box(width),
        }
        .into(),
    );
    doc.objects.insert(
        root_id,
        dictionary! {
            "Type" => "Pages",
            "Kids" => vec![Object::Reference(node_id)],
            "Count" => count as i64,
        }
        .into(),
    );
    finish(&mut doc, root_id);
    doc
}

/// Write a flat test document to `dir/name`.
pub(crate) fn write_test_pdf(dir: &Path, name: &str, widths: &[i64]) -> PathBuf {
    let path = dir.join(name);
    let mut doc = build_test_document(widths);
    doc.save(&path).unwrap();
    path
}

/// Media box widths of every page, in page order.
pub(crate) fn page_widths(doc: &Document) -> Vec<i64> {
    doc.get_pages()
        .into_values()
        .map(|page_id| {
            let page = doc.get_dictionary(page_id).unwrap();
            let media_box = page.get(b"MediaBox").unwrap().as_array().unwrap();
            media_box[2].as_i64().unwrap()
        })
        .collect()
}

/// Value of `key` on the page or the nearest `Pages` ancestor that sets it.
pub(crate) fn inherited(doc: &Document, page_id: ObjectId, key: &[u8]) -> Option<Object> {
    let mut node_id = Some(page_id);
    while let Some(id) = node_id {
        let node = doc.get_dictionary(id).ok()?;
        if let Ok(value) = node.get(key) {
            return Some(value.clone());
        }
        node_id = node.get(b"Parent").and_then(Object::as_reference).ok();
    }
    None
}
