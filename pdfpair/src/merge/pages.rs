//! Page tree manipulation.
//!
//! Appending pages from one document to another means cutting them out of
//! their original page tree. Anything a page inherited from its old
//! ancestors has to be copied onto the page first, otherwise it would
//! silently lose its media box or resources once re-parented.

use std::collections::BTreeSet;

use crate::error::{PdfPairError, Result};
use lopdf::{Dictionary, Document, Object, ObjectId, dictionary};

/// Page attributes a page may inherit from its `Pages` ancestors.
const INHERITABLE_KEYS: [&[u8]; 4] = [b"MediaBox", b"CropBox", b"Resources", b"Rotate"];

/// Upper bound on ancestor walks, guarding against `Parent` cycles.
const MAX_TREE_DEPTH: usize = 64;

/// Page tree editor used by the merger.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageTree;

impl PageTree {
    /// Create a new page tree editor.
    pub fn new() -> Self {
        Self
    }

    /// Object id of the root `Pages` node of `doc`.
    pub fn root_pages_id(&self, doc: &Document) -> Result<ObjectId> {
        let catalog = doc
            .catalog()
            .map_err(|e| PdfPairError::merge_failed(format!("Failed to get catalog: {e}")))?;

        catalog
            .get(b"Pages")
            .and_then(Object::as_reference)
            .map_err(|e| PdfPairError::merge_failed(format!("Failed to get pages reference: {e}")))
    }

    /// Page ids of `doc` in reading order.
    pub fn page_ids(&self, doc: &Document) -> Vec<ObjectId> {
        doc.get_pages().into_values().collect()
    }

    /// Copy inherited attributes onto the page itself.
    ///
    /// Attributes already present on the page win over inherited ones, and
    /// nearer ancestors win over farther ones.
    pub fn inline_inherited_attributes(&self, doc: &mut Document, page_id: ObjectId) -> Result<()> {
        let page = page_dictionary(doc, page_id)?;
        let mut missing: Vec<&[u8]> = INHERITABLE_KEYS
            .into_iter()
            .filter(|key| !page.has(key))
            .collect();
        let mut parent = parent_of(page);
        let mut inherited: Vec<(Vec<u8>, Object)> = Vec::new();

        for _ in 0..MAX_TREE_DEPTH {
            let Some(parent_id) = parent else { break };
            if missing.is_empty() {
                break;
            }

            let Ok(node) = doc.get_dictionary(parent_id) else {
                break;
            };

            missing.retain(|key| match node.get(key) {
                Ok(value) => {
                    inherited.push((key.to_vec(), value.clone()));
                    false
                }
                Err(_) => true,
            });
            parent = parent_of(node);
        }

        if inherited.is_empty() {
            return Ok(());
        }

        let page = doc
            .get_dictionary_mut(page_id)
            .map_err(|e| PdfPairError::merge_failed(format!("Failed to get page: {e}")))?;
        for (key, value) in inherited {
            page.set(key, value);
        }

        Ok(())
    }

    /// Ids of the catalog and every intermediate `Pages` node of `doc`.
    ///
    /// These are the objects that become dead weight once the pages have
    /// been moved into another tree.
    pub fn structural_ids(&self, doc: &Document) -> Result<BTreeSet<ObjectId>> {
        let mut ids = BTreeSet::new();

        ids.insert(catalog_reference(doc)?);

        let mut pending = vec![self.root_pages_id(doc)?];
        while let Some(node_id) = pending.pop() {
            if !ids.insert(node_id) {
                continue;
            }
            let Ok(node) = doc.get_dictionary(node_id) else {
                continue;
            };
            if let Ok(Object::Array(kids)) = node.get(b"Kids") {
                for kid in kids {
                    if let Ok(kid_id) = kid.as_reference()
                        && is_pages_node(doc, kid_id)
                    {
                        pending.push(kid_id);
                    }
                }
            }
        }

        Ok(ids)
    }

    /// Append `page_ids` after the existing pages of `doc`, in order.
    ///
    /// A new root `Pages` node takes the current root and a fresh branch
    /// holding the pages as its two kids. The branch carries no inheritable
    /// attributes, so the appended pages pick up nothing from the old root.
    /// Returns the id of the new root.
    pub fn append_branch(&self, doc: &mut Document, page_ids: &[ObjectId]) -> Result<ObjectId> {
        let catalog_id = catalog_reference(doc)?;
        let old_root = self.root_pages_id(doc)?;
        let old_count = doc
            .get_dictionary(old_root)
            .ok()
            .and_then(|dict| dict.get(b"Count").ok())
            .and_then(|count| count.as_i64().ok())
            .unwrap_or(0);

        let new_root = doc.new_object_id();
        let branch = doc.new_object_id();

        for &page_id in page_ids {
            let page = doc
                .get_dictionary_mut(page_id)
                .map_err(|e| PdfPairError::merge_failed(format!("Failed to get page: {e}")))?;
            page.set("Parent", Object::Reference(branch));
        }

        let kids: Vec<Object> = page_ids.iter().map(|&id| Object::Reference(id)).collect();
        let added = page_ids.len() as i64;
        doc.objects.insert(
            branch,
            dictionary! {
                "Type" => "Pages",
                "Parent" => new_root,
                "Kids" => kids,
                "Count" => added,
            }
            .into(),
        );

        doc.get_dictionary_mut(old_root)
            .map_err(|e| PdfPairError::merge_failed(format!("Failed to get pages object: {e}")))?
            .set("Parent", Object::Reference(new_root));

        doc.objects.insert(
            new_root,
            dictionary! {
                "Type" => "Pages",
                "Kids" => vec![Object::Reference(old_root), Object::Reference(branch)],
                "Count" => old_count + added,
            }
            .into(),
        );

        doc.get_dictionary_mut(catalog_id)
            .map_err(|e| PdfPairError::merge_failed(format!("Failed to get catalog: {e}")))?
            .set("Pages", Object::Reference(new_root));

        Ok(new_root)
    }
}

fn catalog_reference(doc: &Document) -> Result<ObjectId> {
    doc.trailer
        .get(b"Root")
        .and_then(Object::as_reference)
        .map_err(|e| PdfPairError::merge_failed(format!("Failed to get catalog: {e}")))
}

fn page_dictionary(doc: &Document, page_id: ObjectId) -> Result<&Dictionary> {
    doc.get_dictionary(page_id)
        .map_err(|e| PdfPairError::merge_failed(format!("Failed to get page: {e}")))
}

fn parent_of(dict: &Dictionary) -> Option<ObjectId> {
    dict.get(b"Parent").and_then(Object::as_reference).ok()
}

fn is_pages_node(doc: &Document, id: ObjectId) -> bool {
    doc.get_dictionary(id)
        .ok()
        .and_then(|dict| dict.get(b"Type").ok())
        .and_then(|ty| ty.as_name().ok())
        .is_some_and(|name| name == b"Pages")
}
