//! Core two-document merge.
//!
//! The first document is kept as the base. The second is renumbered above
//! the base's highest object id, its objects are imported, and its pages are
//! hung off the base's root page node after the existing ones.

use lopdf::Document;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::error::{PdfPairError, Result};
use crate::io::{LoadedPdf, PdfReader};
use crate::merge::pages::PageTree;

/// Statistics about a merge operation.
#[derive(Debug, Clone)]
pub struct MergeStatistics {
    /// Pages contributed by the first document.
    pub first_pages: usize,

    /// Pages contributed by the second document.
    pub second_pages: usize,

    /// Total number of pages in merged document.
    pub total_pages: usize,

    /// Time taken to load both PDFs.
    pub load_time: Duration,

    /// Total time taken for load and merge.
    pub merge_time: Duration,

    /// Combined size of the input files.
    pub input_size: u64,
}

/// Result of a merge operation.
pub struct MergeResult {
    /// The merged PDF document.
    pub document: Document,

    /// Statistics about the merge.
    pub statistics: MergeStatistics,

    /// Paths of the merged files, in page order.
    pub merged_files: [PathBuf; 2],
}

/// PDF merger that concatenates two documents.
#[derive(Debug, Clone, Default)]
pub struct Merger {
    /// Reader for loading PDFs.
    reader: PdfReader,

    /// Page tree editor.
    pages: PageTree,
}

impl Merger {
    /// Create a new merger with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `first` and `second` and merge them, first document's pages
    /// first.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either input cannot be loaded
    /// - Either page tree is malformed
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use pdfpair::merge::Merger;
    /// # use std::path::Path;
    /// let merger = Merger::new();
    /// let result = merger.merge_pair(Path::new("a.pdf"), Path::new("b.pdf"))?;
    /// println!("Merged into {} pages", result.statistics.total_pages);
    /// # Ok::<(), pdfpair::PdfPairError>(())
    /// ```
    pub fn merge_pair(&self, first: &Path, second: &Path) -> Result<MergeResult> {
        let merge_start = Instant::now();

        let (first, second) = self.reader.load_pair(first, second)?;
        let load_time = merge_start.elapsed();

        let LoadedPdf {
            document: first_doc,
            path: first_path,
            page_count: first_pages,
            file_size: first_size,
            ..
        } = first;
        let LoadedPdf {
            document: second_doc,
            path: second_path,
            page_count: second_pages,
            file_size: second_size,
            ..
        } = second;

        let document = self.merge_documents(first_doc, second_doc)?;
        let total_pages = document.get_pages().len();

        if total_pages != first_pages + second_pages {
            return Err(PdfPairError::merge_failed(format!(
                "expected {} pages, got {total_pages}",
                first_pages + second_pages
            )));
        }

        let statistics = MergeStatistics {
            first_pages,
            second_pages,
            total_pages,
            load_time,
            merge_time: merge_start.elapsed(),
            input_size: first_size + second_size,
        };

        Ok(MergeResult {
            document,
            statistics,
            merged_files: [first_path, second_path],
        })
    }

    /// Append every page of `appended` to `base`.
    pub fn merge_documents(&self, mut base: Document, mut appended: Document) -> Result<Document> {
        appended.renumber_objects_with(base.max_id + 1);

        let page_ids = self.pages.page_ids(&appended);
        for &page_id in &page_ids {
            self.pages
                .inline_inherited_attributes(&mut appended, page_id)?;
        }

        for id in self.pages.structural_ids(&appended)? {
            appended.objects.remove(&id);
        }

        base.max_id = base.max_id.max(appended.max_id);
        base.objects.extend(appended.objects);

        self.pages.append_branch(&mut base, &page_ids)?;

        Ok(base)
    }
}
