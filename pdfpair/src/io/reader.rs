//! PDF reading and loading operations.
//!
//! # Examples
//!
//! ```no_run
//! use pdfpair::io::reader::PdfReader;
//! use std::path::Path;
//!
//! let reader = PdfReader::new();
//! let loaded = reader.load(Path::new("invoice.pdf"))?;
//! println!("{} pages in {:?}", loaded.page_count, loaded.load_time);
//! # Ok::<(), pdfpair::PdfPairError>(())
//! ```

use lopdf::Document;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::error::{PdfPairError, Result};

/// A loaded PDF document with metadata.
#[derive(Debug)]
pub struct LoadedPdf {
    /// The PDF document.
    pub document: Document,

    /// Path to the source file.
    pub path: PathBuf,

    /// Number of pages in the document.
    pub page_count: usize,

    /// Time taken to load the document.
    pub load_time: Duration,

    /// File size in bytes.
    pub file_size: u64,
}

impl LoadedPdf {
    fn new(document: Document, path: PathBuf, load_time: Duration) -> Self {
        let page_count = document.get_pages().len();
        let file_size = std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);

        Self {
            document,
            path,
            page_count,
            load_time,
            file_size,
        }
    }
}

/// PDF reader with configurable loading behavior.
#[derive(Debug, Clone)]
pub struct PdfReader {
    /// Whether to reject documents without pages.
    verify: bool,
}

impl PdfReader {
    /// Create a new PDF reader with default settings.
    pub fn new() -> Self {
        Self { verify: true }
    }

    /// Create a reader that accepts documents without pages.
    pub fn without_verification() -> Self {
        Self { verify: false }
    }

    /// Load a single PDF document.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - File cannot be read or is not a valid PDF
    /// - PDF is encrypted
    /// - PDF has no pages (unless verification is off)
    pub fn load(&self, path: &Path) -> Result<LoadedPdf> {
        let path_buf = path.to_path_buf();
        let start = Instant::now();

        let doc = Document::load(&path_buf).map_err(|e| {
            let err_msg = e.to_string();
            let lower = err_msg.to_lowercase();
            if lower.contains("encrypt") || lower.contains("password") {
                PdfPairError::encrypted_pdf(path_buf.clone())
            } else {
                PdfPairError::failed_to_load_pdf(path_buf.clone(), err_msg)
            }
        })?;

        if self.verify && doc.get_pages().is_empty() {
            return Err(PdfPairError::corrupted_pdf(path_buf, "PDF has no pages"));
        }

        let loaded = LoadedPdf::new(doc, path_buf, start.elapsed());
        tracing::debug!(
            path = %loaded.path.display(),
            pages = loaded.page_count,
            bytes = loaded.file_size,
            "loaded pdf"
        );

        Ok(loaded)
    }

    /// Load the two inputs of a merge, first then second.
    ///
    /// Stops at the first failure.
    pub fn load_pair(&self, first: &Path, second: &Path) -> Result<(LoadedPdf, LoadedPdf)> {
        let first = self.load(first)?;
        let second = self.load(second)?;
        Ok((first, second))
    }
}

impl Default for PdfReader {
    fn default() -> Self {
        Self::new()
    }
}
