//! PDF merging operations.
//!
//! # Examples
//!
//! ```no_run
//! use pdfpair::merge::merge_pdfs;
//! use std::path::Path;
//!
//! let (document, stats) = merge_pdfs(Path::new("a.pdf"), Path::new("b.pdf"))?;
//! println!("Merged {} pages", stats.total_pages);
//! # Ok::<(), pdfpair::PdfPairError>(())
//! ```

pub mod engine;
pub mod merger;
pub mod pages;

pub use engine::{LopdfEngine, MergeEngine};
pub use merger::{MergeResult, MergeStatistics, Merger};
pub use pages::PageTree;

use crate::error::Result;
use lopdf::Document;
use std::path::Path;

/// Merge two PDF files, pages of `first` before pages of `second`.
///
/// Convenience function that creates a merger and performs the merge.
///
/// # Errors
///
/// Returns an error if either file cannot be loaded or the page trees
/// cannot be combined.
pub fn merge_pdfs(first: &Path, second: &Path) -> Result<(Document, MergeStatistics)> {
    let result = Merger::new().merge_pair(first, second)?;
    Ok((result.document, result.statistics))
}
