//! The seam between the workflow controller and the PDF library.

use lopdf::Document;
use std::path::Path;

use crate::config::Config;
use crate::error::Result;
use crate::io::PdfWriter;
use crate::merge::merger::{MergeResult, Merger};

/// Produces a merged document and writes it out.
///
/// The controller calls [`merge`](MergeEngine::merge) before asking the user
/// where to save, and [`save`](MergeEngine::save) only once a destination
/// was chosen.
pub trait MergeEngine {
    /// Concatenate every page of `first` followed by every page of `second`.
    fn merge(&self, first: &Path, second: &Path) -> Result<MergeResult>;

    /// Serialize `document` to `path`.
    fn save(&self, document: &mut Document, path: &Path) -> Result<()>;
}

/// [`MergeEngine`] backed by `lopdf`.
#[derive(Debug, Clone, Default)]
pub struct LopdfEngine {
    merger: Merger,
    writer: PdfWriter,
}

impl LopdfEngine {
    /// Engine with default merge and write settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine writing with the compression level from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self {
            merger: Merger::new(),
            writer: PdfWriter::with_compression(config.compression),
        }
    }
}

impl MergeEngine for LopdfEngine {
    fn merge(&self, first: &Path, second: &Path) -> Result<MergeResult> {
        self.merger.merge_pair(first, second)
    }

    fn save(&self, document: &mut Document, path: &Path) -> Result<()> {
        self.writer.save(document, path)
    }
}
