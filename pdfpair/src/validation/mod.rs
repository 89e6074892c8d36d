//! Input validation for pdfpair.
//!
//! Selection-time checks are deliberately shallow: a candidate is accepted
//! when it names an existing regular file ending in `.pdf`. Whether the bytes
//! actually form a readable PDF is only discovered when the merge loads it.
//!
//! # Examples
//!
//! ```no_run
//! use pdfpair::validation::validate_candidate;
//! use std::path::Path;
//!
//! let accepted = validate_candidate(Path::new("invoice.pdf"))?;
//! assert!(accepted.is_absolute());
//! # Ok::<(), pdfpair::PdfPairError>(())
//! ```

use std::path::{Path, PathBuf};

use crate::error::{PdfPairError, Result};
use crate::utils::has_pdf_extension;

/// Validate a file offered for a slot.
///
/// Returns the path made absolute against the current directory.
///
/// # Errors
///
/// Returns [`PdfPairError::InvalidFile`] if the name does not end in `.pdf`
/// (any case) or if the path is not an existing regular file.
pub fn validate_candidate(path: &Path) -> Result<PathBuf> {
    if !has_pdf_extension(path) || !path.is_file() {
        return Err(PdfPairError::invalid_file(path));
    }

    Ok(std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf()))
}

/// Check that a previously accepted path still exists as a file.
///
/// # Errors
///
/// Returns [`PdfPairError::FileNotFound`] when the file has gone away since
/// it was selected.
pub fn ensure_still_present(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(PdfPairError::file_not_found(path))
    }
}
