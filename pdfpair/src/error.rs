//! Error types for pdfpair.
//!
//! Every fallible operation in the library returns [`PdfPairError`]. The
//! workflow controller never lets one of these escape to the user as a crash:
//! selection errors become an "invalid file" notification and everything that
//! goes wrong while merging collapses into a single "merge failed" message.
//!
//! # Error Categories
//!
//! - **Selection Errors**: a dropped or picked file is missing or not a PDF
//! - **PDF Errors**: unreadable, encrypted, or page-less documents
//! - **Merge Errors**: the page tree could not be stitched together
//! - **Output Errors**: the destination could not be created or written

use std::io;
use std::path::PathBuf;

/// Result type alias for pdfpair operations.
pub type Result<T> = std::result::Result<T, PdfPairError>;

/// Main error type for pdfpair operations.
#[derive(Debug, thiserror::Error)]
pub enum PdfPairError {
    /// Offered file does not exist or does not carry a `.pdf` extension.
    #[error("Invalid file (PDF only): {}", path.display())]
    InvalidFile {
        /// Path that was offered.
        path: PathBuf,
    },

    /// Input file was not found.
    #[error("File not found: {}", path.display())]
    FileNotFound {
        /// Path to the file that was not found.
        path: PathBuf,
    },

    /// Failed to load PDF file.
    #[error("Failed to load PDF {}: {reason}", path.display())]
    FailedToLoadPdf {
        /// Path to the PDF file.
        path: PathBuf,
        /// Reason for the failure.
        reason: String,
    },

    /// PDF file is corrupted or has invalid structure.
    #[error("Corrupted PDF {}: {details}", path.display())]
    CorruptedPdf {
        /// Path to the corrupted PDF.
        path: PathBuf,
        /// Details about the corruption.
        details: String,
    },

    /// PDF file is encrypted and cannot be processed.
    #[error("PDF is encrypted: {}", path.display())]
    EncryptedPdf {
        /// Path to the encrypted PDF.
        path: PathBuf,
    },

    /// Merge operation failed.
    #[error("Merge operation failed: {reason}")]
    MergeFailed {
        /// Description of what went wrong.
        reason: String,
    },

    /// Failed to create output file.
    #[error("Failed to create output file {}: {source}", path.display())]
    FailedToCreateOutput {
        /// Path where output should be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to write to output file.
    #[error("Failed to write output file {}: {source}", path.display())]
    FailedToWrite {
        /// Path being written to.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what's wrong with the configuration.
        message: String,
    },

    /// Generic I/O error.
    #[error("I/O error: {source}")]
    Io {
        /// Underlying I/O error.
        #[from]
        source: io::Error,
    },
}

impl From<lopdf::Error> for PdfPairError {
    fn from(err: lopdf::Error) -> Self {
        Self::other(err.to_string())
    }
}

impl PdfPairError {
    /// Create an InvalidFile error.
    pub fn invalid_file(path: impl Into<PathBuf>) -> Self {
        Self::InvalidFile { path: path.into() }
    }

    /// Create a FileNotFound error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a FailedToLoadPdf error.
    pub fn failed_to_load_pdf(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::FailedToLoadPdf {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a CorruptedPdf error.
    pub fn corrupted_pdf(path: impl Into<PathBuf>, details: impl Into<String>) -> Self {
        Self::CorruptedPdf {
            path: path.into(),
            details: details.into(),
        }
    }

    /// Create an EncryptedPdf error.
    pub fn encrypted_pdf(path: impl Into<PathBuf>) -> Self {
        Self::EncryptedPdf { path: path.into() }
    }

    /// Create a MergeFailed error.
    pub fn merge_failed(reason: impl Into<String>) -> Self {
        Self::MergeFailed {
            reason: reason.into(),
        }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}
