//! I/O operations for pdfpair.
//!
//! - Loading PDF documents from disk
//! - Writing the merged PDF to disk
//!
//! # Examples
//!
//! ```no_run
//! use pdfpair::io::{PdfReader, PdfWriter};
//! use std::path::Path;
//!
//! let reader = PdfReader::new();
//! let mut loaded = reader.load(Path::new("input.pdf"))?;
//!
//! let writer = PdfWriter::new();
//! writer.save(&mut loaded.document, Path::new("output.pdf"))?;
//! # Ok::<(), pdfpair::PdfPairError>(())
//! ```

pub mod reader;
pub mod writer;

pub use reader::{LoadedPdf, PdfReader};
pub use writer::{PdfWriter, WriteOptions, WriteStatistics};
