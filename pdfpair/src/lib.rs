//! pdfpair - Merge two PDF files into one.
//!
//! This library holds everything behind the desktop window: the two file
//! slots, the notification banner, and the merge engine. The window itself
//! is just a [`display::DisplaySurface`] implementation driven by a
//! [`controller::WorkflowController`].
//!
//! # Examples
//!
//! ## Merging without a window
//!
//! ```no_run
//! use pdfpair::io::PdfWriter;
//! use pdfpair::merge::merge_pdfs;
//! use std::path::Path;
//!
//! let (mut document, stats) = merge_pdfs(Path::new("invoice.pdf"), Path::new("receipt.pdf"))?;
//! PdfWriter::new().save(&mut document, Path::new("invoice_merged.pdf"))?;
//! println!("Created {} page document", stats.total_pages);
//! # Ok::<(), pdfpair::PdfPairError>(())
//! ```
//!
//! ## Tracking selections
//!
//! ```no_run
//! use pdfpair::session::{Session, Slot};
//! use std::path::Path;
//!
//! let mut session = Session::new();
//! session.set_slot(Slot::First, Path::new("invoice.pdf"))?;
//! assert!(!session.is_complete());
//! # Ok::<(), pdfpair::PdfPairError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod controller;
pub mod display;
pub mod error;
pub mod io;
pub mod merge;
pub mod notification;
pub mod session;
pub mod utils;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use config::Config;
pub use controller::{MergeOutcome, SelectionOutcome, WorkflowController};
pub use error::{PdfPairError, Result};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
