//! Command line of the desktop binary.
//!
//! Every flag is optional; running `pdfpair` with no arguments opens the
//! window with default settings.

use anyhow::Context;
use clap::Parser;
use std::str::FromStr;
use std::time::Duration;

use pdfpair::config::{CompressionLevel, Config};

/// Merge two PDF files into one.
///
/// Drop a PDF onto each slot (or click a slot to browse), then press
/// "Merge PDFs" and choose where to save the result. Pages of PDF 1 come
/// first.
#[derive(Parser, Debug)]
#[command(name = "pdfpair")]
#[command(version)]
#[command(about = "Merge two PDF files into one", long_about = None)]
pub struct Cli {
    /// Seconds a status message stays visible
    #[arg(long, value_name = "SECS", default_value_t = 4)]
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    pub notification_secs: u64,

    /// Compression level for the merged PDF
    ///
    /// - none: No compression (preserves exact structure)
    /// - standard: Compress content streams (default)
    /// - maximum: Also drop unreferenced objects
    #[arg(short, long, value_name = "LEVEL", default_value = "standard")]
    #[arg(value_parser = ["none", "standard", "maximum"])]
    pub compression: String,

    /// Log debug details to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Build the library configuration from the parsed flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the compression level is unknown or the
    /// resulting configuration is invalid.
    pub fn to_config(&self) -> anyhow::Result<Config> {
        let compression = CompressionLevel::from_str(&self.compression)
            .with_context(|| format!("Invalid compression level '{}'", self.compression))?;

        let config = Config {
            notification_timeout: Duration::from_secs(self.notification_secs),
            compression,
            ..Config::default()
        };

        config
            .validate()
            .context("Configuration validation failed")?;

        Ok(config)
    }

    /// Default `tracing` filter directive for the chosen verbosity.
    ///
    /// `RUST_LOG` takes precedence when set.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}
