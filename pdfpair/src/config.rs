//! Configuration module for pdfpair.
//!
//! Holds the handful of knobs the workflow controller and the merge engine
//! read at runtime: how long notifications stay visible, how aggressively
//! display strings are shortened, the button labels, and the compression
//! applied to the merged document. Nothing here is persisted between runs.

use anyhow::{Result, bail};

use crate::PdfPairError;
use std::{str::FromStr, time::Duration};

/// Default lifetime of a notification banner.
pub const DEFAULT_NOTIFICATION_TIMEOUT: Duration = Duration::from_secs(4);

/// Default maximum number of characters of a basename shown in a slot.
pub const DEFAULT_DISPLAY_NAME_LIMIT: usize = 35;

/// Default maximum number of characters of a failure reason in a notification.
pub const DEFAULT_FAILURE_REASON_LIMIT: usize = 40;

/// Compression level for the output PDF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompressionLevel {
    /// No compression - preserves exact structure.
    None,
    /// Compress content streams.
    #[default]
    Standard,
    /// Compress streams and prune unreferenced objects.
    Maximum,
}

impl FromStr for CompressionLevel {
    type Err = PdfPairError;

    /// Parse compression level from `"none"`, `"standard"` or `"maximum"`.
    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "standard" => Ok(Self::Standard),
            "maximum" => Ok(Self::Maximum),
            _ => Err(PdfPairError::invalid_config(format!(
                "Invalid compression level: {s}. Must be one of: none, standard, maximum"
            ))),
        }
    }
}

/// Text shown on the merge button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    /// Label while waiting for input.
    pub merge_idle: String,
    /// Label while a merge is running.
    pub merge_busy: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            merge_idle: "Merge PDFs".to_string(),
            merge_busy: "Merging...".to_string(),
        }
    }
}

/// Complete runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// How long a notification stays visible before it hides itself.
    pub notification_timeout: Duration,

    /// Basenames longer than this are shortened in slot views.
    pub display_name_limit: usize,

    /// Failure descriptions longer than this are shortened in notifications.
    pub failure_reason_limit: usize,

    /// Compression applied when writing the merged document.
    pub compression: CompressionLevel,

    /// Merge button labels.
    pub labels: Labels,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            notification_timeout: DEFAULT_NOTIFICATION_TIMEOUT,
            display_name_limit: DEFAULT_DISPLAY_NAME_LIMIT,
            failure_reason_limit: DEFAULT_FAILURE_REASON_LIMIT,
            compression: CompressionLevel::default(),
            labels: Labels::default(),
        }
    }
}

impl Config {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The notification timeout is zero
    /// - Either truncation limit is zero
    /// - A button label is blank
    pub fn validate(&self) -> Result<()> {
        if self.notification_timeout.is_zero() {
            bail!("Notification timeout must be greater than zero");
        }

        if self.display_name_limit == 0 {
            bail!("Display name limit must be at least 1");
        }

        if self.failure_reason_limit == 0 {
            bail!("Failure reason limit must be at least 1");
        }

        if self.labels.merge_idle.trim().is_empty() || self.labels.merge_busy.trim().is_empty() {
            bail!("Merge button labels cannot be blank");
        }

        Ok(())
    }
}
