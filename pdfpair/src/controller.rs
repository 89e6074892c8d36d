//! Workflow controller: turns user input into session changes, merges and
//! notifications.
//!
//! Every handler runs to completion on the caller's thread. The controller
//! owns the [`Session`] and the notification [`Banner`]; the display surface
//! only ever receives requests.
//!
//! # Examples
//!
//! ```no_run
//! use pdfpair::config::Config;
//! use pdfpair::controller::WorkflowController;
//! use pdfpair::merge::LopdfEngine;
//! use pdfpair::session::Slot;
//! # use pdfpair::display::{DisplaySurface, SlotView};
//! # use pdfpair::notification::Notification;
//! # use std::path::PathBuf;
//! # struct Headless;
//! # impl DisplaySurface for Headless {
//! #     fn show_notification(&mut self, _: &Notification) {}
//! #     fn hide_notification(&mut self) {}
//! #     fn set_slot_view(&mut self, _: Slot, _: SlotView) {}
//! #     fn pick_open_file(&mut self) -> Option<PathBuf> { None }
//! #     fn pick_save_file(&mut self, _: &str, _: &str) -> Option<PathBuf> { None }
//! #     fn set_merge_label(&mut self, _: &str) {}
//! #     fn repaint(&mut self) {}
//! # }
//!
//! let config = Config::default();
//! let engine = LopdfEngine::from_config(&config);
//! let mut controller = WorkflowController::new(config, Headless, engine);
//!
//! controller.on_file_dropped(Slot::First, "{/home/me/invoice.pdf}");
//! controller.on_file_dropped(Slot::Second, "/home/me/delivery note.pdf");
//! let outcome = controller.on_merge_requested();
//! println!("{outcome:?}");
//! ```

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::config::Config;
use crate::display::{DisplaySurface, SlotView};
use crate::error::{PdfPairError, Result};
use crate::merge::MergeEngine;
use crate::notification::{Banner, NotificationKind};
use crate::session::{Session, Slot};
use crate::utils::{
    basename, strip_drop_artifacts, suggested_output_name, truncate_chars, truncate_with_ellipsis,
};

/// Shown when an offered file is missing or not a PDF.
pub const INVALID_FILE_MESSAGE: &str = "invalid file (PDF only)";

/// Shown when a merge is requested without two existing files.
pub const SELECT_BOTH_MESSAGE: &str = "select both PDFs";

/// Shown after the merged file was written.
pub const SAVED_MESSAGE: &str = "PDF saved successfully";

/// Prefix of every merge failure notification.
pub const MERGE_FAILED_PREFIX: &str = "merge failed: ";

/// Extension the save dialog appends when the user types none.
pub const OUTPUT_EXTENSION: &str = "pdf";

/// What happened to an offered file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// Stored in the slot.
    Accepted(PathBuf),
    /// Refused; the slot kept its previous value.
    Rejected,
    /// Nothing was offered (cancelled picker).
    Ignored,
}

/// How a merge request ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// One or both slots were empty or stale.
    NotReady,
    /// Another merge was already in flight.
    Busy,
    /// The user dismissed the save dialog.
    Cancelled,
    /// The merged document was written.
    Saved {
        /// Where it was written.
        path: PathBuf,
        /// Number of pages in the output.
        pages: usize,
    },
    /// Loading, merging or writing failed.
    Failed {
        /// Failure description, already shortened for display.
        reason: String,
    },
}

/// Permission to run one merge, holding the two inputs as they were when
/// the merge was requested.
#[derive(Debug)]
#[must_use = "a ticket must be passed to finish_merge or the controller stays busy"]
pub struct MergeTicket {
    first: PathBuf,
    second: PathBuf,
}

impl MergeTicket {
    /// Inputs in page order.
    pub fn inputs(&self) -> (&Path, &Path) {
        (&self.first, &self.second)
    }
}

/// Drives a [`DisplaySurface`] and a [`MergeEngine`] from user input.
pub struct WorkflowController<D, E> {
    config: Config,
    session: Session,
    banner: Banner,
    display: D,
    engine: E,
    merge_in_flight: bool,
}

impl<D: DisplaySurface, E: MergeEngine> WorkflowController<D, E> {
    /// Create a controller with empty slots and put `display` into its
    /// initial state.
    pub fn new(config: Config, mut display: D, engine: E) -> Self {
        for slot in Slot::ALL {
            display.set_slot_view(slot, SlotView::Empty);
        }
        display.set_merge_label(&config.labels.merge_idle);

        Self {
            config,
            session: Session::new(),
            banner: Banner::Hidden,
            display,
            engine,
            merge_in_flight: false,
        }
    }

    /// Current selections.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Current banner state.
    pub fn banner(&self) -> &Banner {
        &self.banner
    }

    /// Active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The display surface.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// The display surface, mutably.
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// The merge engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// True between [`begin_merge`](Self::begin_merge) and
    /// [`finish_merge`](Self::finish_merge).
    pub fn is_merging(&self) -> bool {
        self.merge_in_flight
    }

    /// A file was dropped onto `slot`. `raw` is the text the drag-and-drop
    /// transport delivered.
    pub fn on_file_dropped(&mut self, slot: Slot, raw: &str) -> SelectionOutcome {
        let cleaned = strip_drop_artifacts(raw);
        self.offer(slot, Path::new(cleaned.as_ref()))
    }

    /// The open dialog for `slot` returned `path`; `None` means cancelled.
    pub fn on_file_picked(&mut self, slot: Slot, path: Option<&Path>) -> SelectionOutcome {
        match path {
            Some(path) if !path.as_os_str().is_empty() => self.offer(slot, path),
            _ => {
                tracing::debug!(%slot, "file picker cancelled");
                SelectionOutcome::Ignored
            }
        }
    }

    /// `slot` was clicked: ask for a file and offer it.
    pub fn on_slot_clicked(&mut self, slot: Slot) -> SelectionOutcome {
        let picked = self.display.pick_open_file();
        self.on_file_picked(slot, picked.as_deref())
    }

    /// Validate, merge, ask for a destination and save, in one go.
    pub fn on_merge_requested(&mut self) -> MergeOutcome {
        match self.begin_merge() {
            Ok(ticket) => self.finish_merge(ticket),
            Err(outcome) => outcome,
        }
    }

    /// Check both slots and switch the button to its busy label.
    ///
    /// Returns the ticket to hand to [`finish_merge`](Self::finish_merge)
    /// once the busy label is on screen.
    ///
    /// # Errors
    ///
    /// Returns [`MergeOutcome::NotReady`] (after notifying the user) when a
    /// slot is empty or its file vanished, and [`MergeOutcome::Busy`] when a
    /// merge is already in flight.
    pub fn begin_merge(&mut self) -> std::result::Result<MergeTicket, MergeOutcome> {
        if self.merge_in_flight {
            tracing::debug!("merge already in flight");
            return Err(MergeOutcome::Busy);
        }

        let Some((first, second)) = self.session.ready_pair() else {
            tracing::warn!("merge requested without two existing files");
            self.notify(NotificationKind::Error, SELECT_BOTH_MESSAGE);
            return Err(MergeOutcome::NotReady);
        };
        let ticket = MergeTicket {
            first: first.to_path_buf(),
            second: second.to_path_buf(),
        };

        self.merge_in_flight = true;
        self.display.set_merge_label(&self.config.labels.merge_busy);
        self.display.repaint();

        Ok(ticket)
    }

    /// Run the blocking part of a merge started with
    /// [`begin_merge`](Self::begin_merge).
    pub fn finish_merge(&mut self, ticket: MergeTicket) -> MergeOutcome {
        tracing::info!(
            first = %ticket.first.display(),
            second = %ticket.second.display(),
            "merging"
        );

        let outcome = match self.merge_and_save(&ticket) {
            Ok(Some((path, pages))) => MergeOutcome::Saved { path, pages },
            Ok(None) => MergeOutcome::Cancelled,
            Err(err) => {
                tracing::warn!(error = %err, "merge failed");
                let reason = truncate_chars(&err.to_string(), self.config.failure_reason_limit)
                    .to_string();
                MergeOutcome::Failed { reason }
            }
        };

        self.merge_in_flight = false;
        self.display.set_merge_label(&self.config.labels.merge_idle);

        match &outcome {
            MergeOutcome::Saved { path, pages } => {
                tracing::info!(path = %path.display(), pages, "merged pdf saved");
                self.display.repaint();
                self.notify(NotificationKind::Success, SAVED_MESSAGE);
            }
            MergeOutcome::Failed { reason } => {
                self.notify(NotificationKind::Error, format!("{MERGE_FAILED_PREFIX}{reason}"));
            }
            MergeOutcome::Cancelled => tracing::info!("save cancelled, nothing written"),
            MergeOutcome::NotReady | MergeOutcome::Busy => {}
        }

        outcome
    }

    /// Empty both slots and hide any notification at once.
    pub fn on_reset_requested(&mut self) {
        self.session.clear();
        for slot in Slot::ALL {
            self.display.set_slot_view(slot, SlotView::Empty);
        }
        self.banner.hide();
        self.display.hide_notification();
        tracing::debug!("selection reset");
    }

    /// Hide the notification if it has outlived its timeout.
    ///
    /// Call from the event loop. Returns true if the banner was hidden.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.banner.expire(now) {
            self.display.hide_notification();
            true
        } else {
            false
        }
    }

    fn offer(&mut self, slot: Slot, path: &Path) -> SelectionOutcome {
        match self.session.set_slot(slot, path) {
            Ok(stored) => {
                let stored = stored.to_path_buf();
                let display_name =
                    truncate_with_ellipsis(&basename(&stored), self.config.display_name_limit);
                tracing::debug!(%slot, path = %stored.display(), "file selected");
                self.display
                    .set_slot_view(slot, SlotView::Selected { display_name });
                SelectionOutcome::Accepted(stored)
            }
            Err(err) => {
                tracing::warn!(%slot, error = %err, "file rejected");
                self.notify(NotificationKind::Error, INVALID_FILE_MESSAGE);
                SelectionOutcome::Rejected
            }
        }
    }

    fn merge_and_save(&mut self, ticket: &MergeTicket) -> Result<Option<(PathBuf, usize)>> {
        let mut merged = self.engine.merge(&ticket.first, &ticket.second)?;
        let pages = merged.statistics.total_pages;

        let suggested = suggested_output_name(&basename(&ticket.first));
        let Some(output) = self.display.pick_save_file(&suggested, OUTPUT_EXTENSION) else {
            return Ok(None);
        };

        self.engine.save(&mut merged.document, &output)?;
        Ok(Some((output, pages)))
    }

    fn notify(&mut self, kind: NotificationKind, message: impl Into<String>) {
        let notification = self.banner.show(
            message,
            kind,
            Instant::now(),
            self.config.notification_timeout,
        );
        self.display.show_notification(notification);
    }
}
