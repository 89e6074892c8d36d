//! The interface between the workflow controller and whatever draws the
//! window.
//!
//! The controller only ever *asks* the surface to change; it never reads
//! widget state back. Dialog methods block until the user answers, which is
//! how native dialogs behave on the UI thread.

use std::path::PathBuf;

use crate::notification::Notification;
use crate::session::Slot;

/// What a slot should look like.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SlotView {
    /// Waiting for a file.
    #[default]
    Empty,
    /// Holding a file, shown by its (possibly shortened) basename.
    Selected {
        /// Basename, cut to the configured length with a trailing `...`.
        display_name: String,
    },
}

/// Rendering and dialog collaborator driven by
/// [`WorkflowController`](crate::controller::WorkflowController).
pub trait DisplaySurface {
    /// Show `notification`, replacing any visible one.
    fn show_notification(&mut self, notification: &Notification);

    /// Remove the notification banner.
    fn hide_notification(&mut self);

    /// Update how `slot` is drawn.
    fn set_slot_view(&mut self, slot: Slot, view: SlotView);

    /// Native open dialog filtered to `*.pdf`. `None` when cancelled.
    fn pick_open_file(&mut self) -> Option<PathBuf>;

    /// Native save dialog pre-filled with `suggested_name`, appending
    /// `default_extension` when the user omits one. `None` when cancelled.
    fn pick_save_file(&mut self, suggested_name: &str, default_extension: &str)
    -> Option<PathBuf>;

    /// Change the merge button text.
    fn set_merge_label(&mut self, label: &str);

    /// Make pending visual changes visible before the caller blocks.
    fn repaint(&mut self);
}
