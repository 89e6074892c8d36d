//! [`DisplaySurface`] backed by egui state and native `rfd` dialogs.
//!
//! The controller writes into this struct; [`crate::app::PdfPairApp`] reads
//! it back every frame when drawing.

use std::path::PathBuf;

use pdfpair::display::{DisplaySurface, SlotView};
use pdfpair::notification::Notification;
use pdfpair::session::Slot;

const PDF_FILTER_NAME: &str = "PDF files";
const PDF_EXTENSIONS: &[&str] = &["pdf"];

/// Widget state the window renders.
pub struct EguiSurface {
    ctx: egui::Context,
    slot_views: [SlotView; 2],
    notification: Option<Notification>,
    merge_label: String,
}

impl EguiSurface {
    pub fn new(ctx: egui::Context) -> Self {
        Self {
            ctx,
            slot_views: [SlotView::Empty, SlotView::Empty],
            notification: None,
            merge_label: String::new(),
        }
    }

    pub fn slot_view(&self, slot: Slot) -> &SlotView {
        &self.slot_views[slot_index(slot)]
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn merge_label(&self) -> &str {
        &self.merge_label
    }
}

fn slot_index(slot: Slot) -> usize {
    match slot {
        Slot::First => 0,
        Slot::Second => 1,
    }
}

impl DisplaySurface for EguiSurface {
    fn show_notification(&mut self, notification: &Notification) {
        self.notification = Some(notification.clone());
        self.ctx.request_repaint();
    }

    fn hide_notification(&mut self) {
        self.notification = None;
        self.ctx.request_repaint();
    }

    fn set_slot_view(&mut self, slot: Slot, view: SlotView) {
        self.slot_views[slot_index(slot)] = view;
    }

    fn pick_open_file(&mut self) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_title("Select a PDF")
            .add_filter(PDF_FILTER_NAME, PDF_EXTENSIONS)
            .pick_file()
    }

    fn pick_save_file(&mut self, suggested_name: &str, default_extension: &str) -> Option<PathBuf> {
        let mut path = rfd::FileDialog::new()
            .set_title("Save merged PDF")
            .add_filter(PDF_FILTER_NAME, PDF_EXTENSIONS)
            .set_file_name(suggested_name)
            .save_file()?;

        if path.extension().is_none() {
            path.set_extension(default_extension);
        }
        Some(path)
    }

    fn set_merge_label(&mut self, label: &str) {
        label.clone_into(&mut self.merge_label);
    }

    fn repaint(&mut self) {
        self.ctx.request_repaint();
    }
}
