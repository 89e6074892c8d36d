//! The eframe application: two drop slots, a merge button and a banner.

use std::time::Instant;

use eframe::egui;
use pdfpair::Config;
use pdfpair::controller::{MergeTicket, WorkflowController};
use pdfpair::display::SlotView;
use pdfpair::merge::LopdfEngine;
use pdfpair::notification::NotificationKind;
use pdfpair::session::{Session, Slot};

use crate::surface::EguiSurface;

const SLOT_SIZE: egui::Vec2 = egui::vec2(360.0, 110.0);
const SLOT_RADIUS: u8 = 8;
const EMPTY_SLOT_HINT: &str = "Drop a PDF here or click to browse";

/// Frames the busy label stays on screen before the merge blocks the UI.
const BUSY_FRAMES: u8 = 2;

struct PendingMerge {
    ticket: MergeTicket,
    frames_shown: u8,
}

pub struct PdfPairApp {
    controller: WorkflowController<EguiSurface, LopdfEngine>,
    pending: Option<PendingMerge>,
    slot_rects: [Option<egui::Rect>; 2],
}

impl PdfPairApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        let engine = LopdfEngine::from_config(&config);
        let surface = EguiSurface::new(cc.egui_ctx.clone());

        Self {
            controller: WorkflowController::new(config, surface, engine),
            pending: None,
            slot_rects: [None, None],
        }
    }

    fn advance_pending_merge(&mut self, ctx: &egui::Context) {
        let Some(pending) = self.pending.as_mut() else {
            return;
        };

        pending.frames_shown += 1;
        if pending.frames_shown < BUSY_FRAMES {
            ctx.request_repaint();
            return;
        }

        if let Some(pending) = self.pending.take() {
            let outcome = self.controller.finish_merge(pending.ticket);
            tracing::debug!(?outcome, "merge finished");
        }
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let (dropped, pointer) = ctx.input(|i| {
            (
                i.raw.dropped_files.first().cloned(),
                i.pointer.latest_pos(),
            )
        });
        let Some(file) = dropped else {
            return;
        };
        if self.pending.is_some() {
            tracing::debug!("drop ignored while merging");
            return;
        }

        let raw = match &file.path {
            Some(path) => path.display().to_string(),
            None => file.name.clone(),
        };
        let slot = drop_target(pointer, &self.slot_rects, self.controller.session());
        self.controller.on_file_dropped(slot, &raw);
    }

    fn show_slot(&mut self, ui: &mut egui::Ui, slot: Slot, drag_hovering: bool) {
        let (rect, response) = ui.allocate_exact_size(SLOT_SIZE, egui::Sense::click());
        self.slot_rects[slot_index(slot)] = Some(rect);

        let pointer_inside = ui
            .ctx()
            .pointer_latest_pos()
            .is_some_and(|pos| rect.contains(pos));
        let highlighted = response.hovered() || (drag_hovering && pointer_inside);

        let visuals = ui.visuals();
        let fill = if highlighted {
            visuals.widgets.hovered.bg_fill
        } else {
            visuals.extreme_bg_color
        };
        let stroke_color = if highlighted {
            visuals.selection.stroke.color
        } else {
            visuals.widgets.noninteractive.bg_stroke.color
        };
        let text_color = visuals.strong_text_color();
        let weak_color = visuals.weak_text_color();

        let painter = ui.painter();
        let radius = egui::CornerRadius::same(SLOT_RADIUS);
        painter.rect_filled(rect, radius, fill);
        painter.rect_stroke(
            rect,
            radius,
            egui::Stroke::new(1.5, stroke_color),
            egui::StrokeKind::Middle,
        );
        painter.text(
            rect.center_top() + egui::vec2(0.0, 22.0),
            egui::Align2::CENTER_CENTER,
            slot.to_string(),
            egui::FontId::proportional(16.0),
            text_color,
        );

        let (body, color) = match self.controller.display().slot_view(slot) {
            SlotView::Empty => (EMPTY_SLOT_HINT.to_string(), weak_color),
            SlotView::Selected { display_name } => (display_name.clone(), text_color),
        };
        painter.text(
            rect.center() + egui::vec2(0.0, 12.0),
            egui::Align2::CENTER_CENTER,
            body,
            egui::FontId::proportional(14.0),
            color,
        );

        if response.clicked() {
            self.controller.on_slot_clicked(slot);
        }
    }

    fn show_banner(&self, ui: &mut egui::Ui) {
        let Some(notification) = self.controller.display().notification() else {
            return;
        };

        let (fill, stroke) = match notification.kind {
            NotificationKind::Success => (
                egui::Color32::from_rgb(46, 94, 62),
                egui::Stroke::new(1.0, egui::Color32::from_rgb(92, 160, 112)),
            ),
            NotificationKind::Error => (
                egui::Color32::from_rgb(111, 53, 53),
                egui::Stroke::new(1.0, egui::Color32::from_rgb(175, 96, 96)),
            ),
        };

        egui::Frame::NONE
            .fill(fill)
            .stroke(stroke)
            .corner_radius(8.0)
            .inner_margin(egui::Margin::symmetric(10, 8))
            .show(ui, |ui| {
                ui.label(
                    egui::RichText::new(notification.display_text()).color(egui::Color32::WHITE),
                );
            });
    }
}

impl eframe::App for PdfPairApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.advance_pending_merge(ctx);
        self.handle_dropped_files(ctx);

        let drag_hovering = ctx.input(|i| !i.raw.hovered_files.is_empty());
        let idle = self.pending.is_none();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                ui.heading("Merge two PDFs");
                ui.add_space(12.0);

                ui.add_enabled_ui(idle, |ui| {
                    for slot in Slot::ALL {
                        self.show_slot(ui, slot, drag_hovering);
                        ui.add_space(10.0);
                    }

                    ui.horizontal(|ui| {
                        let label = self.controller.display().merge_label().to_string();
                        if ui
                            .add_sized([160.0, 32.0], egui::Button::new(label))
                            .clicked()
                        {
                            match self.controller.begin_merge() {
                                Ok(ticket) => {
                                    self.pending = Some(PendingMerge {
                                        ticket,
                                        frames_shown: 0,
                                    });
                                }
                                Err(outcome) => tracing::debug!(?outcome, "merge not started"),
                            }
                        }
                        if ui.add_sized([80.0, 32.0], egui::Button::new("Clear")).clicked() {
                            self.controller.on_reset_requested();
                        }
                    });
                });

                ui.add_space(12.0);
                self.show_banner(ui);
            });
        });

        self.controller.tick(Instant::now());
        if let Some(remaining) = self.controller.banner().remaining(Instant::now()) {
            ctx.request_repaint_after(remaining);
        }
    }
}

fn slot_index(slot: Slot) -> usize {
    match slot {
        Slot::First => 0,
        Slot::Second => 1,
    }
}

/// Slot a drop lands in: the one under the pointer, else the first empty
/// one, else the first.
fn drop_target(
    pointer: Option<egui::Pos2>,
    rects: &[Option<egui::Rect>; 2],
    session: &Session,
) -> Slot {
    if let Some(pos) = pointer
        && let Some(slot) = Slot::ALL
            .into_iter()
            .find(|&slot| rects[slot_index(slot)].is_some_and(|rect| rect.contains(pos)))
    {
        return slot;
    }

    Slot::ALL
        .into_iter()
        .find(|&slot| session.get(slot).is_none())
        .unwrap_or(Slot::First)
}
