//! End-to-end workflow: select two files, merge, save.

use pdfpair::controller::{MergeOutcome, SAVED_MESSAGE};
use pdfpair::display::SlotView;
use pdfpair::session::Slot;
use std::time::{Duration, Instant};
use tempfile::TempDir;

use crate::common::{SurfaceEvent, RecordingSurface, controller_with, drop_file, page_widths, write_pdf};

#[test]
fn test_merge_two_pdfs_first_then_second() {
    let temp_dir = TempDir::new().unwrap();
    let a = write_pdf(temp_dir.path(), "a.pdf", &[110, 120]);
    let b = write_pdf(temp_dir.path(), "b.pdf", &[210]);
    let output = temp_dir.path().join("out.pdf");

    let mut controller = controller_with(RecordingSurface::new().answer_save(Some(output.clone())));
    drop_file(&mut controller, Slot::First, &a);
    drop_file(&mut controller, Slot::Second, &b);

    let outcome = controller.on_merge_requested();

    assert_eq!(
        outcome,
        MergeOutcome::Saved {
            path: output.clone(),
            pages: 3
        }
    );
    assert_eq!(page_widths(&output), vec![110, 120, 210]);
    assert_eq!(controller.display().visible_message(), Some(SAVED_MESSAGE));
    assert_eq!(controller.engine().merges.get(), 1);
}

#[test]
fn test_merge_same_file_in_both_slots() {
    let temp_dir = TempDir::new().unwrap();
    let a = write_pdf(temp_dir.path(), "a.pdf", &[300, 301]);
    let output = temp_dir.path().join("twice.pdf");

    let mut controller = controller_with(RecordingSurface::new().answer_save(Some(output.clone())));
    drop_file(&mut controller, Slot::First, &a);
    drop_file(&mut controller, Slot::Second, &a);

    assert!(matches!(
        controller.on_merge_requested(),
        MergeOutcome::Saved { pages: 4, .. }
    ));
    assert_eq!(page_widths(&output), vec![300, 301, 300, 301]);
}

#[test]
fn test_suggested_name_comes_from_first_file() {
    let temp_dir = TempDir::new().unwrap();
    let a = write_pdf(temp_dir.path(), "invoice.pdf", &[100]);
    let b = write_pdf(temp_dir.path(), "receipt.pdf", &[200]);

    let mut controller = controller_with(RecordingSurface::new());
    drop_file(&mut controller, Slot::First, &a);
    drop_file(&mut controller, Slot::Second, &b);
    controller.on_merge_requested();

    assert!(
        controller
            .display()
            .events
            .contains(&SurfaceEvent::SaveDialog("invoice_merged.pdf".to_string()))
    );
}

#[test]
fn test_busy_label_shown_during_merge_then_restored() {
    let temp_dir = TempDir::new().unwrap();
    let a = write_pdf(temp_dir.path(), "a.pdf", &[100]);
    let b = write_pdf(temp_dir.path(), "b.pdf", &[200]);
    let output = temp_dir.path().join("out.pdf");

    let mut controller = controller_with(RecordingSurface::new().answer_save(Some(output)));
    drop_file(&mut controller, Slot::First, &a);
    drop_file(&mut controller, Slot::Second, &b);
    controller.on_merge_requested();

    assert_eq!(
        controller.display().labels(),
        vec!["Merge PDFs", "Merging...", "Merge PDFs"]
    );

    // The busy label is painted before the engine blocks.
    let events = &controller.display().events;
    let busy = events
        .iter()
        .position(|e| *e == SurfaceEvent::Label("Merging...".to_string()))
        .unwrap();
    assert_eq!(events.get(busy + 1), Some(&SurfaceEvent::Repaint));
}

#[test]
fn test_cancelled_save_leaves_everything_as_is() {
    let temp_dir = TempDir::new().unwrap();
    let a = write_pdf(temp_dir.path(), "a.pdf", &[100]);
    let b = write_pdf(temp_dir.path(), "b.pdf", &[200]);

    let mut controller = controller_with(RecordingSurface::new().answer_save(None));
    drop_file(&mut controller, Slot::First, &a);
    drop_file(&mut controller, Slot::Second, &b);
    let session_before = controller.session().clone();

    assert_eq!(controller.on_merge_requested(), MergeOutcome::Cancelled);

    assert_eq!(*controller.session(), session_before);
    assert!(controller.display().shown_messages().is_empty());
    assert!(controller.engine().saves.borrow().is_empty());
    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 2);
}

#[test]
fn test_slot_click_then_merge() {
    let temp_dir = TempDir::new().unwrap();
    let a = write_pdf(temp_dir.path(), "a.pdf", &[100]);
    let b = write_pdf(temp_dir.path(), "b.pdf", &[200]);
    let output = temp_dir.path().join("out.pdf");

    let surface = RecordingSurface::new()
        .answer_open(Some(a.clone()))
        .answer_open(Some(b.clone()))
        .answer_save(Some(output.clone()));
    let mut controller = controller_with(surface);

    controller.on_slot_clicked(Slot::First);
    controller.on_slot_clicked(Slot::Second);
    assert_eq!(
        controller.display().slot_view(Slot::Second),
        Some(&SlotView::Selected {
            display_name: "b.pdf".to_string()
        })
    );

    assert!(matches!(
        controller.on_merge_requested(),
        MergeOutcome::Saved { .. }
    ));
    assert_eq!(page_widths(&output), vec![100, 200]);
}

#[test]
fn test_selection_survives_successful_merge() {
    let temp_dir = TempDir::new().unwrap();
    let a = write_pdf(temp_dir.path(), "a.pdf", &[100]);
    let b = write_pdf(temp_dir.path(), "b.pdf", &[200]);

    let surface = RecordingSurface::new()
        .answer_save(Some(temp_dir.path().join("one.pdf")))
        .answer_save(Some(temp_dir.path().join("two.pdf")));
    let mut controller = controller_with(surface);
    drop_file(&mut controller, Slot::First, &a);
    drop_file(&mut controller, Slot::Second, &b);

    assert!(matches!(controller.on_merge_requested(), MergeOutcome::Saved { .. }));
    assert!(matches!(controller.on_merge_requested(), MergeOutcome::Saved { .. }));
    assert_eq!(page_widths(&temp_dir.path().join("two.pdf")), vec![100, 200]);
}

#[test]
fn test_success_banner_expires() {
    let temp_dir = TempDir::new().unwrap();
    let a = write_pdf(temp_dir.path(), "a.pdf", &[100]);
    let output = temp_dir.path().join("out.pdf");

    let mut controller = controller_with(RecordingSurface::new().answer_save(Some(output)));
    drop_file(&mut controller, Slot::First, &a);
    drop_file(&mut controller, Slot::Second, &a);
    controller.on_merge_requested();

    assert!(!controller.tick(Instant::now() + Duration::from_secs(1)));
    assert!(controller.display().visible_message().is_some());

    assert!(controller.tick(Instant::now() + Duration::from_secs(4)));
    assert!(controller.display().visible_message().is_none());
}
