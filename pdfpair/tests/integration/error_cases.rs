//! Rejections and failures as the user sees them.

use pdfpair::controller::{
    INVALID_FILE_MESSAGE, MERGE_FAILED_PREFIX, MergeOutcome, SELECT_BOTH_MESSAGE,
    SelectionOutcome,
};
use pdfpair::display::SlotView;
use pdfpair::session::Slot;
use rstest::rstest;
use std::fs;
use tempfile::TempDir;

use crate::common::{RecordingSurface, controller_with, drop_file, write_pdf};

#[rstest]
#[case("report.docx", true)]
#[case("ghost.pdf", false)]
fn test_invalid_drop_is_rejected(#[case] name: &str, #[case] create: bool) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(name);
    if create {
        fs::write(&path, b"not a pdf").unwrap();
    }

    let mut controller = controller_with(RecordingSurface::new());
    let outcome = controller.on_file_dropped(Slot::First, &path.display().to_string());

    assert_eq!(outcome, SelectionOutcome::Rejected);
    assert_eq!(controller.session().get(Slot::First), None);
    assert_eq!(controller.display().visible_message(), Some(INVALID_FILE_MESSAGE));
}

#[test]
fn test_directory_named_like_pdf_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().join("folder.pdf");
    fs::create_dir(&dir).unwrap();

    let mut controller = controller_with(RecordingSurface::new());
    assert_eq!(
        controller.on_file_dropped(Slot::Second, &dir.display().to_string()),
        SelectionOutcome::Rejected
    );
}

#[test]
fn test_rejected_drop_keeps_previous_selection() {
    let temp_dir = TempDir::new().unwrap();
    let a = write_pdf(temp_dir.path(), "a.pdf", &[100]);
    let text = temp_dir.path().join("notes.txt");
    fs::write(&text, b"hello").unwrap();

    let mut controller = controller_with(RecordingSurface::new());
    drop_file(&mut controller, Slot::First, &a);
    controller.on_file_dropped(Slot::First, &text.display().to_string());

    assert_eq!(controller.session().get(Slot::First), Some(a.as_path()));
    assert_eq!(
        controller.display().slot_view(Slot::First),
        Some(&SlotView::Selected {
            display_name: "a.pdf".to_string()
        })
    );
}

#[test]
fn test_merge_with_empty_slot_never_reaches_engine() {
    let temp_dir = TempDir::new().unwrap();
    let b = write_pdf(temp_dir.path(), "b.pdf", &[200]);

    let mut controller = controller_with(RecordingSurface::new());
    drop_file(&mut controller, Slot::Second, &b);

    assert_eq!(controller.on_merge_requested(), MergeOutcome::NotReady);
    assert_eq!(controller.engine().merges.get(), 0);
    assert_eq!(controller.display().visible_message(), Some(SELECT_BOTH_MESSAGE));
}

#[test]
fn test_consecutive_errors_replace_each_other() {
    let temp_dir = TempDir::new().unwrap();
    let text = temp_dir.path().join("notes.txt");
    fs::write(&text, b"hello").unwrap();

    let mut controller = controller_with(RecordingSurface::new());
    controller.on_merge_requested();
    controller.on_file_dropped(Slot::First, &text.display().to_string());

    assert_eq!(
        controller.display().shown_messages(),
        vec![SELECT_BOTH_MESSAGE, INVALID_FILE_MESSAGE]
    );
    assert_eq!(
        controller.banner().current().map(|n| n.message.as_str()),
        Some(INVALID_FILE_MESSAGE)
    );
}

#[test]
fn test_corrupted_input_reports_short_reason() {
    let temp_dir = TempDir::new().unwrap();
    let a = write_pdf(temp_dir.path(), "a.pdf", &[100]);
    let broken = temp_dir.path().join("broken-with-a-rather-long-file-name.pdf");
    fs::write(&broken, b"%PDF-1.4\nthis is not really a pdf").unwrap();

    let mut controller = controller_with(RecordingSurface::new());
    drop_file(&mut controller, Slot::First, &a);
    drop_file(&mut controller, Slot::Second, &broken);

    let MergeOutcome::Failed { reason } = controller.on_merge_requested() else {
        panic!("merge of a corrupted file should fail");
    };
    assert!(reason.chars().count() <= 40);

    let shown = controller.display().visible_message().unwrap();
    assert!(shown.starts_with(MERGE_FAILED_PREFIX));
    assert!(shown.chars().count() <= MERGE_FAILED_PREFIX.len() + 40);
    assert!(controller.engine().saves.borrow().is_empty());
    assert_eq!(controller.display().labels().last(), Some(&"Merge PDFs"));
}

#[test]
fn test_reset_hides_banner_immediately() {
    let temp_dir = TempDir::new().unwrap();
    let a = write_pdf(temp_dir.path(), "a.pdf", &[100]);

    let mut controller = controller_with(RecordingSurface::new());
    drop_file(&mut controller, Slot::First, &a);
    controller.on_merge_requested();
    assert!(controller.display().visible_message().is_some());

    controller.on_reset_requested();

    assert!(controller.display().visible_message().is_none());
    assert!(!controller.session().is_complete());
    assert_eq!(controller.session().get(Slot::First), None);
    assert_eq!(controller.display().slot_view(Slot::First), Some(&SlotView::Empty));
}
