use crate::issue::{IssueId, IssueType, Severity};
use crate::report::ReportModal;
use crate::test_harness::{write_test_png, write_test_png16, TestTracker};

#[test]
fn test_image_read_lands_on_open_form() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("crack.png");
    write_test_png(&path, 4, 3);

    let mut tracker = TestTracker::new();
    {
        let mut modal = tracker.world_mut().resource_mut::<ReportModal>();
        modal.open();
        let form = modal.form_mut().unwrap();
        form.request_image(path.clone()).unwrap();
        assert_eq!(form.pending_image_path(), Some(path.as_path()));
    }
    tracker.wait_for_image();

    let modal = tracker.resource::<ReportModal>();
    let image = modal.form().and_then(|f| f.image()).expect("image attached");
    assert_eq!((image.width, image.height), (4, 3));
    assert!(!modal.has_pending_image());
}

#[test]
fn test_image_travels_with_submitted_issue() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sign.png");
    write_test_png(&path, 2, 2);

    let mut tracker = TestTracker::new();
    {
        let mut modal = tracker.world_mut().resource_mut::<ReportModal>();
        modal.open();
        modal.form_mut().unwrap().request_image(path).unwrap();
    }
    tracker.wait_for_image();
    assert!(tracker.submit_report(IssueType::DamagedSign, "Pine St", Severity::Medium));

    let issue = tracker.store().get(IssueId(6)).expect("issue filed");
    let image = issue.image.as_ref().expect("image kept");
    assert!(image.data_url.starts_with("data:image/png;base64,"));
}

#[test]
fn test_closing_modal_discards_in_flight_read() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("late.png");
    write_test_png(&path, 8, 8);

    let mut tracker = TestTracker::new();
    {
        let mut modal = tracker.world_mut().resource_mut::<ReportModal>();
        modal.open();
        modal.form_mut().unwrap().request_image(path).unwrap();
        modal.close();
        modal.open();
    }
    tracker.tick_n(20);

    let modal = tracker.resource::<ReportModal>();
    let form = modal.form().unwrap();
    assert!(form.image().is_none());
    assert!(!form.has_pending_image());
}

#[test]
fn test_corrupt_image_is_discarded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("corrupt.jpg");
    std::fs::write(&path, [0u8, 1, 2, 3]).unwrap();

    let mut tracker = TestTracker::new();
    {
        let mut modal = tracker.world_mut().resource_mut::<ReportModal>();
        modal.open();
        modal.form_mut().unwrap().request_image(path).unwrap();
    }
    tracker.wait_for_image();

    let modal = tracker.resource::<ReportModal>();
    let form = modal.form().unwrap();
    assert!(form.image().is_none());
    assert!(form.image_error().is_some());
}

#[test]
fn test_sixteen_bit_png_attaches() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deep.png");
    write_test_png16(&path, 6, 2);

    let mut tracker = TestTracker::new();
    {
        let mut modal = tracker.world_mut().resource_mut::<ReportModal>();
        modal.open();
        modal.form_mut().unwrap().request_image(path).unwrap();
    }
    tracker.wait_for_image();

    let modal = tracker.resource::<ReportModal>();
    let form = modal.form().unwrap();
    let image = form.image().expect("16-bit png attached");
    assert_eq!((image.width, image.height), (6, 2));
    assert!(form.image_error().is_none());
}
