use bevy::prelude::*;

use crate::config::TrackerConfig;
use crate::issue::{IssueDraft, IssueId, IssueType, Severity};
use crate::projection::BoundingBox;
use crate::report::{FormPhase, ReportModal, ReportRng};
use crate::status::IssueStatus;
use crate::store::SubmitReportEvent;
use crate::test_harness::TestTracker;

#[test]
fn test_submit_debris_elm_st() {
    let mut tracker = TestTracker::new();
    let reported_before = tracker.counts().reported;
    assert_eq!(tracker.store().next_id(), IssueId(6));

    assert!(tracker.submit_report(IssueType::Debris, "Elm St", Severity::Low));

    let store = tracker.store();
    assert_eq!(store.len(), 6);
    let first = &store.issues()[0];
    assert_eq!(first.id, IssueId(6));
    assert_eq!(first.status, IssueStatus::Reported);
    assert_eq!(first.kind, IssueType::Debris);
    assert_eq!(first.address, "Elm St");
    assert_eq!(store.next_id(), IssueId(7));
    assert_eq!(tracker.counts().reported, reported_before + 1);
    assert_eq!(tracker.selected(), Some(IssueId(6)));
}

#[test]
fn test_modal_closes_once_report_is_filed() {
    let mut tracker = TestTracker::new();
    assert!(tracker.submit_report(IssueType::Pothole, "Oak Ave", Severity::High));
    assert!(!tracker.resource::<ReportModal>().is_open());
    assert_eq!(tracker.selected(), Some(IssueId(6)));
}

#[test]
fn test_reopened_modal_survives_earlier_filing() {
    let mut tracker = TestTracker::new();
    let draft = {
        let world = tracker.world_mut();
        world.resource_mut::<ReportModal>().open();
        world.resource_scope(|world, mut modal: Mut<ReportModal>| {
            let form = modal.form_mut()?;
            form.address = "Elm St".to_string();
            let mut rng = world.resource_mut::<ReportRng>();
            form.submit(&mut rng, &BoundingBox::SCATTER)
        })
    }
    .expect("address given");
    {
        let world = tracker.world_mut();
        {
            let mut modal = world.resource_mut::<ReportModal>();
            modal.close();
            modal.open();
        }
        world.send_event(SubmitReportEvent { draft });
    }
    tracker.tick();

    let modal = tracker.resource::<ReportModal>();
    assert_eq!(modal.form().map(|f| f.phase()), Some(FormPhase::Editing));
    assert_eq!(tracker.store().len(), 6);
}

#[test]
fn test_blank_address_never_creates_issue() {
    let mut tracker = TestTracker::new();
    assert!(!tracker.submit_report(IssueType::Crack, "", Severity::Medium));
    assert!(!tracker.submit_report(IssueType::Crack, "    ", Severity::Medium));
    assert_eq!(tracker.store().len(), 5);
    assert_eq!(tracker.store().next_id(), IssueId(6));
    assert_eq!(tracker.selected(), None);
}

#[test]
fn test_blank_draft_sent_directly_is_dropped() {
    let mut tracker = TestTracker::new();
    tracker.submit_draft(IssueDraft {
        kind: IssueType::Other,
        address: " ".to_string(),
        description: String::new(),
        severity: Severity::Low,
        image: None,
        lat: 40.71,
        lng: -74.0,
    });
    assert_eq!(tracker.store().len(), 5);
    assert_eq!(tracker.store().next_id(), IssueId(6));
}

#[test]
fn test_consecutive_submissions_get_sequential_ids() {
    let mut tracker = TestTracker::new();
    for street in ["A St", "B St", "C St"] {
        assert!(tracker.submit_report(IssueType::Other, street, Severity::Medium));
    }
    let ids: Vec<u32> = tracker.store().iter().take(3).map(|i| i.id.0).collect();
    assert_eq!(ids, vec![8, 7, 6]);
    assert_eq!(tracker.selected(), Some(IssueId(8)));
}

#[test]
fn test_submitted_position_in_scatter_box() {
    let mut tracker = TestTracker::new();
    tracker.submit_report(IssueType::Flooding, "Canal St", Severity::High);
    let scatter = tracker.resource::<TrackerConfig>().scatter_bounds;
    let issue = &tracker.store().issues()[0];
    assert!(scatter.contains(issue.lat, issue.lng));
}

#[test]
fn test_unseeded_config_starts_empty() {
    let mut tracker = TestTracker::with_config(TrackerConfig {
        seed_issues: false,
        rng_seed: Some(1),
        ..Default::default()
    });
    assert!(tracker.store().is_empty());
    tracker.submit_report(IssueType::Debris, "Elm St", Severity::Low);
    assert_eq!(tracker.store().len(), 1);
    assert_eq!(tracker.store().issues()[0].id, IssueId(6));
}
