use crate::issue::{IssueId, IssueType, Severity};
use crate::status::IssueStatus;
use crate::test_harness::TestTracker;
use crate::view_state::{Selection, StatusFilter, ViewMode};

#[test]
fn test_assigned_filter_on_seed_data() {
    let mut tracker = TestTracker::new();
    tracker.set_filter(StatusFilter::Only(IssueStatus::Assigned));
    assert_eq!(tracker.visible_ids(), vec![2, 4]);
}

#[test]
fn test_filter_tracks_status_changes() {
    let mut tracker = TestTracker::new();
    tracker.set_filter(StatusFilter::Only(IssueStatus::Fixed));
    assert_eq!(tracker.visible_ids(), vec![1]);

    tracker.advance(2);
    assert_eq!(tracker.visible_ids(), vec![1, 2]);
}

#[test]
fn test_view_mode_does_not_filter() {
    let mut tracker = TestTracker::new();
    for mode in ViewMode::ALL {
        tracker.set_view_mode(mode);
        assert_eq!(tracker.view_mode(), mode);
        assert_eq!(tracker.visible_ids(), vec![1, 2, 3, 4, 5]);
    }
}

#[test]
fn test_new_report_selected_even_when_filtered_out() {
    let mut tracker = TestTracker::new();
    tracker.set_filter(StatusFilter::Only(IssueStatus::Fixed));
    tracker.submit_report(IssueType::Debris, "Elm St", Severity::Low);
    assert_eq!(tracker.selected(), Some(IssueId(6)));
    assert!(!tracker.visible_ids().contains(&6));
}

#[test]
fn test_stale_selection_is_cleared() {
    let mut tracker = TestTracker::new();
    tracker.world_mut().resource_mut::<Selection>().set(IssueId(99));
    tracker.tick();
    assert_eq!(tracker.selected(), None);
}

#[test]
fn test_valid_selection_survives_ticks() {
    let mut tracker = TestTracker::new();
    tracker.world_mut().resource_mut::<Selection>().toggle(IssueId(4));
    tracker.tick_n(3);
    assert_eq!(tracker.selected(), Some(IssueId(4)));
}
