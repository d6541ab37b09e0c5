use crate::issue::IssueId;
use crate::status::IssueStatus;
use crate::test_harness::TestTracker;

#[test]
fn test_advance_seed_issue_three_times() {
    let mut tracker = TestTracker::new();
    assert_eq!(tracker.status_of(3), Some(IssueStatus::Reported));

    tracker.advance(3);
    assert_eq!(tracker.status_of(3), Some(IssueStatus::Assigned));

    tracker.advance(3);
    assert_eq!(tracker.status_of(3), Some(IssueStatus::Fixed));

    tracker.advance(3);
    assert_eq!(tracker.status_of(3), Some(IssueStatus::Fixed));
}

#[test]
fn test_advance_unknown_id_changes_nothing() {
    let mut tracker = TestTracker::new();
    let before = tracker.counts();
    tracker.advance(404);
    assert_eq!(tracker.counts(), before);
    assert_eq!(tracker.store().len(), 5);
}

#[test]
fn test_counts_follow_advances() {
    let mut tracker = TestTracker::new();
    tracker.advance(5).advance(5);
    let counts = tracker.counts();
    assert_eq!(counts.reported, 1);
    assert_eq!(counts.assigned, 2);
    assert_eq!(counts.fixed, 2);
    assert_eq!(counts.total(), tracker.store().len());
}

#[test]
fn test_multiple_advances_in_one_frame_apply_in_order() {
    let mut tracker = TestTracker::new();
    {
        let world = tracker.world_mut();
        world.send_event(crate::store::AdvanceIssueEvent { id: IssueId(3) });
        world.send_event(crate::store::AdvanceIssueEvent { id: IssueId(3) });
    }
    tracker.tick();
    assert_eq!(tracker.status_of(3), Some(IssueStatus::Fixed));
}
