use bevy::prelude::*;

use crate::clock::now_millis;

use super::types::{AdvanceIssueEvent, IssueCreatedEvent, IssueStore, SubmitReportEvent};

/// Apply queued advance requests in arrival order.
pub fn apply_advance_events(
    mut events: EventReader<AdvanceIssueEvent>,
    mut store: ResMut<IssueStore>,
) {
    for event in events.read() {
        match store.advance(event.id) {
            Some(status) => info!("Issue {} advanced to {}", event.id.padded(), status),
            None => debug!("Advance of issue {} was a no-op", event.id.padded()),
        }
    }
}

/// Commit submitted drafts and announce the new ids.
pub fn apply_submitted_reports(
    mut events: EventReader<SubmitReportEvent>,
    mut store: ResMut<IssueStore>,
    mut created: EventWriter<IssueCreatedEvent>,
) {
    for event in events.read() {
        match store.add_issue(event.draft.clone(), now_millis()) {
            Some(id) => {
                info!(
                    "Filed issue {} ({} at {})",
                    id.padded(),
                    event.draft.kind,
                    event.draft.address
                );
                created.send(IssueCreatedEvent { id });
            }
            None => warn!("Dropped report with blank address"),
        }
    }
}
