use bevy::prelude::*;

use crate::clock::now_millis;
use crate::config::FIRST_SUBMITTED_ID;
use crate::issue::{Issue, IssueDraft, IssueId};
use crate::status::IssueStatus;

use super::seed::seed_issues;

/// Every issue of the session, newest submission first, plus the id the
/// next submission will get.
#[derive(Resource, Debug, Clone)]
pub struct IssueStore {
    issues: Vec<Issue>,
    next_id: u32,
}

impl Default for IssueStore {
    fn default() -> Self {
        Self::seeded(now_millis())
    }
}

impl IssueStore {
    /// Store holding the five demo issues, aged relative to `now`.
    pub fn seeded(now: i64) -> Self {
        Self {
            issues: seed_issues(now),
            next_id: FIRST_SUBMITTED_ID,
        }
    }

    /// Store with no issues. Ids still start after the seed range so they
    /// never collide with a seeded session.
    pub fn empty() -> Self {
        Self {
            issues: Vec::new(),
            next_id: FIRST_SUBMITTED_ID,
        }
    }

    pub fn next_id(&self) -> IssueId {
        IssueId(self.next_id)
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter()
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn get(&self, id: IssueId) -> Option<&Issue> {
        self.issues.iter().find(|issue| issue.id == id)
    }

    pub fn contains(&self, id: IssueId) -> bool {
        self.get(id).is_some()
    }

    /// Move issue `id` one step along the pipeline.
    ///
    /// Returns the new status, or `None` when nothing changed (unknown id,
    /// or the issue is already fixed).
    pub fn advance(&mut self, id: IssueId) -> Option<IssueStatus> {
        let issue = self.issues.iter_mut().find(|issue| issue.id == id)?;
        if issue.status.is_terminal() {
            return None;
        }
        issue.status = issue.status.advanced();
        Some(issue.status)
    }

    /// Commit a draft as a new `reported` issue at the front of the list.
    ///
    /// Blank addresses are refused without touching the collection or the
    /// id counter; callers are expected to have validated already.
    pub fn add_issue(&mut self, draft: IssueDraft, now: i64) -> Option<IssueId> {
        if !draft.has_address() {
            return None;
        }
        let id = IssueId(self.next_id);
        let issue = Issue {
            id,
            kind: draft.kind,
            address: draft.address,
            description: draft.description,
            status: IssueStatus::Reported,
            severity: draft.severity,
            lat: draft.lat,
            lng: draft.lng,
            created: now,
            image: draft.image,
        };
        self.issues.insert(0, issue);
        self.next_id += 1;
        Some(id)
    }
}

/// Request to advance an issue one pipeline step.
#[derive(Event, Debug, Clone, Copy)]
pub struct AdvanceIssueEvent {
    pub id: IssueId,
}

/// A validated draft leaving the report form.
#[derive(Event, Debug, Clone)]
pub struct SubmitReportEvent {
    pub draft: IssueDraft,
}

/// Fired after a submitted draft became an issue.
#[derive(Event, Debug, Clone, Copy)]
pub struct IssueCreatedEvent {
    pub id: IssueId,
}
