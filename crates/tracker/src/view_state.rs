//! Transient view state: status filter, view mode and the single selection,
//! plus the pure derivations every panel reads (filtered list, counts).
//!
//! Nothing here is cached. `filtered_issues` and `StatusCounts` are
//! recomputed from the store on every read.

use bevy::prelude::*;

use crate::issue::{Issue, IssueId};
use crate::status::IssueStatus;
use crate::store::{IssueCreatedEvent, IssueStore};

// =============================================================================
// Filter
// =============================================================================

/// Which statuses the list and map show.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(IssueStatus),
}

impl StatusFilter {
    /// Filter buttons, in display order.
    pub const OPTIONS: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::Only(IssueStatus::Reported),
        StatusFilter::Only(IssueStatus::Assigned),
        StatusFilter::Only(IssueStatus::Fixed),
    ];

    pub fn matches(self, issue: &Issue) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => issue.status == status,
        }
    }

    /// Button caption, e.g. `ALL (5)` or `ASSIGNED (2)`.
    pub fn caption(self, store: &IssueStore, counts: &StatusCounts) -> String {
        match self {
            StatusFilter::All => format!("ALL ({})", store.len()),
            StatusFilter::Only(status) => {
                format!("{} ({})", status.key().to_uppercase(), counts.get(status))
            }
        }
    }
}

/// Issues passing `filter`, in store order.
pub fn filtered_issues(store: &IssueStore, filter: StatusFilter) -> Vec<&Issue> {
    store.iter().filter(|issue| filter.matches(issue)).collect()
}

// =============================================================================
// Stats
// =============================================================================

/// Per-status totals over the whole collection, independent of the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub reported: usize,
    pub assigned: usize,
    pub fixed: usize,
}

impl StatusCounts {
    pub fn from_store(store: &IssueStore) -> Self {
        let mut counts = Self::default();
        for issue in store.iter() {
            match issue.status {
                IssueStatus::Reported => counts.reported += 1,
                IssueStatus::Assigned => counts.assigned += 1,
                IssueStatus::Fixed => counts.fixed += 1,
            }
        }
        counts
    }

    pub fn get(&self, status: IssueStatus) -> usize {
        match status {
            IssueStatus::Reported => self.reported,
            IssueStatus::Assigned => self.assigned,
            IssueStatus::Fixed => self.fixed,
        }
    }

    pub fn total(&self) -> usize {
        self.reported + self.assigned + self.fixed
    }
}

// =============================================================================
// View mode
// =============================================================================

/// Which panels are laid out. Orthogonal to filtering.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewMode {
    /// List and map side by side.
    #[default]
    Split,
    Map,
    List,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::Split, ViewMode::Map, ViewMode::List];

    pub fn shows_list(self) -> bool {
        matches!(self, ViewMode::Split | ViewMode::List)
    }

    pub fn shows_map(self) -> bool {
        matches!(self, ViewMode::Split | ViewMode::Map)
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Split => "SPLIT",
            ViewMode::Map => "MAP",
            ViewMode::List => "LIST",
        }
    }
}

// =============================================================================
// Selection
// =============================================================================

/// The issue shown in the detail overlay and highlighted on list and map.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection(Option<IssueId>);

impl Selection {
    pub fn id(&self) -> Option<IssueId> {
        self.0
    }

    pub fn is_selected(&self, id: IssueId) -> bool {
        self.0 == Some(id)
    }

    /// User selection: picking the already-selected issue deselects it.
    pub fn toggle(&mut self, id: IssueId) {
        self.0 = if self.is_selected(id) { None } else { Some(id) };
    }

    /// Programmatic selection, e.g. after a report is filed.
    pub fn set(&mut self, id: IssueId) {
        self.0 = Some(id);
    }

    pub fn clear(&mut self) {
        self.0 = None;
    }

    /// The selected issue, if it still exists.
    pub fn resolve<'a>(&self, store: &'a IssueStore) -> Option<&'a Issue> {
        self.0.and_then(|id| store.get(id))
    }
}

/// Select each freshly filed issue.
pub fn select_created_issue(
    mut events: EventReader<IssueCreatedEvent>,
    mut selection: ResMut<Selection>,
) {
    for event in events.read() {
        selection.set(event.id);
    }
}

/// A selection must always point at an issue in the store.
pub fn prune_stale_selection(store: Res<IssueStore>, mut selection: ResMut<Selection>) {
    let Some(id) = selection.id() else {
        return;
    };
    if !store.contains(id) {
        debug!("Clearing selection of missing issue {}", id.padded());
        selection.clear();
    }
}
