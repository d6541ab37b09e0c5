use bevy::prelude::*;

pub mod clock;
pub mod config;
pub mod error;
pub mod issue;
pub mod projection;
pub mod report;
pub mod status;
pub mod store;
pub mod view_state;

#[cfg(test)]
mod integration_tests;
#[cfg(test)]
pub(crate) mod test_harness;

use config::TrackerConfig;
use report::{ReportModal, ReportRng};
use store::{AdvanceIssueEvent, IssueCreatedEvent, IssueStore, SubmitReportEvent};
use view_state::{Selection, StatusFilter, ViewMode};

// ---------------------------------------------------------------------------
// System sets
// ---------------------------------------------------------------------------

/// Ordering of tracker work within `Update`.
///
/// UI systems that emit events or edit view state run in `Input`; store
/// mutations happen in `Apply`; selection bookkeeping that reacts to the
/// store runs in `Sync`, so a frame always renders a consistent state.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum TrackerSet {
    Input,
    Apply,
    Sync,
}

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

/// Registers all tracker state, events and systems.
///
/// Resources already present in the world (a `TrackerConfig` inserted by the
/// binary, or a hand-built `IssueStore` in tests) are kept as-is.
pub struct TrackerPlugin;

impl Plugin for TrackerPlugin {
    fn build(&self, app: &mut App) {
        let config = app
            .world()
            .get_resource::<TrackerConfig>()
            .cloned()
            .unwrap_or_default();

        if !app.world().contains_resource::<IssueStore>() {
            let store = if config.seed_issues {
                IssueStore::default()
            } else {
                IssueStore::empty()
            };
            app.insert_resource(store);
        }
        if !app.world().contains_resource::<ReportRng>() {
            app.insert_resource(ReportRng::from_config(config.rng_seed));
        }
        app.insert_resource(config);

        app.init_resource::<StatusFilter>()
            .init_resource::<Selection>()
            .init_resource::<ReportModal>()
            .init_state::<ViewMode>()
            .add_event::<AdvanceIssueEvent>()
            .add_event::<SubmitReportEvent>()
            .add_event::<IssueCreatedEvent>()
            .configure_sets(
                Update,
                (TrackerSet::Input, TrackerSet::Apply, TrackerSet::Sync).chain(),
            )
            .add_systems(
                Update,
                (
                    report::poll_image_reads,
                    store::apply_advance_events,
                    store::apply_submitted_reports,
                )
                    .chain()
                    .in_set(TrackerSet::Apply),
            )
            .add_systems(
                Update,
                (
                    view_state::select_created_issue,
                    report::close_submitted_report,
                    view_state::prune_stale_selection,
                )
                    .chain()
                    .in_set(TrackerSet::Sync),
            );
    }
}
