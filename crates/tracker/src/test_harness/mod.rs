//! # TestTracker: headless harness for tracker integration tests
//!
//! Wraps a `bevy::app::App` with `MinimalPlugins`, `StatesPlugin` and
//! `TrackerPlugin`, so tests can send the same events the UI sends and
//! inspect the resulting resources without a window.

use std::path::Path;
use std::time::Duration;

use bevy::app::App;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use crate::config::TrackerConfig;
use crate::issue::{IssueDraft, IssueId, IssueType, Severity};
use crate::report::ReportModal;
use crate::status::IssueStatus;
use crate::store::{AdvanceIssueEvent, IssueStore, SubmitReportEvent};
use crate::view_state::{Selection, StatusCounts, StatusFilter, ViewMode};
use crate::TrackerPlugin;

/// Upper bound on frames to wait for a background image read.
const MAX_IMAGE_WAIT_TICKS: usize = 500;

pub struct TestTracker {
    app: App,
}

impl TestTracker {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// Seeded store, fixed RNG seed.
    pub fn new() -> Self {
        Self::with_config(TrackerConfig {
            rng_seed: Some(42),
            ..Default::default()
        })
    }

    pub fn with_config(config: TrackerConfig) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(StatesPlugin);
        app.insert_resource(config);
        app.add_plugins(TrackerPlugin);
        app.update();
        Self { app }
    }

    // -----------------------------------------------------------------------
    // Driving
    // -----------------------------------------------------------------------

    pub fn tick(&mut self) -> &mut Self {
        self.app.update();
        self
    }

    pub fn tick_n(&mut self, n: usize) -> &mut Self {
        for _ in 0..n {
            self.app.update();
        }
        self
    }

    pub fn advance(&mut self, id: u32) -> &mut Self {
        self.app
            .world_mut()
            .send_event(AdvanceIssueEvent { id: IssueId(id) });
        self.tick()
    }

    /// Open the modal, fill it and submit through the form, as the UI does.
    /// Returns whether the form accepted the submission.
    pub fn submit_report(&mut self, kind: IssueType, address: &str, severity: Severity) -> bool {
        let draft = {
            let world = self.app.world_mut();
            world.resource_mut::<ReportModal>().open();
            let scatter = world.resource::<TrackerConfig>().scatter_bounds;
            world.resource_scope(|world, mut modal: Mut<ReportModal>| {
                let form = modal.form_mut()?;
                form.kind = kind;
                form.address = address.to_string();
                form.severity = severity;
                let mut rng = world.resource_mut::<crate::report::ReportRng>();
                form.submit(&mut rng, &scatter)
            })
        };
        let accepted = draft.is_some();
        if let Some(draft) = draft {
            self.app.world_mut().send_event(SubmitReportEvent { draft });
        }
        self.tick();
        accepted
    }

    /// Send a draft straight to the store, bypassing form validation.
    pub fn submit_draft(&mut self, draft: IssueDraft) -> &mut Self {
        self.app.world_mut().send_event(SubmitReportEvent { draft });
        self.tick()
    }

    /// Tick until the open form has no image read in flight.
    pub fn wait_for_image(&mut self) -> &mut Self {
        for _ in 0..MAX_IMAGE_WAIT_TICKS {
            if !self.resource::<ReportModal>().has_pending_image() {
                break;
            }
            std::thread::sleep(Duration::from_millis(2));
            self.app.update();
        }
        self
    }

    pub fn set_filter(&mut self, filter: StatusFilter) -> &mut Self {
        *self.app.world_mut().resource_mut::<StatusFilter>() = filter;
        self.tick()
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) -> &mut Self {
        self.app
            .world_mut()
            .resource_mut::<NextState<ViewMode>>()
            .set(mode);
        self.tick()
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    pub fn resource<R: Resource>(&self) -> &R {
        self.app.world().resource::<R>()
    }

    pub fn store(&self) -> &IssueStore {
        self.resource::<IssueStore>()
    }

    pub fn status_of(&self, id: u32) -> Option<IssueStatus> {
        self.store().get(IssueId(id)).map(|i| i.status)
    }

    pub fn selected(&self) -> Option<IssueId> {
        self.resource::<Selection>().id()
    }

    pub fn counts(&self) -> StatusCounts {
        StatusCounts::from_store(self.store())
    }

    pub fn visible_ids(&self) -> Vec<u32> {
        let filter = *self.resource::<StatusFilter>();
        crate::view_state::filtered_issues(self.store(), filter)
            .iter()
            .map(|i| i.id.0)
            .collect()
    }

    pub fn view_mode(&self) -> ViewMode {
        *self.resource::<State<ViewMode>>().get()
    }
}

/// Write a solid-color 8-bit RGBA PNG of the given size.
pub fn write_test_png(path: &Path, width: u32, height: u32) {
    image::RgbaImage::from_pixel(width, height, image::Rgba([200, 40, 10, 255]))
        .save(path)
        .expect("png encodes");
}

/// Write a solid-color 16-bit-per-channel RGBA PNG of the given size.
pub fn write_test_png16(path: &Path, width: u32, height: u32) {
    image::ImageBuffer::<image::Rgba<u16>, Vec<u16>>::from_pixel(
        width,
        height,
        image::Rgba([u16::MAX, 0, 30_000, u16::MAX]),
    )
    .save(path)
    .expect("16-bit png encodes");
}
