use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use tracker::clock::now_millis;
use tracker::config::TrackerConfig;
use tracker::store::{AdvanceIssueEvent, IssueStore};
use tracker::view_state::{filtered_issues, Selection, StatusFilter, ViewMode};

use crate::issue_list::issue_list;
use crate::map_view::map_view;
use crate::theme;

const LIST_PANEL_WIDTH: f32 = 380.0;

/// List and/or map, laid out per the current view mode. Both show the same
/// filtered issues.
pub fn content_ui(
    mut contexts: EguiContexts,
    store: Res<IssueStore>,
    filter: Res<StatusFilter>,
    view_mode: Res<State<ViewMode>>,
    config: Res<TrackerConfig>,
    mut selection: ResMut<Selection>,
    mut advance: EventWriter<AdvanceIssueEvent>,
) {
    let ctx = contexts.ctx_mut();
    let issues = filtered_issues(&store, *filter);
    let now = now_millis();
    let mode = *view_mode.get();
    let list_frame = egui::Frame::new()
        .fill(theme::PANEL)
        .inner_margin(egui::Margin::same(12));

    if mode.shows_list() && mode.shows_map() {
        egui::SidePanel::left("roadwatch_issue_list")
            .default_width(LIST_PANEL_WIDTH)
            .resizable(true)
            .frame(list_frame)
            .show(ctx, |ui| {
                issue_list(ui, &issues, &mut selection, &mut advance, now);
            });
    }

    let central_frame = if mode.shows_map() {
        egui::Frame::new().fill(theme::MAP_GROUND)
    } else {
        list_frame
    };
    egui::CentralPanel::default()
        .frame(central_frame)
        .show(ctx, |ui| {
            if mode.shows_map() {
                map_view(ui, &issues, &config.map_bounds, &mut selection);
            } else {
                issue_list(ui, &issues, &mut selection, &mut advance, now);
            }
        });
}
