//! Header bar (brand, live counts, view switch, report button) and the
//! status filter bar beneath it.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use tracker::report::ReportModal;
use tracker::status::IssueStatus;
use tracker::store::IssueStore;
use tracker::view_state::{StatusCounts, StatusFilter, ViewMode};

use crate::theme;

pub fn top_bar_ui(
    mut contexts: EguiContexts,
    store: Res<IssueStore>,
    view_mode: Res<State<ViewMode>>,
    mut next_view: ResMut<NextState<ViewMode>>,
    mut modal: ResMut<ReportModal>,
) {
    let ctx = contexts.ctx_mut();
    let counts = StatusCounts::from_store(&store);
    let current = *view_mode.get();

    egui::TopBottomPanel::top("roadwatch_top_bar")
        .exact_height(52.0)
        .frame(
            egui::Frame::new()
                .fill(theme::PANEL)
                .inner_margin(egui::Margin::symmetric(16, 8))
                .stroke(egui::Stroke::new(1.0, theme::BORDER)),
        )
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new("ROADWATCH")
                            .strong()
                            .size(18.0)
                            .color(theme::ACCENT),
                    );
                    ui.label(
                        egui::RichText::new("LIVE ISSUE TRACKER")
                            .monospace()
                            .size(9.0)
                            .color(theme::TEXT_DIM),
                    );
                });

                ui.add_space(24.0);
                for status in IssueStatus::ORDER {
                    let meta = status.meta();
                    ui.label(
                        egui::RichText::new(counts.get(status).to_string())
                            .strong()
                            .size(16.0)
                            .color(theme::color32(meta.color)),
                    );
                    ui.label(
                        egui::RichText::new(meta.label.to_uppercase())
                            .small()
                            .color(theme::TEXT_DIM),
                    );
                    ui.add_space(10.0);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let report = egui::Button::new(
                        egui::RichText::new("+ REPORT ISSUE")
                            .strong()
                            .color(egui::Color32::BLACK),
                    )
                    .fill(theme::ACCENT);
                    if ui.add(report).clicked() {
                        modal.open();
                    }

                    ui.add_space(12.0);
                    // right-to-left, so iterate backwards to keep SPLIT first
                    for mode in ViewMode::ALL.into_iter().rev() {
                        if ui.selectable_label(current == mode, mode.label()).clicked()
                            && current != mode
                        {
                            info!("View mode -> {}", mode.label());
                            next_view.set(mode);
                        }
                    }
                });
            });
        });
}

pub fn filter_bar_ui(
    mut contexts: EguiContexts,
    store: Res<IssueStore>,
    mut filter: ResMut<StatusFilter>,
) {
    let ctx = contexts.ctx_mut();
    let counts = StatusCounts::from_store(&store);

    egui::TopBottomPanel::top("roadwatch_filter_bar")
        .frame(
            egui::Frame::new()
                .fill(theme::PANEL)
                .inner_margin(egui::Margin::symmetric(16, 6)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new("FILTER")
                        .monospace()
                        .small()
                        .color(theme::TEXT_DIM),
                );
                for option in StatusFilter::OPTIONS {
                    let selected = *filter == option;
                    let mut text = egui::RichText::new(option.caption(&store, &counts)).small();
                    if let StatusFilter::Only(status) = option {
                        text = text.color(theme::status_color(status));
                    }
                    if ui.selectable_label(selected, text).clicked() && !selected {
                        *filter = option;
                    }
                }
            });
        });
}
