use bevy::prelude::*;
use bevy_egui::egui;

use tracker::clock::time_ago;
use tracker::issue::Issue;
use tracker::store::AdvanceIssueEvent;
use tracker::view_state::Selection;

use crate::{theme, widgets};

/// Scrollable card list of the filtered issues.
pub(crate) fn issue_list(
    ui: &mut egui::Ui,
    issues: &[&Issue],
    selection: &mut Selection,
    advance: &mut EventWriter<AdvanceIssueEvent>,
    now: i64,
) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new("ISSUE QUEUE")
                .monospace()
                .small()
                .color(theme::TEXT_DIM),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(format!("{} shown", issues.len()))
                    .small()
                    .color(theme::TEXT_DIM),
            );
        });
    });
    ui.separator();

    if issues.is_empty() {
        ui.add_space(40.0);
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new("No issues found").color(theme::TEXT_DIM));
        });
        return;
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for issue in issues {
                issue_card(ui, issue, selection, advance, now);
                ui.add_space(6.0);
            }
        });
}

fn issue_card(
    ui: &mut egui::Ui,
    issue: &Issue,
    selection: &mut Selection,
    advance: &mut EventWriter<AdvanceIssueEvent>,
    now: i64,
) {
    let selected = selection.is_selected(issue.id);
    let meta = issue.status.meta();
    let mut advance_clicked = false;

    // The card senses clicks underneath its children, so the advance
    // button wins when both are hit.
    let card = ui
        .scope_builder(
            egui::UiBuilder::new()
                .id_salt(("issue_card", issue.id.0))
                .sense(egui::Sense::click()),
            |ui| {
                egui::Frame::new()
                    .fill(if selected {
                        theme::tint32(meta)
                    } else {
                        theme::SURFACE
                    })
                    .stroke(egui::Stroke::new(
                        if selected { 1.5 } else { 1.0 },
                        if selected {
                            theme::color32(meta.color)
                        } else {
                            theme::BORDER
                        },
                    ))
                    .corner_radius(egui::CornerRadius::same(3))
                    .inner_margin(egui::Margin::same(10))
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new(issue.id.padded())
                                    .monospace()
                                    .color(theme::TEXT_DIM),
                            );
                            widgets::type_chip(ui, issue.kind);
                            ui.label(widgets::severity_text(issue.severity));
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    ui.label(
                                        egui::RichText::new(time_ago(issue.created, now))
                                            .small()
                                            .color(theme::TEXT_DIM),
                                    );
                                },
                            );
                        });
                        ui.label(egui::RichText::new(&issue.address).strong());
                        ui.horizontal(|ui| {
                            widgets::status_badge(ui, issue.status);
                            if !issue.status.is_terminal() {
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| {
                                        if ui.small_button("ADVANCE →").clicked() {
                                            advance_clicked = true;
                                        }
                                    },
                                );
                            }
                        });
                    });
            },
        )
        .response;

    if advance_clicked {
        advance.send(AdvanceIssueEvent { id: issue.id });
    } else if card.clicked() {
        selection.toggle(issue.id);
    }
}
