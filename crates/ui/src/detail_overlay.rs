use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use tracker::clock::{now_millis, time_ago};
use tracker::store::{AdvanceIssueEvent, IssueStore};
use tracker::view_state::Selection;

use crate::textures::{fit_size, ImageTextures};
use crate::{theme, widgets};

const OVERLAY_WIDTH: f32 = 340.0;
const MAX_PHOTO_SIZE: egui::Vec2 = egui::vec2(316.0, 200.0);

/// Floating card for the selected issue, bottom-right in every view mode.
pub fn detail_overlay_ui(
    mut contexts: EguiContexts,
    store: Res<IssueStore>,
    mut selection: ResMut<Selection>,
    mut advance: EventWriter<AdvanceIssueEvent>,
    mut textures: ResMut<ImageTextures>,
) {
    let Some(issue) = selection.resolve(&store) else {
        return;
    };
    let ctx = contexts.ctx_mut();
    let meta = issue.status.meta();
    let mut close = false;

    egui::Window::new("issue_detail")
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
        .default_width(OVERLAY_WIDTH)
        .frame(
            egui::Frame::new()
                .fill(theme::SURFACE)
                .stroke(egui::Stroke::new(1.5, theme::color32(meta.color)))
                .corner_radius(egui::CornerRadius::same(4))
                .inner_margin(egui::Margin::same(12)),
        )
        .show(ctx, |ui| {
            ui.set_width(OVERLAY_WIDTH - 24.0);
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(issue.id.padded())
                        .monospace()
                        .strong(),
                );
                ui.label(
                    egui::RichText::new(time_ago(issue.created, now_millis()))
                        .small()
                        .color(theme::TEXT_DIM),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("✕").clicked() {
                        close = true;
                    }
                });
            });
            ui.horizontal(|ui| {
                widgets::type_chip(ui, issue.kind);
                ui.label(widgets::severity_text(issue.severity));
            });
            ui.label(egui::RichText::new(&issue.address).strong().size(15.0));
            if !issue.description.is_empty() {
                ui.label(egui::RichText::new(&issue.description).color(theme::TEXT_DIM));
            }

            if let Some(image) = &issue.image {
                ui.add_space(6.0);
                let texture = textures.texture_for(ui.ctx(), image);
                let size = fit_size(image.width, image.height, MAX_PHOTO_SIZE);
                ui.image(egui::load::SizedTexture::new(texture.id(), size));
            }

            ui.add_space(8.0);
            widgets::status_pipeline(ui, issue.status);

            if !issue.status.is_terminal() {
                ui.add_space(4.0);
                let next = issue.status.advanced().meta();
                let button = egui::Button::new(
                    egui::RichText::new("ADVANCE STATUS →")
                        .strong()
                        .color(egui::Color32::BLACK),
                )
                .fill(theme::color32(next.color))
                .min_size(egui::vec2(ui.available_width(), 28.0));
                if ui.add(button).clicked() {
                    advance.send(AdvanceIssueEvent { id: issue.id });
                }
            }
        });

    if close {
        selection.clear();
    }
}
