//! "File new report" modal.
//!
//! The form itself lives in `tracker::report::ReportModal`; this module only
//! draws it and turns clicks, typed paths and dropped files into form calls.

use std::path::PathBuf;

use bevy::prelude::*;
use bevy::window::FileDragAndDrop;
use bevy_egui::{egui, EguiContexts};

use tracker::config::TrackerConfig;
use tracker::issue::{IssueType, Severity};
use tracker::report::{ReportForm, ReportModal, ReportRng};
use tracker::store::SubmitReportEvent;

use crate::textures::{fit_size, ImageTextures};
use crate::{theme, widgets};

const MODAL_WIDTH: f32 = 420.0;
const MAX_PREVIEW_SIZE: egui::Vec2 = egui::vec2(396.0, 160.0);

/// Text typed into the photo path field. Cleared while the modal is closed.
#[derive(Resource, Default)]
pub struct ImagePathInput(pub String);

enum ModalAction {
    None,
    Close,
    Submit,
}

#[allow(clippy::too_many_arguments)]
pub fn report_modal_ui(
    mut contexts: EguiContexts,
    mut modal: ResMut<ReportModal>,
    mut path_input: ResMut<ImagePathInput>,
    mut textures: ResMut<ImageTextures>,
    mut rng: ResMut<ReportRng>,
    config: Res<TrackerConfig>,
    mut submit_events: EventWriter<SubmitReportEvent>,
) {
    if !modal.is_open() {
        path_input.0.clear();
    }
    // A submitted form is closed by the tracker in the same frame it is filed.
    let Some(form) = modal.form_mut().filter(|form| form.is_editing()) else {
        return;
    };
    let ctx = contexts.ctx_mut();

    // Backdrop blocks the panels underneath.
    let screen_rect = ctx.screen_rect();
    egui::Area::new(egui::Id::new("report_modal_backdrop"))
        .fixed_pos(screen_rect.min)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            ui.painter().rect_filled(
                screen_rect,
                egui::CornerRadius::ZERO,
                egui::Color32::from_black_alpha(150),
            );
            ui.allocate_rect(screen_rect, egui::Sense::click());
        });

    let mut action = ModalAction::None;

    egui::Window::new("report_modal")
        .title_bar(false)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .default_width(MODAL_WIDTH)
        .order(egui::Order::Foreground)
        .frame(
            egui::Frame::new()
                .fill(theme::SURFACE)
                .stroke(egui::Stroke::new(1.0, theme::ACCENT))
                .corner_radius(egui::CornerRadius::same(4))
                .inner_margin(egui::Margin::same(16)),
        )
        .show(ctx, |ui| {
            ui.set_width(MODAL_WIDTH - 32.0);
            action = editing_view(ui, form, &mut path_input.0, &mut textures);
        });

    match action {
        ModalAction::None => {}
        ModalAction::Submit => {
            if let Some(draft) = form.submit(&mut rng, &config.scatter_bounds) {
                submit_events.send(SubmitReportEvent { draft });
            }
        }
        ModalAction::Close => {
            modal.close();
            path_input.0.clear();
        }
    }
}

fn editing_view(
    ui: &mut egui::Ui,
    form: &mut ReportForm,
    path_input: &mut String,
    textures: &mut ImageTextures,
) -> ModalAction {
    let mut action = ModalAction::None;

    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new("FILE NEW REPORT")
                .strong()
                .size(16.0)
                .color(theme::ACCENT),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.small_button("✕").clicked() {
                action = ModalAction::Close;
            }
        });
    });
    ui.separator();

    egui::Grid::new("report_form_grid")
        .num_columns(2)
        .spacing([12.0, 8.0])
        .show(ui, |ui| {
            ui.label(field_label("TYPE"));
            egui::ComboBox::from_id_salt("report_issue_type")
                .selected_text(form.kind.label())
                .show_ui(ui, |ui| {
                    for kind in IssueType::ALL {
                        ui.selectable_value(&mut form.kind, kind, kind.label());
                    }
                });
            ui.end_row();

            ui.label(field_label("SEVERITY"));
            ui.horizontal(|ui| {
                for severity in Severity::ALL {
                    ui.selectable_value(
                        &mut form.severity,
                        severity,
                        widgets::severity_text(severity),
                    );
                }
            });
            ui.end_row();

            ui.label(field_label("ADDRESS *"));
            ui.add(
                egui::TextEdit::singleline(&mut form.address)
                    .hint_text("e.g. Main St & Oak Ave")
                    .desired_width(f32::INFINITY),
            );
            ui.end_row();

            ui.label(field_label("DETAILS"));
            ui.add(
                egui::TextEdit::multiline(&mut form.description)
                    .hint_text("What did you see?")
                    .desired_rows(3)
                    .desired_width(f32::INFINITY),
            );
            ui.end_row();
        });

    ui.add_space(8.0);
    ui.label(field_label("PHOTO EVIDENCE"));
    ui.horizontal(|ui| {
        ui.add(
            egui::TextEdit::singleline(path_input)
                .hint_text("Path to .png / .jpg, or drop a file")
                .desired_width(MODAL_WIDTH - 120.0),
        );
        let can_attach = !path_input.trim().is_empty();
        if ui.add_enabled(can_attach, egui::Button::new("ATTACH")).clicked() {
            // The form records the error itself; nothing else to do here.
            let _ = form.request_image(PathBuf::from(path_input.trim()));
        }
    });

    if let Some(path) = form.pending_image_path() {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label(
                egui::RichText::new(format!("Reading {}", path.display()))
                    .small()
                    .color(theme::TEXT_DIM),
            );
        });
    }
    if let Some(error) = form.image_error() {
        ui.label(egui::RichText::new(error).small().color(theme::SEVERITY_HIGH));
    }
    if let Some(image) = form.image() {
        let texture = textures.texture_for(ui.ctx(), image);
        let size = fit_size(image.width, image.height, MAX_PREVIEW_SIZE);
        ui.image(egui::load::SizedTexture::new(texture.id(), size));
    }

    ui.add_space(12.0);
    let submit = egui::Button::new(
        egui::RichText::new("SUBMIT REPORT")
            .strong()
            .color(egui::Color32::BLACK),
    )
    .fill(theme::ACCENT)
    .min_size(egui::vec2(ui.available_width(), 32.0));
    if ui.add_enabled(form.can_submit(), submit).clicked() {
        action = ModalAction::Submit;
    }

    action
}

fn field_label(text: &str) -> egui::RichText {
    egui::RichText::new(text)
        .monospace()
        .small()
        .color(theme::TEXT_DIM)
}

/// A file dropped on the window while the form is being edited becomes the
/// photo request.
pub fn attach_dropped_files(
    mut events: EventReader<FileDragAndDrop>,
    mut modal: ResMut<ReportModal>,
    mut path_input: ResMut<ImagePathInput>,
) {
    for event in events.read() {
        let FileDragAndDrop::DroppedFile { path_buf, .. } = event else {
            continue;
        };
        let Some(form) = modal.form_mut().filter(|form| form.is_editing()) else {
            debug!("Ignoring dropped file {}: no open report", path_buf.display());
            continue;
        };
        path_input.0 = path_buf.display().to_string();
        if let Err(e) = form.request_image(path_buf.clone()) {
            warn!("Rejected dropped file {}: {}", path_buf.display(), e);
        }
    }
}
