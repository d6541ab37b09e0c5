use bevy_egui::egui;

use tracker::issue::{IssueType, Severity};
use tracker::status::{pipeline_steps, IssueStatus};

use crate::theme;

// ---------------------------------------------------------------------------
// Badges
// ---------------------------------------------------------------------------

/// Icon + uppercase label on the status tint.
pub(crate) fn status_badge(ui: &mut egui::Ui, status: IssueStatus) {
    let meta = status.meta();
    egui::Frame::new()
        .fill(theme::tint32(meta))
        .stroke(egui::Stroke::new(1.0, theme::color32(meta.color)))
        .corner_radius(egui::CornerRadius::same(2))
        .inner_margin(egui::Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(format!("{} {}", meta.icon, meta.label.to_uppercase()))
                    .small()
                    .strong()
                    .color(theme::color32(meta.color)),
            );
        });
}

pub(crate) fn type_chip(ui: &mut egui::Ui, kind: IssueType) {
    egui::Frame::new()
        .fill(theme::PANEL)
        .stroke(egui::Stroke::new(1.0, theme::BORDER))
        .corner_radius(egui::CornerRadius::same(2))
        .inner_margin(egui::Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(kind.label().to_uppercase())
                    .small()
                    .color(theme::TEXT_DIM),
            );
        });
}

pub(crate) fn severity_text(severity: Severity) -> egui::RichText {
    let text = egui::RichText::new(severity.label().to_uppercase()).small();
    match severity {
        Severity::High => text.color(theme::SEVERITY_HIGH).strong(),
        Severity::Medium => text.color(egui::Color32::from_rgb(0xFF, 0xB8, 0x00)),
        Severity::Low => text.color(theme::TEXT_DIM),
    }
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

const STEP_RADIUS: f32 = 11.0;
const STEP_SPACING: f32 = 96.0;

/// Three-step status pipeline: a marker per status, joined by connectors.
pub(crate) fn status_pipeline(ui: &mut egui::Ui, current: IssueStatus) {
    let steps = pipeline_steps(current);
    let width = STEP_SPACING * (steps.len() as f32 - 1.0) + STEP_RADIUS * 4.0;
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, 54.0), egui::Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }
    let painter = ui.painter_at(rect);
    let inactive = theme::BORDER;
    let y = rect.min.y + STEP_RADIUS + 4.0;
    let x_of = |i: usize| rect.min.x + STEP_RADIUS * 2.0 + STEP_SPACING * i as f32;

    for (i, step) in steps.iter().enumerate() {
        let center = egui::pos2(x_of(i), y);

        if let Some(filled) = step.connector_filled {
            let color = if filled {
                theme::status_color(steps[i + 1].status)
            } else {
                inactive
            };
            painter.line_segment(
                [
                    egui::pos2(center.x + STEP_RADIUS, y),
                    egui::pos2(x_of(i + 1) - STEP_RADIUS, y),
                ],
                egui::Stroke::new(2.0, color),
            );
        }

        let meta = step.status.meta();
        let color = theme::color32(meta.color);
        if step.active {
            painter.circle_filled(center, STEP_RADIUS, color);
        } else {
            painter.circle_stroke(center, STEP_RADIUS, egui::Stroke::new(1.5, inactive));
        }
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            meta.icon,
            egui::FontId::proportional(11.0),
            if step.active {
                egui::Color32::BLACK
            } else {
                inactive
            },
        );
        painter.text(
            egui::pos2(center.x, y + STEP_RADIUS + 6.0),
            egui::Align2::CENTER_TOP,
            meta.label.to_uppercase(),
            egui::FontId::monospace(10.0),
            if step.active { color } else { theme::TEXT_DIM },
        );
    }
}
