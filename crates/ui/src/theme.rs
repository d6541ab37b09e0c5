use bevy_egui::{egui, EguiContexts};

use tracker::status::{IssueStatus, Rgb, StatusMeta};

// Dispatch-console palette
pub const PANEL: egui::Color32 = egui::Color32::from_rgb(18, 20, 26);
pub const SURFACE: egui::Color32 = egui::Color32::from_rgb(28, 31, 40);
pub const BORDER: egui::Color32 = egui::Color32::from_rgb(52, 56, 68);
pub const TEXT_DIM: egui::Color32 = egui::Color32::from_rgb(130, 136, 150);
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(0xFF, 0x4D, 0x00);
pub const MAP_GROUND: egui::Color32 = egui::Color32::from_rgb(22, 26, 32);
pub const MAP_GRID: egui::Color32 = egui::Color32::from_rgb(34, 39, 48);
pub const MAP_ROAD: egui::Color32 = egui::Color32::from_rgb(48, 54, 66);
pub const SEVERITY_HIGH: egui::Color32 = egui::Color32::from_rgb(0xFF, 0x2D, 0x2D);

pub fn apply_roadwatch_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();

    let inactive = egui::Color32::from_rgb(38, 42, 54);
    let hover = egui::Color32::from_rgb(58, 64, 80);

    style.visuals.widgets.noninteractive.bg_fill = SURFACE;
    style.visuals.widgets.inactive.bg_fill = inactive;
    style.visuals.widgets.hovered.bg_fill = hover;
    style.visuals.widgets.active.bg_fill = ACCENT;
    style.visuals.widgets.inactive.weak_bg_fill = inactive;
    style.visuals.widgets.hovered.weak_bg_fill = hover;
    style.visuals.widgets.active.weak_bg_fill = ACCENT;
    style.visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, BORDER);

    style.visuals.window_fill = SURFACE;
    style.visuals.panel_fill = PANEL;
    style.visuals.extreme_bg_color = egui::Color32::from_rgb(12, 14, 18);
    style.visuals.faint_bg_color = SURFACE;

    style.visuals.selection.bg_fill = ACCENT;
    style.visuals.selection.stroke = egui::Stroke::new(1.0, ACCENT);

    let window_rounding = egui::CornerRadius::same(4);
    let widget_rounding = egui::CornerRadius::same(2);

    style.visuals.window_corner_radius = window_rounding;
    style.visuals.widgets.noninteractive.corner_radius = widget_rounding;
    style.visuals.widgets.inactive.corner_radius = widget_rounding;
    style.visuals.widgets.hovered.corner_radius = widget_rounding;
    style.visuals.widgets.active.corner_radius = widget_rounding;

    ctx.set_style(style);
}

pub fn color32(rgb: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(rgb.0, rgb.1, rgb.2)
}

/// Translucent background behind badges and selected cards.
pub fn tint32(meta: &StatusMeta) -> egui::Color32 {
    let (rgb, alpha) = meta.tint();
    egui::Color32::from_rgba_unmultiplied(rgb.0, rgb.1, rgb.2, alpha)
}

pub fn status_color(status: IssueStatus) -> egui::Color32 {
    color32(status.meta().color)
}
