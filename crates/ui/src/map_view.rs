//! Simulated street map with one dot per visible issue.
//!
//! Positions come from `tracker::projection::project`; markers outside the
//! box are still drawn (clipped by the painter), never dropped.

use bevy_egui::egui;

use tracker::issue::{Issue, IssueId, Severity};
use tracker::projection::{project, BoundingBox, MapPosition, HORIZONTAL_ROADS, VERTICAL_ROADS};
use tracker::status::IssueStatus;
use tracker::view_state::Selection;

use crate::theme;

const DOT_RADIUS: f32 = 7.0;
const SELECTED_DOT_RADIUS: f32 = 11.0;
/// Extra pointer slack around a dot when hit-testing.
const HIT_SLOP: f32 = 3.0;
const GRID_STEP_PCT: f32 = 5.0;

/// Screen position of a projected point inside `rect`.
pub(crate) fn to_screen(rect: egui::Rect, pos: MapPosition) -> egui::Pos2 {
    egui::pos2(
        rect.min.x + rect.width() * (pos.x_pct as f32 / 100.0),
        rect.min.y + rect.height() * (pos.y_pct as f32 / 100.0),
    )
}

/// Topmost dot under `pointer`. Later dots are drawn over earlier ones, so
/// they win ties.
pub(crate) fn hit_dot(pointer: egui::Pos2, dots: &[MapDot]) -> Option<IssueId> {
    dots.iter()
        .rev()
        .find(|dot| dot.center.distance(pointer) <= dot.radius + HIT_SLOP)
        .map(|dot| dot.id)
}

pub(crate) struct MapDot {
    pub id: IssueId,
    pub center: egui::Pos2,
    pub radius: f32,
}

pub(crate) fn map_view(
    ui: &mut egui::Ui,
    issues: &[&Issue],
    bounds: &BoundingBox,
    selection: &mut Selection,
) {
    let (response, painter) =
        ui.allocate_painter(ui.available_size(), egui::Sense::click());
    let rect = response.rect;

    draw_streets(&painter, rect);

    // Selected dot last so it sits on top.
    let mut ordered: Vec<&Issue> = issues.to_vec();
    ordered.sort_by_key(|issue| selection.is_selected(issue.id));

    let dots: Vec<MapDot> = ordered
        .iter()
        .map(|issue| MapDot {
            id: issue.id,
            center: to_screen(rect, project(issue.lat, issue.lng, bounds)),
            radius: if selection.is_selected(issue.id) {
                SELECTED_DOT_RADIUS
            } else {
                DOT_RADIUS
            },
        })
        .collect();

    for (issue, dot) in ordered.iter().zip(&dots) {
        draw_dot(&painter, issue, dot, selection.is_selected(issue.id));
    }

    let hovered = response.hover_pos().and_then(|p| hit_dot(p, &dots));
    if hovered.is_some() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    for (issue, dot) in ordered.iter().zip(&dots) {
        if hovered == Some(issue.id) || selection.is_selected(issue.id) {
            draw_tooltip(&painter, issue, dot);
        }
    }

    if response.clicked() {
        if let Some(id) = response.interact_pointer_pos().and_then(|p| hit_dot(p, &dots)) {
            selection.toggle(id);
        }
    }

    painter.text(
        rect.left_top() + egui::vec2(12.0, 10.0),
        egui::Align2::LEFT_TOP,
        "LIVE MAP VIEW",
        egui::FontId::monospace(11.0),
        theme::TEXT_DIM,
    );
    draw_legend(&painter, rect);
}

fn draw_streets(painter: &egui::Painter, rect: egui::Rect) {
    painter.rect_filled(rect, egui::CornerRadius::ZERO, theme::MAP_GROUND);

    let grid = egui::Stroke::new(1.0, theme::MAP_GRID);
    let mut pct = GRID_STEP_PCT;
    while pct < 100.0 {
        let x = rect.min.x + rect.width() * pct / 100.0;
        let y = rect.min.y + rect.height() * pct / 100.0;
        painter.vline(x, rect.y_range(), grid);
        painter.hline(rect.x_range(), y, grid);
        pct += GRID_STEP_PCT;
    }

    for (pct, width) in HORIZONTAL_ROADS {
        let y = rect.min.y + rect.height() * pct / 100.0;
        painter.hline(rect.x_range(), y, egui::Stroke::new(width, theme::MAP_ROAD));
    }
    for (pct, width) in VERTICAL_ROADS {
        let x = rect.min.x + rect.width() * pct / 100.0;
        painter.vline(x, rect.y_range(), egui::Stroke::new(width, theme::MAP_ROAD));
    }
}

fn draw_dot(painter: &egui::Painter, issue: &Issue, dot: &MapDot, selected: bool) {
    let color = theme::status_color(issue.status);
    painter.circle_filled(dot.center, dot.radius + 4.0, theme::tint32(issue.status.meta()));
    painter.circle_filled(dot.center, dot.radius, color);
    if selected {
        painter.circle_stroke(
            dot.center,
            dot.radius + 2.0,
            egui::Stroke::new(2.0, egui::Color32::WHITE),
        );
    }
    if issue.severity == Severity::High {
        let corner = dot.center + egui::vec2(dot.radius * 0.7, -dot.radius * 0.7);
        painter.rect_filled(
            egui::Rect::from_center_size(corner, egui::vec2(5.0, 5.0)),
            egui::CornerRadius::ZERO,
            theme::SEVERITY_HIGH,
        );
    }
}

fn draw_tooltip(painter: &egui::Painter, issue: &Issue, dot: &MapDot) {
    let text = format!("{}\n{}", issue.kind.label().to_uppercase(), issue.address);
    let galley = painter.layout_no_wrap(
        text,
        egui::FontId::proportional(11.0),
        egui::Color32::WHITE,
    );
    let anchor = dot.center + egui::vec2(0.0, -(dot.radius + 8.0));
    let box_rect = egui::Rect::from_center_size(
        anchor - egui::vec2(0.0, galley.size().y / 2.0 + 4.0),
        galley.size() + egui::vec2(12.0, 8.0),
    );
    painter.rect_filled(box_rect, egui::CornerRadius::same(2), theme::PANEL);
    painter.rect_stroke(
        box_rect,
        egui::CornerRadius::same(2),
        egui::Stroke::new(1.0, theme::status_color(issue.status)),
        egui::StrokeKind::Inside,
    );
    painter.galley(
        box_rect.min + egui::vec2(6.0, 4.0),
        galley,
        egui::Color32::WHITE,
    );
}

fn draw_legend(painter: &egui::Painter, rect: egui::Rect) {
    let row = 16.0;
    let origin = rect.left_bottom() + egui::vec2(12.0, -(row * 3.0 + 14.0));
    let panel = egui::Rect::from_min_size(origin - egui::vec2(6.0, 6.0), egui::vec2(110.0, row * 3.0 + 10.0));
    painter.rect_filled(
        panel,
        egui::CornerRadius::same(3),
        egui::Color32::from_rgba_unmultiplied(18, 20, 26, 220),
    );
    for (i, status) in IssueStatus::ORDER.into_iter().enumerate() {
        let meta = status.meta();
        let y = origin.y + row * i as f32 + row / 2.0 - 2.0;
        painter.circle_filled(egui::pos2(origin.x + 5.0, y), 5.0, theme::color32(meta.color));
        painter.text(
            egui::pos2(origin.x + 16.0, y),
            egui::Align2::LEFT_CENTER,
            meta.label.to_uppercase(),
            egui::FontId::monospace(10.0),
            theme::TEXT_DIM,
        );
    }
}
