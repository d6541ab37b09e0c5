use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use tracker::TrackerSet;

pub mod content;
pub mod detail_overlay;
mod issue_list;
pub mod keybinds;
mod map_view;
pub mod report_modal;
pub mod textures;
pub mod theme;
pub mod top_bar;
mod widgets;

/// egui front end over the tracker resources.
///
/// Panels are drawn in a fixed order each frame (top bar, filter bar, content,
/// detail overlay, report modal) inside `TrackerSet::Input`, so events they
/// send are applied before the next frame.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<textures::ImageTextures>()
            .init_resource::<report_modal::ImagePathInput>()
            .add_systems(Startup, theme::apply_roadwatch_theme)
            .add_systems(
                Update,
                (
                    keybinds::keyboard_shortcuts,
                    report_modal::attach_dropped_files,
                    top_bar::top_bar_ui,
                    top_bar::filter_bar_ui,
                    content::content_ui,
                    detail_overlay::detail_overlay_ui,
                    report_modal::report_modal_ui,
                )
                    .chain()
                    .in_set(TrackerSet::Input),
            );
    }
}
