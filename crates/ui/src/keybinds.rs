use bevy::prelude::*;
use bevy_egui::EguiContexts;

use tracker::report::ReportModal;
use tracker::view_state::{Selection, ViewMode};

use crate::report_modal::ImagePathInput;

/// N opens a report, Escape closes the modal (or else drops the selection),
/// 1/2/3 pick split/map/list.
pub fn keyboard_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut contexts: EguiContexts,
    mut modal: ResMut<ReportModal>,
    mut path_input: ResMut<ImagePathInput>,
    mut selection: ResMut<Selection>,
    mut next_view: ResMut<NextState<ViewMode>>,
) {
    // Escape still works from inside a text field so the modal can be left.
    if keyboard.just_pressed(KeyCode::Escape) {
        if modal.is_open() {
            modal.close();
            path_input.0.clear();
        } else {
            selection.clear();
        }
        return;
    }

    if contexts.ctx_mut().wants_keyboard_input() {
        return;
    }

    if keyboard.just_pressed(KeyCode::KeyN) {
        modal.open();
    }
    if modal.is_open() {
        return;
    }
    if let Some(mode) = view_mode_for_key(&keyboard) {
        next_view.set(mode);
    }
}

fn view_mode_for_key(keyboard: &ButtonInput<KeyCode>) -> Option<ViewMode> {
    [
        (KeyCode::Digit1, ViewMode::Split),
        (KeyCode::Digit2, ViewMode::Map),
        (KeyCode::Digit3, ViewMode::List),
    ]
    .into_iter()
    .find(|(key, _)| keyboard.just_pressed(*key))
    .map(|(_, mode)| mode)
}
