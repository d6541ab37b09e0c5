use bevy::prelude::*;
use bevy::render::view::screenshot::{save_to_disk, Screenshot};
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

use tracker::config::TrackerConfig;

/// When set, the app saves one screenshot to this path and exits.
const SCREENSHOT_ENV_VAR: &str = "ROADWATCH_SCREENSHOT";
/// Frames to let egui lay out before the shot.
const SCREENSHOT_DELAY_FRAMES: u32 = 30;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "RoadWatch".to_string(),
            resolution: (1280.0, 720.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(16)),
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
    })
    .insert_resource(ClearColor(Color::srgb_u8(12, 14, 18)))
    .insert_resource(TrackerConfig::from_env_or_default())
    .add_plugins((tracker::TrackerPlugin, ui::UiPlugin))
    .add_systems(Startup, spawn_camera);

    if let Ok(path) = std::env::var(SCREENSHOT_ENV_VAR) {
        app.insert_resource(ScreenshotRequest { frame: 0, path });
        app.add_systems(Update, drive_screenshot);
    }

    app.run();
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

#[derive(Resource)]
struct ScreenshotRequest {
    frame: u32,
    path: String,
}

fn drive_screenshot(
    mut commands: Commands,
    mut request: ResMut<ScreenshotRequest>,
    mut exit: EventWriter<AppExit>,
) {
    request.frame += 1;
    if request.frame == SCREENSHOT_DELAY_FRAMES {
        info!("Saving screenshot to {}", request.path);
        commands
            .spawn(Screenshot::primary_window())
            .observe(save_to_disk(request.path.clone()));
    } else if request.frame > SCREENSHOT_DELAY_FRAMES + 10 {
        exit.send(AppExit::Success);
    }
}
