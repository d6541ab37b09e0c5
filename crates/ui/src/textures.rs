//! egui textures for attached photos, uploaded once per image.

use std::sync::Arc;

use bevy::prelude::*;
use bevy_egui::egui;

use tracker::issue::IssueImage;

/// Keyed by the shared pixel buffer. An entry lives only while some issue or
/// form still holds that buffer: once the cache holds the last reference,
/// the entry and its GPU texture are dropped on the next lookup. A submitted
/// issue shares its buffer with the form preview and reuses the same texture.
#[derive(Resource, Default)]
pub struct ImageTextures {
    entries: Vec<(Arc<[u8]>, egui::TextureHandle)>,
}

impl ImageTextures {
    pub fn texture_for(&mut self, ctx: &egui::Context, image: &IssueImage) -> egui::TextureHandle {
        self.prune();
        if let Some((_, handle)) = self
            .entries
            .iter()
            .find(|(pixels, _)| Arc::ptr_eq(pixels, &image.rgba))
        {
            return handle.clone();
        }
        let color_image = egui::ColorImage::from_rgba_unmultiplied(
            [image.width as usize, image.height as usize],
            &image.rgba,
        );
        let name = format!("issue_photo_{:p}", Arc::as_ptr(&image.rgba));
        let handle = ctx.load_texture(name, color_image, egui::TextureOptions::LINEAR);
        self.entries.push((image.rgba.clone(), handle.clone()));
        handle
    }

    /// Drop textures whose image was discarded everywhere else.
    pub fn prune(&mut self) {
        self.entries
            .retain(|(pixels, _)| Arc::strong_count(pixels) > 1);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Scale `(width, height)` to fit within `max`, never upscaling.
pub fn fit_size(width: u32, height: u32, max: egui::Vec2) -> egui::Vec2 {
    if width == 0 || height == 0 {
        return egui::Vec2::ZERO;
    }
    let size = egui::vec2(width as f32, height as f32);
    let scale = (max.x / size.x).min(max.y / size.y).min(1.0);
    size * scale
}
