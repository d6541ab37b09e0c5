//! Photo evidence: extension check, decode for preview, and data-URL encoding,
//! run off the main thread on the IO task pool.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use base64::Engine as _;
use bevy::tasks::{block_on, IoTaskPool, Task};
use image::ImageFormat;

use crate::config::IMAGE_EXTENSIONS;
use crate::error::ImageReadError;
use crate::issue::IssueImage;

/// MIME type for an accepted image path, judged by extension.
pub fn mime_for_path(path: &Path) -> Result<&'static str, ImageReadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    if !IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        return Err(ImageReadError::UnsupportedType(ext));
    }
    Ok(match ext.as_str() {
        "png" => "image/png",
        _ => "image/jpeg",
    })
}

/// Decode `bytes` for preview and wrap them as a `data:` URL.
///
/// Any bit depth the decoder understands is flattened to RGBA8.
pub fn encode_image(bytes: &[u8], mime: &str) -> Result<IssueImage, ImageReadError> {
    let format = ImageFormat::from_mime_type(mime)
        .ok_or_else(|| ImageReadError::UnsupportedType(mime.to_string()))?;
    let rgba = image::load_from_memory_with_format(bytes, format)
        .map_err(|e| ImageReadError::Decode(e.to_string()))?
        .to_rgba8();
    let (width, height) = rgba.dimensions();

    let data_url = format!(
        "data:{mime};base64,{}",
        base64::engine::general_purpose::STANDARD.encode(bytes)
    );

    Ok(IssueImage {
        data_url,
        width,
        height,
        rgba: Arc::from(rgba.into_raw()),
    })
}

/// Blocking read + encode of an image file.
pub fn read_image_file(path: &Path) -> Result<IssueImage, ImageReadError> {
    let mime = mime_for_path(path)?;
    let bytes = std::fs::read(path)?;
    encode_image(&bytes, mime)
}

/// An in-flight image read bound to the form that requested it.
///
/// Dropping this cancels the task, so a form that is closed or has moved
/// on can never receive the result.
pub struct PendingImageRead {
    path: PathBuf,
    task: Task<Result<IssueImage, ImageReadError>>,
}

impl PendingImageRead {
    pub fn spawn(path: PathBuf) -> Self {
        let task_path = path.clone();
        let task = IoTaskPool::get().spawn(async move { read_image_file(&task_path) });
        Self { path, task }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Non-blocking check for completion.
    pub fn poll(&mut self) -> Option<Result<IssueImage, ImageReadError>> {
        block_on(futures_lite::future::poll_once(&mut self.task))
    }
}
