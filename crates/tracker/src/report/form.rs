use std::path::PathBuf;

use bevy::prelude::*;

use crate::error::ImageReadError;
use crate::issue::{IssueDraft, IssueImage, IssueType, Severity};
use crate::projection::BoundingBox;

use super::image::{mime_for_path, PendingImageRead};
use super::rng::ReportRng;

/// Lifecycle of a single modal instance. `Submitted` is terminal; the form
/// is discarded on close rather than reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitted,
}

/// Transient state of the "file new report" form.
#[derive(Default)]
pub struct ReportForm {
    pub kind: IssueType,
    pub address: String,
    pub description: String,
    pub severity: Severity,
    phase: FormPhase,
    image: Option<IssueImage>,
    pending_image: Option<PendingImageRead>,
    image_error: Option<String>,
}

impl ReportForm {
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_editing(&self) -> bool {
        self.phase == FormPhase::Editing
    }

    /// Submit is enabled only while editing with a non-blank address.
    pub fn can_submit(&self) -> bool {
        self.is_editing() && !self.address.trim().is_empty()
    }

    pub fn image(&self) -> Option<&IssueImage> {
        self.image.as_ref()
    }

    /// Path of the image currently being read, if any.
    pub fn pending_image_path(&self) -> Option<&std::path::Path> {
        self.pending_image.as_ref().map(|p| p.path())
    }

    pub fn has_pending_image(&self) -> bool {
        self.pending_image.is_some()
    }

    /// Message of the last failed image read, for display next to the picker.
    pub fn image_error(&self) -> Option<&str> {
        self.image_error.as_deref()
    }

    /// Start reading `path` in the background. Replaces any read already in
    /// flight. Non-image extensions are refused up front.
    pub fn request_image(&mut self, path: PathBuf) -> Result<(), ImageReadError> {
        if !self.is_editing() {
            return Ok(());
        }
        if let Err(e) = mime_for_path(&path) {
            self.image_error = Some(e.to_string());
            return Err(e);
        }
        self.image_error = None;
        self.pending_image = Some(PendingImageRead::spawn(path));
        Ok(())
    }

    /// Apply a finished read. Ignored unless the form is still editing;
    /// failures keep the previous preview.
    pub fn apply_image_result(&mut self, result: Result<IssueImage, ImageReadError>) {
        if !self.is_editing() {
            return;
        }
        match result {
            Ok(image) => {
                debug!("Attached {}x{} image to report", image.width, image.height);
                self.image = Some(image);
                self.image_error = None;
            }
            Err(e) => {
                warn!("Discarding failed image read: {}", e);
                self.image_error = Some(e.to_string());
            }
        }
    }

    /// Poll the in-flight read and apply it when done. Returns `true` once
    /// a result (success or failure) was consumed.
    pub fn poll_image(&mut self) -> bool {
        let Some(pending) = self.pending_image.as_mut() else {
            return false;
        };
        let Some(result) = pending.poll() else {
            return false;
        };
        self.pending_image = None;
        self.apply_image_result(result);
        true
    }

    /// Turn the form into a draft and move to `Submitted`.
    ///
    /// Returns `None` (and stays in `Editing`) while the address is blank.
    /// The position is drawn at random from `scatter`; the address is not
    /// geocoded.
    pub fn submit(&mut self, rng: &mut ReportRng, scatter: &BoundingBox) -> Option<IssueDraft> {
        if !self.can_submit() {
            return None;
        }
        let (lat, lng) = rng.scatter(scatter);
        self.phase = FormPhase::Submitted;
        self.pending_image = None;
        Some(IssueDraft {
            kind: self.kind,
            address: self.address.clone(),
            description: self.description.clone(),
            severity: self.severity,
            image: self.image.clone(),
            lat,
            lng,
        })
    }
}

/// The report modal. `None` while closed; closing drops the form together
/// with any image read still in flight.
#[derive(Resource, Default)]
pub struct ReportModal(Option<ReportForm>);

impl ReportModal {
    /// Open with a fresh form. No-op if already open.
    pub fn open(&mut self) {
        if self.0.is_none() {
            self.0 = Some(ReportForm::default());
        }
    }

    pub fn close(&mut self) {
        self.0 = None;
    }

    pub fn is_open(&self) -> bool {
        self.0.is_some()
    }

    pub fn form(&self) -> Option<&ReportForm> {
        self.0.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut ReportForm> {
        self.0.as_mut()
    }

    pub fn has_pending_image(&self) -> bool {
        self.0.as_ref().is_some_and(ReportForm::has_pending_image)
    }
}
