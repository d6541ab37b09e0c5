use bevy::prelude::*;

use crate::store::IssueCreatedEvent;

use super::form::{FormPhase, ReportModal};

/// Land finished image reads on the open form. A closed modal has already
/// dropped its task, so there is nothing to poll.
pub fn poll_image_reads(mut modal: ResMut<ReportModal>) {
    if !modal.has_pending_image() {
        return;
    }
    if let Some(form) = modal.form_mut() {
        form.poll_image();
    }
}

/// Dismiss a submitted form once its report is filed. A form the user
/// reopened in the meantime is still editing and stays open.
pub fn close_submitted_report(
    mut created: EventReader<IssueCreatedEvent>,
    mut modal: ResMut<ReportModal>,
) {
    if created.read().count() == 0 {
        return;
    }
    if modal.form().is_some_and(|form| form.phase() == FormPhase::Submitted) {
        debug!("Closing report modal after filing");
        modal.close();
    }
}
