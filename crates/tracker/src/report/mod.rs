//! Report submission flow: the modal's form state machine
//! (`Editing -> Submitted`), background image reads, and the RNG that
//! scatters new reports over the map.

mod form;
mod image;
mod rng;
mod systems;

pub use form::{FormPhase, ReportForm, ReportModal};
pub use self::image::{encode_image, mime_for_path, read_image_file, PendingImageRead};
pub use rng::ReportRng;
pub use systems::{close_submitted_report, poll_image_reads};
