//! In-memory issue store: the ordered collection plus the next-id counter,
//! and the systems that apply advance/submit events to it.

mod seed;
mod systems;
mod types;

pub use seed::seed_issues;
pub use systems::{apply_advance_events, apply_submitted_reports};
pub use types::{AdvanceIssueEvent, IssueCreatedEvent, IssueStore, SubmitReportEvent};
