//! Issue status pipeline: the fixed `reported -> assigned -> fixed` order,
//! the presentation tuple every view draws a status with, and the step
//! flags of the pipeline widget.

mod meta;
mod pipeline;

pub use meta::{Rgb, StatusMeta};
pub use pipeline::{pipeline_steps, PipelineStep};

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where an issue sits in the repair pipeline. Variant order is pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueStatus {
    #[default]
    Reported,
    Assigned,
    Fixed,
}

impl IssueStatus {
    /// The one ordering used for advancing, badges and pipeline markers.
    pub const ORDER: [IssueStatus; 3] = [
        IssueStatus::Reported,
        IssueStatus::Assigned,
        IssueStatus::Fixed,
    ];

    /// Position of this status in [`IssueStatus::ORDER`].
    pub fn index(self) -> usize {
        match self {
            IssueStatus::Reported => 0,
            IssueStatus::Assigned => 1,
            IssueStatus::Fixed => 2,
        }
    }

    /// The next status, clamped at the terminal one.
    pub fn advanced(self) -> IssueStatus {
        let last = Self::ORDER.len() - 1;
        Self::ORDER[(self.index() + 1).min(last)]
    }

    pub fn is_terminal(self) -> bool {
        self == IssueStatus::Fixed
    }

    /// Lowercase key, as shown in the stats bar and filter captions.
    pub fn key(self) -> &'static str {
        match self {
            IssueStatus::Reported => "reported",
            IssueStatus::Assigned => "assigned",
            IssueStatus::Fixed => "fixed",
        }
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
