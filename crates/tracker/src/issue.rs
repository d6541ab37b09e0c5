//! Core issue record types.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::status::IssueStatus;

/// Stable identifier of a reported issue. Assigned sequentially, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IssueId(pub u32);

impl IssueId {
    /// Zero-padded display form used on cards and the detail overlay (`#0007`).
    pub fn padded(self) -> String {
        format!("#{:04}", self.0)
    }
}

impl fmt::Display for IssueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of road problem being reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum IssueType {
    #[default]
    Pothole,
    Crack,
    Flooding,
    Debris,
    BrokenLight,
    DamagedSign,
    Other,
}

impl IssueType {
    /// All selectable issue types, in selector order.
    pub const ALL: [IssueType; 7] = [
        IssueType::Pothole,
        IssueType::Crack,
        IssueType::Flooding,
        IssueType::Debris,
        IssueType::BrokenLight,
        IssueType::DamagedSign,
        IssueType::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            IssueType::Pothole => "Pothole",
            IssueType::Crack => "Crack",
            IssueType::Flooding => "Flooding",
            IssueType::Debris => "Debris",
            IssueType::BrokenLight => "Broken Light",
            IssueType::DamagedSign => "Damaged Sign",
            IssueType::Other => "Other",
        }
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How urgent the reporter considers the issue. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    #[default]
    Medium,
    High,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Low, Severity::Medium, Severity::High];

    pub fn label(self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        }
    }
}

/// Photo evidence attached to a report.
///
/// `data_url` is the encoded payload (`data:image/png;base64,...`); the
/// decoded RGBA8 pixels are kept alongside so views can build a texture
/// without decoding again.
#[derive(Clone, PartialEq)]
pub struct IssueImage {
    pub data_url: String,
    pub width: u32,
    pub height: u32,
    pub rgba: Arc<[u8]>,
}

impl IssueImage {
    /// MIME type embedded in the data URL, if well-formed.
    pub fn mime(&self) -> Option<&str> {
        self.data_url
            .strip_prefix("data:")
            .and_then(|rest| rest.split(';').next())
    }
}

impl fmt::Debug for IssueImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IssueImage")
            .field("mime", &self.mime())
            .field("width", &self.width)
            .field("height", &self.height)
            .field("encoded_len", &self.data_url.len())
            .finish()
    }
}

/// A reported road problem.
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    pub id: IssueId,
    pub kind: IssueType,
    pub address: String,
    pub description: String,
    pub status: IssueStatus,
    pub severity: Severity,
    pub lat: f64,
    pub lng: f64,
    /// Milliseconds since the Unix epoch.
    pub created: i64,
    pub image: Option<IssueImage>,
}

/// Not-yet-committed report data handed from the submission form to the store.
#[derive(Debug, Clone, PartialEq)]
pub struct IssueDraft {
    pub kind: IssueType,
    pub address: String,
    pub description: String,
    pub severity: Severity,
    pub image: Option<IssueImage>,
    pub lat: f64,
    pub lng: f64,
}

impl IssueDraft {
    /// A draft is only committable with a non-blank address.
    pub fn has_address(&self) -> bool {
        !self.address.trim().is_empty()
    }
}
