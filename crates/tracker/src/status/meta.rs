use super::IssueStatus;

/// An sRGB color, kept renderer-agnostic so the UI crate converts it once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Alpha of the background tint drawn behind a status (0x20 of 0xFF).
pub const TINT_ALPHA: u8 = 0x20;

/// Presentation tuple shared by badges, pipeline markers, filter buttons,
/// legend entries and map dots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusMeta {
    pub label: &'static str,
    pub color: Rgb,
    pub icon: &'static str,
}

impl StatusMeta {
    /// Background tint: the primary color at [`TINT_ALPHA`], unmultiplied.
    pub fn tint(&self) -> (Rgb, u8) {
        (self.color, TINT_ALPHA)
    }
}

const REPORTED: StatusMeta = StatusMeta {
    label: "Reported",
    color: Rgb(0xFF, 0x4D, 0x00),
    icon: "⚠",
};

const ASSIGNED: StatusMeta = StatusMeta {
    label: "Assigned",
    color: Rgb(0xFF, 0xB8, 0x00),
    icon: "🔧",
};

const FIXED: StatusMeta = StatusMeta {
    label: "Fixed",
    color: Rgb(0x00, 0xC4, 0x8C),
    icon: "✓",
};

impl IssueStatus {
    pub fn meta(self) -> &'static StatusMeta {
        match self {
            IssueStatus::Reported => &REPORTED,
            IssueStatus::Assigned => &ASSIGNED,
            IssueStatus::Fixed => &FIXED,
        }
    }
}
