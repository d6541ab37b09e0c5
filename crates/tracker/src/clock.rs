//! Wall-clock timestamps and the relative age shown on cards.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::{MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE};

/// Current time in milliseconds since the Unix epoch.
pub fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

/// Compact relative age: `Nm ago` under an hour, `Nh ago` under a day,
/// `Nd ago` otherwise. Timestamps in the future read as `0m ago`.
pub fn time_ago(created: i64, now: i64) -> String {
    let diff = (now - created).max(0);
    if diff < MS_PER_HOUR {
        format!("{}m ago", diff / MS_PER_MINUTE)
    } else if diff < MS_PER_DAY {
        format!("{}h ago", diff / MS_PER_HOUR)
    } else {
        format!("{}d ago", diff / MS_PER_DAY)
    }
}
