use crate::config::{MS_PER_DAY, MS_PER_HOUR};
use crate::issue::{Issue, IssueId, IssueType, Severity};
use crate::status::IssueStatus;

/// The five demo issues every session starts with, ids 1-5.
pub fn seed_issues(now: i64) -> Vec<Issue> {
    let seed = |id: u32,
                kind: IssueType,
                address: &str,
                description: &str,
                status: IssueStatus,
                (lat, lng): (f64, f64),
                age: i64,
                severity: Severity| Issue {
        id: IssueId(id),
        kind,
        address: address.to_string(),
        description: description.to_string(),
        status,
        severity,
        lat,
        lng,
        created: now - age,
        image: None,
    };

    vec![
        seed(
            1,
            IssueType::Pothole,
            "Main St & Oak Ave",
            "Large pothole causing damage to vehicles",
            IssueStatus::Fixed,
            (40.712, -74.006),
            5 * MS_PER_DAY,
            Severity::High,
        ),
        seed(
            2,
            IssueType::Flooding,
            "River Rd near Bridge",
            "Water pooling after rain, dangerous conditions",
            IssueStatus::Assigned,
            (40.715, -74.009),
            2 * MS_PER_DAY,
            Severity::High,
        ),
        seed(
            3,
            IssueType::Crack,
            "Park Blvd 200 block",
            "Multiple cracks spreading across lane",
            IssueStatus::Reported,
            (40.709, -74.003),
            MS_PER_DAY,
            Severity::Medium,
        ),
        seed(
            4,
            IssueType::BrokenLight,
            "5th Ave & 12th St",
            "Traffic light not functioning since Tuesday",
            IssueStatus::Assigned,
            (40.718, -74.011),
            3 * MS_PER_DAY,
            Severity::High,
        ),
        seed(
            5,
            IssueType::Debris,
            "Highway Ramp East",
            "Large debris blocking right lane",
            IssueStatus::Reported,
            (40.706, -74.001),
            4 * MS_PER_HOUR,
            Severity::Low,
        ),
    ]
}
