use super::IssueStatus;

/// Render state of one step of the status pipeline widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineStep {
    pub status: IssueStatus,
    /// Step is lit: the issue has reached (or passed) this status.
    pub active: bool,
    /// Connector towards the next step is filled. `None` on the last step.
    pub connector_filled: Option<bool>,
}

/// Step flags for an issue currently at `current`.
///
/// Step `i` is active iff `index(current) >= i`; the connector between
/// `i` and `i + 1` is filled iff `index(current) > i`.
pub fn pipeline_steps(current: IssueStatus) -> [PipelineStep; 3] {
    let at = current.index();
    let last = IssueStatus::ORDER.len() - 1;
    IssueStatus::ORDER.map(|status| {
        let i = status.index();
        PipelineStep {
            status,
            active: at >= i,
            connector_filled: (i < last).then_some(at > i),
        }
    })
}
