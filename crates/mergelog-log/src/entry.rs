//! Log entry type for a merged pull request.

/// A merged pull request, as attributed to a release tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// The commit date, as emitted by the version-control tool.
    pub date: String,

    /// The entry text (the merge commit body).
    pub message: String,

    /// The pull request number, digits only.
    pub pr_number: String,
}

impl LogEntry {
    /// Creates a new log entry.
    #[must_use]
    pub fn new(
        date: impl Into<String>,
        message: impl Into<String>,
        pr_number: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            message: message.into(),
            pr_number: pr_number.into(),
        }
    }
}
