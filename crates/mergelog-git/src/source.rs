//! History source trait.

use mergelog_log::RawLog;

use crate::GitResult;

/// The version-control capabilities changelog generation relies on.
pub trait HistorySource {
    /// Returns the merge commits reachable from any tag, newest first.
    ///
    /// Each record carries the commit body, subject, ref decoration and
    /// commit date, in that order.
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be read.
    fn tagged_merge_log(&self) -> GitResult<RawLog>;

    /// Returns the URL of the upstream remote, as configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote is missing.
    fn remote_url(&self) -> GitResult<String>;

    /// Returns the hash of the oldest commit reachable from `HEAD`.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository has no commits.
    fn first_commit(&self) -> GitResult<String>;
}
