//! Git error types.

use thiserror::Error;

/// Git-related errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// Not a git repository.
    #[error("not a git repository: {0}")]
    NotARepo(std::path::PathBuf),

    /// The git binary could not be started.
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The git binary exited with a failure status.
    #[error("`{command}` exited with status {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: i32,
        stderr: String,
    },

    /// The git binary produced output that is not valid UTF-8.
    #[error("`{0}` produced invalid UTF-8 output")]
    InvalidOutput(String),

    /// No commits found.
    #[error("no commits found")]
    NoCommits,

    /// The remote URL is not a GitHub repository URL.
    #[error("unsupported remote URL: {0}")]
    UnsupportedRemote(String),

    /// Git2 error.
    #[error("git error: {0}")]
    Git2(#[from] git2::Error),
}

/// Result type for git operations.
pub type GitResult<T> = Result<T, GitError>;
