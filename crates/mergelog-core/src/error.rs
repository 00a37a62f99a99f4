//! Core error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading the raw log.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The log does not start at a tagged commit.
    #[error("commit not after a tag (line {line})")]
    CommitBeforeTag { line: usize },

    /// A record has too few fields.
    #[error("malformed log line {line}: expected at least 4 fields, found {fields}")]
    MalformedLine { line: usize, fields: usize },
}

/// Core-related errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Git error.
    #[error("git error: {0}")]
    Git(#[from] mergelog_git::GitError),

    /// Log parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The changelog could not be written.
    #[error("failed to write {}: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
