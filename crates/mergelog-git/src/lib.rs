//! Git history extraction for Mergelog.
//!
//! This crate provides the Git side of changelog generation:
//! - The [`HistorySource`] capability trait and its [`GitCli`] implementation
//! - Remote URL normalisation
//! - Repository detection

mod cli;
mod error;
mod remote;
mod repository;
mod source;

pub use cli::{DEFAULT_PROGRAM, DEFAULT_REMOTE, GitCli};
pub use error::{GitError, GitResult};
pub use remote::github_base_url;
pub use repository::Repository;
pub use source::HistorySource;
