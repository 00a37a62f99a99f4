//! Changelog data types for Mergelog.
//!
//! This crate provides the types shared by the extractor, parser and renderer:
//! - [`RawLog`]: Tagged merge history as emitted by the version-control tool
//! - [`LogEntry`]: A single merged pull request
//! - [`Tag`] and [`TagIndex`]: Entries grouped by release tag, newest first

mod entry;
mod raw;
mod tag;

pub use entry::LogEntry;
pub use raw::RawLog;
pub use tag::{Tag, TagIndex};
