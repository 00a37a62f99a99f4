//! Core library for Mergelog.
//!
//! This crate turns tagged merge history into a Markdown changelog: it parses
//! the raw log into a [`TagIndex`](mergelog_log::TagIndex), renders it, and
//! writes the result.

mod error;
mod output;
mod parser;
mod pipeline;
mod render;

pub use error::{CoreError, CoreResult, ParseError};
pub use output::write_changelog;
pub use parser::LogParser;
pub use pipeline::{Changelog, Pipeline};
pub use render::{CHANGELOG_HEADER, MarkdownRenderer};
