//! Tagged merge log parser.

use std::sync::LazyLock;

use mergelog_log::{LogEntry, RawLog, TagIndex};
use regex::Regex;
use tracing::trace;

use crate::ParseError;

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"tag: (v?[0-9.]+)").expect("invalid regex"));

static PULL_REQUEST_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Merge pull request #([0-9]+)").expect("invalid regex"));

/// Upper bound on the fields a record is split into.
const MAX_FIELDS: usize = 6;

/// Fields every record must carry: body, subject, decoration, date.
const REQUIRED_FIELDS: usize = 4;

const BODY: usize = 0;
const SUBJECT: usize = 1;
const DECORATION: usize = 2;
const DATE: usize = 3;

/// Groups merged pull requests under the release tag that precedes them in
/// the log.
///
/// The log is read newest first. A line decorated with a tag starts that tag;
/// every pull request merge from there on, up to the next tag, belongs to it.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogParser;

impl LogParser {
    /// Creates a new parser.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Parses the raw log into a tag index.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::CommitBeforeTag`] if the first record carries no
    /// tag, and [`ParseError::MalformedLine`] if a record has fewer than four
    /// fields.
    pub fn parse(&self, log: &RawLog) -> Result<TagIndex, ParseError> {
        let mut index = TagIndex::new();
        let mut current: Option<String> = None;

        for (number, line) in log.lines().enumerate() {
            let number = number + 1;
            trace!(line = number, content = %line, "log line");

            if line.trim().is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.splitn(MAX_FIELDS, log.separator()).collect();
            if fields.len() < REQUIRED_FIELDS {
                return Err(ParseError::MalformedLine {
                    line: number,
                    fields: fields.len(),
                });
            }

            if let Some(captures) = TAG_RE.captures(fields[DECORATION]) {
                let name = captures[1].trim().to_string();
                index.insert_tag(name.clone(), fields[DATE].trim());
                current = Some(name);
            }

            let Some(tag) = current.as_deref() else {
                return Err(ParseError::CommitBeforeTag { line: number });
            };

            let Some(captures) = PULL_REQUEST_RE.captures(fields[SUBJECT]) else {
                continue;
            };

            let entry = LogEntry::new(
                fields[DATE].trim(),
                fields[BODY].trim(),
                captures[1].trim(),
            );
            index.push_entry(tag, entry);
        }

        Ok(index)
    }
}
