//! History source backed by the `git` binary.

use std::path::PathBuf;
use std::process::Command;

use mergelog_log::RawLog;
use tracing::debug;

use crate::{GitError, GitResult, HistorySource};

/// Default git program.
pub const DEFAULT_PROGRAM: &str = "git";

/// Default upstream remote.
pub const DEFAULT_REMOTE: &str = "origin";

const FIELD_SEPARATOR: char = '\u{1f}';
const RECORD_SEPARATOR: char = '\u{1e}';
const LOG_FORMAT: &str = "--pretty=format:%b%x1f%s%x1f%d%x1f%cs%x1e";

/// Runs `git` subcommands synchronously in a fixed working directory.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
    workdir: PathBuf,
    remote: String,
}

impl GitCli {
    /// Creates a client running `git` in the given directory.
    #[must_use]
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            workdir: workdir.into(),
            remote: DEFAULT_REMOTE.to_string(),
        }
    }

    /// Sets the git program to run.
    #[must_use]
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Sets the remote used to build repository links.
    #[must_use]
    pub fn with_remote(mut self, remote: impl Into<String>) -> Self {
        self.remote = remote.into();
        self
    }

    /// Runs git with the given arguments and returns its standard output.
    fn run(&self, args: &[&str]) -> GitResult<String> {
        let command = format!("{} {}", self.program, args.join(" "));
        debug!(%command, workdir = %self.workdir.display(), "running git");

        let output = Command::new(&self.program)
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .map_err(|source| GitError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(GitError::CommandFailed {
                command,
                status: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        String::from_utf8(output.stdout).map_err(|_| GitError::InvalidOutput(command))
    }
}

impl HistorySource for GitCli {
    fn tagged_merge_log(&self) -> GitResult<RawLog> {
        let stdout = self.run(&["log", "--tags", "--merges", LOG_FORMAT])?;
        let text = stdout
            .split(RECORD_SEPARATOR)
            .map(single_line_record)
            .filter(|record| !record.is_empty())
            .collect::<Vec<_>>()
            .join("\n");

        debug!(bytes = text.len(), "read tagged merge log");
        Ok(RawLog::new(text, FIELD_SEPARATOR))
    }

    fn remote_url(&self) -> GitResult<String> {
        let url = self.run(&["remote", "get-url", &self.remote])?;
        Ok(url.trim().to_string())
    }

    fn first_commit(&self) -> GitResult<String> {
        let revisions = self.run(&["rev-list", "--reverse", "HEAD"])?;
        revisions
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .map(String::from)
            .ok_or(GitError::NoCommits)
    }
}

/// Flattens one log record onto a single line.
///
/// Only the body can span several lines; its non-blank lines are joined
/// with spaces. The separator characters count as whitespace for
/// `str::trim`, so fields are handled one at a time.
fn single_line_record(record: &str) -> String {
    let record = record.trim_start_matches(['\n', '\r']);
    if record.is_empty() {
        return String::new();
    }

    let mut fields = record.splitn(2, FIELD_SEPARATOR);
    let body = fields
        .next()
        .unwrap_or_default()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    match fields.next() {
        Some(rest) => format!("{body}{FIELD_SEPARATOR}{}", rest.replace(['\n', '\r'], " ")),
        None => body,
    }
}
