//! Changelog generation pipeline.

use mergelog_git::{HistorySource, github_base_url};
use tracing::{info, warn};

use crate::{CoreResult, LogParser, MarkdownRenderer};

/// A rendered changelog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Changelog {
    /// The Markdown document.
    pub markdown: String,

    /// Number of tag sections.
    pub tags: usize,

    /// Number of pull request entries across all tags.
    pub entries: usize,
}

/// Runs extraction, parsing and rendering in sequence.
pub struct Pipeline {
    source: Box<dyn HistorySource>,
    parser: LogParser,
}

impl Pipeline {
    /// Creates a pipeline reading history from `source`.
    #[must_use]
    pub fn new(source: Box<dyn HistorySource>) -> Self {
        Self {
            source,
            parser: LogParser::new(),
        }
    }

    /// Generates the changelog document.
    ///
    /// Nothing is written; the caller decides where the document goes.
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be read or parsed, or if the
    /// remote is not a GitHub repository.
    pub fn generate(&self) -> CoreResult<Changelog> {
        let log = self.source.tagged_merge_log()?;
        let index = self.parser.parse(&log)?;

        if index.is_empty() {
            warn!("no tagged merge commits found");
        }

        let first_commit = self.source.first_commit()?;
        let repository_url = github_base_url(&self.source.remote_url()?)?;
        info!(
            tags = index.len(),
            entries = index.entry_count(),
            repository = %repository_url,
            "collected changelog entries"
        );

        let markdown = MarkdownRenderer::new(repository_url, first_commit).render(&index);

        Ok(Changelog {
            markdown,
            tags: index.len(),
            entries: index.entry_count(),
        })
    }
}
