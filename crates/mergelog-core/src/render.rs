//! Markdown changelog renderer.

use std::fmt::Write;

use mergelog_log::{Tag, TagIndex};

/// First line of every changelog.
pub const CHANGELOG_HEADER: &str = "# Changelog";

/// Renders a [`TagIndex`] as a Markdown changelog with GitHub links.
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    repository_url: String,
    first_commit: String,
}

impl MarkdownRenderer {
    /// Creates a renderer linking to `repository_url`.
    ///
    /// The oldest tag is compared against `first_commit`.
    #[must_use]
    pub fn new(repository_url: impl Into<String>, first_commit: impl Into<String>) -> Self {
        Self {
            repository_url: repository_url.into(),
            first_commit: first_commit.into(),
        }
    }

    /// Renders the whole document, newest tag first.
    #[must_use]
    pub fn render(&self, index: &TagIndex) -> String {
        let mut output = String::new();
        _ = writeln!(output, "{CHANGELOG_HEADER}\n");

        let releases: Vec<(&str, &Tag)> = index.iter().collect();
        for (position, (name, tag)) in releases.iter().enumerate() {
            let since = releases
                .get(position + 1)
                .map_or(self.first_commit.as_str(), |(older, _)| *older);
            self.render_tag(&mut output, name, tag, since);
        }

        output
    }

    fn render_tag(&self, output: &mut String, name: &str, tag: &Tag, since: &str) {
        let base = &self.repository_url;

        _ = writeln!(output, "## [{name}]({base}/tree/{name}) ({})\n", tag.date);
        _ = writeln!(output, "[Full Changelog]({base}/compare/{since}...{name})\n");

        for entry in &tag.entries {
            let pr = &entry.pr_number;
            _ = writeln!(output, "- {} [\\#{pr}]({base}/pull/{pr})", entry.message);
        }

        output.push_str("\n\n");
    }
}
