//! Raw history text as produced by the extractor.

/// Tagged merge history, one record per line.
///
/// Each record holds the commit body, subject, ref decoration and commit
/// date, joined by [`RawLog::separator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLog {
    text: String,
    separator: char,
}

impl RawLog {
    /// Creates a raw log from text whose fields are joined by `separator`.
    #[must_use]
    pub fn new(text: impl Into<String>, separator: char) -> Self {
        Self {
            text: text.into(),
            separator,
        }
    }

    /// Returns the field separator.
    #[must_use]
    pub fn separator(&self) -> char {
        self.separator
    }

    /// Iterates over the records, newest first.
    pub fn lines(&self) -> std::str::Lines<'_> {
        self.text.lines()
    }
}
