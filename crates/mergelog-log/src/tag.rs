//! Release tags and the index that groups entries under them.

use std::collections::HashMap;

use crate::LogEntry;

/// A release tag and the pull requests merged into it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tag {
    /// The date of the first log line attributed to this tag.
    pub date: String,

    /// Entries in the order they appear in the log (newest first).
    pub entries: Vec<LogEntry>,
}

impl Tag {
    /// Creates a tag with no entries.
    #[must_use]
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            entries: Vec::new(),
        }
    }
}

/// Tags in first-seen order, with their metadata.
///
/// Every name returned by [`TagIndex::names`] has a [`Tag`], and no name
/// appears twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagIndex {
    order: Vec<String>,
    tags: HashMap<String, Tag>,
}

impl TagIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a tag the first time it is seen.
    ///
    /// Returns false, leaving the index unchanged, if the name is already
    /// known.
    pub fn insert_tag(&mut self, name: impl Into<String>, date: impl Into<String>) -> bool {
        let name = name.into();
        if self.tags.contains_key(&name) {
            return false;
        }

        self.tags.insert(name.clone(), Tag::new(date));
        self.order.push(name);
        true
    }

    /// Appends an entry to the named tag.
    ///
    /// An unknown tag is created on the spot, dated from the entry.
    pub fn push_entry(&mut self, name: &str, entry: LogEntry) {
        if !self.tags.contains_key(name) {
            self.insert_tag(name, entry.date.clone());
        }

        if let Some(tag) = self.tags.get_mut(name) {
            tag.entries.push(entry);
        }
    }

    /// Returns the tag with the given name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Tag> {
        self.tags.get(name)
    }

    /// Returns tag names in first-seen order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.order
    }

    /// Iterates over tags in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Tag)> {
        self.order
            .iter()
            .filter_map(|name| self.tags.get(name).map(|tag| (name.as_str(), tag)))
    }

    /// Returns the number of tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if no tag has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns the number of entries across all tags.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.tags.values().map(|tag| tag.entries.len()).sum()
    }
}
