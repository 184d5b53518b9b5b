//! Entry record as stored in the knowledge base.

use crate::domain::{CategoryName, TagName};
use chrono::{DateTime, Utc};

/// A single knowledge-base entry.
///
/// This is the typed view of a stored row: identifier, text fields, the
/// owning category, attached tags, the view counter, and both timestamps.
/// Instances are produced by the store; mutating the database does not
/// change values already held in an `Entry`.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    id: i64,
    title: String,
    content: String,
    category: CategoryName,
    author: String,
    views: u32,
    created: DateTime<Utc>,
    updated: DateTime<Utc>,
    tags: Vec<TagName>,
}

impl Entry {
    /// Creates a new Entry with all fields.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        title: impl Into<String>,
        content: impl Into<String>,
        category: CategoryName,
        author: impl Into<String>,
        views: u32,
        created: DateTime<Utc>,
        updated: DateTime<Utc>,
        tags: Vec<TagName>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            category,
            author: author.into(),
            views,
            created,
            updated,
            tags,
        }
    }

    /// Returns the entry's stable identifier.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Returns the entry's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the entry's full content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the owning category's name.
    pub fn category(&self) -> &CategoryName {
        &self.category
    }

    /// Returns the entry's author.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns how many times the entry has been read.
    pub fn views(&self) -> u32 {
        self.views
    }

    /// Returns when the entry was created.
    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    /// Returns when the entry was last modified.
    pub fn updated(&self) -> DateTime<Utc> {
        self.updated
    }

    /// Returns the entry's tag names.
    pub fn tags(&self) -> &[TagName] {
        &self.tags
    }

    /// Returns a truncated preview of the content.
    ///
    /// Truncation counts characters, not bytes, so multibyte content
    /// never splits mid-character.
    pub fn preview(&self, max_chars: usize) -> String {
        if self.content.chars().count() <= max_chars {
            self.content.clone()
        } else {
            let truncated: String = self.content.chars().take(max_chars).collect();
            format!("{}...", truncated)
        }
    }
}
