//! EntryStore trait, error taxonomy, and record types.

use crate::domain::{CategoryName, Entry, TagName};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Caller input was rejected before any persistence attempt.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The referenced entry does not exist.
    #[error("no entry with id {id}")]
    NotFound { id: i64 },

    /// A uniqueness or foreign-key constraint was violated.
    ///
    /// Rare in practice since categories and tags are auto-created, but
    /// reachable through direct API misuse or a concurrent writer.
    #[error("constraint violated: {0}")]
    Constraint(String),

    /// An underlying database error occurred.
    #[error("database error: {0}")]
    Database(rusqlite::Error),

    /// An I/O error occurred while setting up the database location.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        // Surface constraint violations as their own variant so callers can
        // distinguish them from I/O-level database failures.
        if let rusqlite::Error::SqliteFailure(err, ref msg) = e
            && err.code == rusqlite::ErrorCode::ConstraintViolation
        {
            let detail = msg.clone().unwrap_or_else(|| err.to_string());
            return StoreError::Constraint(detail);
        }
        StoreError::Database(e)
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Fields for a new entry.
///
/// Author defaults to `"Anonymous"` when not supplied.
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub title: String,
    pub content: String,
    pub category: CategoryName,
    pub author: Option<String>,
    pub tags: Vec<TagName>,
}

impl NewEntry {
    /// Creates a NewEntry with the required fields.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        category: CategoryName,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            category,
            author: None,
            tags: Vec::new(),
        }
    }

    /// Sets the author.
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Sets the tags.
    pub fn tags(mut self, tags: Vec<TagName>) -> Self {
        self.tags = tags;
        self
    }
}

/// A partial update to an existing entry.
///
/// Only supplied fields are changed; `None` leaves the stored value as-is.
/// A supplied tag list replaces the entry's whole tag set.
#[derive(Debug, Clone, Default)]
pub struct EntryPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<CategoryName>,
    pub author: Option<String>,
    pub tags: Option<Vec<TagName>>,
}

impl EntryPatch {
    /// Creates an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the new title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the new content.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Sets the new category.
    pub fn category(mut self, category: CategoryName) -> Self {
        self.category = Some(category);
        self
    }

    /// Sets the new author.
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Replaces the tag set.
    pub fn tags(mut self, tags: Vec<TagName>) -> Self {
        self.tags = Some(tags);
        self
    }

    /// Returns true if no field is set.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.category.is_none()
            && self.author.is_none()
            && self.tags.is_none()
    }
}

/// A category with its entry count.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryWithCount {
    name: CategoryName,
    description: Option<String>,
    count: u32,
}

impl CategoryWithCount {
    /// Creates a new CategoryWithCount.
    pub fn new(name: CategoryName, description: Option<String>, count: u32) -> Self {
        Self {
            name,
            description,
            count,
        }
    }

    /// Returns the category name.
    pub fn name(&self) -> &CategoryName {
        &self.name
    }

    /// Returns the category description, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the number of entries in this category.
    pub fn count(&self) -> u32 {
        self.count
    }
}

/// A tag with its display color and entry count.
#[derive(Debug, Clone, PartialEq)]
pub struct TagWithCount {
    name: TagName,
    color: String,
    count: u32,
}

impl TagWithCount {
    /// Creates a new TagWithCount.
    pub fn new(name: TagName, color: impl Into<String>, count: u32) -> Self {
        Self {
            name,
            color: color.into(),
            count,
        }
    }

    /// Returns the tag name.
    pub fn name(&self) -> &TagName {
        &self.name
    }

    /// Returns the tag's display color.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Returns the number of entries carrying this tag.
    pub fn count(&self) -> u32 {
        self.count
    }
}

/// Aggregated row counts for the whole store.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub entry_count: u32,
    pub category_count: u32,
    pub tag_count: u32,
    pub per_category: Vec<CategoryWithCount>,
}

/// Repository trait for the knowledge base.
///
/// Defines the persistence interface the CLI works against. The SQLite
/// implementation is the only backend, but keeping the seam makes store
/// behavior testable without touching the command layer.
pub trait EntryStore {
    /// Creates a new entry, auto-creating its category and tags as needed.
    ///
    /// Title and content must be non-empty. Returns the persisted entry
    /// with its assigned identifier.
    fn create_entry(&mut self, new: NewEntry) -> StoreResult<Entry>;

    /// Fetches an entry for display, incrementing its view count.
    ///
    /// The returned entry reflects the incremented count.
    fn get_entry(&mut self, id: i64) -> StoreResult<Entry>;

    /// Fetches an entry without touching its view count.
    fn peek_entry(&self, id: i64) -> StoreResult<Entry>;

    /// Lists entries, optionally filtered to one category, newest first.
    fn list_entries(&self, category: Option<&CategoryName>) -> StoreResult<Vec<Entry>>;

    /// Lists entries carrying the given tag, newest first.
    fn list_by_tag(&self, tag: &TagName) -> StoreResult<Vec<Entry>>;

    /// Case-insensitive substring search over title, content, category
    /// name, and tag names. Each matching entry appears once, newest first.
    fn search(&self, keyword: &str) -> StoreResult<Vec<Entry>>;

    /// Applies a partial update; only supplied fields change.
    ///
    /// Refreshes the updated timestamp and returns the new state.
    fn update_entry(&mut self, id: i64, patch: EntryPatch) -> StoreResult<Entry>;

    /// Deletes an entry and its tag associations. Tag and category rows
    /// themselves are never removed.
    fn delete_entry(&mut self, id: i64) -> StoreResult<()>;

    /// Attaches a tag to an entry, auto-creating the tag if needed.
    ///
    /// Attaching an already-present tag is a no-op.
    fn add_tag(&mut self, id: i64, tag: &TagName, color: Option<&str>) -> StoreResult<()>;

    /// Returns all categories with entry counts, ordered by name.
    fn categories(&self) -> StoreResult<Vec<CategoryWithCount>>;

    /// Returns all tags with entry counts, ordered by name.
    fn tags(&self) -> StoreResult<Vec<TagWithCount>>;

    /// Returns aggregated row counts. No mutation.
    fn statistics(&self) -> StoreResult<Statistics>;
}
