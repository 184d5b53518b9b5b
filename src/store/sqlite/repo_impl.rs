//! EntryStore trait implementation for SqliteStore.

use super::SqliteStore;
use crate::domain::{CategoryName, DEFAULT_TAG_COLOR, Entry, TagName};
use crate::store::{
    CategoryWithCount, EntryPatch, EntryStore, NewEntry, Statistics, StoreError, StoreResult,
    TagWithCount,
};
use chrono::{DateTime, Utc};
use rusqlite::Connection;
use rusqlite::types::Type;

/// Parses an RFC 3339 timestamp from a stored column.
///
/// Bad stored data surfaces as a database-level conversion failure rather
/// than a validation error, since it means the store itself is damaged.
fn parse_timestamp(idx: usize, s: &str) -> Result<DateTime<Utc>, rusqlite::Error> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

/// Reads one entry row with its category name and tag list.
///
/// Used by both the incrementing and non-incrementing fetch paths, and to
/// materialize id lists produced by the listing and search queries.
fn read_entry(conn: &Connection, id: i64) -> StoreResult<Option<Entry>> {
    let mut stmt = conn.prepare(
        "SELECT e.id, e.title, e.content, c.name, e.author, e.views, e.created, e.updated
         FROM entries e
         JOIN categories c ON e.category_id = c.id
         WHERE e.id = ?",
    )?;

    let row = stmt.query_row([id], |row| {
        let category: String = row.get(3)?;
        let category = CategoryName::new(&category)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?;
        let created = parse_timestamp(6, &row.get::<_, String>(6)?)?;
        let updated = parse_timestamp(7, &row.get::<_, String>(7)?)?;
        Ok((
            row.get::<_, i64>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            category,
            row.get::<_, String>(4)?,
            row.get::<_, u32>(5)?,
            created,
            updated,
        ))
    });

    let (id, title, content, category, author, views, created, updated) = match row {
        Ok(row) => row,
        Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let tags: Vec<TagName> = conn
        .prepare(
            "SELECT t.name FROM tags t
             JOIN entry_tags et ON t.id = et.tag_id
             WHERE et.entry_id = ?
             ORDER BY t.name",
        )?
        .query_map([id], |row| {
            let name: String = row.get(0)?;
            TagName::new(&name).map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(e))
            })
        })?
        .collect::<Result<_, _>>()?;

    Ok(Some(Entry::new(
        id, title, content, category, author, views, created, updated, tags,
    )))
}

/// Resolves a category name to its row id, creating the row on first use.
fn resolve_category(conn: &Connection, name: &CategoryName) -> StoreResult<i64> {
    conn.execute(
        "INSERT OR IGNORE INTO categories (name, description, created) VALUES (?1, ?2, ?3)",
        rusqlite::params![
            name.as_str(),
            format!("Auto-created category: {}", name),
            Utc::now().to_rfc3339(),
        ],
    )?;
    let id = conn.query_row(
        "SELECT id FROM categories WHERE name = ?",
        [name.as_str()],
        |row| row.get(0),
    )?;
    Ok(id)
}

/// Resolves a tag name to its row id, creating the row on first use.
///
/// The color applies only when the tag is created; existing tags keep
/// their stored color.
fn resolve_tag(conn: &Connection, name: &TagName, color: &str) -> StoreResult<i64> {
    conn.execute(
        "INSERT OR IGNORE INTO tags (name, color, created) VALUES (?1, ?2, ?3)",
        rusqlite::params![name.as_str(), color, Utc::now().to_rfc3339()],
    )?;
    let id = conn.query_row(
        "SELECT id FROM tags WHERE name = ?",
        [name.as_str()],
        |row| row.get(0),
    )?;
    Ok(id)
}

/// Attaches a tag to an entry, ignoring an already-present association.
fn link_tag(conn: &Connection, entry_id: i64, tag_id: i64) -> StoreResult<()> {
    conn.execute(
        "INSERT OR IGNORE INTO entry_tags (entry_id, tag_id) VALUES (?1, ?2)",
        [entry_id, tag_id],
    )?;
    Ok(())
}

/// Validates that a required text field is non-empty after trimming.
fn require_non_empty(field: &str, value: &str) -> StoreResult<()> {
    if value.trim().is_empty() {
        return Err(StoreError::Validation(format!("{} cannot be empty", field)));
    }
    Ok(())
}

impl SqliteStore {
    /// Materializes entries for a list of ids, preserving order.
    fn read_entries(&self, ids: &[i64]) -> StoreResult<Vec<Entry>> {
        let mut entries = Vec::with_capacity(ids.len());
        for &id in ids {
            if let Some(entry) = read_entry(&self.conn, id)? {
                entries.push(entry);
            }
        }
        Ok(entries)
    }
}

impl EntryStore for SqliteStore {
    fn create_entry(&mut self, new: NewEntry) -> StoreResult<Entry> {
        require_non_empty("title", &new.title)?;
        require_non_empty("content", &new.content)?;

        let id = {
            let tx = self.transaction()?;

            let category_id = resolve_category(tx.conn(), &new.category)?;
            let now = Utc::now().to_rfc3339();
            let author = new.author.as_deref().unwrap_or("Anonymous");

            tx.conn().execute(
                "INSERT INTO entries (title, content, category_id, author, views, created, updated)
                 VALUES (?1, ?2, ?3, ?4, 0, ?5, ?5)",
                rusqlite::params![new.title.trim(), new.content, category_id, author, now],
            )?;
            let id = tx.conn().last_insert_rowid();

            for tag in &new.tags {
                let tag_id = resolve_tag(tx.conn(), tag, DEFAULT_TAG_COLOR)?;
                link_tag(tx.conn(), id, tag_id)?;
            }

            tx.commit()?;
            id
        };

        self.peek_entry(id)
    }

    fn get_entry(&mut self, id: i64) -> StoreResult<Entry> {
        let changed = self
            .conn
            .execute("UPDATE entries SET views = views + 1 WHERE id = ?", [id])?;
        if changed == 0 {
            return Err(StoreError::NotFound { id });
        }
        self.peek_entry(id)
    }

    fn peek_entry(&self, id: i64) -> StoreResult<Entry> {
        read_entry(&self.conn, id)?.ok_or(StoreError::NotFound { id })
    }

    fn list_entries(&self, category: Option<&CategoryName>) -> StoreResult<Vec<Entry>> {
        let ids: Vec<i64> = match category {
            Some(name) => {
                let mut stmt = self.conn.prepare(
                    "SELECT e.id FROM entries e
                     JOIN categories c ON e.category_id = c.id
                     WHERE c.name = ?
                     ORDER BY e.created DESC, e.id DESC",
                )?;
                let ids = stmt
                    .query_map([name.as_str()], |row| row.get(0))?
                    .collect::<Result<_, _>>()?;
                ids
            }
            None => {
                let mut stmt = self
                    .conn
                    .prepare("SELECT id FROM entries ORDER BY created DESC, id DESC")?;
                let ids = stmt
                    .query_map([], |row| row.get(0))?
                    .collect::<Result<_, _>>()?;
                ids
            }
        };

        self.read_entries(&ids)
    }

    fn list_by_tag(&self, tag: &TagName) -> StoreResult<Vec<Entry>> {
        let mut stmt = self.conn.prepare(
            "SELECT DISTINCT e.id FROM entries e
             JOIN entry_tags et ON e.id = et.entry_id
             JOIN tags t ON et.tag_id = t.id
             WHERE t.name = ?
             ORDER BY e.created DESC, e.id DESC",
        )?;
        let ids: Vec<i64> = stmt
            .query_map([tag.as_str()], |row| row.get(0))?
            .collect::<Result<_, _>>()?;

        self.read_entries(&ids)
    }

    fn search(&self, keyword: &str) -> StoreResult<Vec<Entry>> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Ok(Vec::new());
        }

        // SQLite's lower() folds ASCII only, so the case-insensitive match
        // happens in Rust where to_lowercase() covers the full range.
        let needle = keyword.to_lowercase();
        let matches = |text: &str| text.to_lowercase().contains(&needle);

        let entries = self
            .list_entries(None)?
            .into_iter()
            .filter(|entry| {
                matches(entry.title())
                    || matches(entry.content())
                    || matches(entry.category().as_str())
                    || entry.tags().iter().any(|t| matches(t.as_str()))
            })
            .collect();

        Ok(entries)
    }

    fn update_entry(&mut self, id: i64, patch: EntryPatch) -> StoreResult<Entry> {
        // Existence check first so an unknown id fails with NotFound even
        // for an empty patch.
        let current = self.peek_entry(id)?;

        // An empty patch mutates nothing, so `updated` must not move either.
        if patch.is_empty() {
            return Ok(current);
        }

        if let Some(title) = &patch.title {
            require_non_empty("title", title)?;
        }
        if let Some(content) = &patch.content {
            require_non_empty("content", content)?;
        }

        {
            let tx = self.transaction()?;

            if let Some(title) = &patch.title {
                tx.execute(
                    "UPDATE entries SET title = ?1 WHERE id = ?2",
                    rusqlite::params![title.trim(), id],
                )?;
            }
            if let Some(content) = &patch.content {
                tx.execute(
                    "UPDATE entries SET content = ?1 WHERE id = ?2",
                    rusqlite::params![content, id],
                )?;
            }
            if let Some(category) = &patch.category {
                let category_id = resolve_category(tx.conn(), category)?;
                tx.execute(
                    "UPDATE entries SET category_id = ?1 WHERE id = ?2",
                    rusqlite::params![category_id, id],
                )?;
            }
            if let Some(author) = &patch.author {
                tx.execute(
                    "UPDATE entries SET author = ?1 WHERE id = ?2",
                    rusqlite::params![author, id],
                )?;
            }
            if let Some(tags) = &patch.tags {
                tx.execute("DELETE FROM entry_tags WHERE entry_id = ?", [id])?;
                for tag in tags {
                    let tag_id = resolve_tag(tx.conn(), tag, DEFAULT_TAG_COLOR)?;
                    link_tag(tx.conn(), id, tag_id)?;
                }
            }

            tx.execute(
                "UPDATE entries SET updated = ?1 WHERE id = ?2",
                rusqlite::params![Utc::now().to_rfc3339(), id],
            )?;

            tx.commit()?;
        }

        self.peek_entry(id)
    }

    fn delete_entry(&mut self, id: i64) -> StoreResult<()> {
        // entry_tags rows go with the entry via ON DELETE CASCADE.
        let changed = self.conn.execute("DELETE FROM entries WHERE id = ?", [id])?;
        if changed == 0 {
            return Err(StoreError::NotFound { id });
        }
        Ok(())
    }

    fn add_tag(&mut self, id: i64, tag: &TagName, color: Option<&str>) -> StoreResult<()> {
        self.peek_entry(id)?;

        let tx = self.transaction()?;
        let tag_id = resolve_tag(tx.conn(), tag, color.unwrap_or(DEFAULT_TAG_COLOR))?;
        link_tag(tx.conn(), id, tag_id)?;
        tx.commit()
    }

    fn categories(&self) -> StoreResult<Vec<CategoryWithCount>> {
        let mut stmt = self.conn.prepare(
            "SELECT c.name, c.description, COUNT(e.id)
             FROM categories c
             LEFT JOIN entries e ON e.category_id = c.id
             GROUP BY c.id
             ORDER BY c.name",
        )?;
        let categories = stmt
            .query_map([], |row| {
                let name: String = row.get(0)?;
                let name = CategoryName::new(&name).map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(e))
                })?;
                Ok(CategoryWithCount::new(name, row.get(1)?, row.get(2)?))
            })?
            .collect::<Result<_, _>>()?;

        Ok(categories)
    }

    fn tags(&self) -> StoreResult<Vec<TagWithCount>> {
        let mut stmt = self.conn.prepare(
            "SELECT t.name, t.color, COUNT(et.entry_id)
             FROM tags t
             LEFT JOIN entry_tags et ON et.tag_id = t.id
             GROUP BY t.id
             ORDER BY t.name",
        )?;
        let tags = stmt
            .query_map([], |row| {
                let name: String = row.get(0)?;
                let name = TagName::new(&name).map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(e))
                })?;
                Ok(TagWithCount::new(name, row.get::<_, String>(1)?, row.get(2)?))
            })?
            .collect::<Result<_, _>>()?;

        Ok(tags)
    }

    fn statistics(&self) -> StoreResult<Statistics> {
        let entry_count: u32 = self
            .conn
            .query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))?;
        let category_count: u32 = self
            .conn
            .query_row("SELECT COUNT(*) FROM categories", [], |row| row.get(0))?;
        let tag_count: u32 = self
            .conn
            .query_row("SELECT COUNT(*) FROM tags", [], |row| row.get(0))?;

        Ok(Statistics {
            entry_count,
            category_count,
            tag_count,
            per_category: self.categories()?,
        })
    }
}
