//! SQLite schema creation for the knowledge base.

use rusqlite::Connection;

/// Creates the database schema.
///
/// Idempotent - calling it multiple times is safe.
///
/// # Tables Created
/// - `entries` - Knowledge-base entries
/// - `categories` - Single-valued grouping labels, unique by name
/// - `tags` - Multi-valued labels with a display color, unique by name
/// - `entry_tags` - Many-to-many junction for entries and tags
///
/// Deleting an entry cascades through `entry_tags` only; category and tag
/// rows are never removed by a delete.
pub fn create_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;

    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS categories (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL UNIQUE,
            description TEXT,
            created TEXT NOT NULL
        );",
    )?;

    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS tags (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL UNIQUE,
            color TEXT NOT NULL,
            created TEXT NOT NULL
        );",
    )?;

    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS entries (
            id INTEGER PRIMARY KEY,
            title TEXT NOT NULL,
            content TEXT NOT NULL,
            category_id INTEGER NOT NULL REFERENCES categories(id),
            author TEXT NOT NULL DEFAULT 'Anonymous',
            views INTEGER NOT NULL DEFAULT 0,
            created TEXT NOT NULL,
            updated TEXT NOT NULL
        );",
    )?;

    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS entry_tags (
            entry_id INTEGER NOT NULL REFERENCES entries(id) ON DELETE CASCADE,
            tag_id INTEGER NOT NULL REFERENCES tags(id),
            PRIMARY KEY (entry_id, tag_id)
        );",
    )?;

    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_entries_category ON entries(category_id);
         CREATE INDEX IF NOT EXISTS idx_entries_created ON entries(created);
         CREATE INDEX IF NOT EXISTS idx_categories_name ON categories(name);
         CREATE INDEX IF NOT EXISTS idx_tags_name ON tags(name);",
    )?;

    Ok(())
}
