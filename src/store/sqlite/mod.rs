//! SQLite-backed entry store implementation.

mod connection;
mod repo_impl;
mod transaction;


use rusqlite::Connection;

pub use transaction::Transaction;

/// SQLite-backed knowledge-base store.
///
/// Owns the database connection. Constructed explicitly and passed by
/// reference to callers; there is no process-wide instance.
pub struct SqliteStore {
    pub(crate) conn: Connection,
}
