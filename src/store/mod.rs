//! Persistence layer: SQLite store and repository contract.

mod repository;
mod schema;
pub mod sqlite;

pub use repository::{
    CategoryWithCount, EntryPatch, EntryStore, NewEntry, Statistics, StoreError, StoreResult,
    TagWithCount,
};
pub use schema::create_schema;
pub use sqlite::SqliteStore;
