//! Domain types for the knowledge base.

mod category;
mod entry;
mod tag;

pub use category::{CategoryName, ParseCategoryError};
pub use entry::Entry;
pub use tag::{DEFAULT_TAG_COLOR, ParseTagError, TagName};
