//! List command handler.

use anyhow::{Context, Result, bail};
use std::path::Path;

use super::{open_store, print_entries};
use crate::cli::ListArgs;
use crate::domain::{CategoryName, Entry, TagName};
use crate::store::EntryStore;

pub fn handle_list(args: &ListArgs, db_path: &Path) -> Result<()> {
    let store = open_store(db_path)?;

    let entries: Vec<Entry> = match (&args.category, &args.tag) {
        (Some(_), Some(_)) => bail!("--category and --tag cannot be combined"),
        (Some(category), None) => {
            let category = CategoryName::new(category)
                .with_context(|| format!("invalid category: {:?}", category))?;
            store
                .list_entries(Some(&category))
                .context("failed to list entries by category")?
        }
        (None, Some(tag)) => {
            let tag = TagName::new(tag).with_context(|| format!("invalid tag: {:?}", tag))?;
            store
                .list_by_tag(&tag)
                .context("failed to list entries by tag")?
        }
        (None, None) => store.list_entries(None).context("failed to list entries")?,
    };

    print_entries(&entries, args.format, "No entries found.")
}
