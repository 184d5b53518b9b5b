//! Search command handler.

use anyhow::{Context, Result};
use std::path::Path;

use super::{open_store, print_entries};
use crate::cli::SearchArgs;
use crate::store::EntryStore;

pub fn handle_search(args: &SearchArgs, db_path: &Path) -> Result<()> {
    let store = open_store(db_path)?;

    let entries = store
        .search(&args.keyword)
        .with_context(|| format!("search failed for keyword: {:?}", args.keyword))?;

    let empty_msg = format!("No entries matching {:?}.", args.keyword);
    print_entries(&entries, args.format, &empty_msg)
}
