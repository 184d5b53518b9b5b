//! Show command handler.

use anyhow::{Context, Result};
use std::path::Path;

use super::{open_store, print_entry};
use crate::cli::ShowArgs;
use crate::cli::output::{EntryListing, Output, OutputFormat};
use crate::store::EntryStore;

pub fn handle_show(args: &ShowArgs, db_path: &Path) -> Result<()> {
    let mut store = open_store(db_path)?;

    // A show is a read access: the view counter moves.
    let entry = store
        .get_entry(args.id)
        .with_context(|| format!("failed to show entry {}", args.id))?;

    match args.format {
        OutputFormat::Human => print_entry(&entry),
        OutputFormat::Json => {
            let output = Output::new(EntryListing::from(&entry));
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
