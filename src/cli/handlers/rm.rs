//! Delete command handler.

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use std::path::Path;

use super::open_store;
use crate::cli::RmArgs;
use crate::store::EntryStore;

pub fn handle_rm(args: &RmArgs, db_path: &Path) -> Result<()> {
    let mut store = open_store(db_path)?;

    // Look up first so the prompt can name the entry, without bumping views.
    let entry = store
        .peek_entry(args.id)
        .with_context(|| format!("failed to delete entry {}", args.id))?;

    if !args.force {
        print!(
            "Delete entry {} \"{}\" ({})? [y/N] ",
            entry.id(),
            entry.title(),
            entry.category()
        );
        io::stdout().flush()?;

        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        let answer = answer.trim().to_lowercase();
        if answer != "y" && answer != "yes" {
            println!("Aborted.");
            return Ok(());
        }
    }

    store
        .delete_entry(args.id)
        .with_context(|| format!("failed to delete entry {}", args.id))?;

    println!("Deleted entry {}.", args.id);
    Ok(())
}
