//! Command handlers for the CLI.

mod add;
mod edit;
mod list;
mod metadata;
mod rm;
mod search;
mod show;
mod stats;

pub use add::handle_add;
pub use edit::handle_edit;
pub use list::handle_list;
pub use metadata::{handle_categories, handle_tag, handle_tags};
pub use rm::handle_rm;
pub use search::handle_search;
pub use show::handle_show;
pub use stats::handle_stats;

use anyhow::{Context, Result};
use std::path::Path;

use crate::cli::output::{EntryListing, Output, OutputFormat};
use crate::domain::Entry;
use crate::store::SqliteStore;

/// Opens the store at the resolved database path.
pub(crate) fn open_store(db_path: &Path) -> Result<SqliteStore> {
    SqliteStore::open(db_path)
        .with_context(|| format!("failed to open database at {}", db_path.display()))
}

/// Truncates a string to a maximum display width, adding ellipsis if needed.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}

/// Prints a full entry block for human output.
pub(crate) fn print_entry(entry: &Entry) {
    println!("[{}] {}", entry.id(), entry.title());
    println!("Category: {}", entry.category());
    println!("Author:   {}", entry.author());
    if !entry.tags().is_empty() {
        let tags: Vec<&str> = entry.tags().iter().map(|t| t.as_str()).collect();
        println!("Tags:     {}", tags.join(", "));
    }
    println!("Views:    {}", entry.views());
    println!("Created:  {}", entry.created().format("%Y-%m-%d %H:%M"));
    println!("Updated:  {}", entry.updated().format("%Y-%m-%d %H:%M"));
    println!();
    println!("{}", entry.content());
}

/// Prints a compact table of entries for human output.
pub(crate) fn print_entry_table(entries: &[Entry]) {
    println!("{:<6}  {:<40}  {:<20}  {:>10}", "ID", "Title", "Category", "Created");
    println!(
        "{:<6}  {:<40}  {:<20}  {:>10}",
        "------",
        "----------------------------------------",
        "--------------------",
        "----------"
    );

    for entry in entries {
        println!(
            "{:<6}  {:<40}  {:<20}  {:>10}",
            entry.id(),
            truncate_str(entry.title(), 40),
            truncate_str(entry.category().as_str(), 20),
            entry.created().format("%Y-%m-%d").to_string(),
        );
    }

    println!();
    println!("{} entr{}", entries.len(), if entries.len() == 1 { "y" } else { "ies" });
}

/// Prints a list of entries in the requested format.
pub(crate) fn print_entries(entries: &[Entry], format: OutputFormat, empty_msg: &str) -> Result<()> {
    match format {
        OutputFormat::Human => {
            if entries.is_empty() {
                println!("{}", empty_msg);
            } else {
                print_entry_table(entries);
            }
        }
        OutputFormat::Json => {
            let listings: Vec<EntryListing> = entries.iter().map(EntryListing::from).collect();
            println!("{}", serde_json::to_string_pretty(&Output::new(listings))?);
        }
    }
    Ok(())
}
