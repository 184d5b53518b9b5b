//! Stats command handler.

use anyhow::{Context, Result};
use std::path::Path;

use super::open_store;
use crate::cli::StatsArgs;
use crate::cli::output::{Output, OutputFormat, StatsListing};
use crate::store::EntryStore;

pub fn handle_stats(args: &StatsArgs, db_path: &Path) -> Result<()> {
    let store = open_store(db_path)?;
    let stats = store.statistics().context("failed to gather statistics")?;

    match args.format {
        OutputFormat::Human => {
            println!("Database:   {}", db_path.display());
            println!("Entries:    {}", stats.entry_count);
            println!("Categories: {}", stats.category_count);
            println!("Tags:       {}", stats.tag_count);

            if !stats.per_category.is_empty() {
                println!();
                for category in &stats.per_category {
                    println!("  {}: {}", category.name(), category.count());
                }
            }
        }
        OutputFormat::Json => {
            let output = Output::new(StatsListing::from(&stats));
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
