//! Add command handler.

use anyhow::{Context, Result};
use std::path::Path;

use super::open_store;
use crate::cli::AddArgs;
use crate::cli::config::Config;
use crate::cli::output::{EntryListing, Output, OutputFormat};
use crate::domain::{CategoryName, TagName};
use crate::store::{EntryStore, NewEntry};

pub fn handle_add(args: &AddArgs, db_path: &Path, config: &Config) -> Result<()> {
    let category = CategoryName::new(&args.category)
        .with_context(|| format!("invalid category: {:?}", args.category))?;

    let tags: Vec<TagName> = args
        .tags
        .iter()
        .map(|t| TagName::new(t).with_context(|| format!("invalid tag: {:?}", t)))
        .collect::<Result<_>>()?;

    let mut new = NewEntry::new(&args.title, &args.content, category).tags(tags);
    if let Some(author) = args.author.as_deref().or(config.author()) {
        new = new.author(author);
    }

    let mut store = open_store(db_path)?;
    let entry = store.create_entry(new).context("failed to create entry")?;

    match args.format {
        OutputFormat::Human => {
            println!("Added entry {}: {}", entry.id(), entry.title());
        }
        OutputFormat::Json => {
            let output = Output::new(EntryListing::from(&entry));
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
