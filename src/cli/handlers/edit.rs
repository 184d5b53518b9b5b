//! Edit command handler.

use anyhow::{Context, Result, bail};
use std::path::Path;

use super::{open_store, print_entry};
use crate::cli::EditArgs;
use crate::cli::output::{EntryListing, Output, OutputFormat};
use crate::domain::{CategoryName, TagName};
use crate::store::{EntryPatch, EntryStore};

pub fn handle_edit(args: &EditArgs, db_path: &Path) -> Result<()> {
    let mut patch = EntryPatch::new();

    if let Some(title) = &args.title {
        patch = patch.title(title);
    }
    if let Some(content) = &args.content {
        patch = patch.content(content);
    }
    if let Some(category) = &args.category {
        let category = CategoryName::new(category)
            .with_context(|| format!("invalid category: {:?}", category))?;
        patch = patch.category(category);
    }
    if let Some(author) = &args.author {
        patch = patch.author(author);
    }
    // An empty tags vec means --tag was never given; a bare `--tag` parses
    // as one empty string and clears the whole set.
    if !args.tags.is_empty() {
        let tags: Vec<TagName> = args
            .tags
            .iter()
            .filter(|t| !t.trim().is_empty())
            .map(|t| TagName::new(t).with_context(|| format!("invalid tag: {:?}", t)))
            .collect::<Result<_>>()?;
        patch = patch.tags(tags);
    }

    if patch.is_empty() {
        bail!("nothing to update: supply at least one of --title, --content, --category, --author, --tag");
    }

    let mut store = open_store(db_path)?;
    let entry = store
        .update_entry(args.id, patch)
        .with_context(|| format!("failed to update entry {}", args.id))?;

    match args.format {
        OutputFormat::Human => {
            println!("Updated entry {}.", entry.id());
            println!();
            print_entry(&entry);
        }
        OutputFormat::Json => {
            let output = Output::new(EntryListing::from(&entry));
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
