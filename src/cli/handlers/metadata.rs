//! Handlers for tag and category metadata commands.

use anyhow::{Context, Result};
use std::path::Path;

use super::open_store;
use crate::cli::output::{CategoryListing, Output, OutputFormat, TagListing};
use crate::cli::{CategoriesArgs, TagArgs, TagsArgs};
use crate::domain::TagName;
use crate::store::EntryStore;

pub fn handle_tag(args: &TagArgs, db_path: &Path) -> Result<()> {
    let tag = TagName::new(&args.tag).with_context(|| format!("invalid tag: {:?}", args.tag))?;

    if let Some(color) = &args.color
        && !(color.len() == 7 && color.starts_with('#'))
    {
        anyhow::bail!("invalid color {:?}: expected hex like #ff8800", color);
    }

    let mut store = open_store(db_path)?;
    store
        .add_tag(args.id, &tag, args.color.as_deref())
        .with_context(|| format!("failed to tag entry {}", args.id))?;

    println!("Tagged entry {} with '{}'.", args.id, tag);
    Ok(())
}

pub fn handle_categories(args: &CategoriesArgs, db_path: &Path) -> Result<()> {
    let store = open_store(db_path)?;
    let categories = store.categories().context("failed to list categories")?;

    match args.format {
        OutputFormat::Human => {
            if categories.is_empty() {
                println!("No categories.");
            } else {
                for category in &categories {
                    if args.counts {
                        println!("{}  ({})", category.name(), category.count());
                    } else {
                        println!("{}", category.name());
                    }
                }
            }
        }
        OutputFormat::Json => {
            let listings: Vec<CategoryListing> = categories
                .iter()
                .map(|c| CategoryListing::from_count(c, args.counts))
                .collect();
            println!("{}", serde_json::to_string_pretty(&Output::new(listings))?);
        }
    }

    Ok(())
}

pub fn handle_tags(args: &TagsArgs, db_path: &Path) -> Result<()> {
    let store = open_store(db_path)?;
    let tags = store.tags().context("failed to list tags")?;

    match args.format {
        OutputFormat::Human => {
            if tags.is_empty() {
                println!("No tags.");
            } else {
                for tag in &tags {
                    if args.counts {
                        println!("{}  {}  ({})", tag.name(), tag.color(), tag.count());
                    } else {
                        println!("{}  {}", tag.name(), tag.color());
                    }
                }
            }
        }
        OutputFormat::Json => {
            let listings: Vec<TagListing> = tags
                .iter()
                .map(|t| TagListing::from_count(t, args.counts))
                .collect();
            println!("{}", serde_json::to_string_pretty(&Output::new(listings))?);
        }
    }

    Ok(())
}
