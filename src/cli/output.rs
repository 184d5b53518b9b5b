//! Output format types for CLI commands.

use crate::domain::Entry;
use crate::store::{CategoryWithCount, Statistics, TagWithCount};
use clap::ValueEnum;
use serde::Serialize;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A single entry in listing output.
#[derive(Debug, Serialize)]
pub struct EntryListing {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub category: String,
    pub author: String,
    pub views: u32,
    pub tags: Vec<String>,
    pub created: String,
    pub updated: String,
}

impl From<&Entry> for EntryListing {
    fn from(entry: &Entry) -> Self {
        Self {
            id: entry.id(),
            title: entry.title().to_string(),
            content: entry.content().to_string(),
            category: entry.category().to_string(),
            author: entry.author().to_string(),
            views: entry.views(),
            tags: entry.tags().iter().map(|t| t.to_string()).collect(),
            created: entry.created().to_rfc3339(),
            updated: entry.updated().to_rfc3339(),
        }
    }
}

/// A category with optional count.
#[derive(Debug, Serialize)]
pub struct CategoryListing {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

impl CategoryListing {
    pub fn from_count(cwc: &CategoryWithCount, with_count: bool) -> Self {
        Self {
            name: cwc.name().to_string(),
            description: cwc.description().map(|d| d.to_string()),
            count: with_count.then_some(cwc.count()),
        }
    }
}

/// A tag with its color and optional count.
#[derive(Debug, Serialize)]
pub struct TagListing {
    pub name: String,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

impl TagListing {
    pub fn from_count(twc: &TagWithCount, with_count: bool) -> Self {
        Self {
            name: twc.name().to_string(),
            color: twc.color().to_string(),
            count: with_count.then_some(twc.count()),
        }
    }
}

/// Aggregated counts for the `stats` command.
#[derive(Debug, Serialize)]
pub struct StatsListing {
    pub entries: u32,
    pub categories: u32,
    pub tags: u32,
    pub per_category: Vec<CategoryListing>,
}

impl From<&Statistics> for StatsListing {
    fn from(stats: &Statistics) -> Self {
        Self {
            entries: stats.entry_count,
            categories: stats.category_count,
            tags: stats.tag_count,
            per_category: stats
                .per_category
                .iter()
                .map(|c| CategoryListing::from_count(c, true))
                .collect(),
        }
    }
}
