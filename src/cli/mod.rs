//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// lore - a personal knowledge base on the command line
#[derive(Parser, Debug)]
#[command(name = "lore", version, about, long_about = None)]
pub struct Cli {
    /// Database file (overrides config file)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new entry
    Add(AddArgs),

    /// Show an entry's full content (counts as a read)
    Show(ShowArgs),

    /// List entries, optionally filtered by category or tag
    #[command(name = "ls")]
    List(ListArgs),

    /// Search entries by keyword across title, content, category, and tags
    Search(SearchArgs),

    /// Update fields of an existing entry
    Edit(EditArgs),

    /// Delete an entry
    Rm(RmArgs),

    /// Add a tag to an entry
    Tag(TagArgs),

    /// List all categories
    Categories(CategoriesArgs),

    /// List all tags
    Tags(TagsArgs),

    /// Show knowledge-base statistics
    Stats(StatsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `add` command
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Entry title
    pub title: String,

    /// Entry content
    pub content: String,

    /// Category for the entry (auto-created on first use)
    #[arg(short, long)]
    pub category: String,

    /// Author (defaults to config author, then "Anonymous")
    #[arg(short, long)]
    pub author: Option<String>,

    /// Tag for the entry (can be specified multiple times)
    #[arg(short, long = "tag", action = ArgAction::Append)]
    pub tags: Vec<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Entry ID
    pub id: i64,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `ls` (list) command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Filter by category name
    #[arg(short, long)]
    pub category: Option<String>,

    /// Filter by tag name
    #[arg(short, long)]
    pub tag: Option<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `search` command
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Search keyword (case-insensitive substring)
    pub keyword: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `edit` command
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Entry ID
    pub id: i64,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New content
    #[arg(long)]
    pub content: Option<String>,

    /// New category (auto-created on first use)
    #[arg(short, long)]
    pub category: Option<String>,

    /// New author
    #[arg(short, long)]
    pub author: Option<String>,

    /// Replace the tag set (can be specified multiple times; an empty
    /// value clears all tags)
    #[arg(short, long = "tag", action = ArgAction::Append, num_args = 0..=1, default_missing_value = "")]
    pub tags: Vec<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `rm` command
#[derive(Parser, Debug)]
pub struct RmArgs {
    /// Entry ID
    pub id: i64,

    /// Skip the confirmation prompt
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `tag` command (add tag to entry)
#[derive(Parser, Debug)]
pub struct TagArgs {
    /// Entry ID
    pub id: i64,

    /// Tag to add (auto-created on first use)
    pub tag: String,

    /// Display color for a newly created tag (hex, e.g. #ff8800)
    #[arg(long)]
    pub color: Option<String>,
}

/// Arguments for the `categories` command
#[derive(Parser, Debug)]
pub struct CategoriesArgs {
    /// Show entry counts for each category
    #[arg(long)]
    pub counts: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `tags` command
#[derive(Parser, Debug)]
pub struct TagsArgs {
    /// Show entry counts for each tag
    #[arg(long)]
    pub counts: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `stats` command
#[derive(Parser, Debug)]
pub struct StatsArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
