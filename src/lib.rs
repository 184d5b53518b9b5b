//! lore - a personal knowledge base on the command line

pub mod cli;
pub mod domain;
pub mod store;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_add, handle_categories, handle_edit, handle_list, handle_rm, handle_search,
        handle_show, handle_stats, handle_tag, handle_tags,
    },
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let db_path = config.db_path(cli.db.as_ref());

    if cli.verbose > 0 {
        eprintln!("using database: {}", db_path.display());
    }

    match &cli.command {
        Command::Add(args) => handle_add(args, &db_path, &config),
        Command::Show(args) => handle_show(args, &db_path),
        Command::List(args) => handle_list(args, &db_path),
        Command::Search(args) => handle_search(args, &db_path),
        Command::Edit(args) => handle_edit(args, &db_path),
        Command::Rm(args) => handle_rm(args, &db_path),
        Command::Tag(args) => handle_tag(args, &db_path),
        Command::Categories(args) => handle_categories(args, &db_path),
        Command::Tags(args) => handle_tags(args, &db_path),
        Command::Stats(args) => handle_stats(args, &db_path),
        Command::Completions(args) => {
            let mut cmd = Cli::command();
            clap_complete::generate(args.shell, &mut cmd, "lore", &mut std::io::stdout());
            Ok(())
        }
    }
}
