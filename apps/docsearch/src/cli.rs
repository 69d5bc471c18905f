use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase verbosity. Can be used multiple times (e.g., -v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search titles and texts of a documentation search index
    Query {
        /// Case-insensitive substring to look for
        query: String,
        /// Search index file (defaults to `index-path` from the config file)
        #[arg(short, long)]
        index: Option<PathBuf>,
        /// Only show entries of this category (page, section, type, function, ...)
        #[arg(short, long)]
        category: Option<String>,
        /// Show at most this many results
        #[arg(short = 'n', long)]
        limit: Option<usize>,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show entry, page and category counts of a search index
    Stats {
        /// Search index file (defaults to `index-path` from the config file)
        #[arg(short, long)]
        index: Option<PathBuf>,
    },
}
