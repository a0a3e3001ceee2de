//! Shelfmark CLI - track your reading from the terminal

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parse and validate a 1-based pick/limit argument
fn parse_positive(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
    if n < 1 {
        Err("value must be at least 1".to_string())
    } else {
        Ok(n)
    }
}

#[derive(Parser)]
#[command(name = "shelfmark")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Data directory (defaults to $SHELFMARK_DATA_PATH, else ./shelfmark_data)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the book catalog
    Search {
        /// Free-text query
        query: String,

        /// Maximum number of results to show
        #[arg(short, long, default_value = "10", value_parser = parse_positive)]
        limit: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search the catalog and save a result to the reading list
    Add {
        /// Free-text query
        query: String,

        /// Which search result to save (1-based)
        #[arg(short, long, default_value = "1", value_parser = parse_positive)]
        pick: usize,
    },

    /// Show the reading list
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove a book from the reading list
    Remove {
        /// Catalog volume id (shown by `list`)
        id: String,
    },

    /// Set the current page for a tracked book
    Progress {
        /// Catalog volume id (shown by `list`)
        id: String,

        /// Page to record
        page: i64,
    },

    /// Show or clear recent search terms
    Recent {
        /// Clear the history
        #[arg(long)]
        clear: bool,
    },

    /// Time a reading session for a tracked book
    Session {
        /// Catalog volume id (shown by `list`)
        id: String,
    },
}

/// Resolve the data directory: flag, then env var, then default
fn data_dir(cli: &Cli) -> PathBuf {
    cli.data_dir.clone().unwrap_or_else(|| {
        std::env::var("SHELFMARK_DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./shelfmark_data"))
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "shelfmark_cli=debug,shelfmark_core=debug"
    } else {
        "shelfmark_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let data_dir = data_dir(&cli);

    match cli.command {
        Commands::Search { query, limit, json } => {
            commands::search(&data_dir, &query, limit, json).await
        }

        Commands::Add { query, pick } => commands::add(&data_dir, &query, pick).await,

        Commands::List { json } => commands::list(&data_dir, json).await,

        Commands::Remove { id } => commands::remove(&data_dir, &id).await,

        Commands::Progress { id, page } => commands::progress(&data_dir, &id, page).await,

        Commands::Recent { clear } => commands::recent(&data_dir, clear).await,

        Commands::Session { id } => commands::session(&data_dir, &id).await,
    }
}
