//! Bookshelf - search a small book catalog from the console
//!
//! Without a subcommand the interactive menu session runs on stdin/stdout.
//! `search` and `list` print a single result set and exit.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use bookshelf_core::catalog::{Catalog, SearchService};
use bookshelf_core::console::Session;

mod search_cli;

/// Log levels
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "bookshelf",
    about = "Search a small book catalog by title or author",
    version
)]
struct Cli {
    #[clap(subcommand)]
    command: Option<Command>,

    /// Set log level (RUST_LOG takes precedence when set)
    #[clap(long, default_value = "warn", global = true)]
    log_level: LogLevel,

    /// Load the catalog from a YAML seed file instead of the built-in books
    #[clap(long, global = true)]
    catalog: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search books whose title or author contains a keyword
    Search {
        /// Keyword (case-insensitive substring)
        keyword: String,

        /// Output results as JSON
        #[clap(long)]
        json: bool,
    },

    /// List every book in the catalog
    List {
        /// Output results as JSON
        #[clap(long)]
        json: bool,
    },
}

/// Initialize tracing from the --log-level flag
///
/// Logs go to stderr; stdout carries the console session.
fn initialize_tracing(log_level: &LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_filter_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => Catalog::load_from_path(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display())),
        None => Catalog::reference().context("Built-in catalog is invalid"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_tracing(&cli.log_level);

    let service = SearchService::new(load_catalog(cli.catalog.as_deref())?);

    match cli.command {
        None => interactive_command(service),
        Some(Command::Search { keyword, json }) => {
            search_cli::execute_search(&service, &keyword, json)
        }
        Some(Command::List { json }) => search_cli::execute_list(&service, json),
    }
}

fn interactive_command(service: SearchService) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    let end = Session::new(service, stdin.lock(), stdout.lock()).run()?;
    info!(?end, "Session finished");
    Ok(())
}
