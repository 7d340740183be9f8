//! Command-line interface for dua-catalog.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **list**: List categories in authoring order
//! - **show**: Show one category and its entries
//! - **entry**: Show one entry by id, with its category
//! - **search**: Case-insensitive substring search over chosen fields
//! - **validate**: Check a catalog and report every violation
//! - **export**: Write the catalog as JSON
//!
//! ## Usage
//!
//! ```text
//! # List categories of the embedded catalog
//! dua-catalog list
//!
//! # Deep link to a single entry
//! dua-catalog entry morning-1 --format json
//!
//! # Search English translations
//! dua-catalog search forgiveness --field translation-secondary
//!
//! # Validate a catalog under review
//! dua-catalog --catalog draft.json validate
//! ```

use std::ops::Deref;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::catalog::error::CatalogError;
use crate::catalog::store::Catalog;

pub mod catalog;
pub mod entry;
pub mod search;

#[derive(Parser)]
#[command(name = "dua-catalog")]
#[command(version)]
#[command(about = "Browse, search and validate a catalog of supplications")]
#[command(
    long_about = "dua-catalog reads a catalog of supplications grouped into categories.\n\nThe catalog is validated as a whole before any query runs:\n- Category and entry ids must be unique across the catalog\n- Categories must not be empty\n- Source text and both translations must be present"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Path to a catalog JSON file (optionally .gz); defaults to the embedded catalog
    #[arg(long, global = true, env = "DUA_CATALOG_PATH")]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all categories
    List,

    /// Show a category and its entries
    Show(catalog::ShowArgs),

    /// Show a single entry
    Entry(entry::EntryArgs),

    /// Search entries
    Search(search::SearchArgs),

    /// Validate the catalog and report every violation
    Validate,

    /// Export the catalog to a file
    Export(catalog::ExportArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// A catalog that is either the shared embedded one or loaded from a file
pub enum LoadedCatalog {
    Embedded(&'static Catalog),
    File(Catalog),
}

impl Deref for LoadedCatalog {
    type Target = Catalog;

    fn deref(&self) -> &Catalog {
        match self {
            Self::Embedded(catalog) => *catalog,
            Self::File(catalog) => catalog,
        }
    }
}

/// Load the catalog named on the command line, or the embedded one
pub fn load_catalog(path: Option<&Path>) -> Result<LoadedCatalog, CatalogError> {
    match path {
        Some(path) => Catalog::load_from_file(path).map(LoadedCatalog::File),
        None => Catalog::embedded().map(LoadedCatalog::Embedded),
    }
}

/// Dispatch a parsed command line
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let catalog_path = cli.catalog.as_deref();
    match cli.command {
        Commands::List => catalog::run_list(catalog_path, cli.format, cli.verbose),
        Commands::Show(args) => catalog::run_show(args, catalog_path, cli.format),
        Commands::Entry(args) => entry::run(args, catalog_path, cli.format),
        Commands::Search(args) => search::run(args, catalog_path, cli.format, cli.verbose),
        Commands::Validate => catalog::run_validate(catalog_path, cli.format),
        Commands::Export(args) => catalog::run_export(args, catalog_path),
    }
}

/// Truncate a string to at most `max` characters, marking the cut
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// Collapse tabs and newlines so a value fits in one TSV cell
pub(crate) fn tsv_cell(s: &str) -> String {
    s.replace(['\t', '\n', '\r'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer display name", 10), "a longe...");
        assert_eq!(truncate("بِسْمِ اللَّهِ", 40), "بِسْمِ اللَّهِ");
    }

    #[test]
    fn test_tsv_cell_strips_separators() {
        assert_eq!(tsv_cell("a\tb\nc"), "a b c");
    }

    #[test]
    fn test_cli_parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["dua-catalog", "entry", "a1", "--format", "json"]).unwrap();
        assert!(matches!(cli.format, OutputFormat::Json));
        assert!(matches!(cli.command, Commands::Entry(_)));
    }
}
