use std::path::Path;

use clap::Args;

use crate::catalog::query::SearchQuery;
use crate::cli::catalog::{print_entries_tsv_header, print_entry_tsv};
use crate::cli::{load_catalog, truncate, OutputFormat};
use crate::core::types::TextField;

#[derive(Args)]
pub struct SearchArgs {
    /// Text to look for (case-insensitive substring)
    #[arg(required = true)]
    pub query: String,

    /// Field(s) to search; defaults to titles, transliterations and translations
    #[arg(long = "field", value_enum, num_args = 1..)]
    pub fields: Vec<TextField>,

    /// Only search within this category
    #[arg(long)]
    pub category: Option<String>,

    /// Maximum number of results
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

/// Fields searched when none are given on the command line
const DEFAULT_FIELDS: [TextField; 6] = [
    TextField::TitleNative,
    TextField::TitleSecondary,
    TextField::TransliterationPrimary,
    TextField::TransliterationSecondary,
    TextField::TranslationNative,
    TextField::TranslationSecondary,
];

pub fn run(
    args: SearchArgs,
    catalog_path: Option<&Path>,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path)?;

    let fields = if args.fields.is_empty() {
        DEFAULT_FIELDS.to_vec()
    } else {
        args.fields
    };

    let mut query = SearchQuery::new(args.query, &fields);
    if let Some(category) = args.category {
        // Surface a typo in the category id instead of silently matching nothing
        catalog.get_category(&category)?;
        query = query.in_category(category);
    }
    if let Some(limit) = args.limit {
        query = query.limit(limit);
    }

    if verbose {
        let names: Vec<_> = fields.iter().map(ToString::to_string).collect();
        eprintln!("Searching '{}' in: {}", query.text, names.join(", "));
    }

    let hits = catalog.search(&query);

    match format {
        OutputFormat::Text => {
            println!("{} result(s) for '{}'\n", hits.len(), query.text);
            for hit in &hits {
                println!(
                    "{:<20} {:<16} {}",
                    hit.entry.id.as_str(),
                    hit.category.id.as_str(),
                    truncate(hit.entry.label(), 60)
                );
            }
        }
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = hits
                .iter()
                .map(|hit| {
                    serde_json::json!({
                        "categoryId": hit.category.id,
                        "entry": hit.entry,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            print_entries_tsv_header();
            for hit in &hits {
                print_entry_tsv(hit.category.id.as_str(), hit.entry);
            }
        }
    }

    Ok(())
}
