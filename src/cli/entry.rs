use std::path::Path;

use clap::Args;

use crate::cli::catalog::{print_entries_tsv_header, print_entry_text, print_entry_tsv};
use crate::cli::{load_catalog, OutputFormat};

#[derive(Args)]
pub struct EntryArgs {
    /// Entry ID (unique across the catalog)
    #[arg(required = true)]
    pub id: String,
}

pub fn run(args: EntryArgs, catalog_path: Option<&Path>, format: OutputFormat) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path)?;
    let found = catalog.get_entry(&args.id)?;

    match format {
        OutputFormat::Text => {
            println!(
                "Category: {} / {} ({})\n",
                found.category.name_native, found.category.name_secondary, found.category.id
            );
            print_entry_text(found.entry);
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "categoryId": found.category.id,
                "categoryName": found.category.name_secondary,
                "entry": found.entry,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            print_entries_tsv_header();
            print_entry_tsv(found.category.id.as_str(), found.entry);
        }
    }

    Ok(())
}
