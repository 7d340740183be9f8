use std::path::{Path, PathBuf};

use clap::Args;

use crate::catalog::error::CatalogError;
use crate::catalog::store::Catalog;
use crate::cli::{load_catalog, truncate, tsv_cell, OutputFormat};
use crate::core::entry::Entry;

/// Number of entries shown by `show` unless `--full` is given
const DEFAULT_SHOWN_ENTRIES: usize = 25;

#[derive(Args)]
pub struct ShowArgs {
    /// Category ID
    #[arg(required = true)]
    pub id: String,

    /// Show every entry with all of its fields
    #[arg(long)]
    pub full: bool,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Output file path
    #[arg(required = true)]
    pub output: PathBuf,
}

pub fn run_list(
    catalog_path: Option<&Path>,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path)?;

    if verbose {
        eprintln!(
            "Loaded catalog with {} categories, {} entries (fingerprint {})",
            catalog.len_categories(),
            catalog.len_entries(),
            catalog.fingerprint()
        );
    }

    let summaries = catalog.list_categories();

    match format {
        OutputFormat::Text => {
            // Calculate column widths dynamically
            let id_width = summaries
                .iter()
                .map(|s| s.id.as_str().chars().count())
                .max()
                .unwrap_or(2)
                .max(2);
            let native_width = summaries
                .iter()
                .map(|s| s.name_native.chars().count().min(30))
                .max()
                .unwrap_or(4)
                .max(4);
            let secondary_width = summaries
                .iter()
                .map(|s| s.name_secondary.chars().count().min(30))
                .max()
                .unwrap_or(4)
                .max(4);

            let total_width = id_width + native_width + secondary_width + 8 + 3;

            println!("Supplication Catalog ({} categories)\n", summaries.len());
            println!(
                "{:<id_w$} {:<nat_w$} {:<sec_w$} {:>8}",
                "ID",
                "Name",
                "Name (2)",
                "Entries",
                id_w = id_width,
                nat_w = native_width,
                sec_w = secondary_width,
            );
            println!("{}", "-".repeat(total_width));

            for s in &summaries {
                println!(
                    "{:<id_w$} {:<nat_w$} {:<sec_w$} {:>8}",
                    s.id.as_str(),
                    truncate(s.name_native, native_width),
                    truncate(s.name_secondary, secondary_width),
                    s.entry_count,
                    id_w = id_width,
                    nat_w = native_width,
                    sec_w = secondary_width,
                );
                if verbose && !s.icon.is_empty() {
                    println!("  └─ icon: {}", s.icon);
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summaries)?);
        }
        OutputFormat::Tsv => {
            println!("id\tname_native\tname_secondary\ticon\tentry_count");
            for s in &summaries {
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    tsv_cell(s.id.as_str()),
                    tsv_cell(s.name_native),
                    tsv_cell(s.name_secondary),
                    tsv_cell(s.icon),
                    s.entry_count
                );
            }
        }
    }

    Ok(())
}

pub fn run_show(
    args: ShowArgs,
    catalog_path: Option<&Path>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path)?;
    let category = catalog.get_category(&args.id)?;

    match format {
        OutputFormat::Text => {
            println!("Category: {} / {}\n", category.name_native, category.name_secondary);
            println!("ID:      {}", category.id);
            if !category.icon.is_empty() {
                println!("Icon:    {}", category.icon);
            }
            println!("Entries: {}", category.entries.len());

            let shown = if args.full {
                &category.entries[..]
            } else {
                &category.entries[..category.entries.len().min(DEFAULT_SHOWN_ENTRIES)]
            };

            if args.full {
                for entry in shown {
                    println!();
                    print_entry_text(entry);
                }
            } else {
                println!("\n{:<20} Title", "ID");
                println!("{}", "-".repeat(60));
                for entry in shown {
                    println!("{:<20} {}", entry.id.as_str(), truncate(entry.label(), 50));
                }
            }

            if !args.full && category.entries.len() > DEFAULT_SHOWN_ENTRIES {
                println!(
                    "\n... and {} more entries (use --full to show all)",
                    category.entries.len() - DEFAULT_SHOWN_ENTRIES
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(category)?);
        }
        OutputFormat::Tsv => {
            print_entries_tsv_header();
            for entry in &category.entries {
                print_entry_tsv(category.id.as_str(), entry);
            }
        }
    }

    Ok(())
}

pub fn run_validate(catalog_path: Option<&Path>, format: OutputFormat) -> anyhow::Result<()> {
    let result = match catalog_path {
        Some(path) => Catalog::load_from_file(path),
        None => Catalog::load_embedded(),
    };

    let report = match result {
        Ok(catalog) => {
            match format {
                OutputFormat::Json => {
                    let output = serde_json::json!({
                        "valid": true,
                        "categories": catalog.len_categories(),
                        "entries": catalog.len_entries(),
                        "fingerprint": catalog.fingerprint(),
                        "violations": [],
                    });
                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
                OutputFormat::Text | OutputFormat::Tsv => {
                    println!(
                        "Catalog is valid: {} categories, {} entries (fingerprint {})",
                        catalog.len_categories(),
                        catalog.len_entries(),
                        catalog.fingerprint()
                    );
                }
            }
            return Ok(());
        }
        Err(CatalogError::Invalid(report)) => report,
        Err(other) => return Err(other.into()),
    };

    match format {
        OutputFormat::Text => {
            println!("Catalog is INVALID: {} violation(s)\n", report.len());
            for violation in report.iter() {
                println!("  - {violation}");
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "valid": false,
                "violations": report.violations,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("kind\tmessage");
            for violation in report.iter() {
                println!("{}\t{}", violation.kind(), tsv_cell(&violation.to_string()));
            }
        }
    }

    anyhow::bail!("catalog has {} violation(s)", report.len())
}

pub fn run_export(args: ExportArgs, catalog_path: Option<&Path>) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path)?;

    let json = catalog.to_json()?;
    std::fs::write(&args.output, json)?;

    println!(
        "Exported {} categories ({} entries) to {}",
        catalog.len_categories(),
        catalog.len_entries(),
        args.output.display()
    );

    Ok(())
}

pub(crate) fn print_entry_text(entry: &Entry) {
    println!("[{}] {}", entry.id, entry.label());
    if let (Some(native), Some(_)) = (&entry.title_native, &entry.title_secondary) {
        println!("  Title:            {native}");
    }
    println!("  Text:             {}", entry.primary_script);
    if let Some(t) = &entry.transliteration_primary {
        println!("  Transliteration:  {t}");
    }
    if let Some(t) = &entry.transliteration_secondary {
        println!("  Transliteration2: {t}");
    }
    println!("  Translation:      {}", entry.translation_native);
    println!("  Translation2:     {}", entry.translation_secondary);
    if let Some(citation) = &entry.citation {
        println!("  Source:           {citation}");
    }
}

pub(crate) fn print_entries_tsv_header() {
    println!("category_id\tentry_id\ttitle_secondary\tprimary_script\ttranslation_native\ttranslation_secondary\tcitation");
}

pub(crate) fn print_entry_tsv(category_id: &str, entry: &Entry) {
    println!(
        "{}\t{}\t{}\t{}\t{}\t{}\t{}",
        tsv_cell(category_id),
        tsv_cell(entry.id.as_str()),
        tsv_cell(entry.title_secondary.as_deref().unwrap_or("")),
        tsv_cell(&entry.primary_script),
        tsv_cell(&entry.translation_native),
        tsv_cell(&entry.translation_secondary),
        tsv_cell(entry.citation.as_deref().unwrap_or(""))
    );
}
