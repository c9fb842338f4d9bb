//! Implementation of the `skusel check` command.

use std::path::PathBuf;

use clap::Args;
use miette::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use sku_selector::CatalogIssue;

use crate::commands::{load_catalog, print_json};

/// Arguments for the check command.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Catalog snapshot (JSON)
    #[arg(long)]
    pub catalog: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct CheckJson {
    items: usize,
    variations: usize,
    issues: Vec<CatalogIssue>,
}

/// Run the check command.
///
/// Exits with `DATAERR` when the catalog has any issue.
pub fn run_check(args: CheckArgs) -> Result<i32> {
    let catalog = load_catalog(&args.catalog)?;
    let issues = catalog.issues();
    let code = if issues.is_empty() {
        exitcode::OK
    } else {
        exitcode::DATAERR
    };

    if args.json {
        print_json(&CheckJson {
            items: catalog.items().len(),
            variations: catalog.variations().len(),
            issues,
        })?;
        return Ok(code);
    }

    if issues.is_empty() {
        println!(
            "{} {} items, {} variations",
            "ok:".green().bold(),
            catalog.items().len(),
            catalog.variations().len()
        );
    } else {
        for issue in &issues {
            println!("{} {}", "issue:".yellow().bold(), issue);
        }
        println!("\n{} issue(s) found", issues.len());
    }

    Ok(code)
}
