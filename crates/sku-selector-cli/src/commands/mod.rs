//! CLI command implementations.

mod check;
mod classify;
mod images;
mod keywords;
mod select;

pub use check::{run_check, CheckArgs};
pub use classify::{run_classify, ClassifyArgs};
pub use images::{run_images, ImagesArgs};
pub use keywords::{run_keywords, KeywordsArgs};
pub use select::{run_select, SelectArgs};

use std::fs::read_to_string;
use std::path::Path;

use miette::{miette, Result};
use sku_selector::{Catalog, CatalogError};

use crate::output::CatalogDiagnostic;

/// Read and parse a catalog snapshot, rendering parse errors against the
/// file content.
pub(crate) fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = read_to_string(path)
        .map_err(|e| miette!("Cannot read catalog file {}: {}", path.display(), e))?;

    match Catalog::from_json_str(&content) {
        Ok(catalog) => Ok(catalog),
        Err(CatalogError::Parse {
            line,
            column,
            message,
            ..
        }) => Err(CatalogDiagnostic::new(path, &content, line, column, message).into()),
        Err(e) => Err(miette!("Failed to load catalog {}: {}", path.display(), e)),
    }
}

/// Print a JSON document to stdout.
pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| miette!("Failed to serialize output: {}", e))?;
    println!("{json}");
    Ok(())
}
