//! Implementation of the `skusel images` command.

use std::path::PathBuf;

use clap::Args;
use miette::{IntoDiagnostic, Result};
use owo_colors::OwoColorize;
use serde::Serialize;
use sku_selector::{ImageMap, SelectorConfig};

use crate::commands::{load_catalog, print_json};
use crate::output::table::format_image_table;

/// Arguments for the images command.
#[derive(Debug, Args)]
pub struct ImagesArgs {
    /// Catalog snapshot (JSON)
    #[arg(long)]
    pub catalog: PathBuf,

    /// Label pattern selecting thumbnail images (case-insensitive regex)
    #[arg(long)]
    pub thumbnail: Option<String>,

    /// Rewrite image URLs for this width
    #[arg(long)]
    pub width: Option<u32>,

    /// Rewrite image URLs for this height
    #[arg(long)]
    pub height: Option<u32>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ImagesJson<'a> {
    thumbnail_mode: bool,
    #[serde(flatten)]
    map: &'a ImageMap,
}

/// Run the images command.
pub fn run_images(args: ImagesArgs) -> Result<i32> {
    let catalog = load_catalog(&args.catalog)?;
    let config = SelectorConfig::builder()
        .maybe_thumbnail_image(args.thumbnail)
        .build();
    let filter = config.label_filter().into_diagnostic()?;
    let map = ImageMap::build(catalog.items(), catalog.variations(), filter.as_ref());

    if args.json {
        print_json(&ImagesJson {
            thumbnail_mode: filter.is_some(),
            map: &map,
        })?;
        return Ok(exitcode::OK);
    }

    println!("{}", format_image_table(&map, args.width, args.height));
    if map.collected_labels().is_empty() {
        println!("\n{}", "No image labels matched.".dimmed());
    } else {
        println!("\nCollected labels:");
        for label in map.collected_labels() {
            println!("  - {label}");
        }
    }

    Ok(exitcode::OK)
}
