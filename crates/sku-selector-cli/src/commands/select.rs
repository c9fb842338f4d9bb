//! Implementation of the `skusel select` command.

use std::path::PathBuf;

use clap::Args;
use miette::{IntoDiagnostic, Result};
use owo_colors::OwoColorize;
use serde::Serialize;
use sku_selector::{
    find_item, Coordinator, InitialSelection, ItemId, Navigation, Pick, ProductEvent, RecordingHost,
    Selection, SelectorConfig, VariationOptions,
};
use tracing::info;

use crate::commands::{load_catalog, print_json};
use crate::output::table::format_option_table;

/// Arguments for the select command.
#[derive(Debug, Args)]
pub struct SelectArgs {
    /// Catalog snapshot (JSON)
    #[arg(long)]
    pub catalog: PathBuf,

    /// Initial selection mode
    #[arg(long, default_value = "complete", value_parser = ["unset", "complete", "image"])]
    pub initial: String,

    /// Item currently shown by the page
    #[arg(long)]
    pub active: Option<String>,

    /// The page location already names the active item
    #[arg(long)]
    pub pinned: bool,

    /// Picks to apply in order, as Variation=Value (repeatable). A leading
    /// `!` starts a fresh selection holding only that value
    #[arg(short = 'p', long = "pick", value_parser = parse_pick)]
    pub picks: Vec<Pick>,

    /// Report selections through a callback instead of the location
    #[arg(long)]
    pub notify: bool,

    /// Label pattern selecting thumbnail images (case-insensitive regex)
    #[arg(long)]
    pub thumbnail: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SelectJson<'a> {
    selection: &'a Selection,
    all_selected: bool,
    item: Option<&'a ItemId>,
    outputs: Vec<String>,
    options: Vec<VariationOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Parse a `Variation=Value` or `!Variation=Value` pick.
fn parse_pick(s: &str) -> Result<Pick, String> {
    let (resetting, body) = match s.strip_prefix('!') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let (variation, value) = body
        .split_once('=')
        .ok_or_else(|| format!("invalid pick '{s}': expected Variation=Value"))?;
    let pick = Pick::new(variation, value);
    Ok(if resetting { pick.clearing_others() } else { pick })
}

/// Run the select command.
///
/// Picks are applied in order; the first rejected pick stops the replay and
/// the state before it is reported with exit code `DATAERR`.
pub fn run_select(args: SelectArgs) -> Result<i32> {
    let catalog = load_catalog(&args.catalog)?;
    let config = SelectorConfig::builder()
        .initial_selection(InitialSelection::from(args.initial))
        .maybe_thumbnail_image(args.thumbnail)
        .notify_sku_selected(args.notify)
        .build();

    let mut host = RecordingHost::new();
    let mut coordinator = Coordinator::new(
        catalog,
        config,
        args.active.map(ItemId::from),
        args.pinned,
        &mut host,
    )
    .into_diagnostic()?;
    info!(selection = %coordinator.selection(), "Initial selection");

    let mut error = None;
    for pick in &args.picks {
        match coordinator.select(pick, &mut host) {
            Ok(resolution) => {
                info!(selection = %resolution.selection, item = ?resolution.item, "Applied pick");
            }
            Err(e) => {
                error = Some(e.to_string());
                break;
            }
        }
    }

    let item = find_item(coordinator.catalog().items(), coordinator.selection())
        .map(|found| found.item_id.clone());
    let outputs: Vec<String> = host
        .events
        .iter()
        .map(describe_event)
        .chain(host.navigations.iter().map(describe_navigation))
        .collect();
    let code = if error.is_some() {
        exitcode::DATAERR
    } else {
        exitcode::OK
    };

    if args.json {
        print_json(&SelectJson {
            selection: coordinator.selection(),
            all_selected: coordinator.all_selected(),
            item: item.as_ref(),
            outputs,
            options: coordinator.option_states(),
            error,
        })?;
        return Ok(code);
    }

    println!("{} {}", "selection:".bold(), coordinator.selection());
    match &item {
        Some(id) => println!("{} {}", "item:".bold(), id.green()),
        None => println!("{} {}", "item:".bold(), "none".dimmed()),
    }
    println!("{}", format_option_table(&coordinator.option_states()));
    if !outputs.is_empty() {
        println!("\nHost outputs:");
        for output in &outputs {
            println!("  - {output}");
        }
    }
    if let Some(error) = error {
        eprintln!("{} {}", "error:".red().bold(), error);
    }

    Ok(code)
}

fn describe_event(event: &ProductEvent) -> String {
    match event {
        ProductEvent::SetLoadingItem(loading) => format!("loading item: {loading}"),
        ProductEvent::VariationsSelected { all_selected } => {
            format!("all variations selected: {all_selected}")
        }
        ProductEvent::SelectImageVariation(Some(id)) => format!("image variation: {id}"),
        ProductEvent::SelectImageVariation(None) => "image variation cleared".to_string(),
        ProductEvent::HideImageLabels(labels) => {
            format!("hide image labels: {}", labels.join(", "))
        }
    }
}

fn describe_navigation(navigation: &Navigation) -> String {
    match navigation {
        Navigation::SetQuerySku(Some(id)) => format!("set location sku: {id}"),
        Navigation::SetQuerySku(None) => "clear location sku".to_string(),
        Navigation::SkuSelected(Some(id)) => format!("sku selected: {id}"),
        Navigation::SkuSelected(None) => "sku selected: none".to_string(),
    }
}
