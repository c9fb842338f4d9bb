//! Implementation of the `skusel classify` command.

use clap::Args;
use miette::Result;
use serde::Serialize;
use sku_selector::{color_language, normalize_label};

use crate::commands::print_json;
use crate::output::table::{format_classify_table, ClassifiedName};

/// Arguments for the classify command.
#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// Variation names to classify
    #[arg(required = true)]
    pub names: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one classified name.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ClassifyJson<'a> {
    name: &'a str,
    is_color: bool,
    language: Option<&'static str>,
    normalized: &'a str,
}

/// Run the classify command.
pub fn run_classify(args: ClassifyArgs) -> Result<i32> {
    let classified: Vec<ClassifiedName> = args
        .names
        .into_iter()
        .map(|name| {
            let language = color_language(&name);
            ClassifiedName {
                normalized: normalize_label(&name),
                is_color: language.is_some(),
                language,
                name,
            }
        })
        .collect();

    if args.json {
        let json: Vec<ClassifyJson<'_>> = classified
            .iter()
            .map(|c| ClassifyJson {
                name: &c.name,
                is_color: c.is_color,
                language: c.language,
                normalized: &c.normalized,
            })
            .collect();
        print_json(&json)?;
    } else {
        println!("{}", format_classify_table(&classified));
    }

    Ok(exitcode::OK)
}
