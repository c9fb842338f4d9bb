//! Implementation of the `skusel keywords` command.

use std::collections::BTreeMap;

use clap::Args;
use miette::Result;
use owo_colors::OwoColorize;
use sku_keywords::{color_keywords, LANGUAGES};

use crate::commands::print_json;
use crate::output::table::format_keyword_table;

/// Arguments for the keywords command.
#[derive(Debug, Args)]
pub struct KeywordsArgs {
    /// Only list keywords for this language code (e.g., pt, bg)
    #[arg(long)]
    pub lang: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the keywords command.
pub fn run_keywords(args: KeywordsArgs) -> Result<i32> {
    let languages: Vec<&str> = match &args.lang {
        Some(lang) => vec![lang.as_str()],
        None => LANGUAGES.to_vec(),
    };

    let mut rows: Vec<(&str, &[&str])> = Vec::new();
    for lang in languages {
        let Some(keywords) = color_keywords(lang) else {
            eprintln!(
                "{} no color keywords for language '{}' (known: {})",
                "error:".red().bold(),
                lang,
                LANGUAGES.join(", ")
            );
            return Ok(exitcode::USAGE);
        };
        rows.push((lang, keywords));
    }

    if args.json {
        let json: BTreeMap<&str, &[&str]> = rows.iter().copied().collect();
        print_json(&json)?;
    } else {
        println!("{}", format_keyword_table(&rows));
    }

    Ok(exitcode::OK)
}
