//! SKU selector CLI entry point.
//!
//! Provides command-line tools for working with catalog snapshots:
//! - `skusel classify` - Classify variation names as color axes
//! - `skusel images` - Show the image chosen for every variation value
//! - `skusel select` - Replay picks against a catalog
//! - `skusel check` - Report catalog consistency issues
//! - `skusel keywords` - List the color keywords per language

mod commands;
mod output;

use std::io::stderr;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    run_check, run_classify, run_images, run_keywords, run_select, CheckArgs, ClassifyArgs,
    ImagesArgs, KeywordsArgs, SelectArgs,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// SKU selector catalog tools.
#[derive(Debug, Parser)]
#[command(name = "skusel")]
#[command(about = "SKU selector catalog tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Classify variation names as color axes
    Classify(ClassifyArgs),
    /// Show the image resolved for each variation value
    Images(ImagesArgs),
    /// Replay picks against a catalog and print the final state
    Select(SelectArgs),
    /// Report items that break catalog consistency
    Check(CheckArgs),
    /// List supported color keywords
    Keywords(KeywordsArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors checks TTY, NO_COLOR and FORCE_COLOR itself
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Install the log subscriber. `RUST_LOG` wins over `--verbose`.
fn setup_logging(verbose: bool) {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) if verbose => EnvFilter::new("sku_selector=debug,skusel=debug"),
        Err(_) => EnvFilter::new("warn"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(stderr)
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_logging(cli.verbose);
    debug!(verbose = cli.verbose, "Logging initialized");

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Classify(args) => run_classify(args),
        Commands::Images(args) => run_images(args),
        Commands::Select(args) => run_select(args),
        Commands::Check(args) => run_check(args),
        Commands::Keywords(args) => run_keywords(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{e:?}");
            exit(exitcode::SOFTWARE);
        }
    }
}
