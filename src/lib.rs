pub mod classify;
pub mod color;
pub mod config;
pub mod enumerate;
pub mod error;
pub mod model;
pub mod output;
pub mod search;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use classify::{Classifier, ClassifierOptions};
use color::ColorPolicy;
use config::EffectiveConfig;
use model::OutputFormat;
use search::FsSearch;

#[derive(Debug, clap::Parser)]
#[command(
    name = "header-sweep",
    version,
    about = "Find library headers no consumer references",
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Library header directory to enumerate candidates from.
    pub headers: Option<PathBuf>,

    /// Consumer directory to search for references (repeatable).
    #[arg(long)]
    pub external: Vec<PathBuf>,

    /// Library source directory for the internal check (defaults to the header directory).
    #[arg(long)]
    pub internal: Option<PathBuf>,

    /// Header file extension to enumerate.
    #[arg(long)]
    pub ext: Option<String>,

    /// Glob of paths to skip while searching (repeatable).
    #[arg(long)]
    pub skip: Vec<String>,

    /// Sort candidates lexicographically for deterministic output.
    #[arg(long, default_value_t = false)]
    pub sorted: bool,

    /// Print search diagnostics for one header name.
    #[arg(long)]
    pub debug_header: Option<String>,

    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(long, value_enum)]
    pub color: Option<ColorPolicy>,

    /// Exit non-zero when removal candidates exist.
    #[arg(long, default_value_t = false)]
    pub fail_on_unused: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let cfg = EffectiveConfig::load(&cli)?;

    let headers = enumerate::list_headers(&cfg.headers, &cfg.extension, cfg.sorted)?;

    if cfg.format == OutputFormat::Human {
        println!("Analyzing usage of headers in {}...", cfg.headers.display());
    }

    let search = FsSearch::new(&cfg.skip)?;
    let classifier = Classifier::new(
        &search,
        ClassifierOptions {
            external: cfg.external.clone(),
            internal: cfg.internal.clone(),
            debug_header: cfg.debug_header.clone(),
        },
    );

    let report = classifier.classify(&headers);
    output::print_report(&report, &cfg)?;

    if cli.fail_on_unused && !report.unused_everywhere.is_empty() {
        anyhow::bail!(
            "{} removal candidate(s) found and --fail-on-unused set",
            report.unused_everywhere.len()
        );
    }
    Ok(())
}
