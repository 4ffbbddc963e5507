//! Splice a generated nav.yml into a base mkdocs config.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use optdoc::config::NAV_PLACEHOLDER;
use optdoc::logging::{self, LogFormat};
use optdoc::merge::merge_nav;
use std::fs;
use std::path::PathBuf;
use tracing::warn;

#[derive(Parser)]
#[command(name = "merge-nav", about = "Insert generated navigation into a base site config")]
struct Cli {
    /// Base config containing the placeholder line
    base: PathBuf,

    /// Navigation file produced by optdoc
    nav: PathBuf,

    /// Merged config to write
    output: PathBuf,

    /// Line in the base config replaced by the navigation
    #[arg(long, default_value = NAV_PLACEHOLDER)]
    placeholder: String,

    /// Increase log verbosity
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(LogFormat::Human, cli.verbose);

    let base = fs::read_to_string(&cli.base)
        .with_context(|| format!("failed to read {}", cli.base.display()))?;
    let nav = fs::read_to_string(&cli.nav)
        .with_context(|| format!("failed to read {}", cli.nav.display()))?;

    let merged = merge_nav(&base, &nav, &cli.placeholder).unwrap_or_else(|| {
        warn!(base = %cli.base.display(), placeholder = %cli.placeholder, "placeholder not found, copying base unchanged");
        base.clone()
    });

    fs::write(&cli.output, merged)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    println!("Merged navigation into {}", cli.output.display());
    Ok(())
}
