//! Generate reference pages and navigation from an options JSON dump.
//!
//! `optdoc options.json docs/reference` writes one page per option group under
//! the output directory plus `nav.yml` for the site generator.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use optdoc::classify::Catalog;
use optdoc::config::Config;
use optdoc::logging::{self, LogFormat};
use optdoc::{model, render, site};
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "optdoc",
    version,
    about = "Generate hierarchical reference pages and navigation from option metadata"
)]
struct Cli {
    /// Options JSON produced by the schema extractor
    options: PathBuf,

    /// Output directory for pages and nav.yml
    output: PathBuf,

    /// YAML config file (title overrides, descriptions, layout)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// First path segment of documented options
    #[arg(long, env = "OPTDOC_NAMESPACE")]
    namespace: Option<String>,

    /// Options needed under a prefix before it gets its own page
    #[arg(long)]
    min_group_size: Option<usize>,

    /// Base URL for declaration links
    #[arg(long, conflicts_with = "no_source_links")]
    source_url: Option<String>,

    /// Render declarations as plain paths instead of links
    #[arg(long)]
    no_source_links: bool,

    /// Directory prefix of page paths in nav.yml
    #[arg(long)]
    reference_dir: Option<String>,

    /// Output format: markdown (default), json
    #[arg(short = 'f', long, default_value = "markdown")]
    format: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Human)]
    log_format: LogFormat,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.log_format, cli.verbose);

    let config = resolve_config(&cli)?;
    let renderer = render::create_renderer(&cli.format, &config)?;

    // Everything is loaded and rendered before the output directory is touched.
    let options = model::load_options(&cli.options)?;
    info!(path = %cli.options.display(), count = options.len(), "loaded options");

    let catalog = Catalog::build(
        options,
        &config.namespace,
        &config.root_service,
        config.min_group_size,
    );
    let site = site::render_site(&catalog, &config, renderer.as_ref())?;

    fs::create_dir_all(&cli.output).with_context(|| {
        format!("failed to create output directory: {}", cli.output.display())
    })?;
    site::write_site(&cli.output, &site)?;
    info!(files = site.files.len(), output = %cli.output.display(), "wrote documentation");

    print!("{}", site.summary);
    Ok(())
}

/// Defaults, then the config file, then command-line overrides.
fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(ref namespace) = cli.namespace {
        config.namespace = namespace.clone();
    }
    if let Some(size) = cli.min_group_size {
        config.min_group_size = size;
    }
    if let Some(ref url) = cli.source_url {
        config.source_url = Some(url.clone());
    }
    if cli.no_source_links {
        config.source_url = None;
    }
    if let Some(ref dir) = cli.reference_dir {
        config.reference_dir = dir.clone();
    }
    config.validate()?;
    Ok(config)
}
