#![allow(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use omni_frontmatter::{BatchDriver, MigrateConfig, load_config_file};

#[derive(Parser, Debug)]
#[command(
    name = "fix-tags",
    about = "Migrate study and interview note metadata into YAML frontmatter"
)]
struct Cli {
    /// Notes root directory (overrides `base_path` from the config file).
    #[arg(long, short = 'r', value_name = "DIR")]
    root: Option<PathBuf>,

    /// YAML config file with directory names, extension and defaults.
    #[arg(long = "conf", short = 'c', value_name = "FILE")]
    config_file: Option<PathBuf>,

    /// Report what would change without writing any file.
    #[arg(long, default_value_t = false)]
    dry_run: bool,

    /// Debug logging on stderr.
    #[arg(long, short = 'v', default_value_t = false)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "omni_frontmatter=debug"
        } else {
            "omni_frontmatter=warn"
        })
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn resolve_config(cli: &Cli) -> Result<MigrateConfig> {
    let mut config = match &cli.config_file {
        Some(path) => load_config_file(MigrateConfig::default(), path)
            .with_context(|| format!("load config {}", path.display()))?,
        None => MigrateConfig::default(),
    };
    if let Some(root) = &cli.root {
        config.base_path.clone_from(root);
    }
    if cli.dry_run {
        config.dry_run = true;
    }
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = resolve_config(&cli)?;
    let report = BatchDriver::new(config).run().context("write report")?;

    println!();
    println!("💡 Restart Obsidian to refresh its tag index.");
    tracing::debug!(
        phases = report.phases.len(),
        converted = report.tally().converted,
        "run finished"
    );
    Ok(())
}
