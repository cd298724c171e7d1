//! lingokit
//!
//! Command-line entry point: resolves one key against the configured
//! translations and prints the result. Log output goes to stderr so the
//! result can be piped.

mod cli;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use lingokit::{config::Settings, utils::logging, Localizer};

use crate::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut settings = Settings::new().context("Failed to load configuration")?;
    cli.apply(&mut settings.i18n);
    settings.validate()?;

    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}", lingokit::info());

    info!("Loading translations from {}", settings.i18n.resource_dir);
    let localizer = Localizer::from_config(&settings.i18n)
        .with_context(|| format!("Failed to load translations from {}", settings.i18n.resource_dir))?;

    let text = localizer
        .lookup(cli.key.as_str(), &cli.format_params())
        .with_context(|| format!("Failed to resolve '{}' in {}", cli.key, localizer.current_language()))?;
    println!("{}", text);

    Ok(())
}
