//! Packdir CLI - packages the current project directory into a ZIP archive.

mod cli;
mod error;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    init_tracing();

    let config = cli.config();
    error::add_archive_context(packdir_core::create_archive(&config), &config.output)?;

    Ok(())
}

/// Initialize tracing on stderr, quiet unless `RUST_LOG` asks for more.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
