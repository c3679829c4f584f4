//! CLI argument parsing using clap.

use clap::Parser;
use packdir_core::ArchiveConfig;

/// Packages the current directory into projeto.zip, leaving out build
/// artifacts, dependency directories and environment files.
#[derive(Parser)]
#[command(name = "packdir")]
#[command(author, version, about, long_about = None)]
pub struct Cli {}

impl Cli {
    /// Archive configuration for this invocation.
    ///
    /// The tool takes no options, so this is always the default.
    pub fn config(&self) -> ArchiveConfig {
        ArchiveConfig::default()
    }
}
