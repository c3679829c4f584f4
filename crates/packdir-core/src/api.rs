//! High-level public API for archive creation.

use std::path::Path;

use crate::ArchiveConfig;
use crate::ArchiveReport;
use crate::Result;
use crate::creation::zip::create_zip;

/// Creates a ZIP archive of `config.root` at `config.output`.
///
/// This is the main entry point. Files whose relative path matches an
/// exclusion pattern are left out; every other regular file is added once.
///
/// # Arguments
///
/// * `config` - Output path, root directory and exclusion patterns
///
/// # Errors
///
/// Returns an error if:
/// - An exclusion pattern is invalid
/// - The output cannot be created or written
/// - The root cannot be walked or a file cannot be read
///
/// On error the output file may be left incomplete.
///
/// # Examples
///
/// ```no_run
/// use packdir_core::ArchiveConfig;
/// use packdir_core::create_archive;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let report = create_archive(&ArchiveConfig::default())?;
/// println!("Created archive with {} files", report.files_added);
/// # Ok(())
/// # }
/// ```
pub fn create_archive(config: &ArchiveConfig) -> Result<ArchiveReport> {
    create_zip(config)
}

/// Archives `root` into `output` using the default exclusion patterns.
///
/// # Examples
///
/// ```no_run
/// use packdir_core::archive;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// archive("projeto.zip", ".")?;
/// # Ok(())
/// # }
/// ```
pub fn archive<P: AsRef<Path>, Q: AsRef<Path>>(output: P, root: Q) -> Result<ArchiveReport> {
    let config = ArchiveConfig::default()
        .with_output(output.as_ref())
        .with_root(root.as_ref());
    create_archive(&config)
}
