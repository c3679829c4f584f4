//! Error conversion utilities for CLI.
//!
//! Converts packdir-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use packdir_core::ArchiveError;
use std::path::Path;

/// Converts `ArchiveError` to user-friendly anyhow error with context
pub fn convert_archive_error(err: ArchiveError, output: &Path) -> anyhow::Error {
    match err {
        ArchiveError::Io(io_err) => {
            anyhow!(
                "I/O error while creating '{}': {}\n\
                 HINT: Check that the output location is writable and every project file is readable.",
                output.display(),
                io_err
            )
        }
        ArchiveError::Walk { path, reason } => {
            anyhow!(
                "Cannot read directory '{}' while creating '{}': {}",
                path.display(),
                output.display(),
                reason
            )
        }
        ArchiveError::TimestampOutOfRange { path, year } => {
            anyhow!(
                "Cannot store '{}' in '{}': modified in {}, after the last date ZIP supports (2107)\n\
                 HINT: Fix the file's modification time, e.g. with `touch`.",
                path.display(),
                output.display(),
                year
            )
        }
        _ => anyhow::Error::from(err)
            .context(format!("Error creating archive '{}'", output.display())),
    }
}

/// Adds context to a generic error about archive operations
pub fn add_archive_context<T>(
    result: Result<T, ArchiveError>,
    output: &Path,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_archive_error(e, output))
}
