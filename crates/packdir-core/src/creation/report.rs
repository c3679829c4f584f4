//! Archive creation operation reporting.

use std::time::Duration;

/// Summary of a completed archive run.
///
/// Only produced when the whole run succeeds; an aborted run returns its
/// error instead.
///
/// # Examples
///
/// ```
/// use packdir_core::ArchiveReport;
///
/// let mut report = ArchiveReport::default();
/// report.files_added = 10;
/// report.files_excluded = 4;
///
/// assert_eq!(report.total_files(), 14);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArchiveReport {
    /// Number of files written to the archive.
    pub files_added: usize,

    /// Number of files left out by an exclusion pattern or because they are
    /// the output archive.
    pub files_excluded: usize,

    /// Number of added files whose date was raised to 1980-01-01.
    pub timestamps_clamped: usize,

    /// Total uncompressed bytes written.
    pub bytes_written: u64,

    /// Duration of the run.
    pub duration: Duration,
}

impl ArchiveReport {
    /// Number of files seen during the walk.
    #[must_use]
    pub const fn total_files(&self) -> usize {
        self.files_added + self.files_excluded
    }

    /// Returns `true` if nothing was written.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.files_added == 0
    }
}
