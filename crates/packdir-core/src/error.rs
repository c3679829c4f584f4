//! Error types for archive creation operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `ArchiveError`.
pub type Result<T> = std::result::Result<T, ArchiveError>;

/// Errors that abort an archive creation run.
///
/// A modification time earlier than the ZIP epoch is not listed here: it is
/// classified by [`crate::creation::timestamp::TimestampError`] and
/// handled by the writer without failing the run.
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The ZIP writer rejected an operation.
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Directory traversal failed.
    #[error("cannot walk {path}: {reason}")]
    Walk {
        /// Path being visited when the walk failed.
        path: PathBuf,
        /// Underlying walker message.
        reason: String,
    },

    /// An exclusion pattern is not a valid glob.
    #[error("invalid exclusion pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The offending pattern.
        pattern: String,
        /// Why it failed to compile.
        reason: String,
    },

    /// A walked path is not below the archive root.
    #[error("path {path} is not under root directory {root}")]
    PathOutsideRoot {
        /// The walked path.
        path: PathBuf,
        /// The archive root.
        root: PathBuf,
    },

    /// A relative path cannot be stored as a ZIP entry name.
    #[error("path is not valid UTF-8: {path}")]
    NonUtf8Path {
        /// The path that failed conversion.
        path: PathBuf,
    },

    /// Modification time lies beyond the last date ZIP can represent.
    #[error("modification time of {path} (year {year}) is after the ZIP date range")]
    TimestampOutOfRange {
        /// The source file.
        path: PathBuf,
        /// Year of the modification time.
        year: i32,
    },
}

impl ArchiveError {
    /// Returns `true` if this error came from the filesystem rather than
    /// from configuration or the archive format.
    ///
    /// # Examples
    ///
    /// ```
    /// use packdir_core::ArchiveError;
    ///
    /// let err = ArchiveError::Io(std::io::Error::other("disk full"));
    /// assert!(err.is_io());
    ///
    /// let err = ArchiveError::InvalidPattern {
    ///     pattern: "[".to_string(),
    ///     reason: "unclosed class".to_string(),
    /// };
    /// assert!(!err.is_io());
    /// ```
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::Io(_) | Self::Walk { .. })
    }

    /// Returns the path this error is about, if any.
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Walk { path, .. }
            | Self::PathOutsideRoot { path, .. }
            | Self::NonUtf8Path { path }
            | Self::TimestampOutOfRange { path, .. } => Some(path.as_path()),
            _ => None,
        }
    }
}
