//! Project directory packaging into ZIP archives.
//!
//! `packdir-core` walks a directory tree and writes every regular file into
//! a deflate-compressed ZIP archive, leaving out build artifacts, dependency
//! directories and environment files matched by glob-style patterns. Files
//! modified before 1980, which ZIP cannot date, are stored with their date
//! raised to 1980-01-01.
//!
//! # Examples
//!
//! ```no_run
//! use packdir_core::ArchiveConfig;
//! use packdir_core::create_archive;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ArchiveConfig::default();
//! let report = create_archive(&config)?;
//! println!("Archived {} files", report.files_added);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod creation;
pub mod error;

// Re-export main API types
pub use api::archive;
pub use api::create_archive;
pub use creation::ArchiveConfig;
pub use creation::ArchiveReport;
pub use error::ArchiveError;
pub use error::Result;
