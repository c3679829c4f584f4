//! Archive creation module.
//!
//! This module walks a project tree, filters it through exclusion patterns
//! and writes the remaining files into a ZIP archive.

pub mod filters;
pub mod timestamp;
pub mod walker;

pub mod config;
pub mod report;
pub mod zip;

// Re-exports for public API
pub use config::ArchiveConfig;
pub use filters::ExclusionSet;
pub use report::ArchiveReport;
pub use timestamp::TimestampError;
pub use walker::FilteredWalker;
pub use walker::Visit;
pub use walker::WalkEntry;
