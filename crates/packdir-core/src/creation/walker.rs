//! Directory tree walking with exclusion filtering.
//!
//! The walk never follows symlinked directories, so it cannot loop. Entries
//! are visited in file-name order, which keeps archive member order stable
//! between runs over the same tree.

use crate::ArchiveError;
use crate::Result;
use crate::creation::filters;
use crate::creation::filters::ExclusionSet;
use std::path::Path;
use std::path::PathBuf;
use tracing::debug;
use walkdir::WalkDir;

/// Walks a directory tree and classifies every file against an
/// [`ExclusionSet`].
///
/// # Examples
///
/// ```no_run
/// use packdir_core::creation::filters::ExclusionSet;
/// use packdir_core::creation::walker::FilteredWalker;
/// use packdir_core::creation::walker::Visit;
/// use std::path::Path;
///
/// let exclusions = ExclusionSet::new(&["*.log"])?;
/// let walker = FilteredWalker::new(Path::new("."), &exclusions);
///
/// for visit in walker.walk() {
///     if let Visit::Include(entry) = visit? {
///         println!("Would add: {}", entry.archive_name);
///     }
/// }
/// # Ok::<(), packdir_core::ArchiveError>(())
/// ```
pub struct FilteredWalker<'a> {
    root: &'a Path,
    exclusions: &'a ExclusionSet,
    skip_name: Option<&'a str>,
}

impl<'a> FilteredWalker<'a> {
    /// Creates a new filtered walker for the given root directory.
    #[must_use]
    pub fn new(root: &'a Path, exclusions: &'a ExclusionSet) -> Self {
        Self {
            root,
            exclusions,
            skip_name: None,
        }
    }

    /// Always excludes the file whose archive name is `name`.
    ///
    /// Used to keep the output archive out of itself when it lives inside
    /// the root under a name no pattern covers.
    #[must_use]
    pub fn skipping(mut self, name: Option<&'a str>) -> Self {
        self.skip_name = name;
        self
    }

    /// Returns an iterator over every file below the root.
    ///
    /// Directories, symlinks to directories and special files yield nothing.
    /// A dangling symlink is reported as an included file; opening it later
    /// fails with the underlying I/O error.
    ///
    /// # Errors
    ///
    /// Items are errors if a directory cannot be read or a relative path
    /// cannot be computed.
    pub fn walk(&self) -> impl Iterator<Item = Result<Visit>> + '_ {
        WalkDir::new(self.root)
            .min_depth(1)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_map(move |entry| match entry {
                Ok(entry) => self.visit(&entry).transpose(),
                Err(e) => Some(Err(ArchiveError::Walk {
                    path: e
                        .path()
                        .map_or_else(|| self.root.to_path_buf(), Path::to_path_buf),
                    reason: e.to_string(),
                })),
            })
    }

    fn visit(&self, entry: &walkdir::DirEntry) -> Result<Option<Visit>> {
        let file_type = entry.file_type();
        let path = entry.path();

        if file_type.is_dir() {
            return Ok(None);
        }
        if file_type.is_symlink() {
            if std::fs::metadata(path).is_ok_and(|meta| meta.is_dir()) {
                debug!(path = %path.display(), "not descending into symlinked directory");
                return Ok(None);
            }
        } else if !file_type.is_file() {
            debug!(path = %path.display(), "skipping special file");
            return Ok(None);
        }

        let archive_name = filters::archive_name(path, self.root)?;

        if self.skip_name == Some(archive_name.as_str()) {
            debug!(name = %archive_name, "skipping output archive");
            return Ok(Some(Visit::Exclude(archive_name)));
        }
        if self.exclusions.is_excluded(&archive_name) {
            debug!(name = %archive_name, "excluded");
            return Ok(Some(Visit::Exclude(archive_name)));
        }

        Ok(Some(Visit::Include(WalkEntry {
            path: path.to_path_buf(),
            archive_name,
        })))
    }
}

/// Outcome of visiting one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Visit {
    /// The file goes into the archive.
    Include(WalkEntry),

    /// The file matched an exclusion; carries its archive name.
    Exclude(String),
}

/// A file selected for archiving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkEntry {
    /// Filesystem path as walked (root joined with the relative path).
    pub path: PathBuf,

    /// Relative path with `/` separators, used as the ZIP entry name.
    pub archive_name: String,
}
