//! Path filtering logic for archive creation.
//!
//! Exclusion patterns follow shell `fnmatch` rules: `*` matches any run of
//! characters including `/`, `?` matches one character and `[...]` is a
//! character class. Braces have no special meaning and a `[` without a
//! closing `]` is an ordinary character. Patterns are tested against a
//! file's path relative to the archive root, both as-is and with a leading
//! `./`.

use crate::ArchiveError;
use crate::Result;
use globset::GlobBuilder;
use globset::GlobSet;
use globset::GlobSetBuilder;
use std::path::Path;

/// A compiled set of exclusion patterns.
///
/// # Examples
///
/// ```
/// use packdir_core::creation::filters::ExclusionSet;
///
/// let patterns = vec!["./node_modules/*".to_string(), "*.log".to_string()];
/// let set = ExclusionSet::new(&patterns)?;
///
/// assert!(set.is_excluded("node_modules/pkg/index.js"));
/// assert!(set.is_excluded("logs/app.log"));
/// assert!(!set.is_excluded("src/main.rs"));
/// # Ok::<(), packdir_core::ArchiveError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ExclusionSet {
    set: GlobSet,
    len: usize,
}

impl ExclusionSet {
    /// Compiles `patterns` into a glob set.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::InvalidPattern`] for the first pattern that is
    /// not a valid glob.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();

        for pattern in patterns {
            let pattern = pattern.as_ref();
            let glob = GlobBuilder::new(&fnmatch_to_glob(pattern))
                .literal_separator(false)
                .backslash_escape(false)
                .build()
                .map_err(|e| ArchiveError::InvalidPattern {
                    pattern: pattern.to_string(),
                    reason: e.kind().to_string(),
                })?;
            builder.add(glob);
        }

        let set = builder.build().map_err(|e| ArchiveError::InvalidPattern {
            pattern: e.glob().unwrap_or_default().to_string(),
            reason: e.kind().to_string(),
        })?;

        Ok(Self {
            set,
            len: patterns.len(),
        })
    }

    /// Returns `true` if `relative` or `./relative` matches any pattern.
    #[must_use]
    pub fn is_excluded(&self, relative: &str) -> bool {
        self.set.is_match(relative) || self.set.is_match(format!("./{relative}"))
    }

    /// Number of patterns in the set.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set has no patterns.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Rewrites an `fnmatch` pattern into globset syntax.
///
/// Braces outside a character class and unclosed `[` are wrapped in
/// single-character classes so globset reads them literally. Complete
/// classes are copied unchanged.
fn fnmatch_to_glob(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut glob = String::with_capacity(pattern.len());
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '[' => {
                if let Some(end) = class_end(&chars, i) {
                    glob.extend(&chars[i..=end]);
                    i = end;
                } else {
                    glob.push_str("[[]");
                }
            }
            '{' => glob.push_str("[{]"),
            '}' => glob.push_str("[}]"),
            c => glob.push(c),
        }
        i += 1;
    }

    glob
}

/// Index of the `]` closing the class opened at `start`, if any.
///
/// A `]` directly after `[` or `[!` is a class member, not the terminator.
fn class_end(chars: &[char], start: usize) -> Option<usize> {
    let mut j = start + 1;
    if chars.get(j) == Some(&'!') {
        j += 1;
    }
    if chars.get(j) == Some(&']') {
        j += 1;
    }
    chars[j..]
        .iter()
        .position(|&c| c == ']')
        .map(|offset| j + offset)
}

/// Computes the archive name of `source_path` relative to `root`.
///
/// The name uses `/` separators on every platform, as ZIP requires, and
/// doubles as the identity tested against exclusion patterns.
///
/// # Errors
///
/// Returns an error if:
/// - The source path is not under the root directory
/// - The relative path is not valid UTF-8
///
/// # Examples
///
/// ```
/// use packdir_core::creation::filters::archive_name;
/// use std::path::Path;
///
/// let name = archive_name(Path::new("./src/main.rs"), Path::new("."))?;
/// assert_eq!(name, "src/main.rs");
/// # Ok::<(), packdir_core::ArchiveError>(())
/// ```
pub fn archive_name(source_path: &Path, root: &Path) -> Result<String> {
    let relative =
        source_path
            .strip_prefix(root)
            .map_err(|_| ArchiveError::PathOutsideRoot {
                path: source_path.to_path_buf(),
                root: root.to_path_buf(),
            })?;

    let name = relative.to_str().ok_or_else(|| ArchiveError::NonUtf8Path {
        path: relative.to_path_buf(),
    })?;

    #[cfg(windows)]
    let name = name.replace('\\', "/");

    #[cfg(not(windows))]
    let name = name.to_string();

    Ok(name)
}
