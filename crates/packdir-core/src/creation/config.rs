//! Configuration for archive creation operations.

use crate::Result;
use crate::creation::filters::ExclusionSet;
use std::path::Path;
use std::path::PathBuf;

/// Archive file name used when none is configured.
pub const DEFAULT_OUTPUT: &str = "projeto.zip";

/// Directory archived when none is configured.
pub const DEFAULT_ROOT: &str = ".";

/// Patterns excluded by default, after the output archive itself.
const DEFAULT_EXCLUDES: &[&str] = &[
    "./node_modules/*",
    "./.git/*",
    "./dist/*",
    "./build/*",
    "./.next/*",
    "*.log",
    "./__pycache__/*",
    "./.venv/*",
    "./.env",
    "./.DS_Store",
    "./.vscode/*",
];

/// Returns the default exclusion patterns for an archive named `output_name`.
///
/// The first pattern keeps the archive out of itself when it is written at
/// the top of the traversal root.
///
/// # Examples
///
/// ```
/// use packdir_core::creation::config::default_exclude_patterns;
///
/// let patterns = default_exclude_patterns("projeto.zip");
/// assert_eq!(patterns[0], "./projeto.zip");
/// assert!(patterns.contains(&"*.log".to_string()));
/// assert_eq!(patterns.len(), 12);
/// ```
#[must_use]
pub fn default_exclude_patterns(output_name: &str) -> Vec<String> {
    std::iter::once(format!("./{output_name}"))
        .chain(DEFAULT_EXCLUDES.iter().map(ToString::to_string))
        .collect()
}

/// Configuration for one archive run.
///
/// # Examples
///
/// ```
/// use packdir_core::ArchiveConfig;
///
/// // Archive the current directory into projeto.zip
/// let config = ArchiveConfig::default();
///
/// // Archive another tree, keeping the default exclusions
/// let custom = ArchiveConfig::default()
///     .with_root("/srv/app")
///     .with_output("/tmp/app.zip");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveConfig {
    /// Path of the ZIP file to create or overwrite.
    ///
    /// Default: `projeto.zip`.
    pub output: PathBuf,

    /// Directory whose files are archived.
    ///
    /// Default: `.`.
    pub root: PathBuf,

    /// Glob patterns tested against each file's relative path.
    ///
    /// Default: see [`default_exclude_patterns`].
    pub exclude_patterns: Vec<String>,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            root: PathBuf::from(DEFAULT_ROOT),
            exclude_patterns: default_exclude_patterns(DEFAULT_OUTPUT),
        }
    }
}

impl ArchiveConfig {
    /// Creates a new `ArchiveConfig` with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the output archive path.
    ///
    /// While the exclusion patterns are still the defaults for the previous
    /// output, they are regenerated so the first pattern names the new file.
    /// Custom patterns are left untouched. The writer additionally skips the
    /// output file by identity.
    ///
    /// # Examples
    ///
    /// ```
    /// use packdir_core::ArchiveConfig;
    ///
    /// let config = ArchiveConfig::default().with_output("dist/release.zip");
    /// assert_eq!(config.exclude_patterns[0], "./release.zip");
    /// ```
    #[must_use]
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        let had_defaults = self
            .output_name()
            .is_some_and(|name| self.exclude_patterns == default_exclude_patterns(name));

        self.output = output.into();
        if had_defaults && let Some(name) = self.output_name() {
            self.exclude_patterns = default_exclude_patterns(name);
        }
        self
    }

    /// Sets the directory to archive.
    #[must_use]
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Sets the exclusion patterns.
    #[must_use]
    pub fn with_exclude_patterns(mut self, patterns: Vec<String>) -> Self {
        self.exclude_patterns = patterns;
        self
    }

    /// Returns the file name component of the output path.
    pub fn output_name(&self) -> Option<&str> {
        self.output.file_name().and_then(|name| name.to_str())
    }

    /// Returns the root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any exclusion pattern is not a valid glob.
    pub fn validate(&self) -> Result<()> {
        ExclusionSet::new(&self.exclude_patterns).map(|_| ())
    }
}
