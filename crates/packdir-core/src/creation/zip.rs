//! ZIP archive creation.
//!
//! Every included file becomes one deflate-compressed entry named by its
//! relative path. Files modified before 1980 are stored with the date
//! forced to 1980-01-01 instead of failing the run.

use crate::ArchiveError;
use crate::Result;
use crate::creation::config::ArchiveConfig;
use crate::creation::filters;
use crate::creation::filters::ExclusionSet;
use crate::creation::report::ArchiveReport;
use crate::creation::timestamp;
use crate::creation::timestamp::TimestampError;
use crate::creation::walker::FilteredWalker;
use crate::creation::walker::Visit;
use crate::creation::walker::WalkEntry;
use std::fs::File;
use std::fs::Metadata;
use std::io::Read;
use std::io::Seek;
use std::io::Write;
use std::path::Path;
use tracing::debug;
use tracing::info;
use tracing::warn;
use zip::CompressionMethod;
use zip::DateTime;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Entries at least this large are written with ZIP64 extensions.
const LARGE_FILE_THRESHOLD: u64 = (1 << 31) - 1;

/// Creates the ZIP archive described by `config`.
///
/// The output file is created (or truncated) before the walk starts and is
/// never added to itself.
///
/// # Examples
///
/// ```no_run
/// use packdir_core::ArchiveConfig;
/// use packdir_core::creation::zip::create_zip;
///
/// let config = ArchiveConfig::default().with_root("my-project");
/// let report = create_zip(&config)?;
/// println!("Added {} files", report.files_added);
/// # Ok::<(), packdir_core::ArchiveError>(())
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - An exclusion pattern is invalid (the output is not touched)
/// - The output file cannot be created
/// - The root cannot be walked or a file cannot be read
/// - A modification time lies after 2107
pub fn create_zip(config: &ArchiveConfig) -> Result<ArchiveReport> {
    let exclusions = ExclusionSet::new(&config.exclude_patterns)?;
    let file = File::create(&config.output)?;
    let output_name = output_archive_name(&config.output, config.root());

    let report = create_zip_internal(file, config.root(), &exclusions, output_name.as_deref())?;

    info!(
        output = %config.output.display(),
        files_added = report.files_added,
        files_excluded = report.files_excluded,
        timestamps_clamped = report.timestamps_clamped,
        bytes_written = report.bytes_written,
        "archive created"
    );
    Ok(report)
}

/// Internal function that creates a ZIP with any writer.
///
/// Handles the core logic of walking the root and adding entries.
fn create_zip_internal<W: Write + Seek>(
    writer: W,
    root: &Path,
    exclusions: &ExclusionSet,
    output_name: Option<&str>,
) -> Result<ArchiveReport> {
    let mut zip = ZipWriter::new(writer);
    let mut report = ArchiveReport::default();
    let start = std::time::Instant::now();

    // Reusable copy buffer
    let mut buffer = vec![0u8; 64 * 1024];

    let walker = FilteredWalker::new(root, exclusions).skipping(output_name);
    for visit in walker.walk() {
        match visit? {
            Visit::Include(entry) => {
                add_file_to_zip(&mut zip, &entry, &mut report, &mut buffer)?;
            }
            Visit::Exclude(_) => report.files_excluded += 1,
        }
    }

    zip.finish()?;

    report.duration = start.elapsed();
    Ok(report)
}

/// Adds a single file, capturing its modification time and permissions.
fn add_file_to_zip<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    entry: &WalkEntry,
    report: &mut ArchiveReport,
    buffer: &mut [u8],
) -> Result<()> {
    let mut file = File::open(&entry.path)?;
    let metadata = file.metadata()?;

    let modified = match timestamp::zip_datetime(metadata.modified()?) {
        Ok(modified) => modified,
        Err(TimestampError::BeforeZipEpoch { year }) => {
            warn!(
                name = %entry.archive_name,
                year,
                "modification time predates 1980, storing as 1980-01-01"
            );
            drop(file);
            return add_file_with_epoch_date(zip, entry, report);
        }
        Err(TimestampError::AfterZipRange { year }) => {
            return Err(ArchiveError::TimestampOutOfRange {
                path: entry.path.clone(),
                year,
            });
        }
    };

    zip.start_file(entry.archive_name.as_str(), file_options(modified, &metadata))?;

    let mut bytes_written = 0u64;
    loop {
        let bytes_read = file.read(buffer)?;
        if bytes_read == 0 {
            break;
        }
        zip.write_all(&buffer[..bytes_read])?;
        bytes_written += bytes_read as u64;
    }

    debug!(name = %entry.archive_name, bytes = bytes_written, "added");
    report.files_added += 1;
    report.bytes_written += bytes_written;

    Ok(())
}

/// Adds a file whose modification time ZIP cannot represent.
///
/// The entry is built from the name alone, dated 1980-01-01 00:00:00, and
/// filled with the file's raw bytes; no filesystem metadata is captured.
fn add_file_with_epoch_date<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    entry: &WalkEntry,
    report: &mut ArchiveReport,
) -> Result<()> {
    let content = std::fs::read(&entry.path)?;
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(timestamp::zip_epoch())
        .large_file(content.len() as u64 >= LARGE_FILE_THRESHOLD);

    zip.start_file(entry.archive_name.as_str(), options)?;
    zip.write_all(&content)?;

    report.files_added += 1;
    report.timestamps_clamped += 1;
    report.bytes_written += content.len() as u64;

    Ok(())
}

/// Entry options for a file with a representable modification time.
fn file_options(modified: DateTime, metadata: &Metadata) -> SimpleFileOptions {
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(modified)
        .large_file(metadata.len() >= LARGE_FILE_THRESHOLD);

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        options.unix_permissions(metadata.permissions().mode())
    }
    #[cfg(not(unix))]
    {
        options
    }
}

/// Archive name the output file would get if it lies inside `root`.
fn output_archive_name(output: &Path, root: &Path) -> Option<String> {
    let output = output.canonicalize().ok()?;
    let root = root.canonicalize().ok()?;
    filters::archive_name(&output, &root).ok()
}
