//! Conversion of filesystem modification times into ZIP dates.
//!
//! ZIP stores MS-DOS wall-clock dates, which cover 1980-01-01 through the
//! end of 2107 at two-second resolution. Times are converted in the local
//! time zone.

use chrono::DateTime as LocalDateTime;
use chrono::Datelike;
use chrono::Local;
use chrono::Timelike;
use std::time::SystemTime;
use thiserror::Error;
use zip::DateTime;

/// First year representable in a ZIP entry.
pub const ZIP_EPOCH_YEAR: i32 = 1980;

/// Last year representable in a ZIP entry.
pub const ZIP_LAST_YEAR: i32 = 2107;

/// Why a modification time cannot be stored as-is.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampError {
    /// The time is earlier than 1980-01-01.
    #[error("ZIP does not support timestamps before 1980 (got year {year})")]
    BeforeZipEpoch {
        /// Local year of the modification time.
        year: i32,
    },

    /// The time is later than the end of 2107.
    #[error("ZIP does not support timestamps after 2107 (got year {year})")]
    AfterZipRange {
        /// Local year of the modification time.
        year: i32,
    },
}

/// Returns the earliest ZIP date, 1980-01-01 00:00:00.
///
/// # Examples
///
/// ```
/// use packdir_core::creation::timestamp::zip_epoch;
///
/// let epoch = zip_epoch();
/// assert_eq!((epoch.year(), epoch.month(), epoch.day()), (1980, 1, 1));
/// ```
#[must_use]
pub fn zip_epoch() -> DateTime {
    DateTime::default()
}

/// Converts a modification time into a ZIP date.
///
/// # Errors
///
/// Returns [`TimestampError::BeforeZipEpoch`] for times before 1980 and
/// [`TimestampError::AfterZipRange`] for times after 2107.
///
/// # Examples
///
/// ```
/// use packdir_core::creation::timestamp::TimestampError;
/// use packdir_core::creation::timestamp::zip_datetime;
/// use std::time::SystemTime;
///
/// assert!(zip_datetime(SystemTime::now()).is_ok());
/// assert!(matches!(
///     zip_datetime(SystemTime::UNIX_EPOCH),
///     Err(TimestampError::BeforeZipEpoch { .. })
/// ));
/// ```
pub fn zip_datetime(mtime: SystemTime) -> Result<DateTime, TimestampError> {
    let local = LocalDateTime::<Local>::from(mtime);
    from_civil(
        local.year(),
        local.month(),
        local.day(),
        local.hour(),
        local.minute(),
        local.second(),
    )
}

fn from_civil(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
) -> Result<DateTime, TimestampError> {
    if year < ZIP_EPOCH_YEAR {
        return Err(TimestampError::BeforeZipEpoch { year });
    }
    if year > ZIP_LAST_YEAR {
        return Err(TimestampError::AfterZipRange { year });
    }

    let out_of_range = || TimestampError::AfterZipRange { year };
    let narrow = |value: u32| u8::try_from(value).map_err(|_| out_of_range());

    DateTime::from_date_and_time(
        u16::try_from(year).map_err(|_| out_of_range())?,
        narrow(month)?,
        narrow(day)?,
        narrow(hour)?,
        narrow(minute)?,
        narrow(second)?,
    )
    .map_err(|_| out_of_range())
}
