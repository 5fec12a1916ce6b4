//! Packed integer encodings for dates, times and date-times.
//!
//! Layouts:
//! - packed date (`i32`): `year << 16 | month << 8 | day_of_month`
//! - packed time (`i32`): milliseconds since midnight
//! - packed date-time (`i64`): packed date in the high 32 bits, packed time in the low 32 bits
//!
//! Every valid value is strictly positive (years are limited to `1..=9999`), so the all-ones
//! bit pattern (`-1`) is free to act as the missing-value sentinel for all three encodings, and
//! comparing two packed values numerically compares them chronologically.
//!
//! Calendar conventions shared by every extractor:
//! - proleptic Gregorian calendar
//! - day-of-week values run from `1` (Monday) to `7` (Sunday)
//! - month and day names are upper-case English (`"MARCH"`, `"MONDAY"`)

#![forbid(unsafe_code)]

pub mod date;
pub mod datetime;
pub mod time;

use thiserror::Error;

pub use crate::packed::date::WeekDefinition;

/// Smallest year accepted by the packed encodings.
pub const MIN_YEAR: i32 = 1;
/// Largest year accepted by the packed encodings.
pub const MAX_YEAR: i32 = 9999;

/// Errors produced while packing or unpacking temporal values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PackError {
    #[error("year {year} is outside the supported range {MIN_YEAR}..={MAX_YEAR}")]
    InvalidRange { year: i32 },
    #[error("cannot decode the missing-value sentinel")]
    DecodeOfMissing,
    #[error("packed value {packed:#x} does not encode a valid calendar value")]
    Corrupt { packed: i64 },
}

pub(crate) fn check_year(year: i32) -> Result<(), PackError> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(PackError::InvalidRange { year })
    }
}
