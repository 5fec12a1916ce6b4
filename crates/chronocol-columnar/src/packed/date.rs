#![forbid(unsafe_code)]

//! Packed dates: `year << 16 | month << 8 | day_of_month` in an `i32`.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::packed::{check_year, PackError};

/// Sentinel stored for a missing date.
pub const MISSING: i32 = -1;

const MONTH_NAMES: [&str; 12] = [
    "JANUARY",
    "FEBRUARY",
    "MARCH",
    "APRIL",
    "MAY",
    "JUNE",
    "JULY",
    "AUGUST",
    "SEPTEMBER",
    "OCTOBER",
    "NOVEMBER",
    "DECEMBER",
];

const DAY_NAMES: [&str; 7] = [
    "MONDAY",
    "TUESDAY",
    "WEDNESDAY",
    "THURSDAY",
    "FRIDAY",
    "SATURDAY",
    "SUNDAY",
];

// Days before the first of each month in a non-leap year.
const DAYS_BEFORE_MONTH: [u32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// How weeks of a calendar year are numbered.
///
/// The week containing January 1st is week 1 when at least `minimal_days` of it fall in the new
/// year, otherwise it is week 0. Week numbers restart every calendar year and never decrease
/// within one, which keeps `"{year}-{week}"` labels in chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeekDefinition {
    pub first_day_of_week: Weekday,
    pub minimal_days: u8,
}

impl WeekDefinition {
    /// Monday-start weeks; the first week needs four days in the new year.
    pub const ISO: WeekDefinition = WeekDefinition {
        first_day_of_week: Weekday::Mon,
        minimal_days: 4,
    };

    /// Sunday-start weeks; the week holding January 1st is always week 1.
    pub const SUNDAY_START: WeekDefinition = WeekDefinition {
        first_day_of_week: Weekday::Sun,
        minimal_days: 1,
    };

    /// `minimal_days` is clamped to `1..=7`.
    pub fn new(first_day_of_week: Weekday, minimal_days: u8) -> Self {
        Self {
            first_day_of_week,
            minimal_days: minimal_days.clamp(1, 7),
        }
    }
}

impl Default for WeekDefinition {
    fn default() -> Self {
        Self::ISO
    }
}

pub fn is_missing(packed: i32) -> bool {
    packed == MISSING
}

/// Pack a calendar date, rejecting years outside [`crate::packed::MIN_YEAR`]..=[`crate::packed::MAX_YEAR`].
pub fn pack(date: NaiveDate) -> Result<i32, PackError> {
    check_year(date.year())?;
    Ok(pack_ymd(date.year(), date.month(), date.day()))
}

pub(crate) fn pack_ymd(year: i32, month: u32, day: u32) -> i32 {
    (year << 16) | ((month as i32) << 8) | day as i32
}

/// Decode a packed date.
///
/// The sentinel yields [`PackError::DecodeOfMissing`]; callers are expected to test
/// [`is_missing`] first.
pub fn decode(packed: i32) -> Result<NaiveDate, PackError> {
    if is_missing(packed) {
        return Err(PackError::DecodeOfMissing);
    }
    let year = year(packed);
    if check_year(year).is_err() {
        return Err(PackError::Corrupt {
            packed: i64::from(packed),
        });
    }
    NaiveDate::from_ymd_opt(year, month_value(packed), day_of_month(packed)).ok_or(
        PackError::Corrupt {
            packed: i64::from(packed),
        },
    )
}

/// Decode a packed date, mapping the sentinel (and corrupt values) to `None`.
pub fn unpack(packed: i32) -> Option<NaiveDate> {
    decode(packed).ok()
}

pub fn year(packed: i32) -> i32 {
    packed >> 16
}

pub fn month_value(packed: i32) -> u32 {
    ((packed >> 8) & 0xFF) as u32
}

pub fn day_of_month(packed: i32) -> u32 {
    (packed & 0xFF) as u32
}

pub fn quarter(packed: i32) -> u32 {
    (month_value(packed) + 2) / 3
}

pub fn month_name(packed: i32) -> &'static str {
    let idx = (month_value(packed) as usize).clamp(1, 12) - 1;
    MONTH_NAMES[idx]
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn day_of_year(packed: i32) -> u32 {
    let month = month_value(packed).clamp(1, 12);
    let leap_day = u32::from(month > 2 && is_leap_year(year(packed)));
    DAYS_BEFORE_MONTH[(month - 1) as usize] + day_of_month(packed) + leap_day
}

/// Days since 1970-01-01 (negative before it).
pub fn epoch_day(packed: i32) -> i64 {
    days_from_civil(
        i64::from(year(packed)),
        month_value(packed),
        day_of_month(packed),
    )
}

// Gregorian civil date to day count, valid for the full proleptic range.
fn days_from_civil(year: i64, month: u32, day: u32) -> i64 {
    let year = if month <= 2 { year - 1 } else { year };
    let era = if year >= 0 { year } else { year - 399 } / 400;
    let year_of_era = year - era * 400;
    let shifted_month = i64::from((month + 9) % 12);
    let day_of_era_year = (153 * shifted_month + 2) / 5 + i64::from(day) - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_era_year;
    era * 146_097 + day_of_era - 719_468
}

/// `1` = Monday .. `7` = Sunday.
pub fn day_of_week_value(packed: i32) -> u32 {
    // 1970-01-01 was a Thursday.
    ((epoch_day(packed) + 3).rem_euclid(7) + 1) as u32
}

pub fn day_of_week_name(packed: i32) -> &'static str {
    DAY_NAMES[(day_of_week_value(packed) - 1) as usize]
}

/// Week of the calendar year under `definition`; `0` for days before the first full week.
pub fn week_of_year(packed: i32, definition: WeekDefinition) -> u32 {
    let jan_first = pack_ymd(year(packed), 1, 1);
    let first_day = definition.first_day_of_week.number_from_monday();
    // Days between the start of the week and January 1st.
    let lead_in = (day_of_week_value(jan_first) + 7 - first_day) % 7;
    let first_week_days = 7 - lead_in;
    let minimal_days = u32::from(definition.minimal_days.clamp(1, 7));
    let offset = u32::from(first_week_days >= minimal_days);
    (day_of_year(packed) + lead_in).saturating_sub(1) / 7 + offset
}

/// Signed count of days from `start` to `end`.
pub fn days_until(start: i32, end: i32) -> i64 {
    epoch_day(end) - epoch_day(start)
}

/// Signed count of whole weeks from `start` to `end`, truncated toward zero.
pub fn weeks_until(start: i32, end: i32) -> i64 {
    days_until(start, end) / 7
}

/// Signed count of whole months from `start` to `end`, truncated toward zero.
///
/// A month only counts once the day of month has been reached again, so 01-31 to 02-28 is zero
/// months.
pub fn months_until(start: i32, end: i32) -> i64 {
    let start_key = proleptic_month(start) * 32 + i64::from(day_of_month(start));
    let end_key = proleptic_month(end) * 32 + i64::from(day_of_month(end));
    (end_key - start_key) / 32
}

/// Signed count of whole years from `start` to `end`, truncated toward zero.
pub fn years_until(start: i32, end: i32) -> i64 {
    months_until(start, end) / 12
}

fn proleptic_month(packed: i32) -> i64 {
    i64::from(year(packed)) * 12 + i64::from(month_value(packed)) - 1
}
