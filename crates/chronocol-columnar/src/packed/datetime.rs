#![forbid(unsafe_code)]

//! Packed date-times: packed date in the high 32 bits, milliseconds of day in the low 32 bits.
//!
//! Component extractors in this module read fields directly from the integer and never build a
//! calendar object. They must only be called with non-missing values.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::packed::{date as packed_date, time as packed_time, PackError, WeekDefinition};

/// Sentinel stored for a missing date-time (all bits set).
pub const MISSING: i64 = -1;

pub fn is_missing(packed: i64) -> bool {
    packed == MISSING
}

/// Combine a date and a time of day into a packed date-time.
pub fn encode(date: NaiveDate, time: NaiveTime) -> Result<i64, PackError> {
    Ok(create(packed_date::pack(date)?, packed_time::pack(time)))
}

pub fn pack(value: NaiveDateTime) -> Result<i64, PackError> {
    encode(value.date(), value.time())
}

/// Join an already packed date and time.
pub fn create(date: i32, time: i32) -> i64 {
    (i64::from(date) << 32) | i64::from(time as u32)
}

/// The packed date held in the high half.
pub fn date(packed: i64) -> i32 {
    (packed >> 32) as i32
}

/// The packed time held in the low half.
pub fn time(packed: i64) -> i32 {
    (packed & 0xFFFF_FFFF) as i32
}

/// Inverse of [`encode`].
pub fn decode(packed: i64) -> Result<(NaiveDate, NaiveTime), PackError> {
    if is_missing(packed) {
        return Err(PackError::DecodeOfMissing);
    }
    let corrupt = |_| PackError::Corrupt { packed };
    let date = packed_date::decode(date(packed)).map_err(corrupt)?;
    let time = packed_time::decode(time(packed)).map_err(corrupt)?;
    Ok((date, time))
}

pub fn to_naive(packed: i64) -> Result<NaiveDateTime, PackError> {
    decode(packed).map(|(date, time)| NaiveDateTime::new(date, time))
}

/// Decode at an API boundary: the sentinel becomes `None`.
pub fn unpack(packed: i64) -> Option<NaiveDateTime> {
    to_naive(packed).ok()
}

pub fn year(packed: i64) -> i32 {
    packed_date::year(date(packed))
}

pub fn month_value(packed: i64) -> u32 {
    packed_date::month_value(date(packed))
}

pub fn month_name(packed: i64) -> &'static str {
    packed_date::month_name(date(packed))
}

pub fn quarter(packed: i64) -> u32 {
    packed_date::quarter(date(packed))
}

pub fn day_of_month(packed: i64) -> u32 {
    packed_date::day_of_month(date(packed))
}

pub fn day_of_year(packed: i64) -> u32 {
    packed_date::day_of_year(date(packed))
}

pub fn day_of_week_value(packed: i64) -> u32 {
    packed_date::day_of_week_value(date(packed))
}

pub fn day_of_week_name(packed: i64) -> &'static str {
    packed_date::day_of_week_name(date(packed))
}

pub fn week_of_year(packed: i64, definition: WeekDefinition) -> u32 {
    packed_date::week_of_year(date(packed), definition)
}

pub fn hour(packed: i64) -> u32 {
    packed_time::hour(time(packed))
}

pub fn minute(packed: i64) -> u32 {
    packed_time::minute(time(packed))
}

pub fn second(packed: i64) -> u32 {
    packed_time::second(time(packed))
}

pub fn milli_of_second(packed: i64) -> u32 {
    packed_time::milli_of_second(time(packed))
}

pub fn minute_of_day(packed: i64) -> u32 {
    packed_time::minute_of_day(time(packed))
}

pub fn second_of_day(packed: i64) -> u32 {
    packed_time::second_of_day(time(packed))
}
