#![forbid(unsafe_code)]

//! Packed times of day: milliseconds since midnight in an `i32`.

use chrono::{NaiveTime, Timelike};

use crate::packed::PackError;

/// Sentinel stored for a missing time.
pub const MISSING: i32 = -1;

pub const MILLIS_PER_SECOND: i32 = 1_000;
pub const MILLIS_PER_MINUTE: i32 = 60 * MILLIS_PER_SECOND;
pub const MILLIS_PER_HOUR: i32 = 60 * MILLIS_PER_MINUTE;
pub const MILLIS_PER_DAY: i32 = 24 * MILLIS_PER_HOUR;

pub fn is_missing(packed: i32) -> bool {
    packed == MISSING
}

/// Pack a time of day. Sub-millisecond precision is truncated; a leap second is folded into the
/// last millisecond of its minute.
pub fn pack(time: NaiveTime) -> i32 {
    let millis = (time.nanosecond() / 1_000_000).min(999) as i32;
    time.num_seconds_from_midnight() as i32 * MILLIS_PER_SECOND + millis
}

pub fn decode(packed: i32) -> Result<NaiveTime, PackError> {
    if is_missing(packed) {
        return Err(PackError::DecodeOfMissing);
    }
    if !(0..MILLIS_PER_DAY).contains(&packed) {
        return Err(PackError::Corrupt {
            packed: i64::from(packed),
        });
    }
    NaiveTime::from_hms_milli_opt(
        hour(packed),
        minute(packed),
        second(packed),
        milli_of_second(packed),
    )
    .ok_or(PackError::Corrupt {
        packed: i64::from(packed),
    })
}

pub fn unpack(packed: i32) -> Option<NaiveTime> {
    decode(packed).ok()
}

pub fn hour(packed: i32) -> u32 {
    (packed / MILLIS_PER_HOUR) as u32
}

pub fn minute(packed: i32) -> u32 {
    ((packed / MILLIS_PER_MINUTE) % 60) as u32
}

pub fn second(packed: i32) -> u32 {
    ((packed / MILLIS_PER_SECOND) % 60) as u32
}

pub fn milli_of_second(packed: i32) -> u32 {
    (packed % MILLIS_PER_SECOND) as u32
}

pub fn minute_of_day(packed: i32) -> u32 {
    (packed / MILLIS_PER_MINUTE) as u32
}

pub fn second_of_day(packed: i32) -> u32 {
    (packed / MILLIS_PER_SECOND) as u32
}

pub fn milli_of_day(packed: i32) -> u32 {
    packed as u32
}
