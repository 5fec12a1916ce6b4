//! Whole-unit differences between two instants.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use chronocol_columnar::packed::datetime as packed_datetime;

use crate::error::TemporalResult;
use crate::unit::TemporalUnit;

/// Signed number of whole `unit`s from `start` to `end`, truncated toward zero.
///
/// Positive when `end` is after `start`. Clock units divide the exact elapsed time; calendar
/// units count whole days/months, and a trailing partial day (end time of day before the start
/// time of day) is not counted.
pub fn between(unit: TemporalUnit, start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    if let Some(unit_millis) = unit.millis() {
        return end.signed_duration_since(start).num_milliseconds() / unit_millis;
    }

    let start_date = start.date();
    let mut end_date = end.date();
    if end_date > start_date && end.time() < start.time() {
        end_date = end_date.pred_opt().unwrap_or(end_date);
    } else if end_date < start_date && end.time() > start.time() {
        end_date = end_date.succ_opt().unwrap_or(end_date);
    }

    match unit {
        TemporalUnit::Days => days_between(start_date, end_date),
        TemporalUnit::Weeks => days_between(start_date, end_date) / 7,
        TemporalUnit::Months => months_between(start_date, end_date),
        TemporalUnit::Years => months_between(start_date, end_date) / 12,
        TemporalUnit::Decades => months_between(start_date, end_date) / 120,
        TemporalUnit::Centuries => months_between(start_date, end_date) / 1_200,
        TemporalUnit::Millennia => months_between(start_date, end_date) / 12_000,
        // Clock units returned above.
        TemporalUnit::Millis
        | TemporalUnit::Seconds
        | TemporalUnit::Minutes
        | TemporalUnit::Hours
        | TemporalUnit::HalfDays => 0,
    }
}

/// Decode two non-missing packed date-times and count whole `unit`s from the first to the second.
pub fn packed_between(unit: TemporalUnit, start: i64, end: i64) -> TemporalResult<i64> {
    let start = packed_datetime::to_naive(start)?;
    let end = packed_datetime::to_naive(end)?;
    Ok(between(unit, start, end))
}

fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    end.signed_duration_since(start).num_days()
}

fn months_between(start: NaiveDate, end: NaiveDate) -> i64 {
    let key = |date: NaiveDate| {
        (i64::from(date.year()) * 12 + i64::from(date.month0())) * 32 + i64::from(date.day())
    };
    (key(end) - key(start)) / 32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TemporalError;
    use chronocol_columnar::PackError;

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
    }

    #[test]
    fn clock_units_truncate_toward_zero() {
        let a = dt("2020-01-01T10:00:00");
        let b = dt("2020-01-01T13:30:00");
        assert_eq!(between(TemporalUnit::Hours, a, b), 3);
        assert_eq!(between(TemporalUnit::Hours, b, a), -3);
        assert_eq!(between(TemporalUnit::Minutes, a, b), 210);
        assert_eq!(between(TemporalUnit::Millis, a, b), 12_600_000);
        assert_eq!(between(TemporalUnit::HalfDays, a, dt("2020-01-02T22:00:00")), 3);
    }

    #[test]
    fn partial_days_do_not_count() {
        let start = dt("2020-01-01T10:00:00");
        assert_eq!(between(TemporalUnit::Days, start, dt("2020-01-02T09:59:59")), 0);
        assert_eq!(between(TemporalUnit::Days, start, dt("2020-01-02T10:00:00")), 1);
        assert_eq!(between(TemporalUnit::Days, dt("2020-01-02T09:00:00"), start), 0);
        assert_eq!(between(TemporalUnit::Weeks, start, dt("2020-01-15T10:00:00")), 2);
    }

    #[test]
    fn calendar_units_follow_month_arithmetic() {
        assert_eq!(
            between(TemporalUnit::Months, dt("2020-01-31T00:00:00"), dt("2020-02-29T00:00:00")),
            0
        );
        assert_eq!(
            between(TemporalUnit::Years, dt("2000-02-29T00:00:00"), dt("2004-02-28T23:59:59")),
            3
        );
        assert_eq!(
            between(TemporalUnit::Years, dt("2010-06-15T12:00:00"), dt("2000-06-15T12:00:00")),
            -10
        );
        assert_eq!(
            between(TemporalUnit::Decades, dt("2000-01-01T00:00:00"), dt("2031-01-01T00:00:00")),
            3
        );
    }

    #[test]
    fn packed_values_are_decoded_first() {
        let a = packed_datetime::pack(dt("2020-01-01T00:00:00")).unwrap();
        let b = packed_datetime::pack(dt("2020-01-03T00:00:00")).unwrap();
        assert_eq!(packed_between(TemporalUnit::Days, a, b), Ok(2));
        assert_eq!(
            packed_between(TemporalUnit::Days, packed_datetime::MISSING, b),
            Err(TemporalError::Pack(PackError::DecodeOfMissing))
        );
    }
}
