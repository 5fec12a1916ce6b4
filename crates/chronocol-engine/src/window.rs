//! Fixed-size calendar windows counted from a start instant.
//!
//! Only the date part of each instant participates; hours and minutes are not windowable.

use chronocol_columnar::packed::{date as packed_date, datetime as packed_datetime};

use crate::error::{TemporalError, TemporalResult};
use crate::unit::TemporalUnit;

const OPERATION: &str = "time windows";

/// Fail fast for units and sizes the windowing algorithm does not handle.
pub fn validate(unit: TemporalUnit, n: i64) -> TemporalResult<()> {
    match unit {
        TemporalUnit::Days | TemporalUnit::Weeks | TemporalUnit::Months | TemporalUnit::Years => {}
        unsupported => {
            return Err(TemporalError::UnsupportedUnit {
                unit: unsupported,
                operation: OPERATION,
            })
        }
    }
    if n <= 0 {
        return Err(TemporalError::InvalidWindowSize(n));
    }
    Ok(())
}

/// Whole `unit`s between the dates of two non-missing packed date-times.
pub fn units_between(unit: TemporalUnit, start: i64, value: i64) -> TemporalResult<i64> {
    units_between_dates(
        unit,
        packed_datetime::date(start),
        packed_datetime::date(value),
    )
}

fn units_between_dates(unit: TemporalUnit, start: i32, end: i32) -> TemporalResult<i64> {
    match unit {
        TemporalUnit::Days => Ok(packed_date::days_until(start, end)),
        TemporalUnit::Weeks => Ok(packed_date::weeks_until(start, end)),
        TemporalUnit::Months => Ok(packed_date::months_until(start, end)),
        TemporalUnit::Years => Ok(packed_date::years_until(start, end)),
        unsupported => Err(TemporalError::UnsupportedUnit {
            unit: unsupported,
            operation: OPERATION,
        }),
    }
}

/// Zero-based window index of `value` for windows of `n` units starting at `start`.
///
/// Values before `start` land in negative windows.
pub fn bucket(unit: TemporalUnit, n: i64, start: i64, value: i64) -> TemporalResult<i64> {
    validate(unit, n)?;
    Ok(units_between(unit, start, value)?.div_euclid(n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn packed(s: &str) -> i64 {
        packed_datetime::pack(NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap())
            .unwrap()
    }

    #[test]
    fn day_windows() {
        let start = packed("2020-01-01T00:00:00");
        assert_eq!(bucket(TemporalUnit::Days, 5, start, packed("2020-01-01T23:00:00")), Ok(0));
        assert_eq!(bucket(TemporalUnit::Days, 5, start, packed("2020-01-03T00:00:00")), Ok(0));
        assert_eq!(bucket(TemporalUnit::Days, 5, start, packed("2020-01-05T12:00:00")), Ok(0));
        assert_eq!(bucket(TemporalUnit::Days, 5, start, packed("2020-01-06T00:00:00")), Ok(1));
        assert_eq!(bucket(TemporalUnit::Days, 5, start, packed("2020-01-07T00:00:00")), Ok(1));
        assert_eq!(bucket(TemporalUnit::Days, 5, start, packed("2019-12-31T00:00:00")), Ok(-1));
    }

    #[test]
    fn month_and_year_windows() {
        let start = packed("2020-01-15T00:00:00");
        assert_eq!(bucket(TemporalUnit::Months, 3, start, packed("2020-04-14T00:00:00")), Ok(0));
        assert_eq!(bucket(TemporalUnit::Months, 3, start, packed("2020-04-15T00:00:00")), Ok(1));
        assert_eq!(bucket(TemporalUnit::Years, 2, start, packed("2024-01-15T00:00:00")), Ok(2));
        assert_eq!(bucket(TemporalUnit::Weeks, 1, start, packed("2020-01-29T00:00:00")), Ok(2));
    }

    #[test]
    fn clock_units_are_rejected() {
        for unit in [TemporalUnit::Hours, TemporalUnit::Minutes, TemporalUnit::Millis] {
            assert_eq!(
                validate(unit, 1),
                Err(TemporalError::UnsupportedUnit {
                    unit,
                    operation: "time windows"
                })
            );
        }
        assert_eq!(
            validate(TemporalUnit::Days, 0),
            Err(TemporalError::InvalidWindowSize(0))
        );
    }
}
