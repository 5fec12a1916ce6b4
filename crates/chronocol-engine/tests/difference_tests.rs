mod common;

use chronocol_columnar::{Column, NumberFormatter};
use chronocol_engine::{DateTimeMapFunctions, TemporalError, TemporalUnit};
use pretty_assertions::assert_eq;

use common::{column, numbers};

#[test]
fn hours_between_matching_rows() {
    let start = column("start", &[Some("2020-01-01T10:00:00"), Some("2020-01-01T13:30:00")]);
    let end = column("end", &[Some("2020-01-01T13:30:00"), Some("2020-01-01T10:00:00")]);

    let hours = start.derive().difference_in_hours(&end).unwrap();
    assert_eq!(hours.name(), "start - end");
    assert_eq!(numbers(&hours), vec![Some(3.0), Some(-3.0)]);
    assert_eq!(hours.print_formatter(), NumberFormatter::Ints);
}

#[test]
fn missing_on_either_side_is_missing() {
    let left = column(
        "a",
        &[Some("2020-01-01T00:00:00"), None, Some("2020-01-01T00:00:00"), None],
    );
    let right = column(
        "b",
        &[None, Some("2020-01-01T00:00:00"), Some("2020-01-02T00:00:00"), None],
    );
    let days = left.derive().difference_in_days(&right).unwrap();
    assert_eq!(numbers(&days), vec![None, None, Some(1.0), None]);
}

#[test]
fn conveniences_pick_their_unit() {
    let start = column("s", &[Some("2019-12-31T23:00:00")]);
    let end = column("e", &[Some("2021-02-01T01:00:30")]);
    let derive = start.derive();

    assert_eq!(
        derive.difference_in_milliseconds(&end).unwrap().get(0),
        Some(34_308_030_000.0)
    );
    assert_eq!(derive.difference_in_seconds(&end).unwrap().get(0), Some(34_308_030.0));
    assert_eq!(derive.difference_in_minutes(&end).unwrap().get(0), Some(571_800.0));
    assert_eq!(derive.difference_in_hours(&end).unwrap().get(0), Some(9_530.0));
    assert_eq!(derive.difference_in_days(&end).unwrap().get(0), Some(397.0));
    assert_eq!(derive.difference_in_weeks(&end).unwrap().get(0), Some(56.0));
    assert_eq!(derive.difference_in_months(&end).unwrap().get(0), Some(13.0));
    assert_eq!(derive.difference_in_years(&end).unwrap().get(0), Some(1.0));
    assert_eq!(
        derive.difference(&end, TemporalUnit::Decades).unwrap().get(0),
        Some(0.0)
    );
}

#[test]
fn mismatched_lengths_are_an_error() {
    let left = column("a", &[Some("2020-01-01T00:00:00")]);
    let right = column("b", &[Some("2020-01-01T00:00:00"), None]);
    let err = left.derive().difference_in_days(&right).unwrap_err();
    assert_eq!(err, TemporalError::LengthMismatch { left: 1, right: 2 });
}

#[test]
fn difference_with_itself_is_zero() {
    let source = column("t", &[Some("2020-06-01T12:34:56"), None]);
    let minutes = source.derive().difference_in_minutes(&source).unwrap();
    assert_eq!(minutes.name(), "t - t");
    assert_eq!(numbers(&minutes), vec![Some(0.0), None]);
}
