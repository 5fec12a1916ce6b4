use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};
use chronocol_columnar::packed::{date, datetime, time};
use chronocol_columnar::{PackError, WeekDefinition};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn naive() -> impl Strategy<Value = NaiveDateTime> {
    (1i32..=9999, 1u32..=366, 0u32..86_400, 0u32..1_000).prop_map(
        |(year, ordinal, secs, millis)| {
            let date = NaiveDate::from_yo_opt(year, ordinal)
                .or_else(|| NaiveDate::from_yo_opt(year, 365))
                .unwrap();
            let time =
                NaiveTime::from_num_seconds_from_midnight_opt(secs, millis * 1_000_000).unwrap();
            NaiveDateTime::new(date, time)
        },
    )
}

#[test]
fn sentinel_is_shared_and_never_decodes() {
    assert_eq!(date::MISSING, -1);
    assert_eq!(time::MISSING, -1);
    assert_eq!(datetime::MISSING, -1);
    assert_eq!(datetime::decode(-1), Err(PackError::DecodeOfMissing));
    assert_eq!(datetime::unpack(-1), None);
}

#[test]
fn garbage_bits_are_reported_as_corrupt() {
    // Month 13.
    let bad_date = (2020 << 16) | (13 << 8) | 1;
    let packed = datetime::create(bad_date, 0);
    assert_eq!(datetime::decode(packed), Err(PackError::Corrupt { packed }));
}

#[test]
fn extremes_of_the_supported_range() {
    let first = NaiveDate::from_ymd_opt(1, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
    let last = NaiveDate::from_ymd_opt(9999, 12, 31)
        .unwrap()
        .and_hms_milli_opt(23, 59, 59, 999)
        .unwrap();
    let packed_first = datetime::pack(first).unwrap();
    let packed_last = datetime::pack(last).unwrap();
    assert!(packed_first > 0);
    assert!(packed_first < packed_last);
    assert_eq!(datetime::unpack(packed_last), Some(last));
    assert_eq!(datetime::day_of_week_name(packed_first), "MONDAY");
    assert_eq!(
        datetime::pack(first - chrono::Duration::days(1)),
        Err(PackError::InvalidRange { year: 0 })
    );
}

#[test]
fn week_definitions_disagree_around_new_year() {
    // 2017-01-01 is a Sunday.
    let packed = date::pack(NaiveDate::from_ymd_opt(2017, 1, 1).unwrap()).unwrap();
    assert_eq!(date::week_of_year(packed, WeekDefinition::ISO), 0);
    assert_eq!(date::week_of_year(packed, WeekDefinition::SUNDAY_START), 1);
    assert_eq!(
        date::week_of_year(packed, WeekDefinition::new(Weekday::Sun, 7)),
        1
    );
}

proptest! {
    #[test]
    fn packing_round_trips(value in naive()) {
        let packed = datetime::pack(value).unwrap();
        prop_assert!(!datetime::is_missing(packed));
        prop_assert_eq!(datetime::to_naive(packed), Ok(value));
        prop_assert_eq!(datetime::year(packed), value.year());
        prop_assert_eq!(datetime::day_of_year(packed), value.ordinal());
        prop_assert_eq!(datetime::day_of_week_value(packed), value.weekday().number_from_monday());
        prop_assert_eq!(datetime::second_of_day(packed), value.num_seconds_from_midnight());
        prop_assert_eq!(
            date::epoch_day(datetime::date(packed)),
            value.date().signed_duration_since(NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()).num_days()
        );
    }

    #[test]
    fn packed_order_is_chronological(a in naive(), b in naive()) {
        let pa = datetime::pack(a).unwrap();
        let pb = datetime::pack(b).unwrap();
        prop_assert_eq!(pa.cmp(&pb), a.cmp(&b));
    }

    #[test]
    fn iso_weeks_match_chrono_inside_the_year(value in naive()) {
        let packed = date::pack(value.date()).unwrap();
        let week = date::week_of_year(packed, WeekDefinition::ISO);
        let iso = value.iso_week();
        // Week 0 and the spill-over into next year's week 1 are where the two schemes differ.
        if iso.year() == value.year() && week != 0 {
            prop_assert_eq!(week, iso.week());
        }
    }
}
