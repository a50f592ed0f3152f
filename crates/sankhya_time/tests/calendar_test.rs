//! Integration tests for birth-date parsing feeding calendar arithmetic.

use sankhya_time::{
    BirthDate, NaiveDate, TimeError, anniversary_in, diff_in_whole_years, format_short,
    shift_years,
};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Leap-day birth: anniversaries in common years fall on 1 Mar, so the
/// whole-year count ticks over on 1 Mar as well.
#[test]
fn leap_day_birth_anniversaries() {
    let birth = BirthDate::parse("2000-02-29").unwrap().calendar_date().unwrap();
    assert_eq!(anniversary_in(birth, 2025).unwrap(), ymd(2025, 3, 1));
    assert_eq!(diff_in_whole_years(birth, ymd(2025, 2, 28)), 24);
    assert_eq!(diff_in_whole_years(birth, ymd(2025, 3, 1)), 25);
}

#[test]
fn shifted_range_formats() {
    let birth = BirthDate::new(15, 8, 1990).calendar_date().unwrap();
    let start = shift_years(birth, 30).unwrap();
    let end = shift_years(start, 6).unwrap();
    assert_eq!(format_short(start), "Aug 15, 2020");
    assert_eq!(format_short(end), "Aug 15, 2026");
}

#[test]
fn lenient_zero_date_still_has_calendar_date() {
    let b = BirthDate::parse_lenient("x-y-z").unwrap();
    assert_eq!(b, BirthDate::new(0, 0, 0));
    // Year 0, month 0, day 0 rolls to 30 Nov of year -1.
    assert_eq!(b.calendar_date().unwrap(), ymd(-1, 11, 30));
}

#[test]
fn missing_input_is_distinct_from_malformed() {
    assert_eq!(BirthDate::parse(""), Err(TimeError::MissingInput));
    assert!(matches!(
        BirthDate::parse("abcd-01-01"),
        Err(TimeError::MalformedNumeric(_))
    ));
}
