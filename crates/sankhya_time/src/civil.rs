//! Civil-calendar helpers on top of `chrono::NaiveDate`.
//!
//! Date construction follows the rollover convention of the birth-date
//! input: a month outside 1-12 carries into the year, and a day outside the
//! month carries into the neighbouring months. 29 Feb shifted into a common
//! year therefore lands on 1 Mar.

use chrono::{Datelike, NaiveDate, TimeDelta};

use crate::error::TimeError;

/// Build a calendar date, rolling overflowing month/day components.
pub fn rolled_date(year: i32, month: i32, day: i32) -> Result<NaiveDate, TimeError> {
    let out_of_range = || TimeError::OutOfRange { year, month, day };

    let month0 = month.checked_sub(1).ok_or_else(out_of_range)?;
    let y = year
        .checked_add(month0.div_euclid(12))
        .ok_or_else(out_of_range)?;
    let m = month0.rem_euclid(12) as u32 + 1;

    let first = NaiveDate::from_ymd_opt(y, m, 1).ok_or_else(out_of_range)?;
    let offset = TimeDelta::try_days(i64::from(day) - 1).ok_or_else(out_of_range)?;
    first.checked_add_signed(offset).ok_or_else(out_of_range)
}

/// Whole years elapsed from `start` to `end`.
///
/// A year counts only once the month/day anniversary has been reached.
/// Negative when `end` precedes `start`.
pub fn diff_in_whole_years(start: NaiveDate, end: NaiveDate) -> i32 {
    let mut years = end.year() - start.year();
    let months = end.month() as i32 - start.month() as i32;
    if months < 0 || (months == 0 && end.day() < start.day()) {
        years -= 1;
    }
    years
}

/// The same month/day `years` later (or earlier), rolled if the day does
/// not exist in the target year.
pub fn shift_years(date: NaiveDate, years: i32) -> Result<NaiveDate, TimeError> {
    let year = date.year().checked_add(years).ok_or(TimeError::OutOfRange {
        year: date.year(),
        month: date.month() as i32,
        day: date.day() as i32,
    })?;
    rolled_date(year, date.month() as i32, date.day() as i32)
}

/// The anniversary of `date` falling in calendar year `year`.
pub fn anniversary_in(date: NaiveDate, year: i32) -> Result<NaiveDate, TimeError> {
    rolled_date(year, date.month() as i32, date.day() as i32)
}

/// Signed number of days from `start` to `end`.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    end.signed_duration_since(start).num_days()
}

/// en-US short form, e.g. `Aug 15, 2025`.
pub fn format_short(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn rolled_plain_date() {
        assert_eq!(rolled_date(1990, 8, 15).unwrap(), ymd(1990, 8, 15));
    }

    #[test]
    fn rolled_leap_day_in_common_year() {
        assert_eq!(rolled_date(2023, 2, 29).unwrap(), ymd(2023, 3, 1));
        assert_eq!(rolled_date(2024, 2, 29).unwrap(), ymd(2024, 2, 29));
    }

    #[test]
    fn rolled_zero_components() {
        // Month 0 is December of the previous year, day 0 the last day of
        // the previous month.
        assert_eq!(rolled_date(1990, 0, 15).unwrap(), ymd(1989, 12, 15));
        assert_eq!(rolled_date(1990, 3, 0).unwrap(), ymd(1990, 2, 28));
        assert_eq!(rolled_date(1990, 0, 0).unwrap(), ymd(1989, 11, 30));
    }

    #[test]
    fn rolled_month_overflow() {
        assert_eq!(rolled_date(1990, 13, 1).unwrap(), ymd(1991, 1, 1));
        assert_eq!(rolled_date(1990, 4, 31).unwrap(), ymd(1990, 5, 1));
    }

    #[test]
    fn rolled_out_of_range() {
        assert!(matches!(
            rolled_date(i32::MAX, 1, 1),
            Err(TimeError::OutOfRange { .. })
        ));
    }

    #[test]
    fn whole_years_before_and_after_anniversary() {
        let birth = ymd(1990, 8, 15);
        assert_eq!(diff_in_whole_years(birth, ymd(2024, 8, 14)), 33);
        assert_eq!(diff_in_whole_years(birth, ymd(2024, 8, 15)), 34);
        assert_eq!(diff_in_whole_years(birth, ymd(2024, 12, 1)), 34);
        assert_eq!(diff_in_whole_years(birth, ymd(2024, 1, 1)), 33);
    }

    #[test]
    fn whole_years_negative_when_end_precedes() {
        let birth = ymd(2030, 6, 1);
        assert_eq!(diff_in_whole_years(birth, ymd(2026, 10, 19)), -4);
        assert_eq!(diff_in_whole_years(birth, birth), 0);
    }

    #[test]
    fn shift_leap_day() {
        assert_eq!(shift_years(ymd(2000, 2, 29), 1).unwrap(), ymd(2001, 3, 1));
        assert_eq!(shift_years(ymd(2000, 2, 29), 4).unwrap(), ymd(2004, 2, 29));
        assert_eq!(shift_years(ymd(2000, 2, 29), 0).unwrap(), ymd(2000, 2, 29));
    }

    #[test]
    fn anniversary_year() {
        assert_eq!(anniversary_in(ymd(1990, 8, 15), 2025).unwrap(), ymd(2025, 8, 15));
    }

    #[test]
    fn days_between_signed() {
        assert_eq!(days_between(ymd(2024, 1, 1), ymd(2024, 12, 31)), 365);
        assert_eq!(days_between(ymd(2024, 1, 2), ymd(2024, 1, 1)), -1);
    }

    #[test]
    fn short_format() {
        assert_eq!(format_short(ymd(2025, 8, 15)), "Aug 15, 2025");
        assert_eq!(format_short(ymd(1999, 1, 3)), "Jan 3, 1999");
    }
}
