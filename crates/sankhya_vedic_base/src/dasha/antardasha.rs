//! Antardasha resolution.
//!
//! The Antardasha of a year is the digital root of
//! `birth day + birth month + (target year mod 100) + day number`,
//! where the target year is that of the latest birthday anniversary and
//! the day number comes from the anniversary's weekday.

use chrono::{Datelike, NaiveDate};
use sankhya_time::{anniversary_in, diff_in_whole_years};

use crate::error::VedicError;
use crate::graha::Graha;
use crate::numbers::{Ank, digital_root};
use crate::vaar::Vaar;

use super::types::Antardasha;

/// The Antardasha digit from its four inputs.
///
/// Pure: identical inputs always give the identical digit.
pub fn antardasha_number(day: u32, month: u32, target_year: i32, vaar: Vaar) -> Ank {
    let year_tail = i64::from(target_year) % 100;
    let sum = i64::from(day)
        + i64::from(month)
        + year_tail
        + i64::from(vaar.day_number().get());
    digital_root(sum)
}

/// Antardasha for the anniversary of `birth` in `target_year`.
pub fn antardasha_for_year(birth: NaiveDate, target_year: i32) -> Result<Antardasha, VedicError> {
    let anniversary = anniversary_in(birth, target_year)?;
    let vaar = Vaar::from_date(anniversary);
    let ank = antardasha_number(birth.day(), birth.month(), target_year, vaar);
    Ok(Antardasha {
        graha: Graha::from_ank(ank),
        target_year,
        anniversary,
        vaar,
    })
}

/// Antardasha in force on `today`: the one of the latest anniversary.
pub fn current_antardasha(birth: NaiveDate, today: NaiveDate) -> Result<Antardasha, VedicError> {
    let years = diff_in_whole_years(birth, today);
    let target_year = birth
        .year()
        .checked_add(years)
        .ok_or(VedicError::InvalidInput("anniversary year exceeds the calendar range"))?;
    antardasha_for_year(birth, target_year)
}
