//! Mahadasha resolution.
//!
//! The cycle is seeded with the graha of the Basic Number and starts at
//! birth. Walking forward, each graha holds the period for its digit in
//! years; the current Mahadasha is the first whose span contains the whole
//! years elapsed since birth.

use chrono::NaiveDate;
use sankhya_time::{diff_in_whole_years, shift_years};

use crate::error::VedicError;
use crate::graha::{CYCLE_YEARS, Graha};

use super::types::DashaPeriod;

/// Walk the cycle from `seed` and return the graha active after
/// `years_since_birth` whole years, with its start offset in years.
///
/// Negative ages resolve to the seed at offset 0. Whole 45-year cycles are
/// skipped up front since each returns to the seed.
pub fn resolve_mahadasha(seed: Graha, years_since_birth: i32) -> (Graha, u32) {
    let Ok(years) = u32::try_from(years_since_birth) else {
        return (seed, 0);
    };
    let mut cumulative = (years / CYCLE_YEARS) * CYCLE_YEARS;
    let mut dasha = seed;
    while cumulative + dasha.period_years() <= years {
        cumulative += dasha.period_years();
        dasha = dasha.successor();
    }
    (dasha, cumulative)
}

/// Concrete dates for a Mahadasha starting `offset_years` after birth.
pub fn mahadasha_at_offset(
    birth: NaiveDate,
    graha: Graha,
    offset_years: u32,
) -> Result<DashaPeriod, VedicError> {
    let offset = i32::try_from(offset_years)
        .map_err(|_| VedicError::InvalidInput("dasha offset exceeds the calendar range"))?;
    let start = shift_years(birth, offset)?;
    let end = shift_years(start, graha.period_years() as i32)?;
    Ok(DashaPeriod {
        graha,
        start,
        end,
        start_offset_years: offset_years,
    })
}

/// The Mahadasha running on `today`.
pub fn current_mahadasha(
    birth: NaiveDate,
    seed: Graha,
    today: NaiveDate,
) -> Result<DashaPeriod, VedicError> {
    let years = diff_in_whole_years(birth, today);
    let (graha, offset) = resolve_mahadasha(seed, years);
    mahadasha_at_offset(birth, graha, offset)
}

/// The first `count` Mahadashas from birth, back to back.
///
/// Each period ends where the next one starts, both counted from birth.
/// For a 29 Feb birth this can be a day before the end
/// [`current_mahadasha`] reports (which shifts from the rolled start), so
/// the periods never overlap and [`find_active_period`] picks the same
/// graha as the snapshot.
///
/// [`find_active_period`]: super::query::find_active_period
pub fn mahadasha_sequence(
    birth: NaiveDate,
    seed: Graha,
    count: usize,
) -> Result<Vec<DashaPeriod>, VedicError> {
    let mut periods = Vec::with_capacity(count);
    let mut graha = seed;
    let mut offset = 0u32;
    for _ in 0..count {
        let mut period = mahadasha_at_offset(birth, graha, offset)?;
        offset = offset
            .checked_add(graha.period_years())
            .ok_or(VedicError::InvalidInput("dasha offset exceeds the calendar range"))?;
        period.end = mahadasha_at_offset(birth, graha.successor(), offset)?.start;
        periods.push(period);
        graha = graha.successor();
    }
    Ok(periods)
}
