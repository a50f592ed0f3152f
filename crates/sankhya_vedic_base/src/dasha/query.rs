//! Snapshot of the active dashas at a date.

use chrono::NaiveDate;
use log::debug;
use sankhya_time::{BirthDate, diff_in_whole_years};

use crate::error::VedicError;
use crate::graha::Graha;
use crate::numbers::Ank;

use super::antardasha::current_antardasha;
use super::mahadasha::current_mahadasha;
use super::types::{DashaPeriod, DashaSnapshot};

/// Resolve the Mahadasha and Antardasha active on `today`.
///
/// `basic` seeds the Mahadasha cycle.
pub fn dasha_snapshot(
    birth: &BirthDate,
    basic: Ank,
    today: NaiveDate,
) -> Result<DashaSnapshot, VedicError> {
    let birth_date = birth.calendar_date()?;
    let years_since_birth = diff_in_whole_years(birth_date, today);
    let mahadasha = current_mahadasha(birth_date, Graha::from_ank(basic), today)?;
    let antardasha = current_antardasha(birth_date, today)?;
    let progress = mahadasha.progress_at(today);

    debug!(
        "dasha at {today}: age {years_since_birth}, mahadasha {} ({} - {}), antardasha {} ({})",
        mahadasha.graha, mahadasha.start, mahadasha.end, antardasha.graha, antardasha.target_year
    );

    Ok(DashaSnapshot {
        query_date: today,
        years_since_birth,
        mahadasha,
        progress,
        antardasha,
    })
}

/// Index of the period containing `date`, if any.
pub fn find_active_period(periods: &[DashaPeriod], date: NaiveDate) -> Option<usize> {
    periods.iter().position(|p| p.contains(date))
}
