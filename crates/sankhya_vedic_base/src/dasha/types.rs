//! Core types for the numerology dasha timeline.
//!
//! Mahadashas run through the 9 grahas cyclically, each for as many years
//! as its digit. The Antardasha is a per-year indicator derived from the
//! latest birthday anniversary and carries no date range of its own.

use chrono::NaiveDate;
use sankhya_time::days_between;

use crate::graha::Graha;
use crate::grid::DashaMarkers;
use crate::vaar::Vaar;

/// One Mahadasha period with concrete dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashaPeriod {
    /// The graha ruling this period.
    pub graha: Graha,
    /// Inclusive.
    pub start: NaiveDate,
    /// Exclusive.
    pub end: NaiveDate,
    /// Whole years from birth to `start`.
    pub start_offset_years: u32,
}

impl DashaPeriod {
    /// Length in whole years.
    pub const fn period_years(&self) -> u32 {
        self.graha.period_years()
    }

    /// Duration of the period in days.
    pub fn duration_days(&self) -> i64 {
        days_between(self.start, self.end)
    }

    /// Whether `date` falls in `[start, end)`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }

    /// Elapsed fraction at `date`, clamped to [0, 1].
    pub fn progress_at(&self, date: NaiveDate) -> f64 {
        let total = self.duration_days();
        if total <= 0 {
            return 1.0;
        }
        let elapsed = days_between(self.start, date) as f64 / total as f64;
        elapsed.clamp(0.0, 1.0)
    }
}

/// The Antardasha for one anniversary year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Antardasha {
    pub graha: Graha,
    /// Calendar year of the anniversary used.
    pub target_year: i32,
    /// The anniversary date itself.
    pub anniversary: NaiveDate,
    /// Weekday of the anniversary.
    pub vaar: Vaar,
}

/// Active periods at a query date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashaSnapshot {
    /// The queried date ("today").
    pub query_date: NaiveDate,
    /// Whole years from birth to the query date (negative before birth).
    pub years_since_birth: i32,
    /// Current Mahadasha.
    pub mahadasha: DashaPeriod,
    /// Fraction of the Mahadasha elapsed, in [0, 1].
    pub progress: f64,
    /// Current Antardasha.
    pub antardasha: Antardasha,
}

impl DashaSnapshot {
    /// Progress as a rounded whole percentage.
    pub fn progress_percent(&self) -> u8 {
        (self.progress * 100.0).round() as u8
    }

    /// The graha whose Mahadasha follows the current one.
    pub const fn next_mahadasha(&self) -> Graha {
        self.mahadasha.graha.successor()
    }

    /// Whole years left in the current Mahadasha.
    pub fn years_remaining(&self) -> u32 {
        let elapsed = (self.years_since_birth.max(0) as u32)
            .saturating_sub(self.mahadasha.start_offset_years);
        self.mahadasha.period_years().saturating_sub(elapsed)
    }

    /// Digits to overlay on the Vedic grid.
    pub const fn markers(&self) -> DashaMarkers {
        DashaMarkers {
            mahadasha: self.mahadasha.graha.ank(),
            antardasha: self.antardasha.graha.ank(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn period() -> DashaPeriod {
        DashaPeriod {
            graha: Graha::Shukra,
            start: ymd(2020, 8, 15),
            end: ymd(2026, 8, 15),
            start_offset_years: 30,
        }
    }

    #[test]
    fn contains_half_open() {
        let p = period();
        assert!(p.contains(ymd(2020, 8, 15)));
        assert!(p.contains(ymd(2026, 8, 14)));
        assert!(!p.contains(ymd(2026, 8, 15)));
    }

    #[test]
    fn progress_clamped() {
        let p = period();
        assert_eq!(p.progress_at(ymd(2019, 1, 1)), 0.0);
        assert_eq!(p.progress_at(ymd(2030, 1, 1)), 1.0);
        let mid = p.progress_at(ymd(2023, 8, 15));
        assert!((mid - 0.5).abs() < 0.01, "got {mid}");
    }

    #[test]
    fn duration() {
        assert_eq!(period().duration_days(), 2191);
        assert_eq!(period().period_years(), 6);
    }
}
