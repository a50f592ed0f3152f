//! Birth date as entered at the input boundary.
//!
//! The components are kept exactly as parsed. Calendar validity is not
//! checked here; calendar operations go through [`BirthDate::calendar_date`],
//! which rolls out-of-range components into neighbouring months and years.

use chrono::NaiveDate;

use crate::civil::rolled_date;
use crate::error::TimeError;

/// Day, month and year of birth as integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BirthDate {
    pub day: i32,
    pub month: i32,
    pub year: i32,
}

impl BirthDate {
    pub const fn new(day: i32, month: i32, year: i32) -> Self {
        Self { day, month, year }
    }

    /// Parse a `YYYY-MM-DD` date, rejecting anything that is not a
    /// plausible day-of-month and month.
    ///
    /// An empty (or all-whitespace) string is [`TimeError::MissingInput`].
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(TimeError::MissingInput);
        }
        let parts: Vec<&str> = s.split('-').collect();
        if parts.len() != 3 {
            return Err(TimeError::MalformedNumeric(format!(
                "expected YYYY-MM-DD, got {s}"
            )));
        }
        let year = parse_part("year", parts[0])?;
        let month = parse_part("month", parts[1])?;
        let day = parse_part("day", parts[2])?;
        if !(1..=12).contains(&month) {
            return Err(TimeError::MalformedNumeric(format!(
                "month {month} not in 1-12"
            )));
        }
        if !(1..=31).contains(&day) {
            return Err(TimeError::MalformedNumeric(format!("day {day} not in 1-31")));
        }
        Ok(Self { day, month, year })
    }

    /// Parse a `YYYY-MM-DD` date, coercing every non-numeric or missing
    /// component to 0.
    ///
    /// Only an empty string fails. Coerced zeros still produce in-range
    /// numerology values because the digital root of 0 is 9.
    pub fn parse_lenient(s: &str) -> Result<Self, TimeError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(TimeError::MissingInput);
        }
        let mut parts = s.split('-').map(|p| p.trim().parse::<i32>().unwrap_or(0));
        let year = parts.next().unwrap_or(0);
        let month = parts.next().unwrap_or(0);
        let day = parts.next().unwrap_or(0);
        Ok(Self { day, month, year })
    }

    /// The calendar date this birth date denotes, with overflowing
    /// components rolled forward (31 Apr becomes 1 May).
    pub fn calendar_date(&self) -> Result<NaiveDate, TimeError> {
        rolled_date(self.year, self.month, self.day)
    }
}

impl std::fmt::Display for BirthDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl std::str::FromStr for BirthDate {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn parse_part(what: &str, raw: &str) -> Result<i32, TimeError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|e| TimeError::MalformedNumeric(format!("{what} '{raw}': {e}")))
}
