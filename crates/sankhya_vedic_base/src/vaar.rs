//! Vaar (weekday) and its numerology day number.
//!
//! The day number of a weekday is the digit of the graha that lords it:
//! Ravivaar → Surya (1), Somvaar → Chandra (2), Mangalvaar → Mangal (9),
//! Budhvaar → Buddh (5), Guruvaar → Guru (3), Shukravaar → Shukra (6),
//! Shanivaar → Shani (8).

use chrono::{Datelike, NaiveDate, Weekday};

use crate::graha::Graha;
use crate::numbers::Ank;

/// The 7 weekdays, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vaar {
    Ravivaar,
    Somvaar,
    Mangalvaar,
    Budhvaar,
    Guruvaar,
    Shukravaar,
    Shanivaar,
}

/// All 7 vaars, Sunday first.
pub const ALL_VAARS: [Vaar; 7] = [
    Vaar::Ravivaar,
    Vaar::Somvaar,
    Vaar::Mangalvaar,
    Vaar::Budhvaar,
    Vaar::Guruvaar,
    Vaar::Shukravaar,
    Vaar::Shanivaar,
];

impl Vaar {
    /// Weekday of a calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        match date.weekday() {
            Weekday::Sun => Self::Ravivaar,
            Weekday::Mon => Self::Somvaar,
            Weekday::Tue => Self::Mangalvaar,
            Weekday::Wed => Self::Budhvaar,
            Weekday::Thu => Self::Guruvaar,
            Weekday::Fri => Self::Shukravaar,
            Weekday::Sat => Self::Shanivaar,
        }
    }

    /// 0-based index, Sunday = 0.
    pub const fn index(self) -> u8 {
        match self {
            Self::Ravivaar => 0,
            Self::Somvaar => 1,
            Self::Mangalvaar => 2,
            Self::Budhvaar => 3,
            Self::Guruvaar => 4,
            Self::Shukravaar => 5,
            Self::Shanivaar => 6,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Ravivaar => "Ravivaar",
            Self::Somvaar => "Somvaar",
            Self::Mangalvaar => "Mangalvaar",
            Self::Budhvaar => "Budhvaar",
            Self::Guruvaar => "Guruvaar",
            Self::Shukravaar => "Shukravaar",
            Self::Shanivaar => "Shanivaar",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Ravivaar => "Sunday",
            Self::Somvaar => "Monday",
            Self::Mangalvaar => "Tuesday",
            Self::Budhvaar => "Wednesday",
            Self::Guruvaar => "Thursday",
            Self::Shukravaar => "Friday",
            Self::Shanivaar => "Saturday",
        }
    }

    /// Graha lord of the weekday.
    pub const fn lord(self) -> Graha {
        match self {
            Self::Ravivaar => Graha::Surya,
            Self::Somvaar => Graha::Chandra,
            Self::Mangalvaar => Graha::Mangal,
            Self::Budhvaar => Graha::Buddh,
            Self::Guruvaar => Graha::Guru,
            Self::Shukravaar => Graha::Shukra,
            Self::Shanivaar => Graha::Shani,
        }
    }

    /// Day number used in the Antardasha sum.
    pub const fn day_number(self) -> Ank {
        self.lord().ank()
    }
}
