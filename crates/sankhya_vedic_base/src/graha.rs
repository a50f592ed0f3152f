//! The nine grahas in numerological order.
//!
//! Each graha owns one digit: Surya=1, Chandra=2, Guru=3, Rahu=4, Buddh=5,
//! Shukra=6, Ketu=7, Shani=8, Mangal=9. A graha's Mahadasha lasts as many
//! years as its digit, so one full cycle spans 45 years.

use crate::numbers::Ank;

/// The 9 grahas, ordered by their numerology digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Graha {
    Surya,
    Chandra,
    Guru,
    Rahu,
    Buddh,
    Shukra,
    Ketu,
    Shani,
    Mangal,
}

/// All 9 grahas in digit order (index 0 = digit 1).
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Guru,
    Graha::Rahu,
    Graha::Buddh,
    Graha::Shukra,
    Graha::Ketu,
    Graha::Shani,
    Graha::Mangal,
];

/// Sum of all nine Mahadasha periods, in years.
pub const CYCLE_YEARS: u32 = 45;

impl Graha {
    /// Graha ruling a digit.
    pub const fn from_ank(ank: Ank) -> Self {
        ALL_GRAHAS[ank.index()]
    }

    /// The digit this graha rules.
    pub const fn ank(self) -> Ank {
        match Ank::new(self.index() as u8 + 1) {
            Some(a) => a,
            None => unreachable!(),
        }
    }

    /// 0-based index into ALL_GRAHAS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Surya => 0,
            Self::Chandra => 1,
            Self::Guru => 2,
            Self::Rahu => 3,
            Self::Buddh => 4,
            Self::Shukra => 5,
            Self::Ketu => 6,
            Self::Shani => 7,
            Self::Mangal => 8,
        }
    }

    /// Sanskrit name of the graha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Guru => "Guru",
            Self::Rahu => "Rahu",
            Self::Buddh => "Buddh",
            Self::Shukra => "Shukra",
            Self::Ketu => "Ketu",
            Self::Shani => "Shani",
            Self::Mangal => "Mangal",
        }
    }

    /// English name of the graha.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Guru => "Jupiter",
            Self::Rahu => "Rahu",
            Self::Buddh => "Mercury",
            Self::Shukra => "Venus",
            Self::Ketu => "Ketu",
            Self::Shani => "Saturn",
            Self::Mangal => "Mars",
        }
    }

    /// Mahadasha length in years (equal to the digit).
    pub const fn period_years(self) -> u32 {
        self.index() as u32 + 1
    }

    /// Qualities the graha brings to a period it rules.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Surya => "Leadership, authority, and self-confidence.",
            Self::Chandra => "Emotions, intuition, and nurturing.",
            Self::Guru => "Wisdom, expansion, and good fortune.",
            Self::Rahu => "Unexpected events and transformation.",
            Self::Buddh => "Communication, intellect, and business.",
            Self::Shukra => "Love, beauty, and luxury.",
            Self::Ketu => "Spirituality and detachment.",
            Self::Shani => "Discipline, hard work, and karma.",
            Self::Mangal => "Energy, courage, and action.",
        }
    }

    /// Next graha in the Mahadasha cycle; Mangal wraps to Surya.
    pub const fn successor(self) -> Self {
        ALL_GRAHAS[(self.index() as usize + 1) % 9]
    }
}

impl std::fmt::Display for Graha {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.english_name())
    }
}
