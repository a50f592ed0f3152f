//! The 3x3 Vedic grid.
//!
//! Each digit 1-9 owns one fixed cell. Cells are numbered 1-9 row-major,
//! and the digit → cell bijection gives the layout
//!
//! ```text
//!  3 | 1 | 9
//!  6 | 7 | 5
//!  2 | 8 | 4
//! ```
//!
//! A cell collects one plain chip per occurrence of its digit in the birth
//! date (day, month, last two digits of the year, zeros dropped), plus one
//! for the Destiny Number and, outside the excluded days, one for the Basic
//! Number. The current Mahadasha and Antardasha digits are overlaid as
//! separate marker chips.

use sankhya_time::BirthDate;

use crate::numbers::{ALL_ANKS, Ank, CoreNumbers, decimal_digits};

/// Digit → 1-based cell index (index 0 = digit 1).
pub const DIGIT_TO_CELL: [u8; 9] = [2, 7, 1, 9, 6, 4, 5, 8, 3];

/// Cell → home digit, row-major (index 0 = cell 1).
pub const CELL_TO_DIGIT: [u8; 9] = [3, 1, 9, 6, 7, 5, 2, 8, 4];

/// Days whose Basic Number adds no grid chip: single-digit days, where the
/// day digit is already counted, and the round tens.
pub const BASIC_EXCLUDED_DAYS: [i32; 12] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 20, 30];

/// 1-based cell index owning a digit.
pub const fn cell_of(digit: Ank) -> u8 {
    DIGIT_TO_CELL[digit.index()]
}

/// Whether the Basic Number earns its own chip for this day of month.
pub fn basic_adds_chip(day: i32) -> bool {
    !BASIC_EXCLUDED_DAYS.contains(&day)
}

/// Kind of a chip placed in a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChipKind {
    /// One counted occurrence of the digit.
    Plain,
    /// Current Mahadasha digit.
    Mahadasha,
    /// Current Antardasha digit.
    Antardasha,
}

impl ChipKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Mahadasha => "mahadasha",
            Self::Antardasha => "antardasha",
        }
    }
}

/// A digit rendered in a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chip {
    pub kind: ChipKind,
    pub digit: Ank,
}

/// The two dasha digits overlaid on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashaMarkers {
    pub mahadasha: Ank,
    pub antardasha: Ank,
}

/// One of the nine grid positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    /// 1-based row-major position.
    pub index: u8,
    /// The digit this cell is reserved for.
    pub home: Ank,
    /// Plain chips first, then the Mahadasha marker, then the Antardasha marker.
    pub chips: Vec<Chip>,
}

impl GridCell {
    /// Number of plain chips (markers excluded).
    pub fn plain_count(&self) -> usize {
        self.chips.iter().filter(|c| c.kind == ChipKind::Plain).count()
    }

    pub fn has_marker(&self, kind: ChipKind) -> bool {
        self.chips.iter().any(|c| c.kind == kind)
    }
}

/// The filled 3x3 grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VedicGrid {
    cells: Vec<GridCell>,
}

impl VedicGrid {
    /// All 9 cells in row-major order.
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    /// Cell by 1-based index.
    pub fn cell(&self, index: u8) -> Option<&GridCell> {
        self.cells.get(usize::from(index).checked_sub(1)?)
    }

    /// Cell reserved for a digit.
    pub fn cell_for(&self, digit: Ank) -> &GridCell {
        &self.cells[usize::from(cell_of(digit)) - 1]
    }

    /// Three rows of three cells.
    pub fn rows(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.chunks(3)
    }

    /// Total plain chips over all cells.
    pub fn plain_chip_count(&self) -> usize {
        self.cells.iter().map(GridCell::plain_count).sum()
    }

    /// Digits with no plain chip.
    pub fn missing_digits(&self) -> Vec<Ank> {
        ALL_ANKS
            .into_iter()
            .filter(|&d| self.cell_for(d).plain_count() == 0)
            .collect()
    }
}

/// Nonzero digits of day, month and the last two digits of the year.
pub fn birth_digits(birth: &BirthDate) -> Vec<Ank> {
    let year_tail = i64::from(birth.year).unsigned_abs() % 100;
    decimal_digits(i64::from(birth.day))
        .chain(decimal_digits(i64::from(birth.month)))
        .chain(decimal_digits(year_tail as i64))
        .filter_map(Ank::new)
        .collect()
}

/// Plain-chip count per digit (index 0 = digit 1).
pub fn digit_counts(birth: &BirthDate, core: &CoreNumbers) -> [u32; 9] {
    let mut counts = [0u32; 9];
    for d in birth_digits(birth) {
        counts[d.index()] += 1;
    }
    counts[core.destiny.index()] += 1;
    if basic_adds_chip(birth.day) {
        counts[core.basic.index()] += 1;
    }
    counts
}

/// Fill the grid for a birth date.
///
/// `markers` carries the already-resolved dasha digits; pass `None` to
/// render plain chips only.
pub fn vedic_grid(
    birth: &BirthDate,
    core: &CoreNumbers,
    markers: Option<DashaMarkers>,
) -> VedicGrid {
    let mut cells: Vec<GridCell> = CELL_TO_DIGIT
        .iter()
        .enumerate()
        .filter_map(|(i, &d)| {
            Some(GridCell {
                index: i as u8 + 1,
                home: Ank::new(d)?,
                chips: Vec::new(),
            })
        })
        .collect();

    let counts = digit_counts(birth, core);
    for digit in ALL_ANKS {
        let cell = &mut cells[usize::from(cell_of(digit)) - 1];
        let repeats = counts[digit.index()] as usize;
        cell.chips.extend(std::iter::repeat_n(
            Chip {
                kind: ChipKind::Plain,
                digit,
            },
            repeats,
        ));
    }

    if let Some(m) = markers {
        for (kind, digit) in [
            (ChipKind::Mahadasha, m.mahadasha),
            (ChipKind::Antardasha, m.antardasha),
        ] {
            cells[usize::from(cell_of(digit)) - 1]
                .chips
                .push(Chip { kind, digit });
        }
    }

    VedicGrid { cells }
}
