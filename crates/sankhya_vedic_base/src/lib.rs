//! Vedic numerology computed from a birth date.
//!
//! This crate provides:
//! - Digital root, Basic Number and Destiny Number
//! - The 9 grahas with their digits, periods and descriptions
//! - The 3x3 Vedic grid with dasha markers
//! - Mahadasha/Antardasha resolution for a given date
//! - Static lookup tables and the derived display panels
//!
//! Everything here is pure arithmetic over small integers and calendar
//! dates; the only fallible step is calendar construction.

pub mod dasha;
pub mod error;
pub mod graha;
pub mod grid;
pub mod numbers;
pub mod panels;
pub mod tables;
pub mod vaar;

pub use dasha::{
    Antardasha, DashaPeriod, DashaSnapshot, antardasha_number, dasha_snapshot,
    mahadasha_sequence, resolve_mahadasha,
};
pub use error::VedicError;
pub use graha::{ALL_GRAHAS, CYCLE_YEARS, Graha};
pub use grid::{
    BASIC_EXCLUDED_DAYS, CELL_TO_DIGIT, Chip, ChipKind, DIGIT_TO_CELL, DashaMarkers, GridCell,
    VedicGrid, basic_adds_chip, birth_digits, cell_of, digit_counts, vedic_grid,
};
pub use numbers::{
    ALL_ANKS, Ank, CoreNumbers, basic_number, destiny_number, digital_root, lucky_number,
    sum_of_decimal_digits,
};
pub use panels::{Panels, derive_panels, life_path_text};
pub use tables::LuckyColor;
pub use vaar::{ALL_VAARS, Vaar};
