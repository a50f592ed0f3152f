//! Calendar arithmetic for the numerology engine.
//!
//! This crate provides:
//! - `BirthDate` parsing (strict and fail-soft)
//! - Rolled calendar-date construction
//! - Whole-year differences, year shifting and anniversaries
//! - en-US short date formatting

pub mod birth_date;
pub mod civil;
pub mod error;

pub use birth_date::BirthDate;
pub use chrono::NaiveDate;
pub use civil::{
    anniversary_in, days_between, diff_in_whole_years, format_short, rolled_date, shift_years,
};
pub use error::TimeError;
