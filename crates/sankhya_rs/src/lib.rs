//! Convenience layer for the sankhya numerology engine.
//!
//! Turns raw form input into a complete, serializable [`NumerologyReport`]
//! and keeps the last good one in a [`Session`], so callers never handle
//! grids, dashas and panels separately.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use sankhya_rs::*;
//!
//! let today = NaiveDate::from_ymd_opt(2025, 10, 19).unwrap();
//! let mut session = Session::new(true);
//! let report = session.submit(&BirthInput::new("Asha", "1990-08-15"), today)?;
//! println!("Mahadasha: {} until {}", report.mahadasha.planet, report.mahadasha.end);
//! ```

pub mod cache;
pub mod convenience;
pub mod error;
pub mod input;
pub mod report;
pub mod session;

pub use cache::{CachedInput, LastInputCache};
pub use convenience::{calculate, core_numbers, dasha, grid, parse_birth_date, timeline};
pub use error::{GENERIC_FAILURE_MESSAGE, MISSING_INPUT_MESSAGE, SankhyaError};
pub use input::BirthInput;
pub use report::{
    AntardashaReport, ChipReport, ColorReport, GridCellReport, MahadashaReport, NumerologyReport,
    PanelsReport,
};
pub use session::Session;

// Re-export the types callers need alongside the convenience functions.
pub use sankhya_config::{OutputFormat, SankhyaConfig};
pub use sankhya_time::{BirthDate, NaiveDate, format_short};
pub use sankhya_vedic_base::{
    Ank, ChipKind, CoreNumbers, DashaPeriod, DashaSnapshot, Graha, VedicGrid, digital_root,
    lucky_number,
};
