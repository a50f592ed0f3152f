//! Dasha (planetary period) timeline for numerology.
//!
//! - Mahadasha: the 9 grahas in cyclic order, seeded by the Basic Number,
//!   each running for its digit in years (45-year cycle).
//! - Antardasha: a per-year indicator computed from the latest birthday
//!   anniversary and its weekday.

pub mod antardasha;
pub mod mahadasha;
pub mod query;
pub mod types;

pub use antardasha::{antardasha_for_year, antardasha_number, current_antardasha};
pub use mahadasha::{
    current_mahadasha, mahadasha_at_offset, mahadasha_sequence, resolve_mahadasha,
};
pub use query::{dasha_snapshot, find_active_period};
pub use types::{Antardasha, DashaPeriod, DashaSnapshot};
