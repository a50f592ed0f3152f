//! Error types for numerology calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use sankhya_time::TimeError;

/// Errors from Vedic numerology calculations.
///
/// The arithmetic itself never fails; only the calendar side can.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum VedicError {
    /// Error from date construction or calendar arithmetic.
    Time(TimeError),
    /// Input outside what the calculation supports.
    InvalidInput(&'static str),
}

impl Display for VedicError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl Error for VedicError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            Self::InvalidInput(_) => None,
        }
    }
}

impl From<TimeError> for VedicError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
