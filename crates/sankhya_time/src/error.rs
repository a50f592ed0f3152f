//! Error types for birth-date parsing and calendar arithmetic.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from date parsing or calendar arithmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimeError {
    /// No birth date was supplied.
    MissingInput,
    /// A date component was not a usable number (strict parsing only).
    MalformedNumeric(String),
    /// The rolled calendar date falls outside the representable range.
    OutOfRange { year: i32, month: i32, day: i32 },
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingInput => write!(f, "birth date is missing"),
            Self::MalformedNumeric(msg) => write!(f, "malformed date: {msg}"),
            Self::OutOfRange { year, month, day } => {
                write!(f, "date out of range: {year:04}-{month:02}-{day:02}")
            }
        }
    }
}

impl Error for TimeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(TimeError::MissingInput.to_string(), "birth date is missing");
        assert_eq!(
            TimeError::MalformedNumeric("day 'xx'".into()).to_string(),
            "malformed date: day 'xx'"
        );
        let e = TimeError::OutOfRange {
            year: 300_000,
            month: 1,
            day: 1,
        };
        assert_eq!(e.to_string(), "date out of range: 300000-01-01");
    }
}
