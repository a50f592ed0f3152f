use sankhya_time::TimeError;
use sankhya_vedic_base::VedicError;

/// Shown to the user when no birth date was given.
pub const MISSING_INPUT_MESSAGE: &str = "Please enter your birth date";

/// Shown to the user for every other failure.
pub const GENERIC_FAILURE_MESSAGE: &str =
    "An error occurred while calculating. Please check your inputs.";

/// Unified error type for the convenience layer.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SankhyaError {
    /// No birth date was supplied; nothing was computed.
    #[error("birth date is missing")]
    MissingInput,
    /// A date component was not a usable number (strict parsing only).
    #[error("malformed date: {0}")]
    MalformedNumeric(String),
    /// Anything else that went wrong inside the pipeline.
    #[error("calculation failed: {0}")]
    Calculation(#[source] VedicError),
}

impl SankhyaError {
    /// The one-line message a user interface should show.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::MissingInput => MISSING_INPUT_MESSAGE,
            _ => GENERIC_FAILURE_MESSAGE,
        }
    }
}

impl From<TimeError> for SankhyaError {
    fn from(e: TimeError) -> Self {
        match e {
            TimeError::MissingInput => Self::MissingInput,
            TimeError::MalformedNumeric(msg) => Self::MalformedNumeric(msg),
            other => Self::Calculation(VedicError::Time(other)),
        }
    }
}

impl From<VedicError> for SankhyaError {
    fn from(e: VedicError) -> Self {
        match e {
            VedicError::Time(t) => t.into(),
            other => Self::Calculation(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_errors_keep_their_category() {
        assert!(matches!(
            SankhyaError::from(TimeError::MissingInput),
            SankhyaError::MissingInput
        ));
        assert!(matches!(
            SankhyaError::from(TimeError::MalformedNumeric("x".into())),
            SankhyaError::MalformedNumeric(_)
        ));
        let out_of_range = TimeError::OutOfRange {
            year: 999_999,
            month: 1,
            day: 1,
        };
        assert!(matches!(
            SankhyaError::from(out_of_range),
            SankhyaError::Calculation(VedicError::Time(_))
        ));
    }

    #[test]
    fn wrapped_time_error_is_unwrapped() {
        let e = SankhyaError::from(VedicError::Time(TimeError::MissingInput));
        assert!(matches!(e, SankhyaError::MissingInput));
    }

    #[test]
    fn user_messages() {
        assert_eq!(
            SankhyaError::MissingInput.user_message(),
            "Please enter your birth date"
        );
        assert_eq!(
            SankhyaError::MalformedNumeric("day".into()).user_message(),
            GENERIC_FAILURE_MESSAGE
        );
        assert_eq!(
            SankhyaError::Calculation(VedicError::InvalidInput("x")).user_message(),
            GENERIC_FAILURE_MESSAGE
        );
    }
}
