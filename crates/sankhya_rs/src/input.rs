//! The form-like boundary: a display name plus an optional date string.

use sankhya_time::BirthDate;

use crate::error::SankhyaError;

/// Raw user input. The name is display-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BirthInput {
    pub name: String,
    /// `YYYY-MM-DD`, as an HTML date input produces it.
    pub birth_date: Option<String>,
}

impl BirthInput {
    pub fn new(name: impl Into<String>, birth_date: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            birth_date: Some(birth_date.into()),
        }
    }

    /// The trimmed name.
    pub fn display_name(&self) -> &str {
        self.name.trim()
    }

    /// The trimmed date text, `None` when absent or blank.
    pub fn date_text(&self) -> Option<&str> {
        self.birth_date
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Parse the birth date.
    ///
    /// `strict` rejects non-numeric parts; otherwise they read as 0.
    pub fn birth(&self, strict: bool) -> Result<BirthDate, SankhyaError> {
        let text = self.date_text().ok_or(SankhyaError::MissingInput)?;
        let parsed = if strict {
            BirthDate::parse(text)
        } else {
            BirthDate::parse_lenient(text)
        };
        Ok(parsed?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_and_blank_dates_are_missing() {
        let absent = BirthInput {
            name: "A".into(),
            birth_date: None,
        };
        assert!(matches!(absent.birth(true), Err(SankhyaError::MissingInput)));
        let blank = BirthInput::new("A", "   ");
        assert!(matches!(blank.birth(false), Err(SankhyaError::MissingInput)));
    }

    #[test]
    fn strict_and_lenient() {
        let input = BirthInput::new("A", "1990-aa-15");
        assert!(matches!(
            input.birth(true),
            Err(SankhyaError::MalformedNumeric(_))
        ));
        assert_eq!(input.birth(false).unwrap(), BirthDate::new(15, 0, 1990));
    }

    #[test]
    fn name_is_trimmed() {
        let input = BirthInput::new("  Asha Rao ", "1990-08-15");
        assert_eq!(input.display_name(), "Asha Rao");
        assert_eq!(input.birth(true).unwrap(), BirthDate::new(15, 8, 1990));
    }
}
