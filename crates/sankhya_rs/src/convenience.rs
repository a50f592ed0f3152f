use chrono::NaiveDate;

use sankhya_time::BirthDate;
use sankhya_vedic_base::{
    CoreNumbers, DashaPeriod, DashaSnapshot, Graha, VedicGrid, dasha_snapshot, mahadasha_sequence,
    vedic_grid,
};

use crate::error::SankhyaError;
use crate::input::BirthInput;
use crate::report::NumerologyReport;

/// Parse a `YYYY-MM-DD` birth date, strictly or with zero coercion.
pub fn parse_birth_date(text: &str, strict: bool) -> Result<BirthDate, SankhyaError> {
    BirthInput {
        name: String::new(),
        birth_date: Some(text.to_string()),
    }
    .birth(strict)
}

/// Full report for one submission.
pub fn calculate(
    input: &BirthInput,
    today: NaiveDate,
    strict: bool,
) -> Result<NumerologyReport, SankhyaError> {
    let date_text = input.date_text().ok_or(SankhyaError::MissingInput)?;
    let birth = input.birth(strict)?;
    NumerologyReport::build(input.display_name(), date_text, &birth, today)
}

/// Basic and Destiny numbers.
pub fn core_numbers(birth: &BirthDate) -> CoreNumbers {
    CoreNumbers::from_birth(birth)
}

/// Active Mahadasha and Antardasha on `today`.
pub fn dasha(birth: &BirthDate, today: NaiveDate) -> Result<DashaSnapshot, SankhyaError> {
    let core = CoreNumbers::from_birth(birth);
    Ok(dasha_snapshot(birth, core.basic, today)?)
}

/// The grid with the dasha markers for `today` overlaid.
pub fn grid(birth: &BirthDate, today: NaiveDate) -> Result<VedicGrid, SankhyaError> {
    let core = CoreNumbers::from_birth(birth);
    let snapshot = dasha_snapshot(birth, core.basic, today)?;
    Ok(vedic_grid(birth, &core, Some(snapshot.markers())))
}

/// The first `count` Mahadashas from birth.
pub fn timeline(birth: &BirthDate, count: usize) -> Result<Vec<DashaPeriod>, SankhyaError> {
    let core = CoreNumbers::from_birth(birth);
    let start = birth.calendar_date()?;
    Ok(mahadasha_sequence(start, Graha::from_ank(core.basic), count)?)
}
