//! Serializable result of one numerology calculation.

use chrono::NaiveDate;
use serde::Serialize;

use sankhya_time::{BirthDate, format_short};
use sankhya_vedic_base::{
    Chip, CoreNumbers, DashaSnapshot, GridCell, Panels, VedicGrid, dasha_snapshot, derive_panels,
    vedic_grid,
};

use crate::error::SankhyaError;

/// A chip as the presentation layer sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChipReport {
    /// `plain`, `mahadasha` or `antardasha`.
    pub kind: &'static str,
    pub digit: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridCellReport {
    /// 1-based row-major position.
    pub index: u8,
    /// The digit this cell holds.
    pub home: u8,
    pub chips: Vec<ChipReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MahadashaReport {
    pub planet: &'static str,
    pub english_name: &'static str,
    pub description: &'static str,
    pub period_years: u32,
    /// `Aug 15, 2023` style.
    pub start: String,
    pub end: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub progress_percent: u8,
    pub next_planet: &'static str,
    pub years_remaining: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AntardashaReport {
    pub planet: &'static str,
    pub english_name: &'static str,
    pub description: &'static str,
    pub target_year: i32,
    pub weekday: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorReport {
    pub name: &'static str,
    pub hex: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelsReport {
    pub basic_description: &'static str,
    pub destiny_description: &'static str,
    pub lucky_number: u8,
    pub lucky_number_text: String,
    pub lucky_color: ColorReport,
    pub lucky_color_text: String,
    pub ruling_planet: &'static str,
    pub ruling_planet_text: String,
    pub lucky_direction: &'static str,
    pub lucky_direction_text: String,
    pub life_path: String,
    pub recommendation: &'static str,
    pub features: Vec<&'static str>,
}

/// Everything one submission produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumerologyReport {
    pub name: String,
    /// The date text as entered.
    pub birth_date: String,
    pub day: i32,
    pub month: i32,
    pub year: i32,
    pub basic_number: u8,
    pub destiny_number: u8,
    pub grid: Vec<GridCellReport>,
    pub mahadasha: MahadashaReport,
    pub antardasha: AntardashaReport,
    pub panels: PanelsReport,
}

impl NumerologyReport {
    /// Run the full pipeline for one birth date.
    ///
    /// Nothing is returned unless every stage succeeds.
    pub fn build(
        name: &str,
        date_text: &str,
        birth: &BirthDate,
        today: NaiveDate,
    ) -> Result<Self, SankhyaError> {
        let core = CoreNumbers::from_birth(birth);
        let snapshot = dasha_snapshot(birth, core.basic, today)?;
        let grid = vedic_grid(birth, &core, Some(snapshot.markers()));
        let panels = derive_panels(&core, snapshot.mahadasha.graha);

        Ok(Self {
            name: name.to_string(),
            birth_date: date_text.to_string(),
            day: birth.day,
            month: birth.month,
            year: birth.year,
            basic_number: core.basic.get(),
            destiny_number: core.destiny.get(),
            grid: grid_report(&grid),
            mahadasha: mahadasha_report(&snapshot),
            antardasha: antardasha_report(&snapshot),
            panels: panels_report(panels),
        })
    }

    /// Cells grouped into the three display rows.
    pub fn grid_rows(&self) -> impl Iterator<Item = &[GridCellReport]> {
        self.grid.chunks(3)
    }
}

fn chip_report(chip: &Chip) -> ChipReport {
    ChipReport {
        kind: chip.kind.name(),
        digit: chip.digit.get(),
    }
}

fn cell_report(cell: &GridCell) -> GridCellReport {
    GridCellReport {
        index: cell.index,
        home: cell.home.get(),
        chips: cell.chips.iter().map(chip_report).collect(),
    }
}

fn grid_report(grid: &VedicGrid) -> Vec<GridCellReport> {
    grid.cells().iter().map(cell_report).collect()
}

fn mahadasha_report(snapshot: &DashaSnapshot) -> MahadashaReport {
    let period = &snapshot.mahadasha;
    MahadashaReport {
        planet: period.graha.name(),
        english_name: period.graha.english_name(),
        description: period.graha.description(),
        period_years: period.period_years(),
        start: format_short(period.start),
        end: format_short(period.end),
        start_date: period.start,
        end_date: period.end,
        progress_percent: snapshot.progress_percent(),
        next_planet: snapshot.next_mahadasha().name(),
        years_remaining: snapshot.years_remaining(),
    }
}

fn antardasha_report(snapshot: &DashaSnapshot) -> AntardashaReport {
    let antar = &snapshot.antardasha;
    AntardashaReport {
        planet: antar.graha.name(),
        english_name: antar.graha.english_name(),
        description: antar.graha.description(),
        target_year: antar.target_year,
        weekday: antar.vaar.english_name(),
    }
}

fn panels_report(panels: Panels) -> PanelsReport {
    PanelsReport {
        basic_description: panels.basic_description,
        destiny_description: panels.destiny_description,
        lucky_number: panels.lucky_number.get(),
        lucky_number_text: panels.lucky_number_text,
        lucky_color: ColorReport {
            name: panels.lucky_color.name,
            hex: panels.lucky_color.hex,
        },
        lucky_color_text: panels.lucky_color_text,
        ruling_planet: panels.ruling_planet.english_name(),
        ruling_planet_text: panels.ruling_planet_text,
        lucky_direction: panels.lucky_direction,
        lucky_direction_text: panels.lucky_direction_text,
        life_path: panels.life_path,
        recommendation: panels.recommendation,
        features: panels.features.to_vec(),
    }
}
