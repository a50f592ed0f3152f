//! Holds the last complete report across submissions.

use chrono::NaiveDate;
use log::{debug, error, warn};

use sankhya_config::SankhyaConfig;

use crate::cache::{CachedInput, LastInputCache};
use crate::convenience::calculate;
use crate::error::SankhyaError;
use crate::input::BirthInput;
use crate::report::NumerologyReport;

/// One user's sequence of submissions.
///
/// A submission either replaces the held report completely or leaves it
/// untouched.
#[derive(Debug, Clone)]
pub struct Session {
    strict: bool,
    cache: Option<LastInputCache>,
    report: Option<NumerologyReport>,
}

impl Session {
    pub fn new(strict: bool) -> Self {
        Self {
            strict,
            cache: None,
            report: None,
        }
    }

    pub fn from_config(config: &SankhyaConfig) -> Self {
        Self {
            strict: config.input.strict,
            cache: LastInputCache::from_config(&config.cache),
            report: None,
        }
    }

    pub fn with_cache(mut self, cache: LastInputCache) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn cache(&self) -> Option<&LastInputCache> {
        self.cache.as_ref()
    }

    /// The last successful report, if any.
    pub fn report(&self) -> Option<&NumerologyReport> {
        self.report.as_ref()
    }

    /// Compute a report for `input` and make it current.
    ///
    /// On error the previous report stays and nothing is cached.
    pub fn submit(
        &mut self,
        input: &BirthInput,
        today: NaiveDate,
    ) -> Result<&NumerologyReport, SankhyaError> {
        let report = match calculate(input, today, self.strict) {
            Ok(r) => r,
            Err(SankhyaError::MissingInput) => {
                debug!("submission without a birth date ignored");
                return Err(SankhyaError::MissingInput);
            }
            Err(e) => {
                error!("calculation failed: {e}");
                return Err(e);
            }
        };

        debug!(
            "basic number {}, destiny number {}",
            report.basic_number, report.destiny_number
        );

        if let Some(cache) = &self.cache {
            if let Err(e) = cache.store(&CachedInput::from(&report)) {
                warn!("cannot write cache {}: {e}", cache.path().display());
            }
        }

        Ok(&*self.report.insert(report))
    }
}
