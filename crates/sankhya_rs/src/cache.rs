//! Best-effort cache of the last submitted input.
//!
//! A missing or unreadable cache file is never an error: [`LastInputCache::load`]
//! logs and returns `None`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use sankhya_config::CacheConfig;

use crate::report::NumerologyReport;

const CACHE_DIR: &str = "sankhya";
const CACHE_FILE: &str = "last_input.json";

/// What gets remembered about a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CachedInput {
    pub full_name: String,
    pub birth_date: String,
    pub basic_number: u8,
    pub destiny_number: u8,
    pub day: i32,
    pub month: i32,
    pub year: i32,
}

impl From<&NumerologyReport> for CachedInput {
    fn from(r: &NumerologyReport) -> Self {
        Self {
            full_name: r.name.clone(),
            birth_date: r.birth_date.clone(),
            basic_number: r.basic_number,
            destiny_number: r.destiny_number,
            day: r.day,
            month: r.month,
            year: r.year,
        }
    }
}

/// A JSON file holding one [`CachedInput`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastInputCache {
    path: PathBuf,
}

impl LastInputCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data dir>/sankhya/last_input.json`, if the platform has a data dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join(CACHE_DIR).join(CACHE_FILE))
    }

    /// The cache described by `config`, or `None` when disabled or no
    /// location can be determined.
    pub fn from_config(config: &CacheConfig) -> Option<Self> {
        if !config.enabled {
            return None;
        }
        config
            .path
            .clone()
            .or_else(Self::default_path)
            .map(Self::new)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the cached record.
    pub fn load(&self) -> Option<CachedInput> {
        let bytes = match fs::read(&self.path) {
            Ok(b) => b,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("no cached input at {}", self.path.display());
                return None;
            }
            Err(e) => {
                warn!("cannot read cache {}: {e}", self.path.display());
                return None;
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("ignoring corrupt cache {}: {e}", self.path.display());
                None
            }
        }
    }

    /// Write `record`, creating parent directories as needed.
    pub fn store(&self, record: &CachedInput) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_vec_pretty(record)?;
        fs::write(&self.path, json)
    }
}
