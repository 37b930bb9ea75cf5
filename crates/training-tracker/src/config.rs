//! Run configuration — which file to read, where to write, what to report.
//!
//! Stored as JSON. Every field is optional in the file; missing fields take
//! the defaults below.
//!
//! ```json
//! {
//!     "input": "trainings.txt",
//!     "output_dir": "output",
//!     "fiscal_year": 2024,
//!     "trainings": ["X-Ray Safety"],
//!     "reference_date": "Oct 1st, 2023",
//!     "expiry_window_days": 30,
//!     "best_effort": false
//! }
//! ```

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};
use crate::report::EXPIRES_SOON_WINDOW_DAYS;
use crate::storage::LoadPolicy;
use crate::time::{parse_reference_date, FiscalYear};

// ── Defaults ──────────────────────────────────────────────────────────────────

pub const DEFAULT_INPUT: &str = "trainings.txt";
pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DEFAULT_FISCAL_YEAR: i32 = 2024;
pub const DEFAULT_REFERENCE_DATE: &str = "Oct 1st, 2023";
pub const DEFAULT_TRAININGS: &[&str] = &[
    "Electrical Safety for Labs",
    "X-Ray Safety",
    "Laboratory Safety Training",
];

// ── ReportConfig ──────────────────────────────────────────────────────────────

/// Settings for one reporting run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// JSON file with the person records.
    pub input: PathBuf,
    /// Directory the report files are written into.
    pub output_dir: PathBuf,
    /// Fiscal year for the completer report.
    pub fiscal_year: i32,
    /// Trainings to list in the fiscal year report.
    pub trainings: Vec<String>,
    /// Reference date for the expiry report, in any form
    /// [`parse_reference_date`] accepts.
    pub reference_date: String,
    /// Length of the expires-soon window in days.
    pub expiry_window_days: u64,
    /// Skip malformed records instead of failing the run.
    pub best_effort: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            fiscal_year: DEFAULT_FISCAL_YEAR,
            trainings: DEFAULT_TRAININGS.iter().map(|t| t.to_string()).collect(),
            reference_date: DEFAULT_REFERENCE_DATE.to_string(),
            expiry_window_days: EXPIRES_SOON_WINDOW_DAYS,
            best_effort: false,
        }
    }
}

impl ReportConfig {
    /// Read a config file.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::Io` if the file cannot be read, or
    /// `TrackerError::InvalidFileFormat` if it is not a valid config object.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        serde_json::from_slice(&bytes).map_err(|e| {
            TrackerError::InvalidFileFormat(format!(
                "failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    pub fn load_policy(&self) -> LoadPolicy {
        if self.best_effort {
            LoadPolicy::BestEffort
        } else {
            LoadPolicy::Strict
        }
    }

    /// Validate and parse the report parameters.
    pub fn settings(&self) -> Result<ReportSettings> {
        Ok(ReportSettings {
            trainings: self.trainings.clone(),
            fiscal_year: FiscalYear::new(self.fiscal_year)?,
            reference_date: parse_reference_date(&self.reference_date)?,
            window_days: self.expiry_window_days,
        })
    }
}

// ── ReportSettings ────────────────────────────────────────────────────────────

/// Parsed report parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSettings {
    pub trainings: Vec<String>,
    pub fiscal_year: FiscalYear,
    pub reference_date: NaiveDate,
    pub window_days: u64,
}
