//! Report output — pretty JSON files, one per report.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::ReportSettings;
use crate::error::{Result, TrackerError};
use crate::report::TrainingLedger;

// ── File names ────────────────────────────────────────────────────────────────

pub const COUNT_FILE_NAME: &str = "Each training count.json";
pub const EXPIRING_FILE_NAME: &str = "Expired or expiring soon trainings.json";

/// File name of the fiscal year report for `year`.
pub fn fiscal_year_file_name(year: i32) -> String {
    format!("Fiscal year {year} training completion.json")
}

// ── Writing ───────────────────────────────────────────────────────────────────

/// Render a report as 2-space-indented JSON with a trailing newline.
pub fn to_report_json<T: Serialize + ?Sized>(report: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(report)
        .map_err(|e| TrackerError::SerializationError(e.to_string()))?;
    json.push('\n');
    Ok(json)
}

/// Write a report to `path`, replacing any existing file.
///
/// Parent directories are created if they do not exist.
///
/// # Errors
///
/// Returns `TrackerError::SerializationError` if JSON rendering fails, or
/// `TrackerError::Io` for filesystem errors.
pub fn write_report<T: Serialize + ?Sized>(report: &T, path: &Path) -> Result<()> {
    let json = to_report_json(report)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, json.as_bytes())?;
    log::debug!("wrote {}", path.display());
    Ok(())
}

/// Paths of the files produced by [`write_all_reports`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenReports {
    pub count: PathBuf,
    pub fiscal_year: PathBuf,
    pub expiring: PathBuf,
}

/// Run all three reports over `ledger` and write them into `output_dir`.
pub fn write_all_reports(
    ledger: &TrainingLedger,
    settings: &ReportSettings,
    output_dir: &Path,
) -> Result<WrittenReports> {
    std::fs::create_dir_all(output_dir)?;

    let count = output_dir.join(COUNT_FILE_NAME);
    write_report(&ledger.training_completion_count(), &count)?;

    let fiscal_year = output_dir.join(fiscal_year_file_name(settings.fiscal_year.year()));
    let completers =
        ledger.completed_training_by_fiscal_year(settings.trainings.as_slice(), settings.fiscal_year);
    write_report(&completers, &fiscal_year)?;

    let expiring = output_dir.join(EXPIRING_FILE_NAME);
    write_report(
        &ledger.expired_or_expiring_training_within(settings.reference_date, settings.window_days),
        &expiring,
    )?;

    Ok(WrittenReports {
        count,
        fiscal_year,
        expiring,
    })
}
