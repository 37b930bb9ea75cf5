//! Date utilities for Training Tracker.
//!
//! All dates are calendar-naive [`NaiveDate`] values. Record dates use the
//! `MM/DD/YYYY` form; reference dates supplied by a user may also be ISO or
//! textual (`Oct 1st, 2023`).

use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::error::{Result, TrackerError};

/// Format of completion and expiration dates inside records.
pub const RECORD_DATE_FORMAT: &str = "%m/%d/%Y";

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

const TEXTUAL_DATE_FORMATS: &[&str] = &["%b %d, %Y", "%B %d, %Y", "%b %d %Y", "%B %d %Y"];

const ORDINAL_SUFFIXES: &[&str] = &["st", "nd", "rd", "th"];

// ── Record dates ──────────────────────────────────────────────────────────────

/// Parse a record date in `MM/DD/YYYY` form.
///
/// `field` names the record field for the error message.
pub fn parse_record_date(field: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), RECORD_DATE_FORMAT).map_err(|_| {
        TrackerError::MalformedDate {
            field: field.to_string(),
            value: value.to_string(),
        }
    })
}

/// Format a date as `MM/DD/YYYY`.
pub fn format_record_date(date: NaiveDate) -> String {
    date.format(RECORD_DATE_FORMAT).to_string()
}

// ── Reference dates ───────────────────────────────────────────────────────────

/// Parse a user-supplied reference date.
///
/// Accepts `MM/DD/YYYY`, `YYYY-MM-DD`, and textual dates such as
/// `Oct 1st, 2023`, `October 22nd, 2023` or `Oct 3, 2023`.
pub fn parse_reference_date(value: &str) -> Result<NaiveDate> {
    let trimmed = value.trim();

    for format in [RECORD_DATE_FORMAT, ISO_DATE_FORMAT] {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(date);
        }
    }

    let normalized = strip_ordinal_suffixes(trimmed);
    for format in TEXTUAL_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(&normalized, format) {
            return Ok(date);
        }
    }

    Err(TrackerError::MalformedDate {
        field: "reference date".to_string(),
        value: value.to_string(),
    })
}

/// Turn `1st,` into `1,` and `22nd` into `22`; other tokens are untouched.
fn strip_ordinal_suffixes(value: &str) -> String {
    value
        .split_whitespace()
        .map(|token| {
            let (body, comma) = match token.strip_suffix(',') {
                Some(body) => (body, ","),
                None => (token, ""),
            };
            let digits = body.trim_end_matches(|c: char| c.is_ascii_alphabetic());
            let suffix = body[digits.len()..].to_ascii_lowercase();
            if !digits.is_empty()
                && digits.chars().all(|c| c.is_ascii_digit())
                && ORDINAL_SUFFIXES.contains(&suffix.as_str())
            {
                format!("{digits}{comma}")
            } else {
                token.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// ── Fiscal year ───────────────────────────────────────────────────────────────

/// Fiscal year `Y`: July 1 of `Y - 1` through June 30 of `Y`, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FiscalYear {
    year: i32,
    start: NaiveDate,
    end: NaiveDate,
}

impl FiscalYear {
    /// Build the window for fiscal year `year`.
    pub fn new(year: i32) -> Result<Self> {
        let start = year
            .checked_sub(1)
            .and_then(|prev| NaiveDate::from_ymd_opt(prev, 7, 1))
            .ok_or(TrackerError::InvalidFiscalYear(year))?;
        let end = NaiveDate::from_ymd_opt(year, 6, 30).ok_or(TrackerError::InvalidFiscalYear(year))?;
        Ok(Self { year, start, end })
    }

    /// The fiscal year a date falls in.
    pub fn containing(date: NaiveDate) -> Result<Self> {
        let year = if date.month() >= 7 {
            date.year() + 1
        } else {
            date.year()
        };
        Self::new(year)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// First day of the window (July 1 of the previous calendar year).
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the window (June 30).
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether `date` falls inside the window, bounds included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl fmt::Display for FiscalYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FY{}", self.year)
    }
}

// ── serde helpers ─────────────────────────────────────────────────────────────

/// serde adapter for `MM/DD/YYYY` date fields.
pub mod mdy {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_record_date(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_record_date("timestamp", &raw).map_err(serde::de::Error::custom)
    }
}

/// serde adapter for optional `MM/DD/YYYY` date fields.
///
/// `null` and blank strings both mean "no date".
pub mod mdy_option {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        date: &Option<NaiveDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match date {
            Some(date) => serializer.serialize_some(&super::format_record_date(*date)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) if !raw.trim().is_empty() => super::parse_record_date("expires", &raw)
                .map(Some)
                .map_err(serde::de::Error::custom),
            _ => Ok(None),
        }
    }
}
