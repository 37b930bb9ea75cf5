//! A single completed training.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};
use crate::time::{format_record_date, parse_record_date};

// ---------------------------------------------------------------------------
// Completion
// ---------------------------------------------------------------------------

/// One training completion: what was completed, when, and until when it holds.
///
/// Serialized with the same keys the input data uses (`name`, `timestamp`,
/// `expires`) and `MM/DD/YYYY` dates. The older `training_name`,
/// `completion_timestamp` and `expiration_date` keys are read but never
/// written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Completion {
    #[serde(rename = "name", alias = "training_name")]
    training_name: String,
    #[serde(
        rename = "timestamp",
        alias = "completion_timestamp",
        with = "crate::time::mdy"
    )]
    completed_on: NaiveDate,
    #[serde(
        rename = "expires",
        alias = "expiration_date",
        with = "crate::time::mdy_option",
        default
    )]
    expires_on: Option<NaiveDate>,
}

impl Completion {
    /// Create a completion. `expires_on` is `None` for trainings that never expire.
    pub fn new(
        training_name: impl Into<String>,
        completed_on: NaiveDate,
        expires_on: Option<NaiveDate>,
    ) -> Self {
        Self {
            training_name: training_name.into(),
            completed_on,
            expires_on,
        }
    }

    pub fn training_name(&self) -> &str {
        &self.training_name
    }

    pub fn completed_on(&self) -> NaiveDate {
        self.completed_on
    }

    pub fn expires_on(&self) -> Option<NaiveDate> {
        self.expires_on
    }

    /// Whether this completion replaces `earlier` when both are for the same
    /// training and `earlier` was seen first in the input.
    ///
    /// Same-day completions resolve to the one seen last.
    pub fn supersedes(&self, earlier: &Completion) -> bool {
        self.completed_on >= earlier.completed_on
    }
}

// ---------------------------------------------------------------------------
// Raw record
// ---------------------------------------------------------------------------

/// A completion as it appears in the input file, dates still unparsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRecord {
    #[serde(alias = "training_name")]
    pub name: String,
    #[serde(alias = "completion_timestamp")]
    pub timestamp: String,
    #[serde(default, alias = "expiration_date")]
    pub expires: Option<String>,
}

impl TryFrom<CompletionRecord> for Completion {
    type Error = TrackerError;

    fn try_from(record: CompletionRecord) -> Result<Self> {
        let completed_on = parse_record_date("timestamp", &record.timestamp)?;
        let expires_on = match record.expires.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => Some(parse_record_date("expires", raw)?),
            _ => None,
        };
        Ok(Completion::new(record.name, completed_on, expires_on))
    }
}

impl From<&Completion> for CompletionRecord {
    fn from(completion: &Completion) -> Self {
        Self {
            name: completion.training_name.clone(),
            timestamp: format_record_date(completion.completed_on),
            expires: completion.expires_on.map(format_record_date),
        }
    }
}
