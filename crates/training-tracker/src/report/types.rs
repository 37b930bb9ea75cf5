//! Report shapes produced by the reporting engine.
//!
//! Field names match the JSON written for each report.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Completion count
// ---------------------------------------------------------------------------

/// Number of people holding a completion of one training.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingCount {
    pub training: String,
    pub count: usize,
}

// ---------------------------------------------------------------------------
// Fiscal year completion
// ---------------------------------------------------------------------------

/// A person who completed a training inside the requested fiscal year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completer {
    pub name: String,
}

/// Everyone who completed `training` in the requested fiscal year.
///
/// `completed_by` is never empty in engine output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiscalYearCompletion {
    pub training: String,
    pub completed_by: Vec<Completer>,
}

// ---------------------------------------------------------------------------
// Expiry
// ---------------------------------------------------------------------------

/// Whether a training has lapsed or is about to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpiryStatus {
    /// Expiration date is strictly before the reference date.
    #[serde(rename = "Expired")]
    Expired,
    /// Expiration date is on the reference date or within the window after it.
    #[serde(rename = "Expires soon")]
    ExpiresSoon,
}

impl ExpiryStatus {
    /// Classify an expiration date against `reference` and the last day of
    /// the expires-soon window (`horizon`, inclusive).
    ///
    /// Returns `None` when the training stays valid past the window.
    pub fn classify(expires_on: NaiveDate, reference: NaiveDate, horizon: NaiveDate) -> Option<Self> {
        if expires_on < reference {
            Some(Self::Expired)
        } else if expires_on <= horizon {
            Some(Self::ExpiresSoon)
        } else {
            None
        }
    }
}

impl fmt::Display for ExpiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expired => write!(f, "Expired"),
            Self::ExpiresSoon => write!(f, "Expires soon"),
        }
    }
}

/// One lapsed or lapsing training of a person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpiringTraining {
    pub training: String,
    pub status: ExpiryStatus,
}

/// A person and every training of theirs that is expired or expires soon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonExpiries {
    pub name: String,
    #[serde(rename = "ExpiringTrainings")]
    pub expiring_trainings: Vec<ExpiringTraining>,
}
