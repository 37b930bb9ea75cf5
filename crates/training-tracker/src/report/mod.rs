//! Reports over a training ledger.
//!
//! The report module provides:
//! - Completion counts per training
//! - Fiscal-year completer lists for selected trainings
//! - Expired and expires-soon trainings per person
//! - [`TrainingLedger`], the immutable snapshot the reports run against

pub mod engine;
pub mod ledger;
pub mod types;

pub use types::{
    Completer, ExpiringTraining, ExpiryStatus, FiscalYearCompletion, PersonExpiries,
    TrainingCount,
};

pub use engine::{
    completed_training_by_fiscal_year, expired_or_expiring_training,
    expired_or_expiring_training_within, training_completion_count, EXPIRES_SOON_WINDOW_DAYS,
};

pub use ledger::TrainingLedger;
