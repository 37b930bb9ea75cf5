//! Training Tracker — compliance training ledger and reports.
//!
//! Loads people and the trainings they completed, collapses re-completions
//! to the latest record per training, and derives three reports:
//! completion counts, fiscal-year completer lists, and expired or
//! soon-to-expire trainings per person.

pub mod config;
pub mod error;
pub mod record;
pub mod report;
pub mod storage;
pub mod time;

// Re-export primary types
pub use config::{ReportConfig, ReportSettings};
pub use error::{Result, TrackerError};
pub use record::{Completion, Person};
pub use storage::LoadPolicy;
pub use time::FiscalYear;

// Re-export report types
pub use report::{
    completed_training_by_fiscal_year, expired_or_expiring_training,
    expired_or_expiring_training_within, training_completion_count, Completer, ExpiringTraining,
    ExpiryStatus, FiscalYearCompletion, PersonExpiries, TrainingCount, TrainingLedger,
    EXPIRES_SOON_WINDOW_DAYS,
};
