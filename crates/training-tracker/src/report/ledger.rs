//! Immutable snapshot of everyone's training records.

use chrono::NaiveDate;

use crate::record::Person;
use crate::time::FiscalYear;

use super::engine;
use super::types::*;

/// The people loaded for one run, built once and read by every report.
///
/// There is no mutation API; build a new ledger to report on new data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrainingLedger {
    people: Vec<Person>,
}

impl TrainingLedger {
    pub fn new(people: Vec<Person>) -> Self {
        Self { people }
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Total deduplicated completions across all people.
    pub fn completion_total(&self) -> usize {
        self.people.iter().map(|p| p.completions().len()).sum()
    }

    /// See [`engine::training_completion_count`].
    pub fn training_completion_count(&self) -> Vec<TrainingCount> {
        engine::training_completion_count(&self.people)
    }

    /// See [`engine::completed_training_by_fiscal_year`].
    pub fn completed_training_by_fiscal_year<S: AsRef<str>>(
        &self,
        trainings: &[S],
        fiscal_year: FiscalYear,
    ) -> Vec<FiscalYearCompletion> {
        engine::completed_training_by_fiscal_year(&self.people, trainings, fiscal_year)
    }

    /// See [`engine::expired_or_expiring_training`].
    pub fn expired_or_expiring_training(&self, reference: NaiveDate) -> Vec<PersonExpiries> {
        engine::expired_or_expiring_training(&self.people, reference)
    }

    /// See [`engine::expired_or_expiring_training_within`].
    pub fn expired_or_expiring_training_within(
        &self,
        reference: NaiveDate,
        window_days: u64,
    ) -> Vec<PersonExpiries> {
        engine::expired_or_expiring_training_within(&self.people, reference, window_days)
    }
}

impl From<Vec<Person>> for TrainingLedger {
    fn from(people: Vec<Person>) -> Self {
        Self::new(people)
    }
}

impl FromIterator<Person> for TrainingLedger {
    fn from_iter<I: IntoIterator<Item = Person>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
