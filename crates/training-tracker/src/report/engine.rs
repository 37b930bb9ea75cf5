//! Reporting engine — completion counts, fiscal-year completers, expiries.
//!
//! Every function here is a pure read over a slice of [`Person`]s.

use std::collections::HashMap;

use chrono::{Days, NaiveDate};

use crate::record::Person;
use crate::time::FiscalYear;

use super::types::*;

/// Days after the reference date during which a training "expires soon".
pub const EXPIRES_SOON_WINDOW_DAYS: u64 = 30;

// ---------------------------------------------------------------------------
// Completion count
// ---------------------------------------------------------------------------

/// Count how many people hold a completion of each training.
///
/// Trainings appear in the order they are first met while scanning people
/// in order, then each person's completions in order.
pub fn training_completion_count(people: &[Person]) -> Vec<TrainingCount> {
    let mut counts: Vec<TrainingCount> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();

    for person in people {
        for completion in person.completions() {
            let training = completion.training_name();
            match slots.get(training) {
                Some(&slot) => counts[slot].count += 1,
                None => {
                    slots.insert(training, counts.len());
                    counts.push(TrainingCount {
                        training: training.to_string(),
                        count: 1,
                    });
                }
            }
        }
    }

    log::debug!("completion count: {} trainings", counts.len());
    counts
}

// ---------------------------------------------------------------------------
// Fiscal year completers
// ---------------------------------------------------------------------------

/// List, for each requested training, everyone who completed it inside
/// `fiscal_year`.
///
/// Entries follow the order of `trainings` (repeated names are reported
/// once); completers follow the order of `people`. Trainings nobody
/// completed in the window are left out entirely.
pub fn completed_training_by_fiscal_year<S: AsRef<str>>(
    people: &[Person],
    trainings: &[S],
    fiscal_year: FiscalYear,
) -> Vec<FiscalYearCompletion> {
    let mut groups: Vec<FiscalYearCompletion> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();

    for training in trainings {
        let training = training.as_ref();
        if !slots.contains_key(training) {
            slots.insert(training, groups.len());
            groups.push(FiscalYearCompletion {
                training: training.to_string(),
                completed_by: Vec::new(),
            });
        }
    }

    for person in people {
        for group in groups.iter_mut() {
            let Some(completion) = person.completion_for(&group.training) else {
                continue;
            };
            if fiscal_year.contains(completion.completed_on()) {
                group.completed_by.push(Completer {
                    name: person.name().to_string(),
                });
            }
        }
    }

    groups.retain(|group| {
        if group.completed_by.is_empty() {
            log::debug!("{fiscal_year}: no completers for '{}'", group.training);
        }
        !group.completed_by.is_empty()
    });
    groups
}

// ---------------------------------------------------------------------------
// Expired or expiring
// ---------------------------------------------------------------------------

/// Find every person with a training that expired before `reference` or
/// expires within [`EXPIRES_SOON_WINDOW_DAYS`] days of it.
pub fn expired_or_expiring_training(people: &[Person], reference: NaiveDate) -> Vec<PersonExpiries> {
    expired_or_expiring_training_within(people, reference, EXPIRES_SOON_WINDOW_DAYS)
}

/// Same as [`expired_or_expiring_training`] with a custom expires-soon window.
///
/// Completions without an expiration date are never reported, and people
/// with nothing to report are left out.
pub fn expired_or_expiring_training_within(
    people: &[Person],
    reference: NaiveDate,
    window_days: u64,
) -> Vec<PersonExpiries> {
    let horizon = reference
        .checked_add_days(Days::new(window_days))
        .unwrap_or(NaiveDate::MAX);

    people
        .iter()
        .filter_map(|person| {
            let expiring_trainings: Vec<ExpiringTraining> = person
                .completions()
                .iter()
                .filter_map(|completion| {
                    let expires_on = completion.expires_on()?;
                    let status = ExpiryStatus::classify(expires_on, reference, horizon)?;
                    Some(ExpiringTraining {
                        training: completion.training_name().to_string(),
                        status,
                    })
                })
                .collect();

            if expiring_trainings.is_empty() {
                None
            } else {
                Some(PersonExpiries {
                    name: person.name().to_string(),
                    expiring_trainings,
                })
            }
        })
        .collect()
}
