//! A person and the latest completion of each training they took.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};

use super::completion::{Completion, CompletionRecord};

// ---------------------------------------------------------------------------
// Person
// ---------------------------------------------------------------------------

/// A person with at most one completion per training.
///
/// Re-completions (annual retraining and the like) collapse to the latest
/// record. Completions keep the order in which each training was first seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PersonRecord")]
pub struct Person {
    name: String,
    completions: Vec<Completion>,
}

impl Person {
    /// Build a person from every completion recorded for them.
    ///
    /// For each training only the completion with the latest date is kept;
    /// on equal dates the one listed last wins.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidRecord` if `name` is empty or blank.
    pub fn new(
        name: impl Into<String>,
        completions: impl IntoIterator<Item = Completion>,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(TrackerError::InvalidRecord(
                "person name must not be empty".to_string(),
            ));
        }

        let mut latest: Vec<Completion> = Vec::new();
        let mut slots: HashMap<String, usize> = HashMap::new();

        for completion in completions {
            match slots.get(completion.training_name()).copied() {
                Some(slot) => {
                    if completion.supersedes(&latest[slot]) {
                        log::debug!(
                            "{}: '{}' {} replaces {}",
                            name,
                            completion.training_name(),
                            completion.completed_on(),
                            latest[slot].completed_on()
                        );
                        latest[slot] = completion;
                    }
                }
                None => {
                    slots.insert(completion.training_name().to_string(), latest.len());
                    latest.push(completion);
                }
            }
        }

        Ok(Self {
            name,
            completions: latest,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Latest completion per training, in first-seen training order.
    pub fn completions(&self) -> &[Completion] {
        &self.completions
    }

    /// The kept completion for `training`, if any.
    pub fn completion_for(&self, training: &str) -> Option<&Completion> {
        self.completions
            .iter()
            .find(|c| c.training_name() == training)
    }
}

// ---------------------------------------------------------------------------
// Raw record
// ---------------------------------------------------------------------------

/// A person as it appears in the input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    pub name: String,
    #[serde(default)]
    pub completions: Vec<CompletionRecord>,
}

impl TryFrom<PersonRecord> for Person {
    type Error = TrackerError;

    fn try_from(record: PersonRecord) -> Result<Self> {
        let completions = record
            .completions
            .into_iter()
            .map(Completion::try_from)
            .collect::<Result<Vec<_>>>()?;
        Person::new(record.name, completions)
    }
}

impl From<&Person> for PersonRecord {
    fn from(person: &Person) -> Self {
        Self {
            name: person.name.clone(),
            completions: person.completions.iter().map(CompletionRecord::from).collect(),
        }
    }
}
