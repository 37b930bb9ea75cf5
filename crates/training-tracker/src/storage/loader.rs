//! Person record loading.
//!
//! Input format (JSON):
//! ```json
//! [
//!     {
//!         "name": "Alice",
//!         "completions": [
//!             { "name": "X-Ray Safety", "timestamp": "01/01/2024", "expires": null }
//!         ]
//!     }
//! ]
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, TrackerError};
use crate::record::{Completion, CompletionRecord, Person, PersonRecord};
use crate::report::TrainingLedger;

// ── LoadPolicy ────────────────────────────────────────────────────────────────

/// What to do with input that cannot be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPolicy {
    /// The first bad record, unreadable file or parse failure is an error.
    #[default]
    Strict,
    /// Skip bad completions and people with a warning; an unreadable or
    /// unparseable file yields no people.
    BestEffort,
}

// ── Loading ───────────────────────────────────────────────────────────────────

/// Parse a JSON person list.
///
/// # Errors
///
/// Under [`LoadPolicy::Strict`], returns `TrackerError::InvalidFileFormat` if
/// the document or a person record is malformed, `TrackerError::MalformedDate`
/// for a bad date and `TrackerError::InvalidRecord` for a blank name. Under
/// [`LoadPolicy::BestEffort`] it does not fail.
pub fn parse_people(json: &str, policy: LoadPolicy) -> Result<Vec<Person>> {
    let values: Vec<serde_json::Value> = match serde_json::from_str(json) {
        Ok(values) => values,
        Err(e) => {
            let err =
                TrackerError::InvalidFileFormat(format!("failed to parse training records: {e}"));
            return match policy {
                LoadPolicy::Strict => Err(err),
                LoadPolicy::BestEffort => {
                    log::error!("{err}; continuing with no records");
                    Ok(Vec::new())
                }
            };
        }
    };

    let mut people = Vec::with_capacity(values.len());
    for (index, value) in values.into_iter().enumerate() {
        match policy {
            LoadPolicy::Strict => {
                let record: PersonRecord = serde_json::from_value(value).map_err(|e| {
                    TrackerError::InvalidFileFormat(format!("person record {index}: {e}"))
                })?;
                people.push(Person::try_from(record)?);
            }
            LoadPolicy::BestEffort => {
                if let Some(person) = person_best_effort(index, value) {
                    people.push(person);
                }
            }
        }
    }

    log::debug!("loaded {} people", people.len());
    Ok(people)
}

/// A person whose completions are read one at a time, so a single broken
/// completion does not take the rest of the person down with it.
#[derive(Debug, Deserialize)]
struct LenientPersonRecord {
    name: String,
    #[serde(default)]
    completions: Vec<serde_json::Value>,
}

fn person_best_effort(index: usize, value: serde_json::Value) -> Option<Person> {
    let LenientPersonRecord { name, completions } = match serde_json::from_value(value) {
        Ok(record) => record,
        Err(e) => {
            log::warn!("skipping person record {index}: {e}");
            return None;
        }
    };

    let completions: Vec<Completion> = completions
        .into_iter()
        .enumerate()
        .filter_map(|(position, raw)| {
            let parsed = serde_json::from_value::<CompletionRecord>(raw)
                .map_err(|e| TrackerError::InvalidFileFormat(e.to_string()))
                .and_then(Completion::try_from);
            match parsed {
                Ok(completion) => Some(completion),
                Err(e) => {
                    log::warn!(
                        "person record {index} ({name}): skipping completion {position}: {e}"
                    );
                    None
                }
            }
        })
        .collect();

    match Person::new(name, completions) {
        Ok(person) => Some(person),
        Err(e) => {
            log::warn!("skipping person record {index}: {e}");
            None
        }
    }
}

/// Read and parse a person list file.
///
/// # Errors
///
/// Under [`LoadPolicy::Strict`], returns `TrackerError::Io` if the file cannot
/// be read, plus everything [`parse_people`] returns. Under
/// [`LoadPolicy::BestEffort`] an unreadable file yields no people.
pub fn load_people(path: &Path, policy: LoadPolicy) -> Result<Vec<Person>> {
    let json = match std::fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) => match policy {
            LoadPolicy::Strict => return Err(TrackerError::Io(e)),
            LoadPolicy::BestEffort => {
                log::error!(
                    "failed to read {}: {e}; continuing with no records",
                    path.display()
                );
                return Ok(Vec::new());
            }
        },
    };

    parse_people(&json, policy).map_err(|e| match e {
        TrackerError::InvalidFileFormat(msg) => {
            TrackerError::InvalidFileFormat(format!("{}: {msg}", path.display()))
        }
        other => other,
    })
}

/// Load a person list file straight into a [`TrainingLedger`].
pub fn load_ledger(path: &Path, policy: LoadPolicy) -> Result<TrainingLedger> {
    load_people(path, policy).map(TrainingLedger::new)
}

/// Write people back out in the input format, one entry per kept completion.
///
/// Parent directories are created if they do not exist.
pub fn save_people(path: &Path, people: &[Person]) -> Result<()> {
    let records: Vec<PersonRecord> = people.iter().map(PersonRecord::from).collect();
    super::writer::write_report(&records, path)
}
