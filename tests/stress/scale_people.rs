//! Scale test: 10K people with repeated annual retraining.
//!
//! Validates dedup and all three reports over a large ledger.

use chrono::{Datelike, Days, NaiveDate};

use training_tracker::storage::{parse_people, to_report_json};
use training_tracker::{Completion, FiscalYear, LoadPolicy, Person, TrainingLedger};

const TRAININGS: &[&str] = &[
    "Electrical Safety for Labs",
    "X-Ray Safety",
    "Laboratory Safety Training",
    "Fire Safety",
];

fn build_ledger(people: usize) -> TrainingLedger {
    let base = NaiveDate::from_ymd_opt(2019, 1, 1).unwrap();
    (0..people)
        .map(|i| {
            let mut completions = Vec::new();
            for (t, training) in TRAININGS.iter().enumerate() {
                // Five yearly completions per training, staggered per person.
                for year in 0..5u64 {
                    let on = base + Days::new(year * 366 + ((i * 7 + t * 13) % 300) as u64);
                    let expires = (t != 3).then(|| on + Days::new(365));
                    completions.push(Completion::new(*training, on, expires));
                }
            }
            Person::new(format!("Person {i:05}"), completions).unwrap()
        })
        .collect()
}

#[test]
fn stress_10k_people_dedup() {
    let ledger = build_ledger(10_000);
    assert_eq!(ledger.completion_total(), 10_000 * TRAININGS.len());

    for person in ledger.people().iter().take(100) {
        for completion in person.completions() {
            assert!(completion.completed_on().year() >= 2023);
        }
    }
}

#[test]
fn stress_10k_people_reports() {
    let ledger = build_ledger(10_000);

    let counts = ledger.training_completion_count();
    assert_eq!(counts.len(), TRAININGS.len());
    assert!(counts.iter().all(|c| c.count == 10_000));

    let fy = FiscalYear::new(2024).unwrap();
    let report = training_tracker::completed_training_by_fiscal_year(ledger.people(), TRAININGS, fy);
    assert!(report.iter().all(|entry| !entry.completed_by.is_empty()));

    let reference = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let expiring = ledger.expired_or_expiring_training(reference);
    for entry in &expiring {
        assert!(!entry.expiring_trainings.is_empty());
        assert!(entry
            .expiring_trainings
            .iter()
            .all(|t| t.training != "Fire Safety"));
    }
}

#[test]
fn stress_10k_people_json_reload() {
    let ledger = build_ledger(10_000);
    let json = to_report_json(ledger.people()).unwrap();

    let reloaded = parse_people(&json, LoadPolicy::Strict).unwrap();
    assert_eq!(reloaded.as_slice(), ledger.people());
}
