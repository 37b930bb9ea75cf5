//! Edge case tests: dedup tie-breaks, fiscal-year bounds, expiry window
//! bounds, omission rules, and count totals.

use chrono::NaiveDate;

use training_tracker::{
    completed_training_by_fiscal_year, expired_or_expiring_training, training_completion_count,
    Completion, ExpiryStatus, FiscalYear, Person, TrainingLedger,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn mdy(s: &str) -> NaiveDate {
    training_tracker::time::parse_record_date("timestamp", s).unwrap()
}

// === Dedup Edge Cases ===

#[test]
fn edge_alice_xray_keeps_2024() {
    let alice = Person::new(
        "Alice",
        vec![
            Completion::new("X-Ray Safety", mdy("01/01/2023"), None),
            Completion::new("X-Ray Safety", mdy("01/01/2024"), None),
        ],
    )
    .unwrap();

    assert_eq!(alice.completions().len(), 1);
    assert_eq!(alice.completions()[0].completed_on(), mdy("01/01/2024"));
}

#[test]
fn edge_dedup_max_date_regardless_of_position() {
    // Latest date sits in the middle of five duplicates.
    let dates = [
        date(2020, 1, 1),
        date(2021, 6, 1),
        date(2023, 12, 31),
        date(2022, 2, 2),
        date(2019, 9, 9),
    ];
    let person = Person::new(
        "P",
        dates.iter().map(|d| Completion::new("T", *d, None)),
    )
    .unwrap();

    assert_eq!(person.completions().len(), 1);
    assert_eq!(person.completions()[0].completed_on(), date(2023, 12, 31));
}

#[test]
fn edge_dedup_tie_after_earlier_max() {
    // Two completions share the max date; an older one follows them.
    // The second max-date entry must win, the older one must not.
    let person = Person::new(
        "P",
        vec![
            Completion::new("T", date(2023, 1, 1), Some(date(2024, 1, 1))),
            Completion::new("T", date(2023, 1, 1), Some(date(2025, 1, 1))),
            Completion::new("T", date(2022, 1, 1), Some(date(2026, 1, 1))),
        ],
    )
    .unwrap();

    assert_eq!(person.completions()[0].expires_on(), Some(date(2025, 1, 1)));
}

#[test]
fn edge_month_order_not_string_order() {
    // "12/01/2022" sorts after "01/01/2023" as text but is earlier as a date.
    let person = Person::new(
        "P",
        vec![
            Completion::new("T", mdy("01/01/2023"), None),
            Completion::new("T", mdy("12/01/2022"), None),
        ],
    )
    .unwrap();

    assert_eq!(person.completions()[0].completed_on(), date(2023, 1, 1));
}

// === Fiscal Year Edge Cases ===

#[test]
fn edge_fiscal_year_bounds() {
    let fy = FiscalYear::new(2024).unwrap();
    let people = vec![
        Person::new("JuneEnd", vec![Completion::new("X", date(2024, 6, 30), None)]).unwrap(),
        Person::new("JulyStart", vec![Completion::new("X", date(2023, 7, 1), None)]).unwrap(),
        Person::new("June29Prev", vec![Completion::new("X", date(2023, 6, 29), None)]).unwrap(),
    ];

    let report = completed_training_by_fiscal_year(&people, &["X"], fy);
    let names: Vec<&str> = report[0]
        .completed_by
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names, vec!["JuneEnd", "JulyStart"]);
}

#[test]
fn edge_fiscal_year_xray_scenario() {
    let fy = FiscalYear::new(2024).unwrap();
    let included =
        Person::new("In", vec![Completion::new("X-Ray Safety", mdy("07/01/2023"), None)]).unwrap();
    let excluded =
        Person::new("Out", vec![Completion::new("X-Ray Safety", mdy("06/30/2023"), None)]).unwrap();

    let report = completed_training_by_fiscal_year(&[included, excluded], &["X-Ray Safety"], fy);
    assert_eq!(report.len(), 1);
    assert_eq!(report[0].completed_by.len(), 1);
    assert_eq!(report[0].completed_by[0].name, "In");
}

#[test]
fn edge_fiscal_year_never_emits_empty_lists() {
    let fy = FiscalYear::new(2024).unwrap();
    let people = vec![
        Person::new("A", vec![Completion::new("Old", date(2010, 1, 1), None)]).unwrap(),
        Person::new("B", Vec::new()).unwrap(),
    ];

    let report = completed_training_by_fiscal_year(&people, &["Old", "Missing"], fy);
    assert!(report.is_empty());
}

#[test]
fn edge_fiscal_year_leap_day() {
    let fy = FiscalYear::new(2024).unwrap();
    let people =
        vec![Person::new("Leap", vec![Completion::new("X", date(2024, 2, 29), None)]).unwrap()];
    assert_eq!(completed_training_by_fiscal_year(&people, &["X"], fy).len(), 1);
}

// === Expiry Edge Cases ===

#[test]
fn edge_expiry_window_bounds() {
    let reference = date(2024, 3, 15);
    let cases = [
        (date(2024, 3, 14), Some(ExpiryStatus::Expired)),
        (date(2024, 3, 15), Some(ExpiryStatus::ExpiresSoon)),
        (date(2024, 4, 14), Some(ExpiryStatus::ExpiresSoon)),
        (date(2024, 4, 15), None),
    ];

    for (expires, expected) in cases {
        let people = vec![Person::new(
            "P",
            vec![Completion::new("T", date(2023, 1, 1), Some(expires))],
        )
        .unwrap()];
        let report = expired_or_expiring_training(&people, reference);
        let actual = report
            .first()
            .map(|entry| entry.expiring_trainings[0].status);
        assert_eq!(actual, expected, "expires {expires}");
    }
}

#[test]
fn edge_expiry_october_scenario() {
    let reference = mdy("10/01/2023");
    let person = Person::new(
        "P",
        vec![
            Completion::new("Soon", date(2023, 1, 1), Some(mdy("10/31/2023"))),
            Completion::new("Later", date(2023, 1, 1), Some(mdy("11/01/2023"))),
            Completion::new("Gone", date(2023, 1, 1), Some(mdy("09/30/2023"))),
        ],
    )
    .unwrap();

    let report = expired_or_expiring_training(&[person], reference);
    let entries: Vec<(&str, ExpiryStatus)> = report[0]
        .expiring_trainings
        .iter()
        .map(|t| (t.training.as_str(), t.status))
        .collect();
    assert_eq!(
        entries,
        vec![("Soon", ExpiryStatus::ExpiresSoon), ("Gone", ExpiryStatus::Expired)]
    );
}

#[test]
fn edge_expiry_ignores_superseded_completion() {
    // The older completion expired; the newer one never expires.
    let person = Person::new(
        "P",
        vec![
            Completion::new("T", date(2020, 1, 1), Some(date(2021, 1, 1))),
            Completion::new("T", date(2023, 1, 1), None),
        ],
    )
    .unwrap();

    assert!(expired_or_expiring_training(&[person], date(2023, 10, 1)).is_empty());
}

// === Count Edge Cases ===

#[test]
fn edge_count_sums_to_dedup_total() {
    let ledger: TrainingLedger = (0..20)
        .map(|i| {
            let completions = (0..(i % 5 + 1)).flat_map(|j| {
                vec![
                    Completion::new(format!("T{j}"), date(2020, 1, 1), None),
                    Completion::new(format!("T{j}"), date(2021, 1, 1), None),
                ]
            });
            Person::new(format!("Person {i}"), completions).unwrap()
        })
        .collect();

    let total: usize = training_completion_count(ledger.people())
        .iter()
        .map(|c| c.count)
        .sum();
    assert_eq!(total, ledger.completion_total());
    assert_eq!(total, (0..20).map(|i| i % 5 + 1).sum::<usize>());
}
