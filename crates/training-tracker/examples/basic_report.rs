//! Basic Report — load records, collapse re-completions, run the three reports.
//!
//! Run with:
//!   cargo run --example basic_report -p training-tracker

use training_tracker::storage::{parse_people, to_report_json};
use training_tracker::time::parse_reference_date;
use training_tracker::{FiscalYear, LoadPolicy, TrainingLedger};

const RECORDS: &str = r#"[
    {
        "name": "Alice",
        "completions": [
            {"name": "X-Ray Safety", "timestamp": "01/01/2023", "expires": null},
            {"name": "X-Ray Safety", "timestamp": "01/01/2024", "expires": null},
            {"name": "Electrical Safety for Labs", "timestamp": "07/01/2023", "expires": "10/31/2023"}
        ]
    },
    {
        "name": "Bob",
        "completions": [
            {"name": "X-Ray Safety", "timestamp": "06/30/2023", "expires": "09/30/2023"}
        ]
    }
]"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── 1. Load the records ─────────────────────────────────────────────────
    //
    // Alice's two X-Ray Safety completions collapse to the 2024 one.
    let ledger = TrainingLedger::new(parse_people(RECORDS, LoadPolicy::Strict)?);
    println!(
        "Loaded {} people, {} completions",
        ledger.len(),
        ledger.completion_total()
    );
    println!();

    // ── 2. Completion counts ────────────────────────────────────────────────
    println!("Completion counts:");
    print!("{}", to_report_json(&ledger.training_completion_count())?);
    println!();

    // ── 3. Fiscal year 2024 completers ──────────────────────────────────────
    //
    // FY2024 runs July 1, 2023 through June 30, 2024. Bob's June 30, 2023
    // completion belongs to FY2023.
    let fy = FiscalYear::new(2024)?;
    let completers =
        ledger.completed_training_by_fiscal_year(&["X-Ray Safety", "Electrical Safety for Labs"], fy);
    println!("{fy} completers:");
    print!("{}", to_report_json(&completers)?);
    println!();

    // ── 4. Expired or expiring ──────────────────────────────────────────────
    let reference = parse_reference_date("Oct 1st, 2023")?;
    println!("Expired or expiring as of {reference}:");
    print!(
        "{}",
        to_report_json(&ledger.expired_or_expiring_training(reference))?
    );

    Ok(())
}
