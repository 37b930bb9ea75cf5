//! Training Tracker CLI — `ttrack` command.
//!
//! Loads a JSON list of people and their training completions and produces
//! the completion count, fiscal-year completer and expiry reports.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Serialize;

use training_tracker::storage::{self, load_ledger, save_people, write_all_reports};
use training_tracker::time::parse_reference_date;
use training_tracker::{FiscalYear, ReportConfig, TrainingLedger};

// ── Formatting helpers ────────────────────────────────────────────────────────

fn display_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Print a report to stdout, or write it to `output` when given.
fn emit<T: Serialize + ?Sized>(report: &T, output: Option<&Path>, what: &str) -> Result<()> {
    match output {
        Some(path) => {
            storage::write_report(report, path)
                .with_context(|| format!("failed to write to {}", path.display()))?;
            println!("Wrote {what} to {}", path.display());
        }
        None => {
            let json = storage::to_report_json(report).context("failed to serialize report")?;
            print!("{json}");
        }
    }
    Ok(())
}

// ── CLI structure ─────────────────────────────────────────────────────────────

/// Training Tracker CLI — report on compliance training completions.
#[derive(Parser, Debug)]
#[command(
    name = "ttrack",
    about = "Training Tracker CLI",
    version,
    long_about = "ttrack — Training Tracker CLI\n\nCount training completions, list fiscal-year completers,\nand find expired or soon-to-expire trainings."
)]
struct Cli {
    /// Training records file (default: trainings.txt)
    #[arg(long, short, global = true)]
    input: Option<PathBuf>,

    /// JSON config file with report defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Skip malformed records instead of failing
    #[arg(long, global = true)]
    best_effort: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Count how many people completed each training
    Count {
        /// Output file path (default: stdout)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// List who completed the given trainings in a fiscal year
    FiscalYear {
        /// Fiscal year Y, covering July 1 of Y-1 through June 30 of Y
        #[arg(long)]
        year: Option<i32>,

        /// Training to report on (repeatable)
        #[arg(long = "training")]
        trainings: Vec<String>,

        /// Output file path (default: stdout)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// List people with expired or soon-to-expire trainings
    Expiring {
        /// Reference date (e.g. 10/01/2023, 2023-10-01, "Oct 1st, 2023")
        #[arg(long)]
        date: Option<String>,

        /// Days after the reference date that count as "expires soon"
        #[arg(long)]
        window_days: Option<u64>,

        /// Output file path (default: stdout)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Write all three reports into a directory
    All {
        /// Output directory (default: output)
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },

    /// Summarize the loaded records
    Show,

    /// Export the deduplicated records as JSON
    Export {
        /// Output file path (default: stdout)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let verbose = cli.verbose;

    let result = resolve_config(&cli).and_then(|config| match cli.command {
        Commands::Count { output } => cmd_count(&config, output.as_deref(), verbose),
        Commands::FiscalYear {
            year,
            trainings,
            output,
        } => cmd_fiscal_year(&config, year, trainings, output.as_deref(), verbose),
        Commands::Expiring {
            date,
            window_days,
            output,
        } => cmd_expiring(
            &config,
            date.as_deref(),
            window_days,
            output.as_deref(),
            verbose,
        ),
        Commands::All { output_dir } => cmd_all(&config, output_dir, verbose),
        Commands::Show => cmd_show(&config, verbose),
        Commands::Export { output } => cmd_export(&config, output.as_deref(), verbose),
    });

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

/// Defaults, then the config file, then command-line flags.
fn resolve_config(cli: &Cli) -> Result<ReportConfig> {
    let mut config = match &cli.config {
        Some(path) => ReportConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => ReportConfig::default(),
    };

    if let Some(input) = &cli.input {
        config.input = input.clone();
    }
    if cli.best_effort {
        config.best_effort = true;
    }

    log::debug!("config: {config:?}");
    Ok(config)
}

fn load(config: &ReportConfig, verbose: bool) -> Result<TrainingLedger> {
    let ledger = load_ledger(&config.input, config.load_policy())
        .with_context(|| format!("failed to load records from {}", config.input.display()))?;

    if verbose {
        eprintln!(
            "Loaded {} people ({} completions) from {}",
            ledger.len(),
            ledger.completion_total(),
            config.input.display()
        );
    }
    Ok(ledger)
}

// ── Command implementations ───────────────────────────────────────────────────

/// `ttrack count [--output FILE]`
fn cmd_count(config: &ReportConfig, output: Option<&Path>, verbose: bool) -> Result<()> {
    let ledger = load(config, verbose)?;
    let counts = ledger.training_completion_count();

    if verbose {
        eprintln!("{} distinct trainings", counts.len());
    }
    emit(&counts, output, "training counts")
}

/// `ttrack fiscal-year [--year Y] [--training NAME]... [--output FILE]`
fn cmd_fiscal_year(
    config: &ReportConfig,
    year: Option<i32>,
    trainings: Vec<String>,
    output: Option<&Path>,
    verbose: bool,
) -> Result<()> {
    let year = year.unwrap_or(config.fiscal_year);
    let fiscal_year = FiscalYear::new(year).map_err(|e| anyhow!("invalid --year: {e}"))?;
    let trainings = if trainings.is_empty() {
        config.trainings.clone()
    } else {
        trainings
    };
    if trainings.is_empty() {
        return Err(anyhow!("no trainings given; use --training NAME"));
    }

    let ledger = load(config, verbose)?;
    let report = ledger.completed_training_by_fiscal_year(trainings.as_slice(), fiscal_year);

    if verbose {
        eprintln!(
            "{fiscal_year}: {} through {}, {} of {} trainings completed",
            display_date(fiscal_year.start()),
            display_date(fiscal_year.end()),
            report.len(),
            trainings.len()
        );
    }
    emit(&report, output, &format!("{fiscal_year} completions"))
}

/// `ttrack expiring [--date DATE] [--window-days N] [--output FILE]`
fn cmd_expiring(
    config: &ReportConfig,
    date: Option<&str>,
    window_days: Option<u64>,
    output: Option<&Path>,
    verbose: bool,
) -> Result<()> {
    let raw_date = date.unwrap_or(&config.reference_date);
    let reference =
        parse_reference_date(raw_date).map_err(|e| anyhow!("invalid reference date: {e}"))?;
    let window_days = window_days.unwrap_or(config.expiry_window_days);

    let ledger = load(config, verbose)?;
    let report = ledger.expired_or_expiring_training_within(reference, window_days);

    if verbose {
        eprintln!(
            "Reference {} (window {} days): {} people affected",
            display_date(reference),
            window_days,
            report.len()
        );
    }
    emit(&report, output, "expiring trainings")
}

/// `ttrack all [--output-dir DIR]`
fn cmd_all(config: &ReportConfig, output_dir: Option<PathBuf>, verbose: bool) -> Result<()> {
    let settings = config.settings().context("invalid report settings")?;
    let output_dir = output_dir.unwrap_or_else(|| config.output_dir.clone());

    let ledger = load(config, verbose)?;
    let written = write_all_reports(&ledger, &settings, &output_dir)
        .with_context(|| format!("failed to write reports to {}", output_dir.display()))?;

    println!("Wrote reports to {}", output_dir.display());
    println!("  Counts:      {}", written.count.display());
    println!("  Fiscal year: {}", written.fiscal_year.display());
    println!("  Expiring:    {}", written.expiring.display());
    Ok(())
}

/// `ttrack show`
fn cmd_show(config: &ReportConfig, verbose: bool) -> Result<()> {
    let reference = parse_reference_date(&config.reference_date)
        .map_err(|e| anyhow!("invalid reference date: {e}"))?;
    let ledger = load(config, verbose)?;
    let expiries = ledger.expired_or_expiring_training_within(reference, config.expiry_window_days);

    println!("Records: {}", config.input.display());
    println!("  People:      {}", ledger.len());
    println!("  Completions: {}", ledger.completion_total());
    println!(
        "  Trainings:   {}",
        ledger.training_completion_count().len()
    );

    println!("  Status as of {}", display_date(reference));

    for person in ledger.people() {
        println!();
        println!("{}", person.name());
        if person.completions().is_empty() {
            println!("  (no completions)");
        }
        let flagged = expiries
            .iter()
            .find(|entry| entry.name == person.name())
            .map(|entry| entry.expiring_trainings.as_slice())
            .unwrap_or_default();
        for completion in person.completions() {
            let fiscal_year = FiscalYear::containing(completion.completed_on())
                .map(|fy| fy.to_string())
                .unwrap_or_else(|_| "-".to_string());
            let expires = completion
                .expires_on()
                .map(display_date)
                .unwrap_or_else(|| "never".to_string());
            let status = flagged
                .iter()
                .find(|t| t.training == completion.training_name())
                .map(|t| format!(" ({})", t.status))
                .unwrap_or_default();
            println!(
                "  {:<40} completed {:<14} {:<8} expires {}{}",
                completion.training_name(),
                display_date(completion.completed_on()),
                fiscal_year,
                expires,
                status
            );
        }
    }
    Ok(())
}

/// `ttrack export [--output FILE]`
fn cmd_export(config: &ReportConfig, output: Option<&Path>, verbose: bool) -> Result<()> {
    let ledger = load(config, verbose)?;

    match output {
        Some(path) => {
            save_people(path, ledger.people())
                .with_context(|| format!("failed to write to {}", path.display()))?;
            println!(
                "Exported {} people to {}",
                ledger.len(),
                path.display()
            );
        }
        None => emit(ledger.people(), None, "records")?,
    }
    Ok(())
}
