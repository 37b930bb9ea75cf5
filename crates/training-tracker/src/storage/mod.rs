//! Reading training records and writing reports.
//!
//! - [`loader`] turns the JSON person list into [`crate::Person`]s, strictly
//!   or best-effort according to a [`LoadPolicy`].
//! - [`writer`] writes report structures as 2-space-indented JSON files.

pub mod loader;
pub mod writer;

pub use loader::{load_ledger, load_people, parse_people, save_people, LoadPolicy};
pub use writer::{
    fiscal_year_file_name, to_report_json, write_all_reports, write_report, WrittenReports,
    COUNT_FILE_NAME, EXPIRING_FILE_NAME,
};
