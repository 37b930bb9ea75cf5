//! Error types for Training Tracker.
//!
//! The reporting engine itself never fails; errors come from parsing dates,
//! building records from structurally invalid input, and file I/O.

/// Tracker error types covering all operations.
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error("Malformed date in {field}: '{value}'")]
    MalformedDate { field: String, value: String },

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Fiscal year out of range: {0}")]
    InvalidFiscalYear(i32),

    #[error("Invalid file format: {0}")]
    InvalidFileFormat(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, TrackerError>;
