//! Error types for the capture file decoder.

use thiserror::Error;

/// Result type alias for decoder operations
pub type Result<T> = std::result::Result<T, CaptureError>;

/// Errors that can occur while building the registry, reading input or
/// writing reports.
///
/// Nothing in here is raised for malformed capture lines; those are logged
/// and skipped by the assembler.
#[derive(Error, Debug)]
pub enum CaptureError {
    /// Failed to open or read the input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV writing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A record schema declares a field the fixed-width layout cannot hold
    #[error("Invalid layout for {schema}, field '{field}': {message}")]
    InvalidLayout {
        schema: &'static str,
        field: &'static str,
        message: String,
    },

    /// Two schemas claim the same (application group, sequence tag) key
    #[error("Duplicate schema for application group {group}, sequence {sequence}")]
    DuplicateSchema { group: &'static str, sequence: char },

    /// The input contained no header, trailer or transaction record
    #[error("No valid TC 33 records found in the input")]
    NoRecords,

    /// Missing input file argument
    #[error("Missing input file argument. Usage: tc33-capture <capture-file> [output-dir]")]
    MissingArgument,
}

