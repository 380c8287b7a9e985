//! Error types for the statement validator
//!
//! Errors are designed to be descriptive and user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **File access errors**: file not found, permission denied, other I/O
//! - **Input format errors**: malformed CSV/XML, unparsable numbers, unsupported file type
//! - **Record errors**: a mutation that violates the record invariant
//!
//! Records that fail validation (duplicates, balance mismatches) are not errors;
//! they are returned by the validator and reported.

use super::record::TransactionReference;
use std::fmt;
use std::io::ErrorKind;
use thiserror::Error;

/// Where in the input a record came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputLocation {
    /// 1-based line number in a CSV file, header included
    Line(u64),
    /// 1-based position of a `record` element in an XML file
    Element(usize),
}

impl fmt::Display for InputLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputLocation::Line(line) => write!(f, "line {}", line),
            InputLocation::Element(index) => write!(f, "record {}", index),
        }
    }
}

/// Fatal error that aborts processing of a statement file
///
/// No partial report is produced when one of these is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatementError {
    #[error("The file could not be found at '{path}'. Please check the file path and try again.")]
    FileNotFound { path: String },

    #[error("You do not have permission to access the file at '{path}'. Please check your file permissions.")]
    PermissionDenied { path: String },

    /// Any other I/O failure while reading the input
    #[error("An unexpected I/O error occurred while reading the file: {message}")]
    Io { message: String },

    /// A numeric field could not be parsed
    #[error("The file contains an invalid record at {location}: {field} '{value}' is not a valid number")]
    NumericFormat {
        location: InputLocation,
        field: &'static str,
        value: String,
    },

    /// The CSV structure itself is unreadable (e.g. invalid UTF-8)
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    Csv { line: Option<u64>, message: String },

    /// The XML document is malformed or a record lacks a required element
    #[error("XML parse error: {message}")]
    Xml { message: String },

    #[error("Unsupported file type. Please provide a CSV or XML file.")]
    UnsupportedFileType { path: String },
}

impl StatementError {
    /// Map an I/O error to the matching file access variant
    pub fn from_io(error: std::io::Error, path: &str) -> Self {
        match error.kind() {
            ErrorKind::NotFound => StatementError::FileNotFound {
                path: path.to_string(),
            },
            ErrorKind::PermissionDenied => StatementError::PermissionDenied {
                path: path.to_string(),
            },
            _ => StatementError::Io {
                message: error.to_string(),
            },
        }
    }

    /// Create a NumericFormat error
    pub fn numeric_format(location: InputLocation, field: &'static str, value: &str) -> Self {
        StatementError::NumericFormat {
            location,
            field,
            value: value.to_string(),
        }
    }

    /// Create an Xml error from any displayable parser error
    pub fn xml<E: fmt::Display>(error: E) -> Self {
        StatementError::Xml {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for StatementError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        StatementError::Csv {
            line,
            message: error.to_string(),
        }
    }
}

/// Error returned when a [`Record`](super::Record) cannot be constructed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("Invalid mutation format '{mutation}' for transaction {reference}")]
    InvalidFormat {
        reference: TransactionReference,
        mutation: String,
    },

    /// The mutation is well formed but too large to represent
    #[error("Mutation amount '{mutation}' for transaction {reference} is out of range")]
    AmountOutOfRange {
        reference: TransactionReference,
        mutation: String,
    },
}

impl RecordError {
    /// Create an InvalidFormat error
    pub fn invalid_format(reference: TransactionReference, mutation: &str) -> Self {
        RecordError::InvalidFormat {
            reference,
            mutation: mutation.to_string(),
        }
    }

    /// Create an AmountOutOfRange error
    pub fn amount_out_of_range(reference: TransactionReference, mutation: &str) -> Self {
        RecordError::AmountOutOfRange {
            reference,
            mutation: mutation.to_string(),
        }
    }

    /// Transaction reference of the record that failed
    pub fn reference(&self) -> TransactionReference {
        match self {
            RecordError::InvalidFormat { reference, .. }
            | RecordError::AmountOutOfRange { reference, .. } => *reference,
        }
    }
}
