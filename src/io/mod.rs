//! I/O module
//!
//! Handles statement parsing and report output.
//!
//! # Components
//!
//! - `csv_reader` - Delimited statement files
//! - `xml_reader` - Markup statement files
//! - `report` - Failed records report
//!
//! Readers sit behind the [`StatementReader`] trait so the pipeline can pick
//! one at runtime from the input format.

pub mod csv_reader;
pub mod report;
pub mod xml_reader;

pub use csv_reader::CsvStatementReader;
pub use report::FailedRecordsReport;
pub use xml_reader::XmlStatementReader;

use crate::cli::InputFormat;
use crate::types::{Batch, InputLocation, StatementError, TransactionReference};
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;

/// Reads one statement file into a batch
pub trait StatementReader {
    /// Read every record of the file at `path`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be opened or read
    /// - The file structure is invalid for the format
    /// - A numeric field cannot be parsed
    ///
    /// Rows that only fail record construction are returned as rejections
    /// inside the batch, not as errors.
    fn read(&self, path: &Path) -> Result<Batch, StatementError>;
}

/// Create the reader for an input format
pub fn create_reader(format: InputFormat) -> Box<dyn StatementReader> {
    match format {
        InputFormat::Csv => Box::new(CsvStatementReader),
        InputFormat::Xml => Box::new(XmlStatementReader),
    }
}

pub(crate) fn parse_reference(
    value: &str,
    location: InputLocation,
) -> Result<TransactionReference, StatementError> {
    let value = value.trim();
    value
        .parse()
        .map_err(|_| StatementError::numeric_format(location, "reference", value))
}

pub(crate) fn parse_decimal(
    value: &str,
    field: &'static str,
    location: InputLocation,
) -> Result<Decimal, StatementError> {
    let value = value.trim();
    Decimal::from_str(value).map_err(|_| StatementError::numeric_format(location, field, value))
}
