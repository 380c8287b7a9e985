//! CSV statement reader
//!
//! Reads a delimited statement file into a [`Batch`]. The first line is a
//! header and is always skipped. Every other row must have six fields in this
//! order:
//!
//! ```text
//! reference,accountNumber,description,startBalance,mutation,endBalance
//! ```
//!
//! Fields are split on every comma. Quote characters are ordinary text, so a
//! stray `"` can never swallow the rows after it.
//!
//! # Error Handling
//!
//! - Rows with the wrong number of fields become rejections
//! - Rows with a malformed mutation become rejections
//! - Unparsable numbers abort the whole file with [`StatementError::NumericFormat`]
//! - Unreadable CSV (e.g. invalid UTF-8) aborts with [`StatementError::Csv`]

use crate::io::{parse_decimal, parse_reference, StatementReader};
use crate::types::{Batch, InputLocation, Record, RecordError, Rejection, StatementError};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const FIELD_COUNT: usize = 6;

/// Reader for comma-separated statement files
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvStatementReader;

impl StatementReader for CsvStatementReader {
    fn read(&self, path: &Path) -> Result<Batch, StatementError> {
        let file = File::open(path)
            .map_err(|e| StatementError::from_io(e, &path.display().to_string()))?;
        read_csv(file)
    }
}

/// Read CSV statement data from any reader
///
/// # Examples
///
/// ```
/// use statement_validator::io::csv_reader::read_csv;
///
/// let data = "Reference,Account Number,Description,Start Balance,Mutation,End Balance\n\
///             194261,NL91RABO0315273637,Book John Smith,21.6,-41.83,-20.23\n";
/// let batch = read_csv(data.as_bytes()).unwrap();
/// assert_eq!(batch.records.len(), 1);
/// ```
pub fn read_csv<R: Read>(input: R) -> Result<Batch, StatementError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .quoting(false)
        .from_reader(input);

    let mut batch = Batch::new();

    for row in reader.records() {
        let row = row?;
        let line = row.position().map(|pos| pos.line()).unwrap_or_default();
        let location = InputLocation::Line(line);

        if row.len() != FIELD_COUNT {
            batch.reject(Rejection::field_count(location, row.len()));
            continue;
        }

        batch.push(location, convert_row(&row, location)?);
    }

    tracing::info!(
        records = batch.records.len(),
        rejections = batch.rejections.len(),
        "read CSV statement"
    );
    Ok(batch)
}

/// Convert a six-field row into a record
///
/// The outer result carries fatal numeric errors, the inner one the record
/// construction outcome.
fn convert_row(
    row: &StringRecord,
    location: InputLocation,
) -> Result<Result<Record, RecordError>, StatementError> {
    let reference = parse_reference(&row[0], location)?;
    let start_balance = parse_decimal(&row[3], "startBalance", location)?;
    let end_balance = parse_decimal(&row[5], "endBalance", location)?;

    Ok(Record::new(
        reference,
        &row[1],
        &row[2],
        start_balance,
        &row[4],
        end_balance,
    ))
}
