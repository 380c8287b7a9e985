//! XML statement reader
//!
//! Reads a markup statement file into a [`Batch`]. The document root holds one
//! `record` element per transaction:
//!
//! ```xml
//! <records>
//!   <record reference="178792">
//!     <accountNumber>NL69ABNA0433647324</accountNumber>
//!     <description>Flowers from Rik Dekker</description>
//!     <startBalance>51.99</startBalance>
//!     <mutation>+16.97</mutation>
//!     <endBalance>68.96</endBalance>
//!   </record>
//! </records>
//! ```
//!
//! Child elements may appear in any order. A missing child or a malformed
//! document aborts the whole file; a malformed mutation only rejects its record.

use crate::io::{parse_decimal, parse_reference, StatementReader};
use crate::types::{Batch, InputLocation, Record, StatementError};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct XmlStatement {
    #[serde(rename = "record", default)]
    records: Vec<XmlRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct XmlRecord {
    #[serde(rename = "@reference")]
    reference: String,
    account_number: String,
    description: String,
    start_balance: String,
    mutation: String,
    end_balance: String,
}

/// Reader for XML statement files
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlStatementReader;

impl StatementReader for XmlStatementReader {
    fn read(&self, path: &Path) -> Result<Batch, StatementError> {
        let content = fs::read_to_string(path)
            .map_err(|e| StatementError::from_io(e, &path.display().to_string()))?;
        read_xml(&content)
    }
}

/// Read XML statement data from a string
pub fn read_xml(content: &str) -> Result<Batch, StatementError> {
    let statement: XmlStatement = quick_xml::de::from_str(content).map_err(StatementError::xml)?;

    let mut batch = Batch::new();
    for (index, element) in statement.records.into_iter().enumerate() {
        let location = InputLocation::Element(index + 1);

        let reference = parse_reference(&element.reference, location)?;
        let start_balance = parse_decimal(&element.start_balance, "startBalance", location)?;
        let end_balance = parse_decimal(&element.end_balance, "endBalance", location)?;

        let record = Record::new(
            reference,
            element.account_number,
            element.description,
            start_balance,
            element.mutation.trim(),
            end_balance,
        );
        batch.push(location, record);
    }

    tracing::info!(
        records = batch.records.len(),
        rejections = batch.rejections.len(),
        "read XML statement"
    );
    Ok(batch)
}
