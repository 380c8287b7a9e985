//! Failed records report
//!
//! The report is a plain value; callers decide where it is written.
//!
//! ```text
//! Failed Records Report:
//! Transaction Reference: 112806, Description: Clothes Irma Steven
//! Transaction Reference: 112806, Description: Tickets from Richard de Vries
//! ```
//!
//! Rejected input rows, if any, follow under a `Rejected Input:` heading.

use crate::types::{Record, Rejection};
use std::fmt;

const TITLE: &str = "Failed Records Report:";
const NO_FAILURES: &str = "No failed records found.";
const REJECTED_TITLE: &str = "Rejected Input:";

/// Outcome of validating one statement file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FailedRecordsReport {
    /// Records that failed validation, in input order
    pub failed: Vec<Record>,
    /// Input rows that never became records, in input order
    pub rejected: Vec<Rejection>,
}

impl FailedRecordsReport {
    pub fn new(failed: Vec<Record>, rejected: Vec<Rejection>) -> Self {
        FailedRecordsReport { failed, rejected }
    }

    /// True when every input row produced a record that passed
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty() && self.rejected.is_empty()
    }
}

impl fmt::Display for FailedRecordsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(TITLE)?;

        if self.failed.is_empty() {
            write!(f, "\n{}", NO_FAILURES)?;
        }
        for record in &self.failed {
            write!(f, "\n{}", record)?;
        }

        if !self.rejected.is_empty() {
            write!(f, "\n{}", REJECTED_TITLE)?;
            for rejection in &self.rejected {
                write!(f, "\n{}", rejection)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{InputLocation, RecordError};
    use rstest::rstest;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn record(reference: i64, description: &str) -> Record {
        Record::new(
            reference,
            "NL91ABNA0417164300",
            description,
            Decimal::from_str("500.0").unwrap(),
            "+50",
            Decimal::from_str("550.0").unwrap(),
        )
        .unwrap()
    }

    #[rstest]
    #[case::empty(vec![], "Failed Records Report:\nNo failed records found.")]
    #[case::three_records(
        vec![record(101, "Deposit"), record(102, "Withdrawal Error"), record(103, "Balance Mismatch")],
        "Failed Records Report:\n\
         Transaction Reference: 101, Description: Deposit\n\
         Transaction Reference: 102, Description: Withdrawal Error\n\
         Transaction Reference: 103, Description: Balance Mismatch"
    )]
    fn test_render(#[case] failed: Vec<Record>, #[case] expected: &str) {
        let report = FailedRecordsReport::new(failed, vec![]);
        assert_eq!(report.to_string(), expected);
    }

    #[test]
    fn test_render_with_rejections() {
        let report = FailedRecordsReport::new(
            vec![record(5, "Rent")],
            vec![
                Rejection::field_count(InputLocation::Line(3), 4),
                Rejection::invalid_record(
                    InputLocation::Line(7),
                    RecordError::invalid_format(12, "a+50"),
                ),
            ],
        );

        assert_eq!(
            report.to_string(),
            "Failed Records Report:\n\
             Transaction Reference: 5, Description: Rent\n\
             Rejected Input:\n\
             Line 3: expected 6 fields, found 4\n\
             Line 7: Invalid mutation format 'a+50' for transaction 12"
        );
        assert!(!report.is_clean());
    }

    #[test]
    fn test_rejections_without_failures() {
        let report = FailedRecordsReport::new(
            vec![],
            vec![Rejection::field_count(InputLocation::Line(2), 1)],
        );

        assert_eq!(
            report.to_string(),
            "Failed Records Report:\nNo failed records found.\nRejected Input:\nLine 2: expected 6 fields, found 1"
        );
    }

    #[test]
    fn test_default_is_clean() {
        assert!(FailedRecordsReport::default().is_clean());
    }
}
