//! Batch types produced by the statement readers
//!
//! Every input row ends up either as a [`Record`] or as a [`Rejection`], so
//! the whole file stays accounted for in the report.

use super::error::{InputLocation, RecordError};
use super::record::{Record, TransactionReference};
use std::fmt;

/// Why an input row did not become a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    /// A CSV row did not have exactly six fields
    FieldCount { found: usize },
    /// Record construction failed
    InvalidRecord(RecordError),
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::FieldCount { found } => {
                write!(f, "expected 6 fields, found {}", found)
            }
            RejectionReason::InvalidRecord(e) => write!(f, "{}", e),
        }
    }
}

/// An input row that could not be turned into a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub location: InputLocation,
    /// Known only when the reference field itself was readable
    pub reference: Option<TransactionReference>,
    pub reason: RejectionReason,
}

impl Rejection {
    pub fn field_count(location: InputLocation, found: usize) -> Self {
        Rejection {
            location,
            reference: None,
            reason: RejectionReason::FieldCount { found },
        }
    }

    pub fn invalid_record(location: InputLocation, error: RecordError) -> Self {
        Rejection {
            location,
            reference: Some(error.reference()),
            reason: RejectionReason::InvalidRecord(error),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.location {
            InputLocation::Line(line) => write!(f, "Line {}: {}", line, self.reason),
            InputLocation::Element(index) => write!(f, "Record {}: {}", index, self.reason),
        }
    }
}

/// All records and rejections read from one input file, in input order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Batch {
    pub records: Vec<Record>,
    pub rejections: Vec<Rejection>,
}

impl Batch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a construction result, keeping failures as rejections
    pub fn push(&mut self, location: InputLocation, result: Result<Record, RecordError>) {
        match result {
            Ok(record) => self.records.push(record),
            Err(e) => {
                tracing::warn!(%location, error = %e, "rejecting record");
                self.rejections.push(Rejection::invalid_record(location, e));
            }
        }
    }

    pub fn reject(&mut self, rejection: Rejection) {
        tracing::warn!(location = %rejection.location, reason = %rejection.reason, "rejecting row");
        self.rejections.push(rejection);
    }
}
