//! Customer Statement Validator Library
//! # Overview
//!
//! This library reads a batch of customer statement records from CSV or XML,
//! validates them and reports the records that fail.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Record, Batch, errors)
//! - [`cli`] - CLI arguments parsing and logging setup
//! - [`core`] - Business logic:
//!   - [`core::validator`] - Duplicate detection and balance reconciliation
//! - [`io`] - Statement readers and the failed records report
//! - [`pipeline`] - Read, validate and report one statement file
//!
//! # Validation Rules
//!
//! A record fails when:
//!
//! - **Duplicate reference**: its transaction reference already appeared earlier in the batch
//! - **Balance mismatch**: `start balance ± mutation` does not equal its end balance
//!
//! Input rows that cannot become records at all (wrong field count, malformed
//! mutation) are reported separately as rejected input.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod pipeline;
pub mod types;

pub use crate::core::{validate_records, Validator};
pub use io::FailedRecordsReport;
pub use pipeline::process_file;
pub use types::{
    Batch, InputLocation, MutationSign, Record, RecordError, Rejection, StatementError,
    TransactionReference,
};
